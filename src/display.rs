// SPDX-License-Identifier: GPL-3.0-only

use alloc::format;
use core::fmt::Write;
use orbclient::{Color, Renderer};

use crate::config::Config;
use crate::input::{Gesture, GestureDecoder, Input, InputEvent, Key};
use crate::metadata::ConfirmMode;
use crate::outcome::AbortReason;
use crate::progress::ProgressState;
use crate::prompt::Prompt;
use crate::screens::{NavScreen, ScreenExit};
use crate::surface::Surface;
use crate::text::{CHAR_H, CHAR_W, Console, draw_centered};

const MARGIN: i32 = 16;
const BUTTON_H: i32 = 40;
const ITEM_H: i32 = 24;
const BAR_H: i32 = 12;

/// Surface that draws on an orbclient renderer and reads keys from `I`.
pub struct FramebufferSurface<R: Renderer, I: Input> {
    renderer: R,
    input: I,
    config: Config,
}

impl<R: Renderer, I: Input> FramebufferSurface<R, I> {
    pub fn new(renderer: R, input: I, config: Config) -> Self {
        FramebufferSurface {
            renderer,
            input,
            config,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (R, I) {
        (self.renderer, self.input)
    }

    fn width(&self) -> i32 {
        self.renderer.width() as i32
    }

    fn height(&self) -> i32 {
        self.renderer.height() as i32
    }

    /// Clear to the background and draw a title with a rule under it.
    fn header(&mut self, title: &str) {
        let theme = self.config.theme;
        let w = self.width();

        self.renderer.set(theme.bg);
        let mut x = MARGIN;
        for c in title.chars() {
            self.renderer.char(x, MARGIN, c, theme.fg);
            x += CHAR_W;
        }
        self.renderer
            .rect(MARGIN, MARGIN + CHAR_H + 4, (w - 2 * MARGIN).max(0) as u32, 1, theme.dim);
    }

    fn button(&mut self, x: i32, y: i32, w: i32, h: i32, label: &str, color: Color) {
        self.renderer.rect(x, y, w.max(0) as u32, h.max(0) as u32, color);
        draw_centered(
            &mut self.renderer,
            x + w / 2,
            y + (h - CHAR_H) / 2,
            label,
            self.config.theme.fg,
        );
    }

    fn buttons_y(&self) -> i32 {
        self.height() - BUTTON_H - 8
    }

    fn hold_hint(&mut self) {
        let theme = self.config.theme;
        let y = self.buttons_y() - CHAR_H - 4;
        let w = self.width();
        self.renderer.rect(0, y, w as u32, CHAR_H as u32, theme.bg);
        draw_centered(&mut self.renderer, w / 2, y, "Hold to confirm", theme.warning);
        self.renderer.sync();
    }

    fn bar(&mut self, state: &ProgressState<'_>) {
        let theme = self.config.theme;
        let w = self.width() - 2 * MARGIN;
        let y = self.height() / 2;

        self.renderer.rect(MARGIN, y, w.max(0) as u32, BAR_H as u32, theme.dim);
        if state.is_indeterminate {
            let mut x = MARGIN;
            while x < MARGIN + w {
                let seg = (MARGIN + w - x).min(CHAR_W);
                self.renderer.rect(x, y, seg as u32, BAR_H as u32, theme.fg);
                x += 2 * CHAR_W;
            }
        } else {
            let filled = w * state.percent as i32 / 100;
            self.renderer.rect(MARGIN, y, filled.max(0) as u32, BAR_H as u32, theme.fg);
        }
    }

    fn label(&mut self, state: &ProgressState<'_>) {
        let theme = self.config.theme;
        let w = self.width();
        let y = self.height() / 2 - CHAR_H - 8;

        self.renderer.rect(0, y, w as u32, CHAR_H as u32, theme.bg);
        draw_centered(&mut self.renderer, w / 2, y, state.label, theme.fg);

        let y = self.height() / 2 + BAR_H + 8;
        self.renderer.rect(0, y, w as u32, CHAR_H as u32, theme.bg);
        if !state.is_indeterminate {
            let percent = format!("{}%", state.percent);
            draw_centered(&mut self.renderer, w / 2, y, &percent, theme.fg);
        }
    }

    fn screen(&mut self, screen: &NavScreen<'_>, selected: usize) {
        let theme = self.config.theme;
        let w = self.width();

        self.header(screen.title);
        {
            let right = w - MARGIN;
            let mut console =
                Console::new(&mut self.renderer, MARGIN, MARGIN + CHAR_H + 16, right)
                    .colors(theme.fg, theme.bg);
            for line in screen.lines {
                let _ = writeln!(console, "{}", line);
            }
        }

        let top = self.height() - screen.items.len() as i32 * ITEM_H - 8;
        for (i, (label, _)) in screen.items.iter().enumerate() {
            let y = top + i as i32 * ITEM_H;
            let color = if i == selected { theme.highlight } else { theme.bg };
            self.renderer.rect(
                MARGIN,
                y,
                (w - 2 * MARGIN).max(0) as u32,
                (ITEM_H - 4) as u32,
                color,
            );
            let mut x = MARGIN + 8;
            for c in label.chars() {
                self.renderer.char(x, y + 2, c, theme.fg);
                x += CHAR_W;
            }
        }

        self.renderer.sync();
    }
}

impl<R: Renderer, I: Input> Surface for FramebufferSurface<R, I> {
    fn show_prompt(&mut self, prompt: &Prompt<'_>) {
        let theme = self.config.theme;
        let w = self.width();

        self.header(prompt.title);

        let y = {
            let mut console =
                Console::new(&mut self.renderer, MARGIN, MARGIN + CHAR_H + 16, w - MARGIN)
                    .colors(theme.fg, theme.bg);
            let _ = writeln!(console, "{}", prompt.message);
            if let Some(vendor) = prompt.vendor {
                console.fg = if vendor.is_unknown() { theme.warning } else { theme.fg };
                let _ = writeln!(console, "{}", vendor);
            }
            if let Some(version) = prompt.version {
                console.fg = if version.is_unknown() { theme.dim } else { theme.fg };
                let _ = writeln!(console, "{}", version);
            }
            console.next_line_y() + 8
        };

        for (i, warning) in prompt.warnings.iter().enumerate() {
            draw_centered(
                &mut self.renderer,
                w / 2,
                y + i as i32 * CHAR_H,
                warning.text(),
                theme.warning,
            );
        }

        let by = self.buttons_y();
        let bw = (w - 3 * 8) / 2;
        let confirm = match prompt.mode {
            ConfirmMode::Normal => "CONFIRM",
            ConfirmMode::Strong => "HOLD",
        };
        self.button(8, by, bw, BUTTON_H, "CANCEL", theme.cancel);
        self.button(16 + bw, by, bw, BUTTON_H, confirm, theme.confirm);

        self.renderer.sync();
    }

    fn read_gesture(&mut self, mode: ConfirmMode) -> Gesture {
        let gesture = GestureDecoder::new(self.config.hold_ms).read(&mut self.input);
        if mode == ConfirmMode::Strong && gesture == Gesture::Accept {
            self.hold_hint();
        }
        gesture
    }

    fn show_progress(&mut self, state: &ProgressState<'_>, initialize: bool) {
        if initialize {
            self.renderer.set(self.config.theme.bg);
        }
        self.label(state);
        self.bar(state);
        self.renderer.sync();
    }

    fn show_screen(&mut self, screen: &NavScreen<'_>) -> ScreenExit {
        let mut selected = 0;
        let mut decoder = GestureDecoder::new(self.config.hold_ms);
        self.screen(screen, selected);

        loop {
            let event = match self.input.next_event() {
                Some(event) => event,
                None => return ScreenExit::PowerEvent,
            };

            match event {
                InputEvent::Press(Key::Up, _) => {
                    selected = selected.saturating_sub(1);
                    self.screen(screen, selected);
                }
                InputEvent::Press(Key::Down, _) => {
                    if selected + 1 < screen.items.len() {
                        selected += 1;
                    }
                    self.screen(screen, selected);
                }
                InputEvent::HostConnected => return ScreenExit::HostConnected,
                event => match decoder.feed(event) {
                    Some(Gesture::Accept) | Some(Gesture::AcceptHold) => {
                        if let Some((_, action)) = screen.items.get(selected) {
                            return ScreenExit::Selected(*action);
                        }
                    }
                    Some(Gesture::Cancel) | Some(Gesture::Back) => return ScreenExit::Back,
                    Some(Gesture::Abort(AbortReason::Timeout)) => return ScreenExit::Timeout,
                    Some(Gesture::Abort(_)) => return ScreenExit::PowerEvent,
                    None => (),
                },
            }
        }
    }
}
