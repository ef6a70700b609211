// SPDX-License-Identifier: GPL-3.0-only

use crate::input::Gesture;
use crate::metadata::ConfirmMode;
use crate::progress::ProgressState;
use crate::prompt::Prompt;
use crate::screens::{NavScreen, ScreenExit};

/// The screen and buttons. Draws what it is given and reports what the
/// operator did; it makes no decisions.
pub trait Surface {
    /// Draw a confirmation prompt, including all of its warnings.
    fn show_prompt(&mut self, prompt: &Prompt<'_>);

    /// Block until the operator finishes a gesture. `mode` tells the surface
    /// which gesture to ask for; the gate checks the answer itself.
    fn read_gesture(&mut self, mode: ConfirmMode) -> Gesture;

    /// Draw a progress frame. Must not wait for input.
    fn show_progress(&mut self, state: &ProgressState<'_>, initialize: bool);

    /// Draw a navigation screen and block until it is left.
    fn show_screen(&mut self, screen: &NavScreen<'_>) -> ScreenExit;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn show_prompt(&mut self, prompt: &Prompt<'_>) {
        (**self).show_prompt(prompt)
    }

    fn read_gesture(&mut self, mode: ConfirmMode) -> Gesture {
        (**self).read_gesture(mode)
    }

    fn show_progress(&mut self, state: &ProgressState<'_>, initialize: bool) {
        (**self).show_progress(state, initialize)
    }

    fn show_screen(&mut self, screen: &NavScreen<'_>) -> ScreenExit {
        (**self).show_screen(screen)
    }
}
