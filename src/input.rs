// SPDX-License-Identifier: GPL-3.0-only

use crate::outcome::AbortReason;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Confirm,
    Cancel,
    Back,
    Up,
    Down,
}

impl Key {
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Raw event from the device, timestamped in milliseconds by the source.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Press(Key, u32),
    Release(Key, u32),
    HostConnected,
    Timeout,
    PowerLoss,
    Reset,
}

/// Blocking source of input events. `None` means the source is gone.
pub trait Input {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// What the operator did, as reported to a gate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gesture {
    Accept,
    /// Confirm held for at least the configured hold time.
    AcceptHold,
    Cancel,
    Back,
    Abort(AbortReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Pressed {
    Nothing,
    Down(Key, u32),
    /// Mask of keys down after a second key joined; ignored until all are up.
    Chord(u8),
}

/// Turns press/release pairs into gestures.
///
/// Create one per wait so that a key still held from an earlier prompt can
/// never complete a gesture on the next one.
pub struct GestureDecoder {
    hold_ms: u32,
    state: Pressed,
}

impl GestureDecoder {
    pub fn new(hold_ms: u32) -> Self {
        GestureDecoder {
            hold_ms,
            state: Pressed::Nothing,
        }
    }

    pub fn feed(&mut self, event: InputEvent) -> Option<Gesture> {
        log::trace!("input {:?} in {:?}", event, self.state);

        match event {
            InputEvent::Press(key, at) => {
                self.state = match self.state {
                    Pressed::Nothing => Pressed::Down(key, at),
                    // Auto-repeat keeps the original press time.
                    Pressed::Down(down, since) if down == key => Pressed::Down(down, since),
                    Pressed::Down(down, _) => Pressed::Chord(down.bit() | key.bit()),
                    Pressed::Chord(mask) => Pressed::Chord(mask | key.bit()),
                };
                None
            }
            InputEvent::Release(key, at) => match self.state {
                Pressed::Down(down, since) if down == key => {
                    self.state = Pressed::Nothing;
                    self.release(key, at.wrapping_sub(since))
                }
                Pressed::Chord(mask) => {
                    let mask = mask & !key.bit();
                    self.state = if mask == 0 {
                        Pressed::Nothing
                    } else {
                        Pressed::Chord(mask)
                    };
                    None
                }
                // Release without a matching press started before this wait.
                _ => None,
            },
            InputEvent::HostConnected => None,
            InputEvent::Timeout => Some(Gesture::Abort(AbortReason::Timeout)),
            InputEvent::PowerLoss => Some(Gesture::Abort(AbortReason::PowerLoss)),
            InputEvent::Reset => Some(Gesture::Abort(AbortReason::Reset)),
        }
    }

    fn release(&self, key: Key, held: u32) -> Option<Gesture> {
        match key {
            Key::Confirm if held >= self.hold_ms => Some(Gesture::AcceptHold),
            Key::Confirm => Some(Gesture::Accept),
            Key::Cancel => Some(Gesture::Cancel),
            Key::Back => Some(Gesture::Back),
            Key::Up | Key::Down => None,
        }
    }

    /// Block on `input` until a gesture is complete.
    pub fn read<I: Input>(&mut self, input: &mut I) -> Gesture {
        loop {
            match input.next_event() {
                Some(event) => {
                    if let Some(gesture) = self.feed(event) {
                        return gesture;
                    }
                }
                None => return Gesture::Abort(AbortReason::InputClosed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Script(VecDeque<InputEvent>);

    impl Input for Script {
        fn next_event(&mut self) -> Option<InputEvent> {
            self.0.pop_front()
        }
    }

    fn read(events: &[InputEvent]) -> Gesture {
        let mut input = Script(events.iter().copied().collect());
        GestureDecoder::new(1000).read(&mut input)
    }

    #[test]
    fn short_press_is_accept() {
        let gesture = read(&[
            InputEvent::Press(Key::Confirm, 10),
            InputEvent::Release(Key::Confirm, 200),
        ]);
        assert_eq!(gesture, Gesture::Accept);
    }

    #[test]
    fn long_press_is_accept_hold() {
        let gesture = read(&[
            InputEvent::Press(Key::Confirm, 10),
            InputEvent::Release(Key::Confirm, 1010),
        ]);
        assert_eq!(gesture, Gesture::AcceptHold);
    }

    #[test]
    fn hold_survives_timer_wrap() {
        let gesture = read(&[
            InputEvent::Press(Key::Confirm, u32::MAX - 499),
            InputEvent::Release(Key::Confirm, 700),
        ]);
        assert_eq!(gesture, Gesture::AcceptHold);
    }

    #[test]
    fn chord_is_discarded() {
        let gesture = read(&[
            InputEvent::Press(Key::Confirm, 0),
            InputEvent::Press(Key::Cancel, 10),
            InputEvent::Release(Key::Confirm, 2000),
            InputEvent::Release(Key::Cancel, 2000),
            InputEvent::Press(Key::Cancel, 3000),
            InputEvent::Release(Key::Cancel, 3050),
        ]);
        assert_eq!(gesture, Gesture::Cancel);
    }

    #[test]
    fn repeated_press_is_not_a_chord() {
        let gesture = read(&[
            InputEvent::Press(Key::Confirm, 0),
            InputEvent::Press(Key::Confirm, 500),
            InputEvent::Release(Key::Confirm, 1200),
        ]);
        assert_eq!(gesture, Gesture::AcceptHold);

        let gesture = read(&[
            InputEvent::Press(Key::Cancel, 0),
            InputEvent::Press(Key::Cancel, 500),
            InputEvent::Press(Key::Cancel, 600),
            InputEvent::Release(Key::Cancel, 700),
        ]);
        assert_eq!(gesture, Gesture::Cancel);
    }

    #[test]
    fn repeats_during_chord_need_one_release_per_key() {
        let gesture = read(&[
            InputEvent::Press(Key::Confirm, 0),
            InputEvent::Press(Key::Confirm, 500),
            InputEvent::Press(Key::Back, 600),
            InputEvent::Press(Key::Back, 700),
            InputEvent::Release(Key::Confirm, 1200),
            InputEvent::Release(Key::Back, 1300),
            InputEvent::Press(Key::Cancel, 2000),
            InputEvent::Release(Key::Cancel, 2050),
        ]);
        assert_eq!(gesture, Gesture::Cancel);
    }

    #[test]
    fn chord_stays_ignored_until_every_key_is_up() {
        let mut decoder = GestureDecoder::new(1000);
        assert_eq!(decoder.feed(InputEvent::Press(Key::Confirm, 0)), None);
        assert_eq!(decoder.feed(InputEvent::Press(Key::Cancel, 10)), None);
        assert_eq!(decoder.feed(InputEvent::Release(Key::Cancel, 20)), None);
        // Confirm is still down as part of the chord.
        assert_eq!(decoder.feed(InputEvent::Press(Key::Back, 30)), None);
        assert_eq!(decoder.feed(InputEvent::Release(Key::Back, 40)), None);
        assert_eq!(decoder.feed(InputEvent::Release(Key::Confirm, 2000)), None);
        assert_eq!(decoder.feed(InputEvent::Press(Key::Back, 3000)), None);
        assert_eq!(
            decoder.feed(InputEvent::Release(Key::Back, 3010)),
            Some(Gesture::Back)
        );
    }

    #[test]
    fn stray_release_is_ignored() {
        let gesture = read(&[
            InputEvent::Release(Key::Confirm, 5000),
            InputEvent::Press(Key::Back, 6000),
            InputEvent::Release(Key::Back, 6001),
        ]);
        assert_eq!(gesture, Gesture::Back);
    }

    #[test]
    fn power_loss_mid_hold_aborts() {
        let gesture = read(&[InputEvent::Press(Key::Confirm, 0), InputEvent::PowerLoss]);
        assert_eq!(gesture, Gesture::Abort(AbortReason::PowerLoss));
    }

    #[test]
    fn closed_input_aborts() {
        assert_eq!(
            read(&[InputEvent::Press(Key::Confirm, 0)]),
            Gesture::Abort(AbortReason::InputClosed)
        );
        assert_eq!(read(&[InputEvent::Reset]), Gesture::Abort(AbortReason::Reset));
    }
}
