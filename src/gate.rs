// SPDX-License-Identifier: GPL-3.0-only

use crate::metadata::{ConfirmMode, FirmwareCandidate};
use crate::outcome::ConfirmationOutcome;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::surface::Surface;

impl<S: Surface> Session<'_, S> {
    /// Ask the operator to approve installing `candidate`.
    ///
    /// Every risk class is prompted. Downgrades and vendor mismatches need
    /// the strong gesture; only a gesture that satisfies the requested mode
    /// after the prompt was drawn returns `Confirmed`.
    pub fn confirm_install(mut self, candidate: &FirmwareCandidate<'_>) -> ConfirmationOutcome {
        let risk = candidate.risk();
        let mode = ConfirmMode::for_risk(risk);
        log::info!(
            "install by {} version {}: {:?}, {:?} confirmation",
            candidate.vendor(),
            candidate.version(),
            risk,
            mode
        );

        let prompt = Prompt::install(candidate);
        let outcome = self.run(&prompt);

        log::info!("install {:?}", outcome);
        outcome
    }

    /// Ask the operator to approve erasing the device. Always strong.
    pub fn confirm_wipe(mut self) -> ConfirmationOutcome {
        log::info!("wipe: strong confirmation");

        let outcome = self.run(&Prompt::wipe());

        log::info!("wipe {:?}", outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Gesture;
    use crate::outcome::AbortReason;
    use crate::progress::ProgressState;
    use crate::prompt::Warning;
    use crate::screens::{NavScreen, ScreenExit};
    use std::vec::Vec;

    #[derive(Debug, Eq, PartialEq)]
    enum Call {
        Prompt(&'static str, Vec<Warning>, ConfirmMode),
        Gesture(ConfirmMode),
    }

    struct Recorder {
        gesture: Gesture,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new(gesture: Gesture) -> Self {
            Recorder {
                gesture,
                calls: Vec::new(),
            }
        }
    }

    impl Surface for Recorder {
        fn show_prompt(&mut self, prompt: &Prompt<'_>) {
            self.calls
                .push(Call::Prompt(prompt.title, prompt.warnings.clone(), prompt.mode));
        }

        fn read_gesture(&mut self, mode: ConfirmMode) -> Gesture {
            self.calls.push(Call::Gesture(mode));
            // Repeat once, then give up so strong-mode tests terminate.
            let gesture = self.gesture;
            self.gesture = Gesture::Abort(AbortReason::InputClosed);
            gesture
        }

        fn show_progress(&mut self, _state: &ProgressState<'_>, _initialize: bool) {}

        fn show_screen(&mut self, _screen: &NavScreen<'_>) -> ScreenExit {
            ScreenExit::Timeout
        }
    }

    fn install(downgrade: bool, trusted: bool, gesture: Gesture) -> (ConfirmationOutcome, Recorder) {
        let mut surface = Recorder::new(gesture);
        let candidate = FirmwareCandidate::new(b"Acme", "2.0", downgrade, trusted).unwrap();
        let outcome = Session::new(&mut surface).confirm_install(&candidate);
        (outcome, surface)
    }

    #[test]
    fn prompt_is_drawn_before_gesture() {
        let (outcome, surface) = install(false, true, Gesture::Accept);
        assert_eq!(outcome, ConfirmationOutcome::Confirmed);
        assert_eq!(
            surface.calls,
            [
                Call::Prompt("Update firmware", Vec::new(), ConfirmMode::Normal),
                Call::Gesture(ConfirmMode::Normal),
            ]
        );
    }

    #[test]
    fn downgrade_single_accept_is_not_confirmed() {
        let (outcome, surface) = install(true, true, Gesture::Accept);
        assert_eq!(outcome, ConfirmationOutcome::Aborted(AbortReason::InputClosed));
        assert_eq!(
            surface.calls[0],
            Call::Prompt(
                "Downgrade firmware",
                [Warning::Downgrade, Warning::SeedErase].to_vec(),
                ConfirmMode::Strong
            )
        );
    }

    #[test]
    fn mismatch_hold_is_confirmed() {
        let (outcome, surface) = install(false, false, Gesture::AcceptHold);
        assert_eq!(outcome, ConfirmationOutcome::Confirmed);
        assert_eq!(surface.calls[1], Call::Gesture(ConfirmMode::Strong));
    }

    #[test]
    fn wipe_requests_strong_mode() {
        let mut surface = Recorder::new(Gesture::Cancel);
        let outcome = Session::new(&mut surface).confirm_wipe();
        assert_eq!(outcome, ConfirmationOutcome::Rejected);
        assert_eq!(
            surface.calls,
            [
                Call::Prompt("Wipe device", [Warning::SeedErase].to_vec(), ConfirmMode::Strong),
                Call::Gesture(ConfirmMode::Strong),
            ]
        );
    }
}
