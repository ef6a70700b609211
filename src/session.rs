// SPDX-License-Identifier: GPL-3.0-only

use crate::input::Gesture;
use crate::metadata::ConfirmMode;
use crate::outcome::{AbortReason, ConfirmationOutcome};
use crate::prompt::Prompt;
use crate::surface::Surface;

/// Where a gate invocation is. `AwaitingGesture` is the only point that blocks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GateState {
    Idle,
    Rendering(ConfirmMode),
    AwaitingGesture(ConfirmMode),
    Confirmed,
    Rejected,
    Aborted(AbortReason),
}

impl GateState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GateState::Confirmed | GateState::Rejected | GateState::Aborted(_)
        )
    }

    fn permits(&self, next: &GateState) -> bool {
        match (self, next) {
            (GateState::Idle, GateState::Rendering(_)) => true,
            (GateState::Rendering(a), GateState::AwaitingGesture(b)) => a == b,
            (GateState::AwaitingGesture(_), next) => next.is_terminal(),
            _ => false,
        }
    }
}

impl From<ConfirmationOutcome> for GateState {
    fn from(outcome: ConfirmationOutcome) -> Self {
        match outcome {
            ConfirmationOutcome::Confirmed => GateState::Confirmed,
            ConfirmationOutcome::Rejected => GateState::Rejected,
            ConfirmationOutcome::Aborted(reason) => GateState::Aborted(reason),
        }
    }
}

/// Proof that the prompt for `mode` has been handed to the surface.
struct Rendered {
    mode: ConfirmMode,
}

/// The active prompt.
///
/// Holds the surface exclusively for one gate invocation and is consumed by
/// it, so two prompts can never interleave and nothing from a finished
/// prompt is visible to the next one.
pub struct Session<'a, S: Surface> {
    surface: &'a mut S,
    state: GateState,
}

impl<'a, S: Surface> Session<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        Session {
            surface,
            state: GateState::Idle,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    fn enter(&mut self, next: GateState) {
        debug_assert!(
            self.state.permits(&next),
            "gate cannot go from {:?} to {:?}",
            self.state,
            next
        );
        log::debug!("gate {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Show `prompt`, then wait for a gesture that satisfies its mode.
    pub(crate) fn run(&mut self, prompt: &Prompt<'_>) -> ConfirmationOutcome {
        self.enter(GateState::Rendering(prompt.mode));
        self.surface.show_prompt(prompt);
        let rendered = Rendered { mode: prompt.mode };

        self.enter(GateState::AwaitingGesture(prompt.mode));
        let outcome = self.await_gesture(rendered);

        self.enter(outcome.into());
        outcome
    }

    fn await_gesture(&mut self, rendered: Rendered) -> ConfirmationOutcome {
        loop {
            let gesture = self.surface.read_gesture(rendered.mode);
            match (rendered.mode, gesture) {
                (_, Gesture::AcceptHold) | (ConfirmMode::Normal, Gesture::Accept) => {
                    return ConfirmationOutcome::Confirmed;
                }
                (ConfirmMode::Strong, Gesture::Accept) => {
                    log::warn!("ignoring single accept, hold to confirm is required");
                }
                (_, Gesture::Cancel) => return ConfirmationOutcome::Rejected,
                (_, Gesture::Back) => {
                    return ConfirmationOutcome::Aborted(AbortReason::Unexpected);
                }
                (_, Gesture::Abort(reason)) => return ConfirmationOutcome::Aborted(reason),
            }
        }
    }
}
