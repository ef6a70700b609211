// SPDX-License-Identifier: GPL-3.0-only

use crate::status::{ResultCode, ReturnCode};

/// Why a gate ended without an answer from the operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AbortReason {
    PowerLoss,
    Reset,
    Timeout,
    /// The input source went away while waiting.
    InputClosed,
    /// A gesture that is neither accept nor cancel.
    Unexpected,
}

/// Result of one gate invocation. Produced exactly once; never retried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfirmationOutcome {
    Confirmed,
    Rejected,
    Aborted(AbortReason),
}

impl ConfirmationOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmationOutcome::Confirmed)
    }
}

impl From<ConfirmationOutcome> for ResultCode {
    fn from(outcome: ConfirmationOutcome) -> Self {
        match outcome {
            ConfirmationOutcome::Confirmed => ResultCode::Confirm,
            ConfirmationOutcome::Rejected => ResultCode::Cancel,
            ConfirmationOutcome::Aborted(_) => ResultCode::Aborted,
        }
    }
}

impl ReturnCode for ConfirmationOutcome {
    fn code(&self) -> u32 {
        ResultCode::from(*self).code()
    }
}
