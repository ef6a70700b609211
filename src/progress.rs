// SPDX-License-Identifier: GPL-3.0-only

use crate::status::{Error, Result};

/// One progress frame. Built fresh for every report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressState<'a> {
    pub label: &'a str,
    pub percent: u8,
    pub is_indeterminate: bool,
}

impl<'a> ProgressState<'a> {
    /// Out-of-range values are a caller bug and are not clamped.
    pub fn new(label: &'a str, percent: i32) -> Result<Self> {
        if !(0..=100).contains(&percent) {
            return Err(Error::ProgressOutOfRange(percent));
        }

        Ok(ProgressState {
            label,
            percent: percent as u8,
            is_indeterminate: false,
        })
    }

    pub fn indeterminate(label: &'a str) -> Self {
        ProgressState {
            label,
            percent: 0,
            is_indeterminate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(ProgressState::new("Installing", 0).unwrap().percent, 0);
        assert_eq!(ProgressState::new("Installing", 100).unwrap().percent, 100);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            ProgressState::new("Installing", 150),
            Err(Error::ProgressOutOfRange(150))
        );
        assert_eq!(
            ProgressState::new("Installing", -1),
            Err(Error::ProgressOutOfRange(-1))
        );
    }
}
