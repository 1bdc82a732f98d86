// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-slot present fence.
//!
//! A [`PresentFence`] keeps at most one frame in flight between the
//! compositor and the graphics backend. The compositor arms the fence
//! immediately before submitting a command list; the backend signals it with
//! a completion code once the frame has been displayed. Before building the
//! next command list, the compositor waits for the fence to leave
//! [`FenceState::Pending`].
//!
//! Each window owns exactly one fence, and it is never shared across
//! windows. Arming an already-pending fence means a second frame would be
//! submitted while the first is still displaying — a programming-contract
//! violation, so [`arm`](PresentFence::arm) panics rather than tolerating
//! it.

use core::fmt;

/// The lifecycle state of a [`PresentFence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FenceState {
    /// No frame has been submitted against this fence yet.
    #[default]
    Idle,
    /// A frame is in flight; the backend has not signaled completion.
    Pending,
    /// The last submitted frame was displayed; the backend reported the
    /// given completion code.
    Completed(i32),
}

/// A single-slot synchronization token between one window's compositor and
/// the graphics backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PresentFence {
    state: FenceState,
}

impl PresentFence {
    /// Creates an idle fence.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FenceState::Idle,
        }
    }

    /// The current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> FenceState {
        self.state
    }

    /// Whether a frame is currently in flight.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, FenceState::Pending)
    }

    /// Marks a frame as in flight.
    ///
    /// Called by the compositor immediately before submission.
    ///
    /// # Panics
    ///
    /// Panics if a frame is already pending — the caller must wait for the
    /// previous frame first.
    pub fn arm(&mut self) {
        assert!(
            !self.is_pending(),
            "present fence armed while a frame is still in flight"
        );
        self.state = FenceState::Pending;
    }

    /// Records the backend's completion code for the frame in flight.
    ///
    /// Backends call this once the submitted frame has been displayed.
    /// Signaling a fence that is not pending is a backend bug.
    ///
    /// # Panics
    ///
    /// Panics if no frame is pending.
    pub fn signal(&mut self, code: i32) {
        assert!(
            self.is_pending(),
            "present fence signaled with no frame in flight"
        );
        self.state = FenceState::Completed(code);
    }

    /// Returns the completion code of the last displayed frame, if any.
    #[inline]
    #[must_use]
    pub const fn completion(&self) -> Option<i32> {
        match self.state {
            FenceState::Completed(code) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for FenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Completed(code) => write!(f, "completed({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arm_then_signal_round_trip() {
        let mut fence = PresentFence::new();
        assert_eq!(fence.state(), FenceState::Idle);
        assert_eq!(fence.completion(), None);

        fence.arm();
        assert!(fence.is_pending());

        fence.signal(0);
        assert_eq!(fence.state(), FenceState::Completed(0));
        assert_eq!(fence.completion(), Some(0));

        // A completed fence can be re-armed for the next frame.
        fence.arm();
        assert!(fence.is_pending());
        fence.signal(7);
        assert_eq!(fence.completion(), Some(7));
    }

    #[test]
    #[should_panic(expected = "still in flight")]
    fn double_arm_panics() {
        let mut fence = PresentFence::new();
        fence.arm();
        fence.arm();
    }

    #[test]
    #[should_panic(expected = "no frame in flight")]
    fn signal_without_arm_panics() {
        let mut fence = PresentFence::new();
        fence.signal(0);
    }
}
