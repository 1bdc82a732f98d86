// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable backend and executor doubles for vitrine tests and demos.
//!
//! - [`RecordingBackend`] — a [`GraphicsBackend`] that stores every
//!   submitted command list instead of executing it. In the default mode
//!   it signals fences immediately on submission; [`deferred`]
//!   (`RecordingBackend::deferred`) mode leaves frames in flight until the
//!   next wait, which is how a real asynchronous backend behaves.
//! - [`SlotPool`] — a bounded free-list
//!   [`SlotExecutor`](vitrine_core::pointer::SlotExecutor) with an
//!   activity toggle. Slot `0` is reserved as the sentinel; allocation
//!   starts at `1`.
//!
//! [`deferred`]: RecordingBackend::deferred

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

use alloc::vec::Vec;

use vitrine_core::fence::PresentFence;
use vitrine_core::pointer::{SlotExecutor, SlotIndex};
use vitrine_render::{CommandList, GraphicsBackend};

/// A [`GraphicsBackend`] that records submissions.
#[derive(Debug)]
pub struct RecordingBackend {
    submissions: Vec<CommandList>,
    signal_on_submit: bool,
    completion_code: i32,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    /// Creates a backend that signals each fence immediately on
    /// submission, with completion code `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            submissions: Vec::new(),
            signal_on_submit: true,
            completion_code: 0,
        }
    }

    /// Creates a backend that leaves submitted frames in flight until the
    /// next [`wait`](GraphicsBackend::wait).
    #[must_use]
    pub fn deferred() -> Self {
        Self {
            signal_on_submit: false,
            ..Self::new()
        }
    }

    /// Sets the completion code reported for displayed frames.
    pub fn set_completion_code(&mut self, code: i32) {
        self.completion_code = code;
    }

    /// The command lists submitted so far, oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[CommandList] {
        &self.submissions
    }

    /// Takes and returns all recorded submissions.
    pub fn take_submissions(&mut self) -> Vec<CommandList> {
        core::mem::take(&mut self.submissions)
    }
}

impl GraphicsBackend for RecordingBackend {
    fn submit(&mut self, list: CommandList, fence: &mut PresentFence) {
        self.submissions.push(list);
        if self.signal_on_submit {
            fence.signal(self.completion_code);
        }
    }

    fn wait(&mut self, fence: &mut PresentFence) {
        // A real backend blocks here; the double completes the frame the
        // moment someone waits for it.
        if fence.is_pending() {
            fence.signal(self.completion_code);
        }
    }
}

/// A bounded free-list slot executor.
///
/// Owns slots `1..=capacity` (slot `0` is the sentinel and is never handed
/// out) and an activity flag the allocator samples.
#[derive(Debug)]
pub struct SlotPool {
    free: Vec<SlotIndex>,
    capacity: u8,
    active: bool,
}

impl SlotPool {
    /// Creates an active pool with the given number of allocatable slots.
    #[must_use]
    pub fn new(capacity: u8) -> Self {
        Self {
            // Reversed so allocation hands out low indices first.
            free: (1..=capacity).rev().map(SlotIndex).collect(),
            capacity,
            active: true,
        }
    }

    /// Switches pointer virtualization on or off.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Number of slots currently available for allocation.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Total number of allocatable slots.
    #[must_use]
    pub const fn capacity(&self) -> u8 {
        self.capacity
    }
}

impl SlotExecutor for SlotPool {
    fn allocate_slot(&mut self) -> Option<SlotIndex> {
        self.free.pop()
    }

    fn free_slot(&mut self, slot: SlotIndex) {
        assert!(
            slot.0 >= 1 && slot.0 <= self.capacity,
            "freed slot {slot:?} outside pool range"
        );
        assert!(!self.free.contains(&slot), "double free of {slot:?}");
        self.free.push(slot);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_hands_out_low_indices_first() {
        let mut pool = SlotPool::new(3);
        assert_eq!(pool.allocate_slot(), Some(SlotIndex(1)));
        assert_eq!(pool.allocate_slot(), Some(SlotIndex(2)));
        assert_eq!(pool.allocate_slot(), Some(SlotIndex(3)));
        assert_eq!(pool.allocate_slot(), None);

        pool.free_slot(SlotIndex(2));
        assert_eq!(pool.allocate_slot(), Some(SlotIndex(2)));
    }

    #[test]
    #[should_panic(expected = "outside pool range")]
    fn freeing_the_sentinel_panics() {
        let mut pool = SlotPool::new(3);
        pool.free_slot(SlotIndex(0));
    }

    #[test]
    fn deferred_backend_holds_frames_until_wait() {
        let mut backend = RecordingBackend::deferred();
        backend.set_completion_code(42);
        let mut fence = PresentFence::new();

        fence.arm();
        backend.submit(CommandList::new(), &mut fence);
        assert!(fence.is_pending());

        backend.wait(&mut fence);
        assert_eq!(fence.completion(), Some(42));
        assert_eq!(backend.submissions().len(), 1);
    }
}
