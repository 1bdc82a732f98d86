// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer virtualization: device identifiers to touch-contact slots.
//!
//! A multi-touch pipeline tracks simultaneous contacts through a small fixed
//! set of slot indices owned by an external pointer-mapping executor. Host
//! pointing devices, by contrast, report an unbounded set of identifiers
//! (mouse buttons, cursor ids). The [`PointerAllocator`] maintains the live
//! mapping between the two for the duration of each contact.
//!
//! The executor is the allocation authority: the allocator only holds slots
//! the executor has handed out, and returns them on release. When
//! virtualization is inactive the allocator is a pass-through; the
//! transition into the inactive state flushes every held slot so that
//! switching virtualization off and back on always observes an empty table.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::trace::{PointerEvent, PointerEventKind, Tracer};

/// A host input-device identifier (e.g. a mouse button or cursor id).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceId(pub u32);

impl fmt::Debug for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeviceId({})", self.0)
    }
}

/// A touch-contact slot index, bounded by the executor's capacity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(pub u8);

impl SlotIndex {
    /// The no-op sentinel slot.
    ///
    /// Returned for a release with no matching press and for contacts
    /// dropped on capacity exhaustion. The executor treats events against
    /// it as ignorable.
    pub const SENTINEL: Self = Self(0);
}

impl fmt::Debug for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotIndex({})", self.0)
    }
}

/// The pointer-mapping executor contract.
///
/// The executor owns the actual set of virtual touch slots and performs the
/// gesture-to-action translation (outside this crate's scope). This trait
/// covers the slot-lifecycle surface the allocator needs.
pub trait SlotExecutor {
    /// Requests a fresh slot. Returns `None` when every slot is in use.
    fn allocate_slot(&mut self) -> Option<SlotIndex>;

    /// Returns a slot previously obtained from
    /// [`allocate_slot`](Self::allocate_slot).
    fn free_slot(&mut self, slot: SlotIndex);

    /// Whether pointer virtualization is currently active.
    fn is_active(&self) -> bool;
}

/// Where a pointer event should be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// Deliver against the given touch-contact slot.
    Slot(SlotIndex),
    /// Virtualization is inactive; deliver against the raw device
    /// identifier unchanged.
    PassThrough(DeviceId),
}

/// The live mapping from input-device identifier to allocated slot.
///
/// Mutated only on the input-event thread; performs no blocking operations.
#[derive(Debug, Default)]
pub struct PointerAllocator {
    table: BTreeMap<DeviceId, SlotIndex>,
    active: bool,
}

impl PointerAllocator {
    /// Creates an empty allocator in the inactive state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of devices currently holding a slot.
    #[must_use]
    pub fn mapped_contacts(&self) -> usize {
        self.table.len()
    }

    /// Resolves a pointer event to its delivery target.
    ///
    /// While virtualization is active:
    ///
    /// - a press (or move) of a mapped device returns its existing slot
    ///   (idempotent);
    /// - a press of an unmapped device allocates a fresh slot, or returns
    ///   the [sentinel](SlotIndex::SENTINEL) without recording anything
    ///   when the executor is out of slots;
    /// - a release of a mapped device frees its slot and returns the freed
    ///   index, so the final "up" event is delivered against the correct
    ///   slot before it becomes reusable;
    /// - a release of an unmapped device returns the sentinel.
    ///
    /// While inactive, every held slot is returned to the executor on the
    /// way in (the Inactive-entry flush) and the device identifier passes
    /// through unchanged.
    pub fn resolve(
        &mut self,
        executor: &mut dyn SlotExecutor,
        device: DeviceId,
        is_release: bool,
        tracer: &mut Tracer<'_>,
    ) -> PointerTarget {
        if !executor.is_active() {
            self.enter_inactive(executor, tracer);
            return PointerTarget::PassThrough(device);
        }
        self.active = true;

        if let Some(&slot) = self.table.get(&device) {
            if is_release {
                executor.free_slot(slot);
                self.table.remove(&device);
                tracer.pointer(&PointerEvent {
                    device,
                    slot,
                    kind: PointerEventKind::Released,
                });
            }
            return PointerTarget::Slot(slot);
        }

        if is_release {
            // A release for a device that was never pressed is functionally
            // ignored but must not crash.
            return PointerTarget::Slot(SlotIndex::SENTINEL);
        }

        match executor.allocate_slot() {
            Some(slot) => {
                self.table.insert(device, slot);
                tracer.pointer(&PointerEvent {
                    device,
                    slot,
                    kind: PointerEventKind::Allocated,
                });
                PointerTarget::Slot(slot)
            }
            None => {
                tracer.pointer(&PointerEvent {
                    device,
                    slot: SlotIndex::SENTINEL,
                    kind: PointerEventKind::Exhausted,
                });
                PointerTarget::Slot(SlotIndex::SENTINEL)
            }
        }
    }

    /// Releases every held slot and clears the table.
    ///
    /// Called automatically on the Active → Inactive transition; also useful
    /// at teardown.
    pub fn flush(&mut self, executor: &mut dyn SlotExecutor, tracer: &mut Tracer<'_>) {
        while let Some((device, slot)) = self.table.pop_first() {
            executor.free_slot(slot);
            tracer.pointer(&PointerEvent {
                device,
                slot,
                kind: PointerEventKind::Flushed,
            });
        }
    }

    fn enter_inactive(&mut self, executor: &mut dyn SlotExecutor, tracer: &mut Tracer<'_>) {
        if self.active || !self.table.is_empty() {
            self.flush(executor, tracer);
        }
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    /// Bounded free-list executor: slots 1..=capacity, slot 0 reserved as
    /// the sentinel.
    struct TestExecutor {
        free: Vec<SlotIndex>,
        active: bool,
        allocations: u32,
    }

    impl TestExecutor {
        fn with_capacity(capacity: u8) -> Self {
            Self {
                free: (1..=capacity).rev().map(SlotIndex).collect(),
                active: true,
                allocations: 0,
            }
        }
    }

    impl SlotExecutor for TestExecutor {
        fn allocate_slot(&mut self) -> Option<SlotIndex> {
            let slot = self.free.pop()?;
            self.allocations += 1;
            Some(slot)
        }

        fn free_slot(&mut self, slot: SlotIndex) {
            assert!(!self.free.contains(&slot), "double free of {slot:?}");
            self.free.push(slot);
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    #[test]
    fn press_allocates_release_frees() {
        let mut exec = TestExecutor::with_capacity(4);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        let pressed = alloc.resolve(&mut exec, DeviceId(5), false, &mut tracer);
        let PointerTarget::Slot(slot) = pressed else {
            panic!("expected a slot while active");
        };
        assert_eq!(alloc.mapped_contacts(), 1);

        // Moves are idempotent.
        assert_eq!(
            alloc.resolve(&mut exec, DeviceId(5), false, &mut tracer),
            PointerTarget::Slot(slot)
        );
        assert_eq!(alloc.mapped_contacts(), 1);

        // The release is delivered against the slot the press received.
        assert_eq!(
            alloc.resolve(&mut exec, DeviceId(5), true, &mut tracer),
            PointerTarget::Slot(slot)
        );
        assert_eq!(alloc.mapped_contacts(), 0);
        assert!(exec.free.contains(&slot));
    }

    #[test]
    fn concurrent_presses_get_distinct_slots() {
        let mut exec = TestExecutor::with_capacity(4);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        let mut slots = Vec::new();
        for device in 0..4 {
            match alloc.resolve(&mut exec, DeviceId(device), false, &mut tracer) {
                PointerTarget::Slot(slot) => slots.push(slot),
                PointerTarget::PassThrough(_) => panic!("active executor passed through"),
            }
        }
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), 4);
    }

    #[test]
    fn unmatched_release_returns_sentinel() {
        let mut exec = TestExecutor::with_capacity(4);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        assert_eq!(
            alloc.resolve(&mut exec, DeviceId(9), true, &mut tracer),
            PointerTarget::Slot(SlotIndex::SENTINEL)
        );
        assert_eq!(alloc.mapped_contacts(), 0);
        assert_eq!(exec.allocations, 0);
    }

    #[test]
    fn exhaustion_drops_the_contact() {
        let mut exec = TestExecutor::with_capacity(1);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        let first = alloc.resolve(&mut exec, DeviceId(0), false, &mut tracer);
        assert_eq!(first, PointerTarget::Slot(SlotIndex(1)));

        // No free slot left: the second contact gets the sentinel and the
        // table records nothing for it.
        assert_eq!(
            alloc.resolve(&mut exec, DeviceId(1), false, &mut tracer),
            PointerTarget::Slot(SlotIndex::SENTINEL)
        );
        assert_eq!(alloc.mapped_contacts(), 1);

        // Releasing the first contact makes its slot reusable.
        alloc.resolve(&mut exec, DeviceId(0), true, &mut tracer);
        assert_eq!(
            alloc.resolve(&mut exec, DeviceId(1), false, &mut tracer),
            PointerTarget::Slot(SlotIndex(1))
        );
    }

    #[test]
    fn deactivation_flushes_and_passes_through() {
        let mut exec = TestExecutor::with_capacity(4);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        for device in 0..3 {
            alloc.resolve(&mut exec, DeviceId(device), false, &mut tracer);
        }
        assert_eq!(alloc.mapped_contacts(), 3);
        assert_eq!(exec.free.len(), 1);

        exec.active = false;
        // Pass-through returns the device id unchanged and frees all three
        // held slots.
        assert_eq!(
            alloc.resolve(&mut exec, DeviceId(42), false, &mut tracer),
            PointerTarget::PassThrough(DeviceId(42))
        );
        assert_eq!(alloc.mapped_contacts(), 0);
        assert_eq!(exec.free.len(), 4);
    }

    #[test]
    fn reactivation_observes_an_empty_table() {
        let mut exec = TestExecutor::with_capacity(4);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        alloc.resolve(&mut exec, DeviceId(0), false, &mut tracer);
        let allocations_before = exec.allocations;

        exec.active = false;
        alloc.resolve(&mut exec, DeviceId(0), false, &mut tracer);
        assert_eq!(alloc.mapped_contacts(), 0);

        // After reactivation the same device must go through a fresh
        // allocation, not a stale mapping.
        exec.active = true;
        alloc.resolve(&mut exec, DeviceId(0), false, &mut tracer);
        assert_eq!(exec.allocations, allocations_before + 1);
        assert_eq!(alloc.mapped_contacts(), 1);
    }

    #[test]
    fn flush_is_idempotent() {
        let mut exec = TestExecutor::with_capacity(2);
        let mut alloc = PointerAllocator::new();
        let mut tracer = Tracer::none();

        alloc.resolve(&mut exec, DeviceId(0), false, &mut tracer);
        alloc.flush(&mut exec, &mut tracer);
        alloc.flush(&mut exec, &mut tracer);
        assert_eq!(alloc.mapped_contacts(), 0);
        assert_eq!(exec.free.len(), 2);
    }
}
