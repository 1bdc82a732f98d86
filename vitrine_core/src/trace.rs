// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the frame loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! frame-loop instrumentation calls at each stage. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! Events carry no timestamps — this core has no clock. Sinks that need an
//! ordering (e.g. the recorder in `vitrine_debug`) assign sequence numbers
//! on receipt.

use kurbo::{Rect, Vec2};

use crate::pixels::PixelSize;
use crate::pointer::{DeviceId, SlotIndex};
use crate::window::WindowId;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the compositor computes a frame's viewport.
#[derive(Clone, Copy, Debug)]
pub struct ViewportEvent {
    /// Which window the frame targets.
    pub window: WindowId,
    /// Raw slot index of the screen being presented.
    pub screen: u32,
    /// Final on-screen destination rectangle.
    pub destination: Rect,
    /// Applied `(x, y)` scale multiplier.
    pub scale: Vec2,
}

/// Emitted when a frame is skipped because of degenerate geometry or a
/// missing screen texture.
#[derive(Clone, Copy, Debug)]
pub struct FrameSkippedEvent {
    /// Which window the skipped frame targeted.
    pub window: WindowId,
    /// Raw slot index of the screen.
    pub screen: u32,
}

/// Emitted before the compositor blocks on the previous frame's fence.
#[derive(Clone, Copy, Debug)]
pub struct FenceWaitEvent {
    /// Which window's fence is being awaited.
    pub window: WindowId,
}

/// Emitted when a command list is submitted to the backend.
#[derive(Clone, Copy, Debug)]
pub struct SubmitEvent {
    /// Which window the commands target.
    pub window: WindowId,
    /// Number of commands in the submitted list.
    pub commands: u32,
}

/// Emitted when a screen's minimum window size is recomputed.
#[derive(Clone, Copy, Debug)]
pub struct MinimumSizeEvent {
    /// Raw slot index of the screen.
    pub screen: u32,
    /// The new minimum window size.
    pub size: PixelSize,
}

/// What happened to a pointer contact's slot mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A fresh slot was allocated for a newly-pressed device.
    Allocated,
    /// A released device's slot was returned to the executor.
    Released,
    /// A slot was returned during a bulk flush (virtualization went
    /// inactive).
    Flushed,
    /// No free slot was available; the contact was dropped.
    Exhausted,
}

/// Emitted on pointer slot-table transitions.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    /// The input-device identifier.
    pub device: DeviceId,
    /// The slot involved (the sentinel for [`PointerEventKind::Exhausted`]).
    pub slot: SlotIndex,
    /// What happened.
    pub kind: PointerEventKind,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the frame loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a frame's viewport is computed.
    fn on_viewport(&mut self, e: &ViewportEvent) {
        _ = e;
    }

    /// Called when a frame is skipped.
    fn on_frame_skipped(&mut self, e: &FrameSkippedEvent) {
        _ = e;
    }

    /// Called before blocking on the previous frame's fence.
    fn on_fence_wait(&mut self, e: &FenceWaitEvent) {
        _ = e;
    }

    /// Called when a command list is submitted.
    fn on_submit(&mut self, e: &SubmitEvent) {
        _ = e;
    }

    /// Called when a screen's minimum window size is recomputed.
    fn on_minimum_size(&mut self, e: &MinimumSizeEvent) {
        _ = e;
    }

    /// Called on pointer slot-table transitions.
    fn on_pointer(&mut self, e: &PointerEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// Tracer
// ---------------------------------------------------------------------------

/// A zero-overhead dispatcher to an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ViewportEvent`].
    #[inline]
    pub fn viewport(&mut self, e: &ViewportEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_viewport(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameSkippedEvent`].
    #[inline]
    pub fn frame_skipped(&mut self, e: &FrameSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FenceWaitEvent`].
    #[inline]
    pub fn fence_wait(&mut self, e: &FenceWaitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_fence_wait(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SubmitEvent`].
    #[inline]
    pub fn submit(&mut self, e: &SubmitEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_submit(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MinimumSizeEvent`].
    #[inline]
    pub fn minimum_size(&mut self, e: &MinimumSizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_minimum_size(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PointerEvent`].
    #[inline]
    pub fn pointer(&mut self, e: &PointerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_pointer(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct CountingSink {
        viewports: Vec<u32>,
        skipped: u32,
    }

    impl TraceSink for CountingSink {
        fn on_viewport(&mut self, e: &ViewportEvent) {
            self.viewports.push(e.screen);
        }

        fn on_frame_skipped(&mut self, _e: &FrameSkippedEvent) {
            self.skipped += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let mut sink = CountingSink::default();
        let mut tracer = Tracer::new(&mut sink);
        tracer.viewport(&ViewportEvent {
            window: WindowId(0),
            screen: 3,
            destination: Rect::new(0.0, 0.0, 1.0, 1.0),
            scale: Vec2::new(1.0, 1.0),
        });
        tracer.frame_skipped(&FrameSkippedEvent {
            window: WindowId(0),
            screen: 3,
        });
        assert_eq!(sink.viewports, [3]);
        assert_eq!(sink.skipped, 1);
    }

    #[test]
    fn none_discards_events() {
        let mut tracer = Tracer::none();
        tracer.frame_skipped(&FrameSkippedEvent {
            window: WindowId(9),
            screen: 0,
        });
    }
}
