// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them
//! back as an iterator of [`RecordedEvent`]. Decoding stops at the first
//! truncated or unrecognized record.

use vitrine_core::pixels::PixelSize;
use vitrine_core::pointer::{DeviceId, SlotIndex};
use vitrine_core::trace::{
    FenceWaitEvent, FrameSkippedEvent, MinimumSizeEvent, PointerEvent, PointerEventKind,
    SubmitEvent, TraceSink, ViewportEvent,
};
use vitrine_core::window::WindowId;

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_VIEWPORT: u8 = 1;
const TAG_FRAME_SKIPPED: u8 = 2;
const TAG_FENCE_WAIT: u8 = 3;
const TAG_SUBMIT: u8 = 4;
const TAG_MINIMUM_SIZE: u8 = 5;
const TAG_POINTER: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_bits().to_le_bytes());
    }
}

impl TraceSink for RecorderSink {
    fn on_viewport(&mut self, e: &ViewportEvent) {
        self.write_u8(TAG_VIEWPORT);
        self.write_u32(e.window.0);
        self.write_u32(e.screen);
        self.write_f64(e.destination.x0);
        self.write_f64(e.destination.y0);
        self.write_f64(e.destination.x1);
        self.write_f64(e.destination.y1);
        self.write_f64(e.scale.x);
        self.write_f64(e.scale.y);
    }

    fn on_frame_skipped(&mut self, e: &FrameSkippedEvent) {
        self.write_u8(TAG_FRAME_SKIPPED);
        self.write_u32(e.window.0);
        self.write_u32(e.screen);
    }

    fn on_fence_wait(&mut self, e: &FenceWaitEvent) {
        self.write_u8(TAG_FENCE_WAIT);
        self.write_u32(e.window.0);
    }

    fn on_submit(&mut self, e: &SubmitEvent) {
        self.write_u8(TAG_SUBMIT);
        self.write_u32(e.window.0);
        self.write_u32(e.commands);
    }

    fn on_minimum_size(&mut self, e: &MinimumSizeEvent) {
        self.write_u8(TAG_MINIMUM_SIZE);
        self.write_u32(e.screen);
        self.write_u32(e.size.width);
        self.write_u32(e.size.height);
    }

    fn on_pointer(&mut self, e: &PointerEvent) {
        self.write_u8(TAG_POINTER);
        self.write_u32(e.device.0);
        self.write_u8(e.slot.0);
        self.write_u8(pointer_kind_code(e.kind));
    }
}

const fn pointer_kind_code(kind: PointerEventKind) -> u8 {
    match kind {
        PointerEventKind::Allocated => 0,
        PointerEventKind::Released => 1,
        PointerEventKind::Flushed => 2,
        PointerEventKind::Exhausted => 3,
    }
}

const fn pointer_kind_from_code(code: u8) -> Option<PointerEventKind> {
    match code {
        0 => Some(PointerEventKind::Allocated),
        1 => Some(PointerEventKind::Released),
        2 => Some(PointerEventKind::Flushed),
        3 => Some(PointerEventKind::Exhausted),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// One decoded record.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A viewport computation.
    Viewport(ViewportEvent),
    /// A skipped frame.
    FrameSkipped(FrameSkippedEvent),
    /// A fence wait.
    FenceWait(FenceWaitEvent),
    /// A command-list submission.
    Submit(SubmitEvent),
    /// A minimum-size recomputation.
    MinimumSize(MinimumSizeEvent),
    /// A pointer slot transition.
    Pointer(PointerEvent),
}

/// Returns an iterator over the records in `bytes`.
pub fn decode(bytes: &[u8]) -> impl Iterator<Item = RecordedEvent> + '_ {
    Decoder { bytes, pos: 0 }
}

struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Decoder<'_> {
    fn read_u8(&mut self) -> Option<u8> {
        let v = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        let slice = self.bytes.get(self.pos..self.pos + 4)?;
        self.pos += 4;
        Some(u32::from_le_bytes(slice.try_into().ok()?))
    }

    fn read_f64(&mut self) -> Option<f64> {
        let slice = self.bytes.get(self.pos..self.pos + 8)?;
        self.pos += 8;
        Some(f64::from_bits(u64::from_le_bytes(slice.try_into().ok()?)))
    }
}

impl Iterator for Decoder<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<RecordedEvent> {
        match self.read_u8()? {
            TAG_VIEWPORT => {
                let window = WindowId(self.read_u32()?);
                let screen = self.read_u32()?;
                let x0 = self.read_f64()?;
                let y0 = self.read_f64()?;
                let x1 = self.read_f64()?;
                let y1 = self.read_f64()?;
                let sx = self.read_f64()?;
                let sy = self.read_f64()?;
                Some(RecordedEvent::Viewport(ViewportEvent {
                    window,
                    screen,
                    destination: kurbo::Rect::new(x0, y0, x1, y1),
                    scale: kurbo::Vec2::new(sx, sy),
                }))
            }
            TAG_FRAME_SKIPPED => Some(RecordedEvent::FrameSkipped(FrameSkippedEvent {
                window: WindowId(self.read_u32()?),
                screen: self.read_u32()?,
            })),
            TAG_FENCE_WAIT => Some(RecordedEvent::FenceWait(FenceWaitEvent {
                window: WindowId(self.read_u32()?),
            })),
            TAG_SUBMIT => Some(RecordedEvent::Submit(SubmitEvent {
                window: WindowId(self.read_u32()?),
                commands: self.read_u32()?,
            })),
            TAG_MINIMUM_SIZE => Some(RecordedEvent::MinimumSize(MinimumSizeEvent {
                screen: self.read_u32()?,
                size: PixelSize::new(self.read_u32()?, self.read_u32()?),
            })),
            TAG_POINTER => {
                let device = DeviceId(self.read_u32()?);
                let slot = SlotIndex(self.read_u8()?);
                let kind = pointer_kind_from_code(self.read_u8()?)?;
                Some(RecordedEvent::Pointer(PointerEvent { device, slot, kind }))
            }
            _ => None,
        }
    }
}
