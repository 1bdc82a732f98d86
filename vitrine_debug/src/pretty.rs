// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace and command-list output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr),
//! prefixed with a sequence number. [`dump_commands`] writes one line per
//! command of a [`CommandList`].

use std::io::{self, Write};

use vitrine_core::trace::{
    FenceWaitEvent, FrameSkippedEvent, MinimumSizeEvent, PointerEvent, SubmitEvent, TraceSink,
    ViewportEvent,
};
use vitrine_render::{CommandList, GpuCommand};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    seq: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr()),
            seq: 0,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, seq: 0 }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        // Diagnostics output: a failed write is not worth surfacing.
        let seq = self.seq;
        self.seq += 1;
        let _ = writeln!(self.writer, "[{seq:6}] {args}");
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_viewport(&mut self, e: &ViewportEvent) {
        self.line(format_args!(
            "viewport  win={} screen={} dest=({:.1},{:.1})+({:.1}x{:.1}) scale=({:.3},{:.3})",
            e.window.0,
            e.screen,
            e.destination.x0,
            e.destination.y0,
            e.destination.width(),
            e.destination.height(),
            e.scale.x,
            e.scale.y,
        ));
    }

    fn on_frame_skipped(&mut self, e: &FrameSkippedEvent) {
        self.line(format_args!(
            "skipped   win={} screen={}",
            e.window.0, e.screen
        ));
    }

    fn on_fence_wait(&mut self, e: &FenceWaitEvent) {
        self.line(format_args!("wait      win={}", e.window.0));
    }

    fn on_submit(&mut self, e: &SubmitEvent) {
        self.line(format_args!(
            "submit    win={} commands={}",
            e.window.0, e.commands
        ));
    }

    fn on_minimum_size(&mut self, e: &MinimumSizeEvent) {
        self.line(format_args!(
            "min-size  screen={} {:?}",
            e.screen, e.size
        ));
    }

    fn on_pointer(&mut self, e: &PointerEvent) {
        self.line(format_args!(
            "pointer   device={} slot={} {:?}",
            e.device.0, e.slot.0, e.kind
        ));
    }
}

/// Writes one line per command of a command list.
pub fn dump_commands(list: &CommandList, writer: &mut dyn Write) -> io::Result<()> {
    for (i, command) in list.commands.iter().enumerate() {
        match command {
            GpuCommand::DrawBitmap {
                texture,
                destination,
                source,
                rotation,
                use_upscale_shader,
                ..
            } => writeln!(
                writer,
                "{i:3}: DrawBitmap {texture:?} dest=({:.1},{:.1})+({:.1}x{:.1}) src=({:.0}x{:.0}) rot={} upscale={use_upscale_shader}",
                destination.x0,
                destination.y0,
                destination.width(),
                destination.height(),
                source.width(),
                source.height(),
                rotation.degrees(),
            )?,
            other => writeln!(writer, "{i:3}: {other:?}")?,
        }
    }
    Ok(())
}
