// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for vitrine diagnostics.
//!
//! This crate provides [`TraceSink`](vitrine_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event
//!   output, plus [`pretty::dump_commands`] for command-list inspection.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`json::export`] — writes recorded events as a JSON array for
//!   external viewers.
//!
//! The core has no clock, so records carry no timestamps; ordering is the
//! recording order, and sinks that print assign sequence numbers on
//! receipt.

pub mod json;
pub mod pretty;
pub mod recorder;
