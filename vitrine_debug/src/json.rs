// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes a JSON array
//! of event objects to the given writer, one object per record with a
//! `seq` field in recording order. The output is intended for external
//! viewers and ad-hoc scripting.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as a JSON array.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (seq, recorded) in decode(bytes).enumerate() {
        match recorded {
            RecordedEvent::Viewport(e) => {
                events.push(json!({
                    "seq": seq,
                    "name": "Viewport",
                    "window": e.window.0,
                    "screen": e.screen,
                    "dest": [e.destination.x0, e.destination.y0, e.destination.x1, e.destination.y1],
                    "scale": [e.scale.x, e.scale.y],
                }));
            }
            RecordedEvent::FrameSkipped(e) => {
                events.push(json!({
                    "seq": seq,
                    "name": "FrameSkipped",
                    "window": e.window.0,
                    "screen": e.screen,
                }));
            }
            RecordedEvent::FenceWait(e) => {
                events.push(json!({
                    "seq": seq,
                    "name": "FenceWait",
                    "window": e.window.0,
                }));
            }
            RecordedEvent::Submit(e) => {
                events.push(json!({
                    "seq": seq,
                    "name": "Submit",
                    "window": e.window.0,
                    "commands": e.commands,
                }));
            }
            RecordedEvent::MinimumSize(e) => {
                events.push(json!({
                    "seq": seq,
                    "name": "MinimumSize",
                    "screen": e.screen,
                    "width": e.size.width,
                    "height": e.size.height,
                }));
            }
            RecordedEvent::Pointer(e) => {
                events.push(json!({
                    "seq": seq,
                    "name": "Pointer",
                    "device": e.device.0,
                    "slot": e.slot.0,
                    "kind": format!("{:?}", e.kind),
                }));
            }
        }
    }

    serde_json::to_writer(&mut *writer, &Value::Array(events))
        .map_err(io::Error::other)?;
    writeln!(writer)
}
