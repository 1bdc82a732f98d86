// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-list IR and frame compositor for vitrine.
//!
//! This crate sits between [`vitrine_core`]'s screen model and a
//! platform-specific graphics backend. It defines:
//!
//! - [`GpuCommand`] / [`CommandList`] — the ordered draw/clear/present IR
//!   a backend executes for one frame
//! - [`CommandBuilder`] — the recording surface the compositor emits
//!   through
//! - [`GraphicsBackend`] / [`OverlayRenderer`] — the backend and overlay
//!   contracts
//! - [`Compositor`] — the per-window frame pass: fence wait, viewport
//!   computation, command emission, submission

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

mod backend;
mod builder;
mod command;
mod compositor;

pub use backend::{GraphicsBackend, OverlayRenderer};
pub use builder::CommandBuilder;
pub use command::{ClearTargets, CommandList, Feature, FilterAxis, FilterMode, GpuCommand};
pub use compositor::{Compositor, WaitMode};
