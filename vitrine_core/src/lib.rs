// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core screen model, viewport geometry, and pointer virtualization for
//! presenting an emulated display inside a host window.
//!
//! `vitrine_core` provides the data structures and geometry for the two
//! stateful problems of emulated-display presentation: fitting a rotated,
//! scaled framebuffer into a resizable window, and mapping an unbounded set
//! of live pointing-device identifiers onto a small fixed set of
//! touch-contact slots. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! The crate is organized around a frame loop driven by host notifications:
//!
//! ```text
//!   Host (mode change / redraw tick)
//!       │
//!       ▼
//!   ScreenStore::drain_changes() ──► minimum_window_size()   (on mode/rotation)
//!       │
//!       ▼
//!   compute_viewport() ──► Viewport ──► command emission (vitrine_render)
//!                                            │
//!                     PresentFence ◄── submit/present ──► GraphicsBackend
//!
//!   Pointer events ──► PointerAllocator::resolve() ──► slot index
//! ```
//!
//! **[`screen`]** — Generational-handle store of emulated screens. Mode,
//! rotation, scale, and content mutations mark dirty channels; the frame
//! loop drains them per pass.
//!
//! **[`dirty`]** — Invalidation channels via `understory_dirty`. All
//! channels are local-only; screens are independent of each other.
//!
//! **[`viewport`]** — Rotation-aware, aspect-preserving destination-rect
//! computation with the uniform height clamp and per-angle rotation
//! compensation.
//!
//! **[`minsize`]** — Minimum host-window size so the emulated content never
//! has to be cropped, honoring rotation and true-size mode.
//!
//! **[`fence`]** — The single-slot present fence that keeps at most one
//! frame in flight per window.
//!
//! **[`pointer`]** — The touch-contact slot allocator and the
//! pointer-mapping executor contract.
//!
//! **[`notify`]** — Token-based callback registries for mode-change and
//! redraw notifications.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for frame-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod dirty;
pub mod fence;
pub mod minsize;
pub mod notify;
pub mod pixels;
pub mod pointer;
pub mod screen;
pub mod trace;
pub mod viewport;
pub mod window;
