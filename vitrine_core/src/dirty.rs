// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Vitrine uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! coalesce screen-state invalidations between frame passes. Each channel
//! represents an independent category of change.
//!
//! # Propagation semantics
//!
//! All channels are **local-only**: screens are independent of each other,
//! so there are no dependency edges and marks never propagate. A screen's
//! slot index is the tracker key.
//!
//! - [`MODE`] — the screen's resolution changed. Requires a minimum-size
//!   update before the next compositor pass.
//! - [`ROTATION`] — the UI rotation changed. Requires a minimum-size update
//!   (the minimum footprint transposes) and a fresh viewport.
//! - [`SCALE`] — the requested scale factor or the upscale lock changed.
//!   Requires a fresh viewport only.
//! - [`CONTENT`] — the screen texture was replaced or redrawn. Requires
//!   re-presentation with the current viewport.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`ScreenStore::drain_changes`](crate::screen::ScreenStore::drain_changes)
//! call drains all channels and surfaces the results as
//! [`ScreenChanges`](crate::screen::ScreenChanges), which the frame loop
//! consumes to decide what to recompute.

use understory_dirty::Channel;

/// Screen resolution changed — requires a minimum-size update and a fresh
/// viewport.
pub const MODE: Channel = Channel::new(0);

/// UI rotation changed — requires a minimum-size update and a fresh
/// viewport.
pub const ROTATION: Channel = Channel::new(1);

/// Requested scale factor or upscale lock changed — requires a fresh
/// viewport.
pub const SCALE: Channel = Channel::new(2);

/// Screen texture content changed — requires re-presentation.
pub const CONTENT: Channel = Channel::new(3);
