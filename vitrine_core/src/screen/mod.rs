// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emulated-screen data model.
//!
//! A [`Screen`] is one emulated display: its current [`ScreenMode`]
//! (resolution snapshot, replaced wholesale on mode change), its UI
//! [`Rotation`], the user-requested scale factor, the upscale-filter lock,
//! the handle of the texture the emulator renders into, and the two values
//! the compositor writes back each pass (on-window origin and native scale
//! factor) for downstream input-coordinate remapping.
//!
//! Screens live in a [`ScreenStore`] and are addressed by generational
//! [`ScreenId`] handles. Property mutations mark the appropriate
//! [dirty channel](crate::dirty); the frame loop drains them via
//! [`ScreenStore::drain_changes`].

mod id;
mod mode;
mod store;

pub use id::{ScreenId, TextureId};
pub use mode::{Rotation, ScreenMode};
pub use store::{Screen, ScreenChanges, ScreenStore};
