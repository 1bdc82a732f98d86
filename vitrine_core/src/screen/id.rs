// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen and texture identity types.

use core::fmt;

/// A handle to a screen in a [`ScreenStore`](super::ScreenStore).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a screen is destroyed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId {
    /// Slot index into the store.
    pub(crate) idx: u32,
    /// Generation counter — must match the store's generation for this slot.
    pub(crate) generation: u32,
}

impl ScreenId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScreenId({}@gen{})", self.idx, self.generation)
    }
}

/// An opaque reference to the texture a screen renders into.
///
/// Textures are created and managed externally (by the graphics backend's
/// resource layer). A screen with `Some(TextureId)` as its content can be
/// presented; `None` means the emulator has not attached a framebuffer yet
/// and the screen produces no frames.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl fmt::Debug for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureId({})", self.0)
    }
}
