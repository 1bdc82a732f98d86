// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer device-pixel extents.

use core::fmt;

/// A width/height pair in device pixels.
///
/// Used for window framebuffer sizes, screen mode sizes, and minimum-size
/// constraints. Scaled destination geometry uses [`kurbo::Rect`] instead;
/// this type is for the integral extents the host and the emulated device
/// report.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelSize {
    /// Horizontal extent in device pixels.
    pub width: u32,
    /// Vertical extent in device pixels.
    pub height: u32,
}

impl PixelSize {
    /// A zero-by-zero extent.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates an extent from a width and height.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the extent with width and height exchanged.
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether either axis is zero.
    ///
    /// Degenerate extents must never reach the viewport math; callers skip
    /// the frame instead.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Converts to a floating-point [`kurbo::Size`].
    #[inline]
    #[must_use]
    pub fn to_size(self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl fmt::Debug for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
