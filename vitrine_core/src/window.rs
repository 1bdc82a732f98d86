// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host window identification and per-pass metrics.
//!
//! [`WindowId`] is a lightweight handle identifying a specific host window.
//! Hosts assign these; core treats them as opaque. [`WindowMetrics`] is the
//! snapshot of window state a compositor pass reads.

use core::fmt;

use crate::pixels::PixelSize;

/// Identifies a specific host window.
///
/// Hosts assign window IDs to distinguish multiple windows. Core code passes
/// them through without interpreting the value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WindowId(pub u32);

impl fmt::Debug for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowId({})", self.0)
    }
}

/// The host-window state sampled at the start of a compositor pass.
///
/// The framebuffer size is in physical device pixels (the swapchain size).
/// The device pixel ratio relates logical UI pixels to physical pixels and
/// feeds only the minimum-size computation, never the draw transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowMetrics {
    /// Swapchain extent in device pixels.
    pub framebuffer_size: PixelSize,
    /// Ratio between logical UI pixels and physical display pixels.
    pub device_pixel_ratio: f64,
}

impl WindowMetrics {
    /// Creates metrics from a framebuffer size and a device pixel ratio.
    #[inline]
    #[must_use]
    pub const fn new(framebuffer_size: PixelSize, device_pixel_ratio: f64) -> Self {
        Self {
            framebuffer_size,
            device_pixel_ratio,
        }
    }
}
