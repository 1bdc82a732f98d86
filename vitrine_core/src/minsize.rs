// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimum host-window size for an emulated screen.
//!
//! Whenever a screen's mode or rotation changes, the host must re-apply the
//! window's minimum-size constraint so the window can never be shrunk below
//! the point where the emulated content would have to be cropped. This must
//! happen before the next compositor pass: the viewport's height clamp
//! assumes the window is at least this large.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::pixels::PixelSize;
use crate::screen::{Rotation, ScreenMode};

/// Computes the minimum allowable window size for the given mode and
/// rotation.
///
/// The footprint transposes for quarter-turn rotations. When `true_size`
/// mode is enabled the result is divided by the device pixel ratio (rounded
/// to nearest), presenting at native device pixels rather than logical
/// pixels.
#[must_use]
pub fn minimum_window_size(
    mode: &ScreenMode,
    rotation: Rotation,
    device_pixel_ratio: f64,
    true_size: bool,
) -> PixelSize {
    let mut size = mode.size;
    if rotation.is_transposed() {
        size = size.swapped();
    }
    if true_size && device_pixel_ratio > 0.0 {
        size = PixelSize::new(
            (f64::from(size.width) / device_pixel_ratio).round() as u32,
            (f64::from(size.height) / device_pixel_ratio).round() as u32,
        );
    }
    size
}
