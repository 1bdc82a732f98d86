// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation-aware, aspect-preserving viewport computation.
//!
//! [`compute_viewport`] maps an emulated screen's rendered texture into the
//! host window's pixel rectangle under the current rotation and scaling
//! policy:
//!
//! 1. Pick the `(x, y)` scale: the user-requested multiplier if positive,
//!    otherwise fit the window width (and, when stretching, the height
//!    independently).
//! 2. When aspect is preserved and the scaled height would exceed the
//!    window, re-clamp to a single uniform scale that exactly fills the
//!    height.
//! 3. Center the scaled box in the window.
//! 4. Compensate for rotation: the centered box is rotated about the window
//!    center, and its extent transposes for quarter turns.
//!
//! The scale computation always treats the source footprint un-swapped;
//! rotation affects only the minimum-size footprint
//! ([`minsize`](crate::minsize)) and the final destination rectangle.
//!
//! The destination rectangle handed to the backend is the final axis-aligned
//! on-screen footprint; the backend rotates the sampled content within it.

use kurbo::{Point, Rect, Size, Vec2};

use crate::pixels::PixelSize;
use crate::screen::{Rotation, ScreenMode};

/// The computed placement of one screen's texture within a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Final on-screen destination rectangle, in window device pixels.
    pub destination: Rect,
    /// Source rectangle in texels (mode size times the display scale
    /// factor), at origin zero.
    pub source: Rect,
    /// The `(x, y)` scale multiplier actually applied, in the texture's
    /// own orientation. Equal on both axes unless stretch-to-fill is on.
    pub scale: Vec2,
    /// Origin of the centered box before rotation compensation. Written
    /// back to the screen as its absolute position for downstream
    /// input-coordinate remapping.
    pub origin: Point,
}

/// Computes the destination placement for one frame.
///
/// `requested_scale <= 0.0` means auto-fit; a positive value is a fixed
/// user-chosen multiplier. Returns `None` for degenerate geometry (a window
/// or mode with a zero axis) — the caller skips the frame.
///
/// When aspect is preserved (`stretch_to_fill == false`) the result keeps
/// `scale.x == scale.y` and never exceeds the window's vertical extent; the
/// uniform height clamp applies to fixed multipliers as well.
#[must_use]
pub fn compute_viewport(
    window: PixelSize,
    mode: &ScreenMode,
    rotation: Rotation,
    requested_scale: f64,
    stretch_to_fill: bool,
) -> Option<Viewport> {
    if window.is_degenerate() || mode.size.is_degenerate() {
        return None;
    }

    let win_w = f64::from(window.width);
    let win_h = f64::from(window.height);
    let src_w = f64::from(mode.size.width);
    let src_h = f64::from(mode.size.height);

    let mut scale_x = if requested_scale > 0.0 {
        requested_scale
    } else {
        win_w / src_w
    };
    let mut scale_y = if requested_scale > 0.0 {
        requested_scale
    } else if stretch_to_fill {
        win_h / src_h
    } else {
        scale_x
    };

    let mut width = src_w * scale_x;
    let mut height = src_h * scale_y;

    // Aspect-preserving clamp: never exceed the window's vertical extent.
    // Recenters rather than crops, and overrides a fixed multiplier too.
    if !stretch_to_fill && height > win_h {
        height = win_h;
        scale_y = height / src_h;
        scale_x = scale_y;
        width = src_w * scale_y;
    }

    let x = (win_w - width) / 2.0;
    let y = (win_h - height) / 2.0;
    let origin = Point::new(x, y);

    let centered = Rect::from_origin_size(origin, Size::new(width, height));
    let source = Rect::from_origin_size(
        Point::ORIGIN,
        Size::new(
            src_w * mode.display_scale_factor,
            src_h * mode.display_scale_factor,
        ),
    );

    Some(Viewport {
        destination: rotate_rect_in_window(centered, window, rotation),
        source,
        scale: Vec2::new(scale_x, scale_y),
        origin,
    })
}

/// Rotates a destination rectangle about the window's center.
///
/// This is the rotation position-compensation step: the origin is carried
/// around the window center by the rotation angle, and the extent is
/// swapped afterwards for the transposed rotations, so the rotated texture
/// lands visually upright within the centered box.
///
/// At [`Rotation::Deg0`] this is the identity, and the four cases are
/// mutually consistent: two quarter-turn applications equal the half-turn
/// case, and four return the original rectangle.
#[must_use]
pub fn rotate_rect_in_window(rect: Rect, window: PixelSize, rotation: Rotation) -> Rect {
    let cx = f64::from(window.width) / 2.0;
    let cy = f64::from(window.height) / 2.0;
    let (w, h) = (rect.width(), rect.height());

    let (origin, size) = match rotation {
        Rotation::Deg0 => (rect.origin(), Size::new(w, h)),
        Rotation::Deg90 => (
            Point::new(cx + cy - rect.y1, cy - cx + rect.x0),
            Size::new(h, w),
        ),
        Rotation::Deg180 => (
            Point::new(2.0 * cx - rect.x1, 2.0 * cy - rect.y1),
            Size::new(w, h),
        ),
        Rotation::Deg270 => (
            Point::new(cx - cy + rect.y0, cx + cy - rect.x1),
            Size::new(h, w),
        ),
    };

    Rect::from_origin_size(origin, size)
}
