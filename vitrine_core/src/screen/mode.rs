// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen mode snapshots and UI rotation.

use crate::pixels::PixelSize;

/// The UI rotation applied when presenting a screen, in degrees clockwise.
///
/// Only the four cardinal angles exist; anything else is unrepresentable.
/// Hosts normalize raw angle values through [`Rotation::from_degrees`]
/// before they reach the compositor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Upright.
    #[default]
    Deg0,
    /// Quarter turn clockwise.
    Deg90,
    /// Upside down.
    Deg180,
    /// Quarter turn counter-clockwise.
    Deg270,
}

impl Rotation {
    /// All four rotations in increasing-angle order.
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Converts a degree value to a rotation, if it is one of the four
    /// cardinal angles.
    #[inline]
    #[must_use]
    pub const fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Returns the angle in degrees clockwise.
    #[inline]
    #[must_use]
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether the rotated content's on-screen footprint transposes width
    /// and height (90° and 270°).
    #[inline]
    #[must_use]
    pub const fn is_transposed(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// The rotation that follows this one a quarter turn clockwise.
    #[inline]
    #[must_use]
    pub const fn quarter_turn(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

/// An immutable snapshot of an emulated screen's display mode.
///
/// Replaced wholesale when the emulated device switches resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMode {
    /// Mode extent in emulated device pixels.
    pub size: PixelSize,
    /// Source-texture oversampling factor: the backing texture is this many
    /// times larger than the mode size on each axis.
    pub display_scale_factor: f64,
}

impl ScreenMode {
    /// Creates a mode snapshot with no oversampling.
    #[inline]
    #[must_use]
    pub const fn new(size: PixelSize) -> Self {
        Self {
            size,
            display_scale_factor: 1.0,
        }
    }

    /// Creates a mode snapshot with the given oversampling factor.
    #[inline]
    #[must_use]
    pub const fn with_display_scale(size: PixelSize, display_scale_factor: f64) -> Self {
        Self {
            size,
            display_scale_factor,
        }
    }
}
