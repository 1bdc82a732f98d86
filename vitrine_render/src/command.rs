// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command list: an ordered sequence of primitive operations for one frame.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use vitrine_core::pixels::PixelSize;
use vitrine_core::screen::{Rotation, TextureId};

/// A togglable fixed-function pipeline feature.
///
/// The presented content is an opaque 2D blit, not a 3D scene, so the
/// compositor disables all of these for the duration of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Back-face culling.
    Cull,
    /// Depth testing.
    DepthTest,
    /// Alpha blending.
    Blend,
    /// Stencil testing.
    StencilTest,
    /// Scissor/clip rectangles.
    Clipping,
}

impl Feature {
    /// Every feature, in the order the compositor disables them.
    pub const ALL: [Self; 5] = [
        Self::Cull,
        Self::DepthTest,
        Self::Blend,
        Self::StencilTest,
        Self::Clipping,
    ];
}

/// Which sampling direction a texture filter applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    /// Minification.
    Min,
    /// Magnification.
    Mag,
}

/// Texture sampling mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Nearest-neighbor sampling (crisp pixels).
    Nearest,
    /// Bilinear sampling.
    Linear,
}

/// Which buffers a clear command touches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClearTargets {
    /// Clear the color buffer.
    pub color: bool,
    /// Clear the depth buffer.
    pub depth: bool,
    /// Clear the stencil buffer.
    pub stencil: bool,
}

impl ClearTargets {
    /// Color buffer only.
    pub const COLOR: Self = Self {
        color: true,
        depth: false,
        stencil: false,
    };
}

/// A single primitive operation in a frame's command list.
///
/// Backends execute commands strictly in submission order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GpuCommand {
    /// Declares the swapchain extent for this frame.
    SetSwapchainSize(PixelSize),
    /// Saves the current pipeline state for a later
    /// [`RestoreState`](Self::RestoreState).
    BackupState,
    /// Enables or disables a fixed-function feature.
    SetFeature {
        /// The feature to toggle.
        feature: Feature,
        /// The new state.
        enable: bool,
    },
    /// Restricts rendering to the given rectangle, in window device pixels.
    SetViewport(Rect),
    /// Clears the selected buffers.
    Clear {
        /// Normalized RGBA clear color.
        color: [f32; 4],
        /// Depth clear value.
        depth: f32,
        /// Stencil clear value.
        stencil: i32,
        /// Which buffers to clear.
        targets: ClearTargets,
    },
    /// Sets a texture's sampling filter on one axis.
    SetTextureFilter {
        /// The texture whose sampler changes.
        texture: TextureId,
        /// Which sampling direction.
        axis: FilterAxis,
        /// The new mode.
        mode: FilterMode,
    },
    /// Draws a texture into a destination rectangle.
    ///
    /// `destination` is the final axis-aligned on-screen footprint; the
    /// backend rotates the sampled content clockwise by `rotation` within
    /// it. `use_upscale_shader` routes sampling through the dedicated
    /// upscale filter.
    DrawBitmap {
        /// The texture to sample.
        texture: TextureId,
        /// Final on-screen rectangle, in window device pixels.
        destination: Rect,
        /// Source rectangle in texels.
        source: Rect,
        /// Rotation origin offset within the destination (zero for the
        /// compositor's full-rect draws).
        origin: Point,
        /// Content rotation.
        rotation: Rotation,
        /// Whether to sample through the dedicated upscale shader.
        use_upscale_shader: bool,
    },
    /// Restores the pipeline state saved by the matching
    /// [`BackupState`](Self::BackupState).
    RestoreState,
    /// Presents the frame. The backend signals the fence passed alongside
    /// the submission once the frame is displayed.
    Present,
}

/// An ordered list of commands for a single frame on a single window.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    /// Commands in execution order.
    pub commands: Vec<GpuCommand>,
}

impl CommandList {
    /// Creates an empty command list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list contains no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clears the list for reuse.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
