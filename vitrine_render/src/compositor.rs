// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-window frame pass.

use kurbo::{Point, Rect};

use vitrine_core::config::DisplayConfig;
use vitrine_core::fence::PresentFence;
use vitrine_core::screen::{ScreenId, ScreenStore};
use vitrine_core::trace::{
    FenceWaitEvent, FrameSkippedEvent, SubmitEvent, Tracer, ViewportEvent,
};
use vitrine_core::viewport::{Viewport, compute_viewport};
use vitrine_core::window::{WindowId, WindowMetrics};

use crate::backend::{GraphicsBackend, OverlayRenderer};
use crate::builder::CommandBuilder;
use crate::command::{Feature, FilterAxis, FilterMode};

/// Whether a pass waits for the previous frame's fence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaitMode {
    /// Wait for the previous frame to complete first. The normal redraw
    /// path.
    Block,
    /// Submit without waiting. Used for the synchronous "redraw now" pass
    /// after a resize, where the caller knows no frame is in flight.
    Skip,
}

/// Presents one screen into one window.
///
/// Owns the window's [`PresentFence`]; fences are never shared across
/// windows, so one `Compositor` per window keeps at most one frame in
/// flight everywhere. Passes for the same window must be serialized by the
/// caller (single logical rendering thread).
#[derive(Debug)]
pub struct Compositor {
    window: WindowId,
    fence: PresentFence,
}

impl Compositor {
    /// Creates a compositor for the given window with an idle fence.
    #[must_use]
    pub fn new(window: WindowId) -> Self {
        Self {
            window,
            fence: PresentFence::new(),
        }
    }

    /// The window this compositor presents into.
    #[must_use]
    pub const fn window(&self) -> WindowId {
        self.window
    }

    /// The window's present fence.
    #[must_use]
    pub const fn fence(&self) -> &PresentFence {
        &self.fence
    }

    /// Runs one frame pass.
    ///
    /// Computes the screen's viewport, writes the placement back onto the
    /// screen, emits the frame's command list, and submits it against the
    /// window's fence. Returns the computed viewport, or `None` when the
    /// frame was skipped (degenerate window or mode geometry, or no screen
    /// texture attached) — in that case nothing is submitted and the fence
    /// is untouched.
    ///
    /// # Panics
    ///
    /// Panics if a frame is still in flight at submission time. With
    /// [`WaitMode::Block`] this cannot happen; with [`WaitMode::Skip`] it
    /// is a caller contract violation (the skip path exists for callers
    /// that know the fence is not pending).
    pub fn present(
        &mut self,
        backend: &mut dyn GraphicsBackend,
        store: &mut ScreenStore,
        screen: ScreenId,
        metrics: &WindowMetrics,
        config: &DisplayConfig,
        overlay: Option<&mut dyn OverlayRenderer>,
        wait: WaitMode,
        tracer: &mut Tracer<'_>,
    ) -> Option<Viewport> {
        let state = store.screen(screen);
        let mode = state.mode();
        let rotation = state.rotation();
        let requested_scale = state.requested_scale_factor();
        let upscale_lock = state.upscale_lock();
        let texture = state.texture();

        let skipped = FrameSkippedEvent {
            window: self.window,
            screen: screen.index(),
        };
        let Some(texture) = texture else {
            tracer.frame_skipped(&skipped);
            return None;
        };
        let Some(viewport) = compute_viewport(
            metrics.framebuffer_size,
            &mode,
            rotation,
            requested_scale,
            config.stretch_to_fill,
        ) else {
            tracer.frame_skipped(&skipped);
            return None;
        };

        if wait == WaitMode::Block {
            tracer.fence_wait(&FenceWaitEvent {
                window: self.window,
            });
            backend.wait(&mut self.fence);
        }
        assert!(
            !self.fence.is_pending(),
            "frame submitted while the previous one is still in flight"
        );

        store.apply_viewport(screen, &viewport);
        tracer.viewport(&ViewportEvent {
            window: self.window,
            screen: screen.index(),
            destination: viewport.destination,
            scale: viewport.scale,
        });

        let mut builder = CommandBuilder::new();
        builder.set_swapchain_size(metrics.framebuffer_size);
        builder.backup_state();

        // Opaque 2D blit: no 3D pipeline state applies.
        for feature in Feature::ALL {
            builder.set_feature(feature, false);
        }
        builder.set_viewport(Rect::from_origin_size(
            Point::ORIGIN,
            metrics.framebuffer_size.to_size(),
        ));
        builder.clear_color(config.background_color.to_clear_channels());

        let filter = if config.nearest_neighbor_filtering {
            FilterMode::Nearest
        } else {
            FilterMode::Linear
        };
        builder.set_texture_filter(texture, FilterAxis::Min, filter);
        builder.set_texture_filter(texture, FilterAxis::Mag, filter);

        builder.draw_bitmap(
            texture,
            viewport.destination,
            viewport.source,
            Point::ORIGIN,
            rotation,
            upscale_lock,
        );

        if let Some(overlay) = overlay {
            // The overlay shares the presented content's coordinate space.
            builder.set_viewport(viewport.destination);
            overlay.draw(&mut builder, viewport.scale);
        }

        builder.restore_state();
        builder.present();

        let list = builder.finish();
        tracer.submit(&SubmitEvent {
            window: self.window,
            commands: list.len() as u32,
        });

        self.fence.arm();
        backend.submit(list, &mut self.fence);

        Some(viewport)
    }
}
