// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend and overlay contracts.
//!
//! Vitrine does not create windows, own an event loop, or talk to a GPU
//! API. A platform integration provides the following pieces:
//!
//! - **Window + tick source** — Creates the host window and invokes the
//!   frame loop on redraw ticks, resizes, and mode-change notifications.
//!   This is platform-specific and not abstracted by a trait because setup
//!   and lifecycle differ fundamentally across platforms.
//!
//! - **Graphics backend** — Implements [`GraphicsBackend`] to execute
//!   [`CommandList`]s and signal present fences.
//!
//! - **Pointer-mapping executor** — Implements
//!   [`SlotExecutor`](vitrine_core::pointer::SlotExecutor) and owns the
//!   virtual touch slots.
//!
//! # Crate boundaries
//!
//! `vitrine_core` owns the screen model, geometry, fence, and allocator.
//! This crate owns the command IR and the frame pass. Application code
//! depends on both and wires them to a platform in its event loop.

use vitrine_core::fence::PresentFence;

use crate::builder::CommandBuilder;
use crate::command::CommandList;

/// Executes submitted command lists against a real graphics device.
///
/// # Contract
///
/// - Commands in a submitted list execute in submission order.
/// - The list submitted alongside a fence references the screen texture
///   until the frame is displayed; the backend must
///   [`signal`](PresentFence::signal) that fence with a completion code
///   once it is, and must eventually signal every fence it receives.
/// - [`wait`](Self::wait) blocks until the given fence leaves its pending
///   state. This is the frame loop's only suspension point.
///
/// # Frame loop pseudocode
///
/// ```rust,ignore
/// fn on_redraw(event: RedrawEvent) {
///     compositor.present(
///         &mut backend,
///         &mut store,
///         event.screen,
///         &window_metrics(),
///         &config,
///         overlay.as_deref_mut(),
///         WaitMode::Block,
///         &mut tracer,
///     );
/// }
/// ```
pub trait GraphicsBackend {
    /// Queues a command list for execution, tying its present to `fence`.
    ///
    /// Called with the fence already armed.
    fn submit(&mut self, list: CommandList, fence: &mut PresentFence);

    /// Blocks until `fence` is no longer pending.
    ///
    /// Returns immediately for an idle or completed fence.
    fn wait(&mut self, fence: &mut PresentFence);
}

/// Draws an interactive overlay (e.g. a touch-mapping editor) on top of the
/// presented screen.
///
/// Invoked by the compositor after the screen draw, with the viewport
/// re-narrowed to the screen's destination rectangle, so overlay geometry
/// shares the presented content's coordinate space.
pub trait OverlayRenderer {
    /// Records the overlay's commands. `scale` is the `(x, y)` multiplier
    /// the screen content was drawn with.
    fn draw(&mut self, builder: &mut CommandBuilder, scale: kurbo::Vec2);
}
