// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-list construction.

use kurbo::{Point, Rect};

use vitrine_core::pixels::PixelSize;
use vitrine_core::screen::{Rotation, TextureId};

use crate::command::{ClearTargets, CommandList, Feature, FilterAxis, FilterMode, GpuCommand};

/// Records primitive operations into a [`CommandList`].
///
/// One builder produces one frame's list; [`finish`](Self::finish) hands it
/// over for submission. Backup/restore pairs must balance by then.
#[derive(Debug, Default)]
pub struct CommandBuilder {
    list: CommandList,
    open_backups: u32,
}

impl CommandBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the swapchain extent for this frame.
    pub fn set_swapchain_size(&mut self, size: PixelSize) {
        self.list.commands.push(GpuCommand::SetSwapchainSize(size));
    }

    /// Saves the current pipeline state.
    pub fn backup_state(&mut self) {
        self.open_backups += 1;
        self.list.commands.push(GpuCommand::BackupState);
    }

    /// Enables or disables a fixed-function feature.
    pub fn set_feature(&mut self, feature: Feature, enable: bool) {
        self.list
            .commands
            .push(GpuCommand::SetFeature { feature, enable });
    }

    /// Restricts rendering to the given rectangle.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.list.commands.push(GpuCommand::SetViewport(viewport));
    }

    /// Clears the color buffer to the given normalized RGBA color.
    pub fn clear_color(&mut self, color: [f32; 4]) {
        self.list.commands.push(GpuCommand::Clear {
            color,
            depth: 0.0,
            stencil: 0,
            targets: ClearTargets::COLOR,
        });
    }

    /// Sets a texture's sampling filter on one axis.
    pub fn set_texture_filter(&mut self, texture: TextureId, axis: FilterAxis, mode: FilterMode) {
        self.list
            .commands
            .push(GpuCommand::SetTextureFilter { texture, axis, mode });
    }

    /// Draws a texture into a destination rectangle.
    pub fn draw_bitmap(
        &mut self,
        texture: TextureId,
        destination: Rect,
        source: Rect,
        origin: Point,
        rotation: Rotation,
        use_upscale_shader: bool,
    ) {
        self.list.commands.push(GpuCommand::DrawBitmap {
            texture,
            destination,
            source,
            origin,
            rotation,
            use_upscale_shader,
        });
    }

    /// Restores the pipeline state saved by the matching
    /// [`backup_state`](Self::backup_state).
    ///
    /// # Panics
    ///
    /// Panics if no backup is open.
    pub fn restore_state(&mut self) {
        assert!(self.open_backups > 0, "restore_state without backup_state");
        self.open_backups -= 1;
        self.list.commands.push(GpuCommand::RestoreState);
    }

    /// Appends the present marker.
    pub fn present(&mut self) {
        self.list.commands.push(GpuCommand::Present);
    }

    /// Returns the recorded list.
    ///
    /// # Panics
    ///
    /// Panics if a state backup was never restored.
    #[must_use]
    pub fn finish(self) -> CommandList {
        assert!(
            self.open_backups == 0,
            "command list finished with {} unbalanced state backup(s)",
            self.open_backups
        );
        self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut builder = CommandBuilder::new();
        builder.set_swapchain_size(PixelSize::new(800, 600));
        builder.backup_state();
        builder.set_feature(Feature::Blend, false);
        builder.restore_state();
        builder.present();

        let list = builder.finish();
        assert_eq!(
            list.commands,
            [
                GpuCommand::SetSwapchainSize(PixelSize::new(800, 600)),
                GpuCommand::BackupState,
                GpuCommand::SetFeature {
                    feature: Feature::Blend,
                    enable: false
                },
                GpuCommand::RestoreState,
                GpuCommand::Present,
            ]
        );
    }

    #[test]
    #[should_panic(expected = "unbalanced state backup")]
    fn unbalanced_backup_panics_on_finish() {
        let mut builder = CommandBuilder::new();
        builder.backup_state();
        let _ = builder.finish();
    }

    #[test]
    #[should_panic(expected = "without backup_state")]
    fn restore_without_backup_panics() {
        let mut builder = CommandBuilder::new();
        builder.restore_state();
    }
}
