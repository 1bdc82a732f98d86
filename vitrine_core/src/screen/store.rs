// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen storage with allocation, property management, and change draining.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use understory_dirty::{CycleHandling, DirtyTracker};

use crate::dirty;
use crate::viewport::Viewport;

use super::id::{ScreenId, TextureId};
use super::mode::{Rotation, ScreenMode};

/// One emulated display.
///
/// All state the compositor reads lives here. The two write-back fields
/// ([`absolute_position`](Self::absolute_position) and
/// [`native_scale_factor`](Self::native_scale_factor)) are refreshed by
/// [`ScreenStore::apply_viewport`] every pass; downstream input-coordinate
/// remapping depends on them being current.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    mode: ScreenMode,
    rotation: Rotation,
    requested_scale_factor: f64,
    upscale_lock: bool,
    texture: Option<TextureId>,
    absolute_position: Point,
    native_scale_factor: Vec2,
}

impl Screen {
    fn new(mode: ScreenMode) -> Self {
        Self {
            mode,
            rotation: Rotation::Deg0,
            requested_scale_factor: 0.0,
            upscale_lock: false,
            texture: None,
            absolute_position: Point::ORIGIN,
            native_scale_factor: Vec2::new(1.0, 1.0),
        }
    }

    /// The current display mode snapshot.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// The current UI rotation.
    #[inline]
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The user-requested scale multiplier. Values `<= 0.0` mean auto-fit.
    #[inline]
    #[must_use]
    pub const fn requested_scale_factor(&self) -> f64 {
        self.requested_scale_factor
    }

    /// Whether the dedicated upscale filter is forced for this screen.
    #[inline]
    #[must_use]
    pub const fn upscale_lock(&self) -> bool {
        self.upscale_lock
    }

    /// The texture the emulator renders this screen into, if attached.
    #[inline]
    #[must_use]
    pub const fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// The screen's on-window origin, as of the last compositor pass.
    #[inline]
    #[must_use]
    pub const fn absolute_position(&self) -> Point {
        self.absolute_position
    }

    /// The actual `(x, y)` scale multiplier applied by the last compositor
    /// pass.
    #[inline]
    #[must_use]
    pub const fn native_scale_factor(&self) -> Vec2 {
        self.native_scale_factor
    }
}

/// The set of changes produced by a single
/// [`ScreenStore::drain_changes`] call.
///
/// Each field contains the raw slot indices of screens that changed in the
/// corresponding category. The frame loop uses these to decide which screens
/// need a minimum-size update ([`modes`](Self::modes) and
/// [`rotations`](Self::rotations)) and which need re-presentation (any
/// category).
#[derive(Clone, Debug, Default)]
pub struct ScreenChanges {
    /// Screens whose mode was replaced.
    pub modes: Vec<u32>,
    /// Screens whose rotation changed.
    pub rotations: Vec<u32>,
    /// Screens whose requested scale factor or upscale lock changed.
    pub scales: Vec<u32>,
    /// Screens whose texture content changed.
    pub content: Vec<u32>,
}

impl ScreenChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.modes.clear();
        self.rotations.clear();
        self.scales.clear();
        self.content.clear();
    }

    /// Whether no screen changed in any category.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
            && self.rotations.is_empty()
            && self.scales.is_empty()
            && self.content.is_empty()
    }
}

/// Storage for all emulated screens.
///
/// Screens are addressed by [`ScreenId`] handles. Destroyed screens are
/// recycled via a free list, and generation counters prevent stale handle
/// access. Property mutations mark [dirty channels](crate::dirty);
/// [`drain_changes`](Self::drain_changes) drains them between frames.
#[derive(Debug)]
pub struct ScreenStore {
    screens: Vec<Screen>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
    len: u32,
    dirty: DirtyTracker<u32>,
}

impl Default for ScreenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenStore {
    /// Creates an empty screen store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screens: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
        }
    }

    // -- Allocation API --

    /// Creates a new screen with the given mode and returns its handle.
    ///
    /// The screen starts upright, auto-fit, without an upscale lock, and with
    /// no texture attached. The MODE and CONTENT channels are marked so the
    /// next frame pass picks the screen up.
    pub fn create_screen(&mut self, mode: ScreenMode) -> ScreenId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.screens[idx as usize] = Screen::new(mode);
            idx
        } else {
            let idx = self.len;
            self.len += 1;
            self.screens.push(Screen::new(mode));
            self.generation.push(0);
            idx
        };

        self.dirty.mark(idx, dirty::MODE);
        self.dirty.mark(idx, dirty::CONTENT);

        ScreenId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a screen, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    pub fn destroy_screen(&mut self, id: ScreenId) {
        self.validate(id);
        let idx = id.idx;

        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;
        self.free_list.push(idx);
    }

    /// Returns whether the given handle refers to a live screen.
    #[must_use]
    pub fn is_alive(&self, id: ScreenId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    /// Number of live screens.
    #[must_use]
    pub fn screen_count(&self) -> u32 {
        self.len - self.free_list.len() as u32
    }

    fn validate(&self, id: ScreenId) {
        assert!(self.is_alive(id), "stale screen handle: {id:?}");
    }

    // -- Read access --

    /// Returns the screen for the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale.
    #[must_use]
    pub fn screen(&self, id: ScreenId) -> &Screen {
        self.validate(id);
        &self.screens[id.idx as usize]
    }

    /// Returns the screen at raw slot `idx`.
    ///
    /// Accepts raw slot indices (as found in [`ScreenChanges`]) rather than
    /// [`ScreenId`] handles, skipping generation validation. Only use with
    /// indices that came from [`drain_changes`](Self::drain_changes).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    #[must_use]
    pub fn screen_at(&self, idx: u32) -> &Screen {
        assert!(idx < self.len, "slot index {idx} out of range");
        &self.screens[idx as usize]
    }

    // -- Mutation API (auto-marks dirty) --

    /// Replaces the screen's mode snapshot, returning the previous one.
    ///
    /// Marks the MODE channel dirty.
    pub fn set_mode(&mut self, id: ScreenId, mode: ScreenMode) -> ScreenMode {
        self.validate(id);
        let old = core::mem::replace(&mut self.screens[id.idx as usize].mode, mode);
        self.dirty.mark(id.idx, dirty::MODE);
        old
    }

    /// Sets the screen's UI rotation.
    ///
    /// Marks the ROTATION channel dirty.
    pub fn set_rotation(&mut self, id: ScreenId, rotation: Rotation) {
        self.validate(id);
        self.screens[id.idx as usize].rotation = rotation;
        self.dirty.mark(id.idx, dirty::ROTATION);
    }

    /// Sets the user-requested scale multiplier (`<= 0.0` for auto-fit).
    ///
    /// Marks the SCALE channel dirty.
    pub fn set_requested_scale_factor(&mut self, id: ScreenId, factor: f64) {
        self.validate(id);
        self.screens[id.idx as usize].requested_scale_factor = factor;
        self.dirty.mark(id.idx, dirty::SCALE);
    }

    /// Forces (or releases) the dedicated upscale filter for this screen.
    ///
    /// Marks the SCALE channel dirty.
    pub fn set_upscale_lock(&mut self, id: ScreenId, lock: bool) {
        self.validate(id);
        self.screens[id.idx as usize].upscale_lock = lock;
        self.dirty.mark(id.idx, dirty::SCALE);
    }

    /// Attaches (or detaches) the texture the emulator renders into.
    ///
    /// Marks the CONTENT channel dirty.
    pub fn set_texture(&mut self, id: ScreenId, texture: Option<TextureId>) {
        self.validate(id);
        self.screens[id.idx as usize].texture = texture;
        self.dirty.mark(id.idx, dirty::CONTENT);
    }

    /// Records that the emulator redrew into the screen's current texture.
    ///
    /// Marks the CONTENT channel dirty.
    pub fn mark_content_dirty(&mut self, id: ScreenId) {
        self.validate(id);
        self.dirty.mark(id.idx, dirty::CONTENT);
    }

    /// Writes the compositor's per-pass results back onto the screen.
    ///
    /// Stores the pre-rotation on-window origin and the applied scale
    /// factor. This is a computed write-back; no dirty channel is marked.
    pub fn apply_viewport(&mut self, id: ScreenId, viewport: &Viewport) {
        self.validate(id);
        let screen = &mut self.screens[id.idx as usize];
        screen.absolute_position = viewport.origin;
        screen.native_scale_factor = viewport.scale;
    }

    // -- Change draining --

    /// Drains all dirty channels, returning the set of changed screens.
    pub fn drain_changes(&mut self) -> ScreenChanges {
        let mut changes = ScreenChanges::default();
        self.drain_changes_into(&mut changes);
        changes
    }

    /// Like [`drain_changes`](Self::drain_changes), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn drain_changes_into(&mut self, changes: &mut ScreenChanges) {
        changes.clear();
        changes
            .modes
            .extend(self.dirty.drain(dirty::MODE).affected().deterministic().run());
        changes.rotations.extend(
            self.dirty
                .drain(dirty::ROTATION)
                .affected()
                .deterministic()
                .run(),
        );
        changes.scales.extend(
            self.dirty
                .drain(dirty::SCALE)
                .affected()
                .deterministic()
                .run(),
        );
        changes.content.extend(
            self.dirty
                .drain(dirty::CONTENT)
                .affected()
                .deterministic()
                .run(),
        );
    }
}
