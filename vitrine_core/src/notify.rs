// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token-based notification registries.
//!
//! Hosts notify the presentation core through registered callbacks: a
//! mode-change callback fires when the emulated device switches resolution,
//! and a redraw callback fires on every tick that requires presentation.
//! Registration returns a [`CallbackToken`]; teardown removes by token, so
//! ordering is explicit and no raw function-pointer-plus-userdata pairs
//! change hands.
//!
//! Callbacks receive an explicit `&mut Ctx` context (whatever state the
//! host threads through its frame loop) and the event payload. Registries
//! are owned outside that context, so a callback cannot mutate the registry
//! it is being dispatched from.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::screen::{ScreenId, ScreenMode};

/// Identifies one registered callback within a [`Callbacks`] registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackToken(u64);

/// Fired when a screen's mode (resolution) is replaced.
#[derive(Clone, Copy, Debug)]
pub struct ModeChangeEvent {
    /// The screen whose mode changed.
    pub screen: ScreenId,
    /// The mode that was replaced.
    pub old_mode: ScreenMode,
}

/// Fired on each tick that requires a redraw.
#[derive(Clone, Copy, Debug)]
pub struct RedrawEvent {
    /// The screen to present.
    pub screen: ScreenId,
    /// Whether the tick was triggered by content change (direct screen
    /// access) rather than a regular timed tick.
    pub direct_access: bool,
}

/// An ordered registry of boxed callbacks keyed by token.
///
/// `Ctx` is the host context passed to every callback; `E` is the event
/// payload type.
pub struct Callbacks<Ctx, E> {
    entries: Vec<(u64, Box<dyn FnMut(&mut Ctx, &E)>)>,
    next_token: u64,
}

impl<Ctx, E> fmt::Debug for Callbacks<Ctx, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<Ctx, E> Default for Callbacks<Ctx, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx, E> Callbacks<Ctx, E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_token: 0,
        }
    }

    /// Registers a callback and returns its removal token.
    pub fn add(&mut self, callback: impl FnMut(&mut Ctx, &E) + 'static) -> CallbackToken {
        let token = self.next_token;
        self.next_token += 1;
        self.entries.push((token, Box::new(callback)));
        CallbackToken(token)
    }

    /// Removes a callback by token. Returns whether it was present.
    pub fn remove(&mut self, token: CallbackToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != token.0);
        self.entries.len() != before
    }

    /// Dispatches an event to every registered callback, in registration
    /// order.
    pub fn emit(&mut self, ctx: &mut Ctx, event: &E) {
        for (_, callback) in &mut self.entries {
            callback(ctx, event);
        }
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn emit_dispatches_in_registration_order() {
        let mut callbacks: Callbacks<Vec<u32>, u32> = Callbacks::new();
        callbacks.add(|log, e| log.push(*e * 10));
        callbacks.add(|log, e| log.push(*e * 100));

        let mut log = Vec::new();
        callbacks.emit(&mut log, &3);
        assert_eq!(log, [30, 300]);
    }

    #[test]
    fn remove_by_token() {
        let mut callbacks: Callbacks<u32, ()> = Callbacks::new();
        let first = callbacks.add(|count, _| *count += 1);
        let second = callbacks.add(|count, _| *count += 10);
        assert_eq!(callbacks.len(), 2);

        assert!(callbacks.remove(first));
        assert!(!callbacks.remove(first));

        let mut count = 0;
        callbacks.emit(&mut count, &());
        assert_eq!(count, 10);

        assert!(callbacks.remove(second));
        assert!(callbacks.is_empty());
    }

    #[test]
    fn tokens_stay_unique_after_removal() {
        let mut callbacks: Callbacks<(), ()> = Callbacks::new();
        let first = callbacks.add(|_, _| {});
        callbacks.remove(first);
        let second = callbacks.add(|_, _| {});
        assert_ne!(first, second);
    }
}
