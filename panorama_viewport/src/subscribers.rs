// Copyright 2025 the Panorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Transform;

/// Callback invoked with every committed transform.
pub type TransformCallback = Box<dyn FnMut(&Transform)>;

/// Handle returned when registering a subscriber; pass it back to remove it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// An ordered registry of transform observers.
///
/// Every registration gets a fresh [`SubscriberId`], so registering the same
/// closure twice yields two independent subscriptions that are removed
/// independently. Notification runs in registration order.
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriberId, TransformCallback)>,
}

impl Subscribers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns its handle.
    pub fn add(&mut self, callback: TransformCallback) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Removes the subscriber with handle `id`.
    ///
    /// Returns `false` if it was already removed.
    pub fn remove(&mut self, id: SubscriberId) -> bool {
        let Some(index) = self.entries.iter().position(|(e, _)| *e == id) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    /// Calls every subscriber with `transform`.
    pub fn notify(&mut self, transform: &Transform) {
        for (_, callback) in &mut self.entries {
            callback(transform);
        }
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Manual Debug impl since callbacks aren't Debug
impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field(
                "ids",
                &self.entries.iter().map(|(id, _)| id.0).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
