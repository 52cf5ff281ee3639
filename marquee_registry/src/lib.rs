// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=marquee_registry --heading-base-level=0

//! Marquee Registry: keyed per-container routing for selection engines.
//!
//! Hosts typically run one selection engine per container and need to route
//! incoming events to the right instance, while making sure that wiring the
//! same container twice does not build a second engine over it. That routing
//! is host plumbing, not engine logic, so it lives in its own small crate:
//! [`InstanceRegistry`] maps container identities (an element id, a window
//! handle, whatever names a container in your application) to engine
//! instances.
//!
//! The registry is generic over both key and value; it works just as well for
//! routing anything else that is one-per-container.
//!
//! ## Minimal example
//!
//! ```rust
//! use marquee_registry::InstanceRegistry;
//!
//! let mut registry: InstanceRegistry<&str, Vec<u32>> = InstanceRegistry::new();
//!
//! // First attach initializes.
//! registry.attach("sidebar", Vec::new).push(1);
//!
//! // A second attach on the same key routes to the existing instance; the
//! // initializer is not re-run.
//! registry.attach("sidebar", || panic!("already attached")).push(2);
//! assert_eq!(registry.get(&"sidebar"), Some(&vec![1, 2]));
//!
//! // Tearing a container down surrenders its instance.
//! let detached = registry.detach(&"sidebar");
//! assert_eq!(detached, Some(vec![1, 2]));
//! assert!(registry.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

use hashbrown::HashMap;

/// A keyed map from container identity to a per-container instance.
///
/// [`InstanceRegistry::attach`] is get-or-insert: attaching a key that is
/// already present hands back the existing instance without running the
/// initializer, which is the double-initialization guard hosts want when the
/// same container gets wired up twice.
#[derive(Default)]
pub struct InstanceRegistry<K, V> {
    instances: HashMap<K, V>,
}

impl<K, V> core::fmt::Debug for InstanceRegistry<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("len", &self.instances.len())
            .finish_non_exhaustive()
    }
}

impl<K, V> InstanceRegistry<K, V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Returns the number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if no instances are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<K, V> InstanceRegistry<K, V>
where
    K: core::hash::Hash + Eq,
{
    /// Returns the instance for `key`, creating it with `init` if absent.
    ///
    /// The initializer runs only when the key is new; an existing instance is
    /// returned untouched.
    pub fn attach(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        self.instances.entry(key).or_insert_with(init)
    }

    /// Returns a reference to the instance for `key`, if registered.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.instances.get(key)
    }

    /// Returns a mutable reference to the instance for `key`, if registered.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.instances.get_mut(key)
    }

    /// Removes and returns the instance for `key`, if registered.
    pub fn detach(&mut self, key: &K) -> Option<V> {
        self.instances.remove(key)
    }

    /// Returns `true` if an instance is registered for `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.instances.contains_key(key)
    }

    /// Returns an iterator over the registered keys, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.instances.keys()
    }
}
