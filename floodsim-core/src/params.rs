//! Shared sensor parameter stores
//!
//! The UI collaborator owns sliders that write sensor parameters at any
//! moment, possibly from another thread. Each sensor keeps its parameters in
//! a [`SharedParams`] handle; the UI holds a clone of the same handle.
//!
//! Generators never read fields one by one. They take a [`snapshot`] at the
//! start of each `generate` call, so a write lands entirely in the current
//! tick or entirely in the next one and a multi-field struct is never seen
//! half-updated.
//!
//! ```rust
//! use floodsim_core::{SharedParams, FlowParams};
//!
//! let params = SharedParams::new(FlowParams::default());
//! let ui_handle = params.clone();
//!
//! ui_handle.update(|p| p.flow_lpm = 15.0);
//! assert_eq!(params.snapshot().flow_lpm, 15.0);
//! ```
//!
//! [`snapshot`]: SharedParams::snapshot

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to one sensor's parameter struct
#[derive(Debug, Default)]
pub struct SharedParams<P> {
    inner: Arc<RwLock<P>>,
}

impl<P> Clone for SharedParams<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: Clone> SharedParams<P> {
    /// Wrap a parameter struct
    pub fn new(params: P) -> Self {
        Self { inner: Arc::new(RwLock::new(params)) }
    }

    /// Copy of the current parameters
    pub fn snapshot(&self) -> P {
        self.inner.read().clone()
    }

    /// Mutate in place under the write lock (last write wins)
    pub fn update<F: FnOnce(&mut P)>(&self, f: F) {
        let mut guard = self.inner.write();
        f(&mut *guard);
    }

    /// Swap in a whole new parameter set, returning the old one
    pub fn replace(&self, params: P) -> P {
        core::mem::replace(&mut *self.inner.write(), params)
    }

    /// Read guard for callers that only need a field or two
    pub fn read(&self) -> RwLockReadGuard<'_, P> {
        self.inner.read()
    }

    /// Write guard for direct field assignment
    pub fn write(&self) -> RwLockWriteGuard<'_, P> {
        self.inner.write()
    }

    /// Whether two handles point at the same store
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Knobs {
        a: f64,
        b: f64,
    }

    #[test]
    fn clones_share_one_store() {
        let params = SharedParams::new(Knobs { a: 1.0, b: 2.0 });
        let other = params.clone();

        other.write().a = 5.0;
        assert_eq!(params.snapshot(), Knobs { a: 5.0, b: 2.0 });
        assert!(params.same_store(&other));
    }

    #[test]
    fn snapshot_is_detached() {
        let params = SharedParams::new(Knobs { a: 1.0, b: 2.0 });
        let snap = params.snapshot();

        params.update(|k| {
            k.a = 10.0;
            k.b = 20.0;
        });

        assert_eq!(snap, Knobs { a: 1.0, b: 2.0 });
        assert_eq!(params.read().b, 20.0);
    }

    #[test]
    fn replace_returns_previous() {
        let params = SharedParams::new(Knobs { a: 1.0, b: 2.0 });
        let old = params.replace(Knobs { a: 3.0, b: 4.0 });
        assert_eq!(old.a, 1.0);
        assert_eq!(params.snapshot().a, 3.0);
    }
}
