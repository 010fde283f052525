//! Shared callback handles used for outbound component notifications.
//!
//! ## Usage
//!
//! Components store a [`CallbackWith`] per notification and call it whenever
//! the observed value changes. Handles are cheap to clone and compare by
//! identity.

use std::{fmt, sync::Arc};

/// Outbound notification handler taking a `T`.
///
/// Clones share the closure. Two handles are equal only when they share it,
/// so a host can tell whether a component still holds the handler it was
/// given. The default handler ignores its argument.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Wraps a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Notifies the handler.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}
