//! Lazily established, process-lifetime connection slot.

use std::future::Future;

use tokio::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Unestablished,
    Established,
}

/// Holds a connection once the first successful connect completes.
///
/// Concurrent first callers wait on a single in-flight connect and all
/// observe the same handle. A failed connect leaves the slot empty so the
/// next caller tries again. Once filled the slot is never replaced.
#[derive(Debug)]
pub struct ConnectionCell<T> {
    slot: OnceCell<T>,
}

impl<T> Default for ConnectionCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConnectionCell<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Return the cached connection, running `connect` if none exists yet.
    ///
    /// # Errors
    ///
    /// Propagates the error from `connect`; the slot stays empty.
    pub async fn get_or_connect<F, Fut, E>(&self, connect: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.slot.get_or_try_init(connect).await
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    #[must_use]
    pub fn state(&self) -> ConnectionState {
        if self.slot.initialized() {
            ConnectionState::Established
        } else {
            ConnectionState::Unestablished
        }
    }
}
