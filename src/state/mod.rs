//! Client state module
//!
//! This module holds the session cache and the storage it persists to.

pub mod session;
pub mod storage;

pub use session::{SessionCache, AuthState, PersistedSession};
pub use storage::{SessionStorage, FileStorage, MemoryStorage};
