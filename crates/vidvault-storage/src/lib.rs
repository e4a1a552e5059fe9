//! Vidvault Storage Library
//!
//! Storage abstraction for the gateway and its local filesystem implementation.
//!
//! # Name format
//!
//! Every stored file lives directly under the storage root as `{root}/{name}`. Names are
//! produced from client filenames by the `naming` module and must be a single path
//! component: no separators, no `.`/`..`, no NUL.

pub mod local;
pub mod naming;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use naming::{derive_stored_name, validate_name};
pub use traits::{ByteStream, Storage, StorageError, StorageResult};
