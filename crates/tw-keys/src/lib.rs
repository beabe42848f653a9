//! Key material and the pluggable key-provider capability.
//!
//! The signing service never touches a concrete key backend directly; it
//! goes through the [`KeyProvider`] trait. The in-memory provider is the
//! MVP backend, with an external KMS/HSM implementation slotting in behind
//! the same trait later.
//!
//! Security notes:
//! - Key bytes are zeroed on release (`ZeroizeOnDrop`).
//! - `SecretKey` has a redacted `Debug` and no `Display`; key material never
//!   reaches logs or error messages.

pub mod error;
pub mod key;
pub mod memory;
pub mod provider;
pub mod source;

pub use error::{KeyError, ProviderError};
pub use key::{SecretKey, KEY_SIZE};
pub use memory::MemoryKeyProvider;
pub use provider::{DynKeyProvider, KeyProvider};
pub use source::KeySource;
