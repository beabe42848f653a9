//! Core domain types for the TinyWindow execution core.
//!
//! This crate provides the fundamental types shared by the signing service
//! and the execution adapter:
//! - `OrderId`, `OrderIdGenerator`: process-unique, strictly increasing ids
//! - `OrderAck`: submission result record
//! - `OrderDetails`: optional structured view of an opaque order payload

pub mod error;
pub mod order;

pub use error::{CoreError, Result};
pub use order::{OrderAck, OrderDetails, OrderId, OrderIdGenerator, OrderSide};
