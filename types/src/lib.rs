//! Fundamental types for the streampool workspace.
//!
//! Shared by every other crate: participant identities, timestamps, and
//! pool construction parameters.

pub mod address;
pub mod params;
pub mod time;

pub use address::AccountId;
pub use params::{PoolParams, INDEX_SCALE};
pub use time::Timestamp;
