//! Nullable infrastructure for deterministic testing.
//!
//! The engine's external collaborators — clock, custody, storage — are
//! abstracted behind traits (or, for time, a plain `now` parameter). The
//! implementations here return deterministic values, can be controlled
//! programmatically, and never touch the filesystem, the network, or the
//! system clock. Swap them in wherever a test needs a collaborator.

pub mod clock;
pub mod custody;
pub mod store;

pub use clock::NullClock;
pub use custody::NullCustody;
pub use store::NullPoolStore;
