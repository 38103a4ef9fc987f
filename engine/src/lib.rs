//! Stake-accounting engine for a reward-streaming pool.
//!
//! Participants deposit principal into a shared pool; a fixed emission of
//! reward units per second is split among active participants in proportion
//! to their weight. The split is computed lazily through a cumulative
//! reward-per-weight index: every operation settles the touched account in
//! O(1), no history is replayed, and no iteration over participants ever
//! happens.
//!
//! External concerns stay behind seams: asset custody
//! ([`streampool_custody::Custody`]), persistence
//! ([`streampool_store::PoolStore`]), identity (caller-supplied
//! [`streampool_types::AccountId`]), and time (caller-supplied `now`).

pub mod access;
pub mod accumulator;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod ledger;

pub use accumulator::RewardAccumulator;
pub use config::PoolConfig;
pub use engine::{AccountStatus, PoolEngine};
pub use error::EngineError;
pub use event::{EventBus, PoolEvent};
pub use ledger::StakeEntry;
