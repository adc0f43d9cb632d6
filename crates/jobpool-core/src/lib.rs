//! # jobpool-core
//!
//! Platform-agnostic types for the dependency-aware job pool: job
//! identifiers, the job record, the dense arena + intrusive unstarted
//! list, and the error type. This crate holds no threads and no locks —
//! `jobpool` wraps these types behind a `Mutex`/`Condvar` pair.
//!
//! ## Modules
//!
//! - `id` - dense job identifier
//! - `error` - error type for pool operations
//! - `job` - job record (predecessors, finished flag, intrusive links)
//! - `store` - dense arena + intrusive unstarted list
//! - `env` - environment variable parsing helpers

pub mod constants;
pub mod env;
pub mod error;
pub mod id;
pub mod job;
pub mod store;

pub use error::{PoolError, PoolResult};
pub use id::JobId;
pub use job::JobRecord;
pub use store::{JobStore, Readiness};
