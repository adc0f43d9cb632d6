//! # jobpool
//!
//! A fixed-size pool of worker threads that execute jobs under an
//! explicit predecessor DAG: each job declares up to ten predecessor
//! job ids and may not begin until every predecessor has finished. The
//! pool admits jobs concurrently with execution and terminates cleanly
//! once the submitter calls `wait()` and every started job has
//! drained.
//!
//! ## Quick start
//!
//! ```
//! use jobpool::Pool;
//!
//! let mut pool = Pool::new(4).unwrap();
//! let a = pool.add(|| println!("a"), &[]).unwrap();
//! let _b = pool.add(|| println!("b, after a"), &[a]).unwrap();
//! pool.wait();
//! ```
//!
//! ## Modules
//!
//! - `pool` - public `Pool` API (`new`, `add`, `wait`)
//! - `worker` - worker thread body
//! - `jplog` - kernel-style debug print macros (`jinfo!`, `jdebug!`, ...)
//!
//! ## Non-goals
//!
//! Work stealing, priority scheduling, mid-run cancellation, cycle
//! detection (the submitter is trusted not to create one), preemption,
//! and cross-process dispatch are all out of scope.

mod jplog;
mod pool;
mod worker;

pub use jobpool_core::error::{PoolError, PoolResult};
pub use jobpool_core::id::JobId;
pub use pool::Pool;
