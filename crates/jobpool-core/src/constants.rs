//! Contract limits shared by `jobpool-core` and `jobpool`. These are
//! hard contract limits, not tunables.

/// Maximum number of predecessor ids a single job may declare.
pub const MAX_NB_JOB_DEPENDENCIES: usize = 10;

/// Hard cap on the number of worker threads a pool may spawn.
pub const MAX_NB_THREADS: usize = 64;

/// Hard cap on the number of jobs a single pool may accept over its
/// lifetime. The dense arena never shrinks, so this also bounds memory.
pub const MAX_NB_JOBS: usize = 1024 * 10_000;
