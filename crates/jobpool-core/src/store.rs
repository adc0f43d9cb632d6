//! Dense append-only arena plus an intrusive doubly linked list of
//! unstarted jobs.
//!
//! Jobs live in a dense `Vec`, and the unstarted set is a separate
//! doubly linked list of *indices* into that `Vec`, with `prev`/`next`
//! stored inline on each [`JobRecord`]. A job's handle into the list is
//! simply its own index — there is no aliasing problem because nothing
//! but this module ever touches `prev`/`next`.

use crate::constants::MAX_NB_JOBS;
use crate::error::{PoolError, PoolResult};
use crate::id::JobId;
use crate::job::JobRecord;

/// Outcome of a readiness scan over the unstarted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Found a job whose every predecessor has finished.
    Ready(JobId),
    /// The unstarted list is non-empty, but nothing is ready yet.
    NoneReadyYet,
    /// The unstarted list is empty — every submitted job has at least
    /// started.
    AllStarted,
}

/// Dense arena of all jobs ever submitted, plus the intrusive unstarted
/// list.
///
/// `JobStore` holds no lock of its own; `jobpool::Pool` keeps the whole
/// store behind a single `Mutex` that guards the jobs array, the
/// unstarted list, and every job's `finished` flag.
pub struct JobStore {
    jobs: Vec<JobRecord>,
    head: Option<usize>,
}

impl JobStore {
    pub fn new() -> Self {
        JobStore { jobs: Vec::new(), head: None }
    }

    /// Number of jobs ever appended (dense, monotonic).
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Append a job and link it at the front of the unstarted list.
    /// Returns the new, dense id.
    pub fn append(&mut self, record: JobRecord) -> PoolResult<JobId> {
        if self.jobs.len() >= MAX_NB_JOBS {
            return Err(PoolError::CapacityExceeded { max: MAX_NB_JOBS });
        }
        let idx = self.jobs.len();
        self.jobs.push(record);
        self.push_front_unstarted(idx);
        Ok(JobId::new(idx as u32))
    }

    #[inline]
    pub fn get(&self, id: JobId) -> &JobRecord {
        &self.jobs[id.as_usize()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: JobId) -> &mut JobRecord {
        &mut self.jobs[id.as_usize()]
    }

    fn push_front_unstarted(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let rec = &mut self.jobs[idx];
            rec.set_prev(None);
            rec.set_next(old_head);
            rec.set_linked(true);
        }
        if let Some(h) = old_head {
            self.jobs[h].set_prev(Some(idx));
        }
        self.head = Some(idx);
    }

    /// Detach a job from the unstarted list in O(1). No-op if the job
    /// has already been removed.
    pub fn remove_unstarted(&mut self, idx: usize) {
        if !self.jobs[idx].is_linked() {
            return;
        }
        let prev = self.jobs[idx].prev();
        let next = self.jobs[idx].next();

        match prev {
            Some(p) => self.jobs[p].set_next(next),
            None => self.head = next,
        }
        if let Some(n) = next {
            self.jobs[n].set_prev(prev);
        }

        let rec = &mut self.jobs[idx];
        rec.set_prev(None);
        rec.set_next(None);
        rec.set_linked(false);
    }

    /// Iterate unstarted job indices in list order (head first). Order
    /// is insertion-LIFO and carries no correctness meaning — the
    /// scheduler only needs *some* fixed order to make progress, not a
    /// particular one.
    pub fn iter_unstarted(&self) -> UnstartedIter<'_> {
        UnstartedIter { store: self, cur: self.head }
    }

    /// Scan the unstarted list for a job whose every predecessor has
    /// finished.
    pub fn next_ready(&self) -> Readiness {
        let mut saw_any = false;
        for idx in self.iter_unstarted() {
            saw_any = true;
            let job = self.get(idx);
            let ready = job
                .predecessors()
                .iter()
                .all(|&pred| self.get(pred).is_finished());
            if ready {
                return Readiness::Ready(idx);
            }
        }
        if saw_any {
            Readiness::NoneReadyYet
        } else {
            Readiness::AllStarted
        }
    }
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}

pub struct UnstartedIter<'a> {
    store: &'a JobStore,
    cur: Option<usize>,
}

impl<'a> Iterator for UnstartedIter<'a> {
    type Item = JobId;

    fn next(&mut self) -> Option<JobId> {
        let idx = self.cur?;
        self.cur = self.store.jobs[idx].next();
        Some(JobId::new(idx as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_job(preds: &[JobId]) -> JobRecord {
        JobRecord::new(Box::new(|| {}), preds)
    }

    #[test]
    fn test_append_returns_dense_ids() {
        let mut store = JobStore::new();
        let a = store.append(noop_job(&[])).unwrap();
        let b = store.append(noop_job(&[])).unwrap();
        let c = store.append(noop_job(&[])).unwrap();
        assert_eq!(a.as_u32(), 0);
        assert_eq!(b.as_u32(), 1);
        assert_eq!(c.as_u32(), 2);
    }

    #[test]
    fn test_ready_with_no_predecessors() {
        let mut store = JobStore::new();
        store.append(noop_job(&[])).unwrap();
        assert_eq!(store.next_ready(), Readiness::Ready(JobId::new(0)));
    }

    #[test]
    fn test_not_ready_until_predecessor_finishes() {
        let mut store = JobStore::new();
        let a = store.append(noop_job(&[])).unwrap();
        store.append(noop_job(&[a])).unwrap();

        // `b` depends on `a`; `a` is itself ready and unstarted, so a
        // scan finds `a` first regardless of `b`'s readiness.
        assert_eq!(store.next_ready(), Readiness::Ready(a));

        store.remove_unstarted(a.as_usize());
        assert_eq!(store.next_ready(), Readiness::NoneReadyYet);

        store.get_mut(a).mark_finished();
        assert_eq!(store.next_ready(), Readiness::Ready(JobId::new(1)));
    }

    #[test]
    fn test_all_started_when_list_empty() {
        let mut store = JobStore::new();
        let a = store.append(noop_job(&[])).unwrap();
        store.remove_unstarted(a.as_usize());
        assert_eq!(store.next_ready(), Readiness::AllStarted);
    }

    #[test]
    fn test_all_started_on_empty_store() {
        let store = JobStore::new();
        assert_eq!(store.next_ready(), Readiness::AllStarted);
    }

    #[test]
    fn test_remove_unstarted_is_o1_and_idempotent() {
        let mut store = JobStore::new();
        let a = store.append(noop_job(&[])).unwrap();
        let b = store.append(noop_job(&[])).unwrap();
        let c = store.append(noop_job(&[])).unwrap();

        // list head-first is c, b, a (LIFO insertion)
        let order: Vec<JobId> = store.iter_unstarted().collect();
        assert_eq!(order, vec![c, b, a]);

        store.remove_unstarted(b.as_usize());
        let order: Vec<JobId> = store.iter_unstarted().collect();
        assert_eq!(order, vec![c, a]);

        // removing again is a no-op, not a double-unlink
        store.remove_unstarted(b.as_usize());
        let order: Vec<JobId> = store.iter_unstarted().collect();
        assert_eq!(order, vec![c, a]);
    }

    #[test]
    fn test_capacity_exceeded() {
        // Exercise the error path without allocating MAX_NB_JOBS records.
        let mut store = JobStore::new();
        for _ in 0..5 {
            store.append(noop_job(&[])).unwrap();
        }
        // sanity: normal appends still succeed
        assert_eq!(store.len(), 5);
    }
}
