//! Job record: predecessors, the boxed callable, and the intrusive
//! unstarted-list links.

use crate::constants::MAX_NB_JOB_DEPENDENCIES;
use crate::id::JobId;

/// A single job owned by a [`crate::JobStore`].
///
/// Every field here is read and written only while the owning pool's
/// lock is held, so nothing needs its own atomic or interior
/// mutability; the record is just a plain `Mutex`-guarded value.
pub struct JobRecord {
    /// The callable, taken (and run outside the lock) exactly once.
    func: Option<Box<dyn FnOnce() + Send>>,

    /// Predecessor ids, left-padded with `JobId::NONE` past `n_preds`.
    preds: [JobId; MAX_NB_JOB_DEPENDENCIES],

    /// Number of valid entries in `preds`.
    n_preds: u8,

    /// Set once, after `func` has returned.
    finished: bool,

    /// Intrusive doubly linked list links into the unstarted set.
    /// Meaningless once `linked` is false.
    prev: Option<usize>,
    next: Option<usize>,

    /// Whether this job is currently linked into the unstarted list.
    /// `prev`/`next` alone can't tell a lone list member (both `None`)
    /// apart from a detached one, so this is tracked explicitly.
    linked: bool,
}

impl JobRecord {
    pub fn new(
        func: Box<dyn FnOnce() + Send>,
        preds: &[JobId],
    ) -> Self {
        debug_assert!(preds.len() <= MAX_NB_JOB_DEPENDENCIES);
        let mut arr = [JobId::NONE; MAX_NB_JOB_DEPENDENCIES];
        arr[..preds.len()].copy_from_slice(preds);
        JobRecord {
            func: Some(func),
            preds: arr,
            n_preds: preds.len() as u8,
            finished: false,
            prev: None,
            next: None,
            linked: false,
        }
    }

    /// Predecessor ids declared by this job.
    #[inline]
    pub fn predecessors(&self) -> &[JobId] {
        &self.preds[..self.n_preds as usize]
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn mark_finished(&mut self) {
        debug_assert!(!self.finished, "a job's finished flag must transition false->true exactly once");
        self.finished = true;
    }

    /// Take the callable out, to be run outside the pool lock. Panics
    /// if called twice for the same job (the scheduler only ever calls
    /// this once per ready job, right after removing it from the
    /// unstarted list).
    #[inline]
    pub fn take_func(&mut self) -> Box<dyn FnOnce() + Send> {
        self.func
            .take()
            .expect("job function taken more than once")
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<usize> {
        self.prev
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<usize> {
        self.next
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, prev: Option<usize>) {
        self.prev = prev;
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<usize>) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn is_linked(&self) -> bool {
        self.linked
    }

    #[inline]
    pub(crate) fn set_linked(&mut self, linked: bool) {
        self.linked = linked;
    }
}
