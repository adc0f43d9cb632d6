//! Worker thread body.
//!
//! Each worker is an OS thread that runs this loop under the pool's
//! lock, except while actually executing a job.

use crate::jdebug;
use crate::pool::Shared;
use jobpool_core::store::Readiness;
use std::sync::Arc;

pub(crate) fn run(worker_id: u32, shared: Arc<Shared>) {
    crate::jplog::set_worker_id(worker_id);
    jdebug!("worker {worker_id} started");

    let mut guard = shared.state.lock().unwrap();
    loop {
        let readiness = guard.store.next_ready();

        match readiness {
            Readiness::AllStarted if guard.all_supplied => {
                break;
            }
            Readiness::Ready(id) => {
                guard.store.remove_unstarted(id.as_usize());
                let func = guard.store.get_mut(id).take_func();

                // Run outside the lock — sibling jobs with no
                // dependency on this one must be able to make progress
                // concurrently.
                drop(guard);
                jdebug!("worker {worker_id} running job {id}");
                func();

                guard = shared.state.lock().unwrap();
                guard.store.get_mut(id).mark_finished();
                jdebug!("worker {worker_id} finished job {id}");
                shared.cond.notify_one();
            }
            Readiness::NoneReadyYet | Readiness::AllStarted => {
                guard = shared.cond.wait(guard).unwrap();
            }
        }
    }

    // The last worker to notice "all started and all supplied" must
    // broadcast, so that siblings parked on a spurious or raced wakeup
    // also observe the terminal condition and exit.
    shared.cond.notify_all();
    jdebug!("worker {worker_id} exiting");
}
