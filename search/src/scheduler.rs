//! Fork/join executors for search branches.
//!
//! A solve runs inside one [`ForkJoinScheduler::run_scope`] call. The root
//! branch receives a [`TaskSpawner`]; every fork hands its children to that
//! spawner and keeps looping on its own frontier. Spawned tasks get a spawner
//! of their own, so forking never nests one branch's loop inside another's
//! call frame. The scope returns only after every task spawned into it,
//! directly or transitively, has finished, so no task outlives the solve.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::SolveError;
use crate::policy::{SolverPolicyV1, DEFAULT_WORKER_STACK_BYTES};

/// One unit of work. It receives the spawner it may hand further tasks to.
pub type Task<'env> = Box<dyn FnOnce(&dyn TaskSpawner<'env>) + Send + 'env>;

/// Accepts tasks for the scope that is currently running.
pub trait TaskSpawner<'env> {
    /// Queue `task`; it runs before the enclosing scope returns.
    fn spawn(&self, task: Task<'env>);
}

/// Executor seam used by the solver.
pub trait ForkJoinScheduler: Sync {
    /// Run `root` with a spawner and return once `root` and every task
    /// spawned from it, transitively, have finished.
    fn run_scope<'env, F>(&self, root: F)
    where
        F: FnOnce(&dyn TaskSpawner<'env>) + Send;
}

/// Work-stealing pool backed by rayon.
///
/// The thread waiting for the scope keeps executing queued tasks. Each task
/// returns as soon as its own loop ends, so the waiting thread's stack does
/// not grow with the number of forks.
#[derive(Debug)]
pub struct RayonScheduler {
    pool: rayon::ThreadPool,
}

impl RayonScheduler {
    /// Build a pool sized by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ThreadPool`] if the pool cannot be created.
    pub fn from_policy(policy: &SolverPolicyV1) -> Result<Self, SolveError> {
        let mut builder = rayon::ThreadPoolBuilder::new()
            .thread_name(|i| format!("amazed-branch-{i}"))
            .stack_size(policy.worker_stack_bytes.unwrap_or(DEFAULT_WORKER_STACK_BYTES));
        if let Some(threads) = policy.worker_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().map_err(|e| SolveError::ThreadPool {
            detail: e.to_string(),
        })?;
        Ok(Self { pool })
    }

    /// Number of worker threads.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl<'env: 'scope, 'scope> TaskSpawner<'env> for rayon::Scope<'scope> {
    fn spawn(&self, task: Task<'env>) {
        rayon::Scope::spawn(self, move |scope| task(scope as &dyn TaskSpawner<'env>));
    }
}

impl ForkJoinScheduler for RayonScheduler {
    fn run_scope<'env, F>(&self, root: F)
    where
        F: FnOnce(&dyn TaskSpawner<'env>) + Send,
    {
        // rayon::scope re-raises a task panic here, after all tasks ended.
        self.pool
            .install(move || rayon::scope(move |scope| root(scope as &dyn TaskSpawner<'env>)));
    }
}

/// Runs everything on the calling thread: `root` first, then queued tasks
/// in the order they were spawned.
///
/// Deterministic, so the path found depends only on the maze and the policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

struct Deferred<'env> {
    queue: RefCell<VecDeque<Task<'env>>>,
}

impl<'env> TaskSpawner<'env> for Deferred<'env> {
    fn spawn(&self, task: Task<'env>) {
        self.queue.borrow_mut().push_back(task);
    }
}

impl ForkJoinScheduler for InlineScheduler {
    fn run_scope<'env, F>(&self, root: F)
    where
        F: FnOnce(&dyn TaskSpawner<'env>) + Send,
    {
        let deferred = Deferred {
            queue: RefCell::new(VecDeque::new()),
        };
        let spawner = &deferred as &dyn TaskSpawner<'env>;
        root(spawner);
        loop {
            let next = deferred.queue.borrow_mut().pop_front();
            let Some(task) = next else {
                break;
            };
            task(spawner);
        }
    }
}
