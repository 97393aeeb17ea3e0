//! Builder utilities for configuring maze solvers.
//!
//! Exposes the forking policy and the builder validation that runs before a
//! [`Solver`] and its worker pool are constructed.

use std::{num::NonZeroUsize, sync::Arc};

use rayon::ThreadPoolBuilder;

use crate::{Result, error::SolverError, solver::Solver};

/// Decides when a search task splits its frontier into sibling tasks.
///
/// # Examples
/// ```
/// use amaze_core::ForkPolicy;
///
/// assert_eq!(ForkPolicy::from_fork_after(0), ForkPolicy::Never);
///
/// let policy = ForkPolicy::from_fork_after(2);
/// assert!(!policy.should_fork(3, 2));
/// assert!(policy.should_fork(3, 3));
/// assert!(!policy.should_fork(1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkPolicy {
    /// Run the whole search in a single task.
    Never,
    /// Fork once more than this many nodes were processed since the last fork.
    After(NonZeroUsize),
}

impl ForkPolicy {
    /// Builds a policy from a `fork_after` step quota; zero disables forking.
    #[must_use]
    pub fn from_fork_after(fork_after: usize) -> Self {
        NonZeroUsize::new(fork_after).map_or(Self::Never, Self::After)
    }

    /// Returns whether a task holding `frontier_len` candidates after
    /// processing `steps` nodes since its last fork should fork now.
    #[must_use]
    pub fn should_fork(self, frontier_len: usize, steps: usize) -> bool {
        match self {
            Self::Never => false,
            Self::After(quota) => frontier_len >= 2 && steps > quota.get(),
        }
    }
}

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use amaze_core::{ForkPolicy, SolverBuilder};
///
/// let solver = SolverBuilder::new()
///     .with_fork_after(4)
///     .with_threads(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.fork_policy(), ForkPolicy::from_fork_after(4));
/// assert_eq!(solver.threads(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    fork_after: i64,
    threads: Option<usize>,
}

impl SolverBuilder {
    /// Creates a builder for a sequential search on the default pool size.
    ///
    /// # Examples
    /// ```
    /// use amaze_core::SolverBuilder;
    ///
    /// let builder = SolverBuilder::new();
    /// assert_eq!(builder.fork_after(), 0);
    /// assert_eq!(builder.threads(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of processed nodes after which a task forks.
    ///
    /// Zero disables forking; negative values are rejected by [`Self::build`].
    #[must_use]
    pub fn with_fork_after(mut self, fork_after: i64) -> Self {
        self.fork_after = fork_after;
        self
    }

    /// Returns the configured fork quota.
    #[must_use]
    pub fn fork_after(&self) -> i64 {
        self.fork_after
    }

    /// Sets the number of worker threads used by the search pool.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Returns the configured worker thread count, if any.
    #[must_use]
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validates the configuration and constructs a [`Solver`].
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidForkAfter`] for a negative fork quota,
    /// [`SolverError::InvalidThreadCount`] for a zero thread count, and
    /// [`SolverError::ThreadPool`] when the worker pool cannot be started.
    ///
    /// # Examples
    /// ```
    /// use amaze_core::{SolverBuilder, SolverError};
    ///
    /// let err = SolverBuilder::new().with_fork_after(-1).build().unwrap_err();
    /// assert_eq!(err, SolverError::InvalidForkAfter { got: -1 });
    /// ```
    pub fn build(self) -> Result<Solver> {
        let fork_after = usize::try_from(self.fork_after).map_err(|_| {
            SolverError::InvalidForkAfter {
                got: self.fork_after,
            }
        })?;

        let mut pool = ThreadPoolBuilder::new().thread_name(|index| format!("amaze-search-{index}"));
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(SolverError::InvalidThreadCount { got: threads });
            }
            pool = pool.num_threads(threads);
        }
        let pool = pool.build().map_err(|error| SolverError::ThreadPool {
            message: Arc::from(error.to_string()),
        })?;

        Ok(Solver::new(
            ForkPolicy::from_fork_after(fork_after),
            Arc::new(pool),
        ))
    }
}
