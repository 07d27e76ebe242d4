//! Parallel reconciliation across many methods
//!
//! Method bodies are disjoint, so each one is reconciled on its own rayon
//! task with no shared mutable state. A failing method is recorded in the
//! report and never stops its siblings.

use crate::config::AaaConfig;
use crate::error::{ConfigError, ReconcileError};
use crate::method::{is_test_method, TestMethod};
use crate::reconcile::{ChangeResult, Reconciler};
use rayon::prelude::*;

/// Method that could not be reconciled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Position in the input slice
    pub index: usize,
    /// Method name
    pub method: String,
    /// Underlying error
    pub error: ReconcileError,
}

/// Summary of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Methods whose annotations were rewritten
    pub modified: Vec<usize>,
    /// Test methods that needed no change
    pub unchanged: usize,
    /// Methods that are not test methods
    pub skipped: usize,
    /// Methods whose rewrite failed
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Total methods seen
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.modified.len() + self.unchanged + self.skipped + self.failures.len()
    }

    /// Whether every method was processed without error
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

enum Outcome {
    Skipped,
    Unchanged,
    Modified,
    Failed(BatchFailure),
}

impl Reconciler {
    /// Reconcile every method in parallel
    pub fn reconcile_all<M>(&self, methods: &mut [M]) -> BatchReport
    where
        M: TestMethod + Send,
    {
        let outcomes: Vec<Outcome> = methods
            .par_iter_mut()
            .enumerate()
            .map(|(index, method)| {
                if !is_test_method(&*method, self.config()) {
                    return Outcome::Skipped;
                }
                match self.reconcile_qualified(method) {
                    Ok(ChangeResult::Modified(_)) => Outcome::Modified,
                    Ok(ChangeResult::Unchanged) => Outcome::Unchanged,
                    Err(error) => Outcome::Failed(BatchFailure {
                        index,
                        method: method.name().to_string(),
                        error,
                    }),
                }
            })
            .collect();

        let mut report = BatchReport::default();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Outcome::Skipped => report.skipped += 1,
                Outcome::Unchanged => report.unchanged += 1,
                Outcome::Modified => report.modified.push(index),
                Outcome::Failed(failure) => {
                    tracing::warn!("Failed to reconcile {}: {}", failure.method, failure.error);
                    report.failures.push(failure);
                }
            }
        }

        tracing::info!(
            "Reconciled {} methods: {} modified, {} unchanged, {} skipped, {} failed",
            report.total(),
            report.modified.len(),
            report.unchanged,
            report.skipped,
            report.failures.len()
        );
        report
    }
}

/// Validate `config` and reconcile every method in parallel
///
/// # Errors
/// Returns the configuration error before touching any method.
pub fn reconcile_all<M>(methods: &mut [M], config: AaaConfig) -> Result<BatchReport, ConfigError>
where
    M: TestMethod + Send,
{
    let reconciler = Reconciler::new(config)?;
    Ok(reconciler.reconcile_all(methods))
}
