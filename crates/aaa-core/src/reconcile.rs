//! Marker reconciliation
//!
//! Ties the pipeline together for one method:
//!
//! ```text
//! body → first verification call? ─no→ Unchanged (body untouched)
//!              │yes
//!              ↓
//!        assign phases → per statement: strip markers, prepend new marker
//!              ↓
//!        any list differs from the host's? ─no→ Unchanged
//!              │yes
//!              ↓
//!        replace differing lists → Modified(layout)
//! ```
//!
//! The desired annotation list of every statement is computed before any
//! write, so an idempotent re-run never touches the host tree.

use crate::config::AaaConfig;
use crate::error::{ConfigError, ReconcileError};
use crate::marker::{strip_phase_markers, write_marker};
use crate::method::{is_test_method, TestMethod};
use crate::policy::{assign_phases, PhaseLayout};
use crate::scanner::first_verification;
use crate::statement::{AnnotatedStatement, Annotation};

/// Outcome of reconciling one method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeResult {
    /// Nothing to persist
    Unchanged,
    /// Annotations were rewritten according to the layout
    Modified(PhaseLayout),
}

impl ChangeResult {
    /// Whether the host should re-render the method
    #[inline]
    #[must_use]
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Modified(_))
    }

    /// Layout that was written, if any
    #[inline]
    #[must_use]
    pub fn layout(&self) -> Option<&PhaseLayout> {
        match self {
            Self::Modified(layout) => Some(layout),
            Self::Unchanged => None,
        }
    }
}

/// Phase classifier and annotator
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: AaaConfig,
}

impl Reconciler {
    /// Create reconciler with a validated configuration
    ///
    /// # Errors
    /// Returns the [`AaaConfig::validate`] error for unusable settings.
    pub fn new(config: AaaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AaaConfig {
        &self.config
    }

    /// Reconcile markers on a method, skipping non-test methods
    ///
    /// # Errors
    /// Propagates the host's annotation write failure.
    pub fn reconcile<M: TestMethod + ?Sized>(
        &self,
        method: &mut M,
    ) -> Result<ChangeResult, ReconcileError> {
        if !is_test_method(&*method, &self.config) {
            tracing::trace!("Skipping non-test method {}", method.name());
            return Ok(ChangeResult::Unchanged);
        }
        self.reconcile_qualified(method)
    }

    /// Reconcile a method already known to be a test method
    pub(crate) fn reconcile_qualified<M: TestMethod + ?Sized>(
        &self,
        method: &mut M,
    ) -> Result<ChangeResult, ReconcileError> {
        let result = self.reconcile_body(method.statements_mut())?;
        match &result {
            ChangeResult::Modified(layout) => {
                tracing::debug!("Marked {}: {:?}", method.name(), layout.assignments());
            }
            ChangeResult::Unchanged => {
                tracing::trace!("No marker changes for {}", method.name());
            }
        }
        Ok(result)
    }

    /// Reconcile markers on a bare statement sequence
    ///
    /// Qualification is the caller's concern here.
    ///
    /// # Errors
    /// Propagates the host's annotation write failure. Statements rewritten
    /// before the failing one keep their new annotations.
    pub fn reconcile_body<S: AnnotatedStatement>(
        &self,
        statements: &mut [S],
    ) -> Result<ChangeResult, ReconcileError> {
        let prefix = self.config.verification_prefix.as_str();
        let Some(verification) = first_verification(statements, prefix) else {
            return Ok(ChangeResult::Unchanged);
        };

        let layout = assign_phases(statements, verification, prefix);
        let rewrites = self.plan(statements, &layout);
        if rewrites.is_empty() {
            return Ok(ChangeResult::Unchanged);
        }

        for (index, annotations) in rewrites {
            statements[index]
                .replace_annotations(annotations)
                .map_err(|e| ReconcileError::annotation_write(index, e))?;
        }
        Ok(ChangeResult::Modified(layout))
    }

    /// Statements whose annotation list must change, with their new lists
    fn plan<S: AnnotatedStatement>(
        &self,
        statements: &[S],
        layout: &PhaseLayout,
    ) -> Vec<(usize, Vec<Annotation>)> {
        statements
            .iter()
            .enumerate()
            .filter_map(|(index, statement)| {
                let current = statement.annotations();
                let mut desired = strip_phase_markers(current);
                if let Some(phase) = layout.phase_of(index) {
                    desired = write_marker(self.config.labels.label(phase), desired);
                }
                (desired.as_slice() != current).then_some((index, desired))
            })
            .collect()
    }
}

/// Reconcile markers on a method with the default configuration
///
/// # Errors
/// Propagates the host's annotation write failure.
pub fn reconcile_aaa_markers<M: TestMethod + ?Sized>(
    method: &mut M,
) -> Result<ChangeResult, ReconcileError> {
    Reconciler::default().reconcile(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkerLabels;
    use crate::error::AnnotationError;
    use crate::method::Method;
    use crate::statement::{Receiver, Statement, StatementShape};

    fn texts(statement: &Statement) -> Vec<&str> {
        statement.annotations().iter().map(Annotation::text).collect()
    }

    fn two_line_test() -> Method {
        Method::new(
            "testSum",
            vec![
                Statement::other("$sum = add(1, 2);"),
                Statement::call(Receiver::This, "assertSame"),
            ],
        )
    }

    #[test]
    fn marks_two_line_test() {
        let mut method = two_line_test();
        let result = reconcile_aaa_markers(&mut method).unwrap();

        assert!(result.is_modified());
        assert_eq!(texts(&method.body()[0]), vec!["Act"]);
        assert_eq!(texts(&method.body()[1]), vec!["Assert"]);
    }

    #[test]
    fn second_run_is_unchanged() {
        let mut method = two_line_test();
        reconcile_aaa_markers(&mut method).unwrap();
        let snapshot = method.clone();

        let result = reconcile_aaa_markers(&mut method).unwrap();
        assert_eq!(result, ChangeResult::Unchanged);
        assert_eq!(method, snapshot);
    }

    #[test]
    fn non_test_method_is_skipped() {
        let mut method = Method::new(
            "helper",
            vec![
                Statement::other("$a = 1;"),
                Statement::call(Receiver::This, "assertTrue"),
            ],
        );
        let snapshot = method.clone();

        assert_eq!(reconcile_aaa_markers(&mut method).unwrap(), ChangeResult::Unchanged);
        assert_eq!(method, snapshot);
    }

    #[test]
    fn custom_labels_are_written_and_recognized() {
        let labels = MarkerLabels {
            arrange: "Arrange:".to_string(),
            act: "Act:".to_string(),
            assert: "Assert:".to_string(),
        };
        let reconciler = Reconciler::new(AaaConfig::new().with_labels(labels)).unwrap();
        let mut method = two_line_test();

        reconciler.reconcile(&mut method).unwrap();
        assert_eq!(texts(&method.body()[0]), vec!["Act:"]);
        assert_eq!(reconciler.reconcile(&mut method).unwrap(), ChangeResult::Unchanged);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AaaConfig::new().with_verification_prefix("");
        assert!(Reconciler::new(config).is_err());
    }

    #[test]
    fn shared_labels_are_rejected() {
        let labels = MarkerLabels {
            arrange: "Act".to_string(),
            ..MarkerLabels::default()
        };
        let result = Reconciler::new(AaaConfig::new().with_labels(labels));
        assert!(matches!(result, Err(ConfigError::DuplicateLabel { .. })));
    }

    struct ReadOnly {
        inner: Statement,
    }

    impl AnnotatedStatement for ReadOnly {
        fn shape(&self) -> StatementShape<'_> {
            self.inner.shape()
        }

        fn annotations(&self) -> &[Annotation] {
            self.inner.annotations()
        }

        fn replace_annotations(&mut self, _: Vec<Annotation>) -> Result<(), AnnotationError> {
            Err(AnnotationError::rejected("read-only"))
        }
    }

    #[test]
    fn write_failure_propagates_with_index() {
        let mut body = vec![
            ReadOnly {
                inner: Statement::other("$a = 1;"),
            },
            ReadOnly {
                inner: Statement::call(Receiver::This, "assertTrue"),
            },
        ];

        let err = Reconciler::default().reconcile_body(&mut body).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::annotation_write(0, AnnotationError::rejected("read-only"))
        );
    }

    #[test]
    fn read_only_body_without_drift_is_not_written() {
        let mut body = vec![
            ReadOnly {
                inner: Statement::other("$a = 1;").with_comment("// Act"),
            },
            ReadOnly {
                inner: Statement::call(Receiver::This, "assertTrue").with_comment("// Assert"),
            },
        ];

        let result = Reconciler::default().reconcile_body(&mut body).unwrap();
        assert_eq!(result, ChangeResult::Unchanged);
    }
}
