//! Error types for AAA marker reconciliation
//!
//! The engine itself has no failure modes of its own: bodies without a
//! verification call, empty bodies and already-annotated bodies are all
//! ordinary outcomes. Errors only come from:
//! - Host annotation primitives that refuse a write
//! - Invalid configuration values

use crate::phase::Phase;

/// Errors raised by a host's annotation write primitive
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    /// The host refused to replace the annotation list
    #[error("annotation write rejected: {0}")]
    WriteRejected(String),

    /// The statement no longer belongs to a syntax tree
    #[error("statement is detached from its syntax tree")]
    Detached,
}

impl AnnotationError {
    /// Create a write-rejected error
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::WriteRejected(reason.into())
    }
}

/// Errors during reconciliation of a single method body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// Writing the reconciled annotation list failed
    #[error("failed to write annotations on statement {index}: {source}")]
    AnnotationWrite {
        /// Statement position in the method body
        index: usize,
        /// Host error
        #[source]
        source: AnnotationError,
    },
}

impl ReconcileError {
    /// Create annotation write error for statement index
    pub fn annotation_write(index: usize, source: AnnotationError) -> Self {
        Self::AnnotationWrite { index, source }
    }
}

/// Invalid configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Verification prefix must not be empty
    #[error("verification prefix must not be empty")]
    EmptyVerificationPrefix,

    /// Test name prefix must not be empty
    #[error("test name prefix must not be empty")]
    EmptyTestNamePrefix,

    /// Test doc tag must not be empty
    #[error("test doc tag must not be empty")]
    EmptyTestDocTag,

    /// A marker label the stripper would not remove on the next run
    #[error("label '{label}' for {phase} is not recognized as a phase marker")]
    UnstrippableLabel {
        /// Phase the label belongs to
        phase: Phase,
        /// Offending label
        label: String,
    },

    /// Two phases would write the same marker
    #[error("label '{label}' for {phase} is already used by another phase")]
    DuplicateLabel {
        /// Later phase reusing the label
        phase: Phase,
        /// Shared label
        label: String,
    },

    /// TOML decoding failed
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_error_display() {
        let err = AnnotationError::rejected("read-only node");
        assert_eq!(err.to_string(), "annotation write rejected: read-only node");
    }

    #[test]
    fn reconcile_error_display() {
        let err = ReconcileError::annotation_write(3, AnnotationError::Detached);
        assert_eq!(
            err.to_string(),
            "failed to write annotations on statement 3: statement is detached from its syntax tree"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::UnstrippableLabel {
            phase: Phase::Action,
            label: "Do".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "label 'Do' for action is not recognized as a phase marker"
        );

        let err = ConfigError::DuplicateLabel {
            phase: Phase::Verification,
            label: "Act".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "label 'Act' for verification is already used by another phase"
        );
    }
}
