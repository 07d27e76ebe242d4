//! Reconciliation configuration
//!
//! Defaults match the PHPUnit conventions: `assert*` verification calls,
//! `test*` method names, `@test` doc tags and `Arrange`/`Act`/`Assert`
//! marker text.

use crate::error::ConfigError;
use crate::marker::is_phase_marker_text;
use crate::phase::Phase;
use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AaaConfig {
    /// Case-sensitive method-name prefix of verification calls
    pub verification_prefix: String,
    /// Method-name prefix that marks a test method
    pub test_name_prefix: String,
    /// Doc-comment tag that marks a test method
    pub test_doc_tag: String,
    /// Marker text written per phase
    pub labels: MarkerLabels,
}

impl AaaConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With verification prefix
    #[inline]
    #[must_use]
    pub fn with_verification_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.verification_prefix = prefix.into();
        self
    }

    /// With test name prefix
    #[inline]
    #[must_use]
    pub fn with_test_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.test_name_prefix = prefix.into();
        self
    }

    /// With test doc tag
    #[inline]
    #[must_use]
    pub fn with_test_doc_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_doc_tag = tag.into();
        self
    }

    /// With marker labels
    #[inline]
    #[must_use]
    pub fn with_labels(mut self, labels: MarkerLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Decode and validate a TOML document
    ///
    /// Missing keys fall back to defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and the
    /// [`AaaConfig::validate`] errors for bad values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration keeps reconciliation idempotent
    ///
    /// # Errors
    /// Rejects empty prefixes or tags, labels the marker stripper would not
    /// remove on a later run, and labels shared by two phases.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verification_prefix.is_empty() {
            return Err(ConfigError::EmptyVerificationPrefix);
        }
        if self.test_name_prefix.is_empty() {
            return Err(ConfigError::EmptyTestNamePrefix);
        }
        if self.test_doc_tag.is_empty() {
            return Err(ConfigError::EmptyTestDocTag);
        }
        for phase in Phase::ALL {
            let label = self.labels.label(phase);
            if !is_phase_marker_text(label) {
                return Err(ConfigError::UnstrippableLabel {
                    phase,
                    label: label.to_string(),
                });
            }
        }
        for (i, phase) in Phase::ALL.iter().enumerate() {
            let label = self.labels.label(*phase);
            if Phase::ALL[..i].iter().any(|p| self.labels.label(*p) == label) {
                return Err(ConfigError::DuplicateLabel {
                    phase: *phase,
                    label: label.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for AaaConfig {
    fn default() -> Self {
        Self {
            verification_prefix: "assert".to_string(),
            test_name_prefix: "test".to_string(),
            test_doc_tag: "@test".to_string(),
            labels: MarkerLabels::default(),
        }
    }
}

/// Marker text per phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerLabels {
    /// Setup marker
    pub arrange: String,
    /// Action marker
    pub act: String,
    /// Verification marker
    pub assert: String,
}

impl MarkerLabels {
    /// Label for phase
    #[inline]
    #[must_use]
    pub fn label(&self, phase: Phase) -> &str {
        match phase {
            Phase::Setup => &self.arrange,
            Phase::Action => &self.act,
            Phase::Verification => &self.assert,
        }
    }
}

impl Default for MarkerLabels {
    fn default() -> Self {
        Self {
            arrange: Phase::Setup.default_label().to_string(),
            act: Phase::Action.default_label().to_string(),
            assert: Phase::Verification.default_label().to_string(),
        }
    }
}
