//! Test-method handles
//!
//! The host hands the engine a method through [`TestMethod`]. Statements are
//! exposed as a mutable slice, so the engine can rewrite annotations but can
//! never add, drop or reorder statements.

use crate::config::AaaConfig;
use crate::statement::{AnnotatedStatement, Statement};

/// Method declaration as seen by the reconciler
pub trait TestMethod {
    /// Statement type of the host syntax tree
    type Statement: AnnotatedStatement;

    /// Method name
    fn name(&self) -> &str;

    /// Doc comment text, if any
    fn doc(&self) -> Option<&str>;

    /// Top-level statements of the body, annotations writable
    fn statements_mut(&mut self) -> &mut [Self::Statement];
}

/// Whether a method qualifies as a test method
///
/// A method qualifies when its name starts with the configured prefix or its
/// doc comment carries the configured tag as a standalone word
/// (`@testdox` is not `@test`).
#[must_use]
pub fn is_test_method<M: TestMethod + ?Sized>(method: &M, config: &AaaConfig) -> bool {
    if method.name().starts_with(&config.test_name_prefix) {
        return true;
    }
    method
        .doc()
        .is_some_and(|doc| has_tag(doc, &config.test_doc_tag))
}

fn has_tag(doc: &str, tag: &str) -> bool {
    doc.match_indices(tag).any(|(start, _)| {
        let end = start + tag.len();
        !doc[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '-')
    })
}

/// In-memory method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    doc: Option<String>,
    body: Vec<Statement>,
}

impl Method {
    /// Create method with body
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, body: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            body,
        }
    }

    /// Attach a doc comment
    #[inline]
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Body statements
    #[inline]
    #[must_use]
    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

impl TestMethod for Method {
    type Statement = Statement;

    fn name(&self) -> &str {
        &self.name
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn statements_mut(&mut self) -> &mut [Statement] {
        &mut self.body
    }
}
