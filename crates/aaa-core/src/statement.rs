//! Statement model and annotation access
//!
//! The engine only needs two things from a statement: its call shape (to
//! recognize verification calls) and its ordered annotation list. Both sit
//! behind [`AnnotatedStatement`] so any syntax tree can be plugged in; the
//! [`Statement`] type here is the in-memory implementation.

use crate::error::AnnotationError;
use std::fmt::{self, Display, Formatter};

/// Free-text comment attached to a statement
///
/// Stored without comment delimiters; [`Annotation::render`] produces the
/// line-comment form a host prints above the statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    text: String,
}

impl Annotation {
    /// Create annotation from bare text
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create annotation from a raw source comment
    ///
    /// Accepts `// text`, `# text` and `/* text */` (including `/** */`
    /// docblocks) and keeps only the trimmed body.
    #[must_use]
    pub fn from_comment(raw: &str) -> Self {
        let trimmed = raw.trim();
        let body = if let Some(rest) = trimmed.strip_prefix("//") {
            rest
        } else if let Some(rest) = trimmed.strip_prefix('#') {
            rest
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            let rest = rest.strip_suffix("*/").unwrap_or(rest);
            rest.trim_start_matches('*')
        } else {
            trimmed
        };
        Self::new(body.trim())
    }

    /// Comment text without delimiters
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line-comment rendering
    #[must_use]
    pub fn render(&self) -> String {
        format!("// {}", self.text)
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What a call is made through
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// The implicit instance reference (`$this->m()`)
    This,
    /// The enclosing class itself (`self::m()`, `static::m()`)
    SelfType,
    /// A named class (`Assert::m()`)
    Class(String),
    /// A variable or other expression (`$mock->m()`)
    Variable(String),
    /// A free function call (`m()`)
    None,
}

impl Receiver {
    /// Whether calls through this receiver target the test case itself
    #[inline]
    #[must_use]
    pub fn is_self_targeted(&self) -> bool {
        matches!(self, Receiver::This | Receiver::SelfType)
    }
}

/// Borrowed view of a statement's shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementShape<'a> {
    /// Expression statement consisting of a single call
    Call {
        /// Call receiver
        receiver: &'a Receiver,
        /// Called method name, case preserved
        method: &'a str,
    },
    /// Anything else (assignments, control flow, declarations)
    Other,
}

/// Read/write access to a statement, as provided by the host syntax tree
pub trait AnnotatedStatement {
    /// Call shape used by the verification-call scanner
    fn shape(&self) -> StatementShape<'_>;

    /// Attached annotations, in source order
    fn annotations(&self) -> &[Annotation];

    /// Replace the whole annotation list
    ///
    /// # Errors
    /// Hosts return an [`AnnotationError`] when the node cannot be rewritten.
    fn replace_annotations(&mut self, annotations: Vec<Annotation>) -> Result<(), AnnotationError>;
}

/// Statement kinds of the in-memory model
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `receiver.method(...)` as a whole statement
    Call {
        /// Call receiver
        receiver: Receiver,
        /// Method name
        method: String,
    },
    /// Any other statement, kept as source text
    Other(String),
}

/// In-memory statement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    kind: StatementKind,
    annotations: Vec<Annotation>,
}

impl Statement {
    /// Create statement of the given kind with no annotations
    #[inline]
    #[must_use]
    pub fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            annotations: Vec::new(),
        }
    }

    /// Call statement
    #[inline]
    #[must_use]
    pub fn call(receiver: Receiver, method: impl Into<String>) -> Self {
        Self::new(StatementKind::Call {
            receiver,
            method: method.into(),
        })
    }

    /// Non-call statement
    #[inline]
    #[must_use]
    pub fn other(source: impl Into<String>) -> Self {
        Self::new(StatementKind::Other(source.into()))
    }

    /// Append an annotation
    #[inline]
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a raw source comment
    #[inline]
    #[must_use]
    pub fn with_comment(self, raw: &str) -> Self {
        self.with_annotation(Annotation::from_comment(raw))
    }

    /// Statement kind
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &StatementKind {
        &self.kind
    }
}

impl AnnotatedStatement for Statement {
    fn shape(&self) -> StatementShape<'_> {
        match &self.kind {
            StatementKind::Call { receiver, method } => StatementShape::Call {
                receiver,
                method: method.as_str(),
            },
            StatementKind::Other(_) => StatementShape::Other,
        }
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn replace_annotations(&mut self, annotations: Vec<Annotation>) -> Result<(), AnnotationError> {
        self.annotations = annotations;
        Ok(())
    }
}

/// Line comments a host prints directly above the statement
#[must_use]
pub fn render_statement_comments<S: AnnotatedStatement + ?Sized>(statement: &S) -> Vec<String> {
    statement.annotations().iter().map(Annotation::render).collect()
}
