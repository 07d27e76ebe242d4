//! AAA Core - Arrange/Act/Assert phase markers
//!
//! Classifies the top-level statements of a test method into setup, action
//! and verification phases and keeps `// Arrange`, `// Act` and `// Assert`
//! marker comments in sync with that classification.
//!
//! # Pipeline
//!
//! ```text
//! statements → scanner (first assert*) → policy (PhaseLayout)
//!                                            ↓
//!              host tree ← writer ← stripper (per statement)
//! ```
//!
//! Parsing and printing source belong to the host, which plugs its syntax
//! tree in through [`AnnotatedStatement`] and [`TestMethod`].
//!
//! # Example
//!
//! ```rust
//! use aaa_core::{reconcile_aaa_markers, Method, Receiver, Statement};
//!
//! let mut method = Method::new(
//!     "testAddsNumbers",
//!     vec![
//!         Statement::other("$calculator = new Calculator();"),
//!         Statement::other("$sum = $calculator->add(1, 2);"),
//!         Statement::call(Receiver::This, "assertSame"),
//!     ],
//! );
//!
//! let result = reconcile_aaa_markers(&mut method).unwrap();
//! assert!(result.is_modified());
//!
//! // Running again changes nothing
//! let again = reconcile_aaa_markers(&mut method).unwrap();
//! assert!(!again.is_modified());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod batch;
pub mod config;
pub mod error;
pub mod marker;
pub mod method;
pub mod phase;
pub mod policy;
pub mod reconcile;
pub mod scanner;
pub mod statement;

// Re-exports for convenience
pub use batch::{reconcile_all, BatchFailure, BatchReport};
pub use config::{AaaConfig, MarkerLabels};
pub use error::{AnnotationError, ConfigError, ReconcileError};
pub use method::{is_test_method, Method, TestMethod};
pub use phase::Phase;
pub use policy::PhaseLayout;
pub use reconcile::{reconcile_aaa_markers, ChangeResult, Reconciler};
pub use statement::{
    render_statement_comments, AnnotatedStatement, Annotation, Receiver, Statement,
    StatementKind, StatementShape,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for hosts integrating the reconciler
    pub use crate::{
        AaaConfig, AnnotatedStatement, Annotation, ChangeResult, Phase, PhaseLayout, Reconciler,
        StatementShape, TestMethod,
    };
}
