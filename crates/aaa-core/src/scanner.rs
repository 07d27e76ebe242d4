//! Verification-call scanner
//!
//! A verification call is a top-level call through `$this` or `self`/`static`
//! whose method name starts with the verification prefix (case-sensitive).
//! Nested blocks are never inspected.

use crate::statement::{AnnotatedStatement, StatementShape};

/// Whether a single statement is a verification call
#[must_use]
pub fn is_verification_call<S: AnnotatedStatement + ?Sized>(statement: &S, prefix: &str) -> bool {
    match statement.shape() {
        StatementShape::Call { receiver, method } => {
            receiver.is_self_targeted() && method.starts_with(prefix)
        }
        StatementShape::Other => false,
    }
}

/// Index of the first verification call, scanning in order
///
/// `None` is the normal answer for bodies without assertions.
#[must_use]
pub fn first_verification<S: AnnotatedStatement>(statements: &[S], prefix: &str) -> Option<usize> {
    statements
        .iter()
        .position(|s| is_verification_call(s, prefix))
}
