//! Testing utilities for the AAA markers workspace
//!
//! Shared statement builders, fixtures, and layout assertions.

#![allow(missing_docs)]

use aaa_core::{AnnotatedStatement, Annotation, Method, Receiver, Statement};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per process
///
/// Honors `RUST_LOG`, defaulting to `aaa_core=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aaa_core=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Plain statement (`$x = ...;`)
pub fn plain(source: &str) -> Statement {
    Statement::other(source)
}

/// `$this->name(...)`
pub fn this_call(name: &str) -> Statement {
    Statement::call(Receiver::This, name)
}

/// `self::name(...)`
pub fn self_call(name: &str) -> Statement {
    Statement::call(Receiver::SelfType, name)
}

/// `Class::name(...)`
pub fn class_call(class: &str, name: &str) -> Statement {
    Statement::call(Receiver::Class(class.to_string()), name)
}

/// `$var->name(...)`
pub fn var_call(var: &str, name: &str) -> Statement {
    Statement::call(Receiver::Variable(var.to_string()), name)
}

/// Test method named `testExample` with the given body
pub fn test_method(body: Vec<Statement>) -> Method {
    Method::new("testExample", body)
}

/// Annotation texts per statement
pub fn marker_texts<S: AnnotatedStatement>(statements: &[S]) -> Vec<Vec<String>> {
    statements
        .iter()
        .map(|s| s.annotations().iter().map(|a| a.text().to_string()).collect())
        .collect()
}

/// Indices of statements whose annotations include `text`
pub fn carriers_of<S: AnnotatedStatement>(statements: &[S], text: &str) -> Vec<usize> {
    statements
        .iter()
        .enumerate()
        .filter(|(_, s)| s.annotations().iter().any(|a| a.text() == text))
        .map(|(i, _)| i)
        .collect()
}

/// Annotation list from raw comments
pub fn comments(raw: &[&str]) -> Vec<Annotation> {
    raw.iter().map(|c| Annotation::from_comment(c)).collect()
}

/// Four-statement fixture: setup, noise, action, assertion
pub fn arrange_act_assert_fixture() -> Method {
    test_method(vec![
        plain("$repo = new InMemoryRepository();"),
        plain("$user = new User('ada');"),
        plain("$repo->save($user);"),
        this_call("assertCount"),
    ])
}
