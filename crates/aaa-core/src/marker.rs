//! Phase-marker stripping and writing
//!
//! Every run strips all phase markers before writing fresh ones, so markers
//! never accumulate and a marker whose statement changed role never lingers.
//! Both operations are pure over annotation lists; the reconciler decides
//! whether the result differs from what the host already has.

use crate::phase::Phase;
use crate::statement::Annotation;
use once_cell::sync::Lazy;
use regex::Regex;

/// Phase keywords as whole words, any case
static PHASE_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    let keywords = Phase::ALL.map(Phase::keyword).join("|");
    Regex::new(&format!(r"(?i)\b(?:{keywords})\b")).expect("phase keyword pattern is valid")
});

/// Whether comment text reads as a phase marker
///
/// Matches on whole words so that ordinary prose such as `refactor` or
/// `exact` is not mistaken for an `act` marker.
#[inline]
#[must_use]
pub fn is_phase_marker_text(text: &str) -> bool {
    PHASE_KEYWORD.is_match(text)
}

/// Whether the annotation is a phase marker
#[inline]
#[must_use]
pub fn is_phase_marker(annotation: &Annotation) -> bool {
    is_phase_marker_text(annotation.text())
}

/// Annotations left after removing every phase marker, order preserved
#[must_use]
pub fn strip_phase_markers(annotations: &[Annotation]) -> Vec<Annotation> {
    annotations
        .iter()
        .filter(|a| !is_phase_marker(a))
        .cloned()
        .collect()
}

/// Prepend a marker to an already-stripped annotation list
#[must_use]
pub fn write_marker(label: &str, mut remaining: Vec<Annotation>) -> Vec<Annotation> {
    remaining.insert(0, Annotation::new(label));
    remaining
}
