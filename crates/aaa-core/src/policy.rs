//! Role-assignment policy
//!
//! Given the index `v` of the first verification call:
//! - `v == 0`: only `Assert`
//! - `v == 1`: the lone preceding statement is the action; no setup
//! - `v > 1`: index 0 is setup, the nearest non-verification statement
//!   scanning back from `v - 1` (never reaching index 0) is the action
//!
//! The `v == 1` shape deliberately omits setup. Existing annotated suites
//! rely on two-line tests being marked `Act` / `Assert`.

use crate::phase::Phase;
use crate::scanner::is_verification_call;
use crate::statement::AnnotatedStatement;
use serde::{Deserialize, Serialize};

/// Statement indices chosen for each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseLayout {
    /// `Arrange` target
    pub setup: Option<usize>,
    /// `Act` target
    pub action: Option<usize>,
    /// `Assert` target
    pub verification: usize,
}

impl PhaseLayout {
    /// Phase assigned to a statement index, if any
    #[must_use]
    pub fn phase_of(&self, index: usize) -> Option<Phase> {
        if index == self.verification {
            Some(Phase::Verification)
        } else if self.action == Some(index) {
            Some(Phase::Action)
        } else if self.setup == Some(index) {
            Some(Phase::Setup)
        } else {
            None
        }
    }

    /// Assigned `(index, phase)` pairs in statement order
    #[must_use]
    pub fn assignments(&self) -> Vec<(usize, Phase)> {
        let mut out = Vec::with_capacity(3);
        if let Some(i) = self.setup {
            out.push((i, Phase::Setup));
        }
        if let Some(i) = self.action {
            out.push((i, Phase::Action));
        }
        out.push((self.verification, Phase::Verification));
        out.sort_unstable_by_key(|(i, _)| *i);
        out
    }
}

/// Assign phases around the verification call at `verification`
#[must_use]
pub fn assign_phases<S: AnnotatedStatement>(
    statements: &[S],
    verification: usize,
    prefix: &str,
) -> PhaseLayout {
    let (setup, action) = match verification {
        0 => (None, None),
        1 => (None, Some(0)),
        v => {
            let action = (1..v)
                .rev()
                .find(|&i| {
                    statements
                        .get(i)
                        .is_some_and(|s| !is_verification_call(s, prefix))
                });
            (Some(0), action)
        }
    };

    PhaseLayout {
        setup,
        action,
        verification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::{Receiver, Statement};

    fn plain(n: usize) -> Statement {
        Statement::other(format!("$s{n} = {n};"))
    }

    fn check(name: &str) -> Statement {
        Statement::call(Receiver::This, name)
    }

    #[test]
    fn verification_first() {
        let body = vec![check("assertTrue"), plain(1)];
        let layout = assign_phases(&body, 0, "assert");
        assert_eq!(layout.setup, None);
        assert_eq!(layout.action, None);
        assert_eq!(layout.verification, 0);
    }

    #[test]
    fn single_preceding_statement_is_action() {
        let body = vec![plain(0), check("assertTrue")];
        let layout = assign_phases(&body, 1, "assert");
        assert_eq!(layout.setup, None);
        assert_eq!(layout.action, Some(0));
        assert_eq!(layout.verification, 1);
    }

    #[test]
    fn longer_body_gets_all_three() {
        let body = vec![plain(0), plain(1), plain(2), check("assertSame")];
        let layout = assign_phases(&body, 3, "assert");
        assert_eq!(layout.setup, Some(0));
        assert_eq!(layout.action, Some(2));
        assert_eq!(layout.verification, 3);
        assert_eq!(layout.phase_of(1), None);
    }

    #[test]
    fn backward_scan_skips_verification_calls() {
        // the scan index is supplied by the caller here, so earlier checks can exist
        let body = vec![plain(0), plain(1), check("assertNull"), check("assertSame")];
        let layout = assign_phases(&body, 3, "assert");
        assert_eq!(layout.action, Some(1));
    }

    #[test]
    fn no_action_when_only_checks_precede() {
        let body = vec![plain(0), check("assertNull"), check("assertSame")];
        let layout = assign_phases(&body, 2, "assert");
        assert_eq!(layout.setup, Some(0));
        assert_eq!(layout.action, None);
    }

    #[test]
    fn assignments_are_ordered() {
        let layout = PhaseLayout {
            setup: Some(0),
            action: Some(2),
            verification: 3,
        };
        assert_eq!(
            layout.assignments(),
            vec![(0, Phase::Setup), (2, Phase::Action), (3, Phase::Verification)]
        );
    }
}
