//! Test phases and the phase-marker vocabulary

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Role a statement plays in the Arrange/Act/Assert layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Setup (`Arrange`)
    Setup,
    /// Action under test (`Act`)
    Action,
    /// First verification call (`Assert`)
    Verification,
}

impl Phase {
    /// All phases in layout order
    pub const ALL: [Phase; 3] = [Phase::Setup, Phase::Action, Phase::Verification];

    /// Lowercase keyword the marker stripper looks for
    #[inline]
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Phase::Setup => "arrange",
            Phase::Action => "act",
            Phase::Verification => "assert",
        }
    }

    /// Marker text written for this phase by default
    #[inline]
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Phase::Setup => "Arrange",
            Phase::Action => "Act",
            Phase::Verification => "Assert",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Action => "action",
            Phase::Verification => "verification",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_contain_their_keyword() {
        for phase in Phase::ALL {
            assert_eq!(phase.default_label().to_lowercase(), phase.keyword());
        }
    }

    #[test]
    fn display_is_lowercase_role() {
        assert_eq!(Phase::Setup.to_string(), "setup");
        assert_eq!(Phase::Verification.to_string(), "verification");
    }
}
