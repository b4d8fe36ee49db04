use std::{fmt, str::FromStr};

use crate::{Error, Formula, registry};

/// Stable identifier of a registered formula.
///
/// Identifiers display and parse as `"f0"`..`"f8"`. Parsing is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FormulaId {
    F0,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
}

impl FormulaId {
    /// Every identifier, in registration order.
    pub const ALL: [Self; 9] = [
        Self::F0,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
    ];

    /// Returns the identifier as it is registered, e.g. `"f3"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F0 => "f0",
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::F3 => "f3",
            Self::F4 => "f4",
            Self::F5 => "f5",
            Self::F6 => "f6",
            Self::F7 => "f7",
            Self::F8 => "f8",
        }
    }

    /// Returns the formula registered under this identifier.
    #[must_use]
    pub fn formula(self) -> &'static Formula {
        &registry::all()[self as usize]
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormulaId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::UnknownFormula { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for id in FormulaId::ALL {
            assert_eq!(id.to_string().parse::<FormulaId>(), Ok(id));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "F1".parse::<FormulaId>(),
            Err(Error::UnknownFormula {
                name: "F1".to_owned()
            })
        );
        assert!("f9".parse::<FormulaId>().is_err());
        assert!(" f1".parse::<FormulaId>().is_err());
        assert!("".parse::<FormulaId>().is_err());
    }

    #[test]
    fn formula_matches_id() {
        for id in FormulaId::ALL {
            assert_eq!(id.formula().id(), id);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_registered_name() {
        let json = serde_json::to_string(&FormulaId::F7).unwrap();
        assert_eq!(json, "\"f7\"");

        let id: FormulaId = serde_json::from_str("\"f2\"").unwrap();
        assert_eq!(id, FormulaId::F2);
    }
}
