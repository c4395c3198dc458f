use std::fmt;

/// Why a value is absent.
///
/// Both kinds behave identically while chaining. The kind is carried along
/// so callers can still tell a lookup that found nothing apart from a slot
/// that was never filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Absent {
    /// Not found.
    #[default]
    Missing,
    /// Not initialized.
    Unset,
}

impl Absent {
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::Unset => f.write_str("unset"),
        }
    }
}
