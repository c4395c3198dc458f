use crate::{absent::Absent, error::AbsentError};

/// A value that is either present or absent for a known reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Held<T> {
    Present(T),
    Absent(Absent),
}

impl<T> Held<T> {
    pub const fn missing() -> Self {
        Self::Absent(Absent::Missing)
    }

    pub const fn unset() -> Self {
        Self::Absent(Absent::Unset)
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    /// The absence kind, or `None` if a value is present.
    pub const fn absence(&self) -> Option<Absent> {
        match self {
            Self::Present(_) => None,
            Self::Absent(kind) => Some(*kind),
        }
    }

    pub const fn as_ref(&self) -> Held<&T> {
        match self {
            Self::Present(value) => Held::Present(value),
            Self::Absent(kind) => Held::Absent(*kind),
        }
    }

    pub fn map<Fn, U>(self, map: Fn) -> Held<U>
    where
        Fn: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Held::Present(map(value)),
            Self::Absent(kind) => Held::Absent(kind),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent(_) => fallback,
        }
    }

    pub fn into_result(self) -> Result<T, AbsentError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent(kind) => Err(AbsentError::new(kind)),
        }
    }
}

impl<T> Default for Held<T> {
    fn default() -> Self {
        Self::unset()
    }
}

impl<T> From<Option<T>> for Held<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::missing(),
        }
    }
}

impl<T> From<Absent> for Held<T> {
    fn from(kind: Absent) -> Self {
        Self::Absent(kind)
    }
}

impl<T> From<Held<T>> for Option<T> {
    fn from(held: Held<T>) -> Self {
        held.into_option()
    }
}

/// Anything a transform may return to continue a chain.
pub trait IntoHeld {
    type Value;

    fn into_held(self) -> Held<Self::Value>;
}

impl<T> IntoHeld for Held<T> {
    type Value = T;

    fn into_held(self) -> Held<T> {
        self
    }
}

impl<T> IntoHeld for Option<T> {
    type Value = T;

    fn into_held(self) -> Held<T> {
        self.into()
    }
}

impl<T> IntoHeld for Result<T, Absent> {
    type Value = T;

    fn into_held(self) -> Held<T> {
        match self {
            Ok(value) => Held::Present(value),
            Err(kind) => Held::Absent(kind),
        }
    }
}
