use crate::absent::Absent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Value is {kind}")]
pub struct AbsentError {
    pub kind: Absent,
}

impl AbsentError {
    pub const fn new(kind: Absent) -> Self {
        Self { kind }
    }
}

impl From<Absent> for AbsentError {
    fn from(kind: Absent) -> Self {
        Self::new(kind)
    }
}
