use std::fmt;

/// Arena-style primary key shared by every table in the store.
///
/// Mirrors the auto-incrementing `id` column GORM generates for every model
/// in the original schema; kept as a transparent newtype rather than a bare
/// `i64` so the tables can't be mixed up at call sites.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type, serde::Serialize, serde::Deserialize,
)]
#[sqlx(transparent)]
pub struct Id(pub i64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
