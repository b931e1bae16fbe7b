use thiserror::Error;

/// Why a candidate line did not become an [`Event`](crate::model::Event).
///
/// None of these are fatal: the line is dropped and scanning continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("not a schedule line")]
    NoLineMatch,
    #[error("unresolvable date: {0}")]
    UnresolvableDate(String),
    #[error("no liturgical keyword")]
    NoKeywordMatch,
    #[error("outside the target day")]
    OutOfWindow,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown time zone '{name}': {reason}")]
    Timezone { name: String, reason: String },
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    TargetDay(String),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
