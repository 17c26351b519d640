use std::fmt;
use std::str::FromStr;

use dealmyarea_core::types::DealId;

/// How the store assigns ids to new deals. Fixed when the store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Decimal strings from a counter that only moves forward (`"1"`, `"2"`, ...).
    /// Ids are never reused, even after deletions.
    #[default]
    Sequential,
    /// UUID v7 strings.
    Uuid,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown id strategy '{0}' (expected 'sequential' or 'uuid')")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            _ => Err(UnknownIdStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdStrategy::Sequential => "sequential",
            IdStrategy::Uuid => "uuid",
        })
    }
}

/// Issues ids according to an [`IdStrategy`]. Not synchronized; the owning
/// store calls it under its write lock.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    strategy: IdStrategy,
    last_issued: u64,
}

impl IdGenerator {
    pub(crate) fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last_issued: 0,
        }
    }

    pub(crate) fn next_id(&mut self) -> DealId {
        match self.strategy {
            IdStrategy::Sequential => {
                self.last_issued += 1;
                self.last_issued.to_string()
            }
            IdStrategy::Uuid => uuid::Uuid::now_v7().to_string(),
        }
    }
}
