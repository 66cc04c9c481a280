use serde::{Deserialize, Serialize};
use std::fmt;

/// Mobile network operators of the Philippine numbering plan.
///
/// `Unknown` is the fallback classification for numbers whose prefix is not
/// in the table; it is never a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    Smart,
    Globe,
    Sun,
    Dito,
    Gomo,
    Unknown,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Smart => "SMART",
            Operator::Globe => "GLOBE",
            Operator::Sun => "SUN",
            Operator::Dito => "DITO",
            Operator::Gomo => "GOMO",
            Operator::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
