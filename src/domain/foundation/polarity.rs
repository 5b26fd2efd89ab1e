//! Polarity value object: whether more of a criterion is better or worse.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction in which a criterion is optimised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher raw value is more desirable.
    Benefit,
    /// Lower raw value is more desirable.
    Cost,
}

impl Polarity {
    /// All accepted polarity names, in wire form.
    pub const NAMES: [&'static str; 2] = ["benefit", "cost"];

    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Benefit => "benefit",
            Polarity::Cost => "cost",
        }
    }

    /// Polarity assumed for a column when the caller gives none.
    ///
    /// Price and distance are costs for a housing search; every other
    /// measurement is treated as a benefit.
    pub fn default_for(column: &str) -> Self {
        match column {
            "Price" | "Distance" => Polarity::Cost,
            _ => Polarity::Benefit,
        }
    }
}

impl FromStr for Polarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "benefit" => Ok(Polarity::Benefit),
            "cost" => Ok(Polarity::Cost),
            other => Err(ValidationError::invalid_format(
                "polarity",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
