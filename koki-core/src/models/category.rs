use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural system of the building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StructureCategory {
    /// Steel.
    S,
    /// Steel-reinforced concrete.
    #[default]
    Src,
    /// Reinforced concrete.
    Rc,
}

impl StructureCategory {
    pub const ALL: [StructureCategory; 3] = [Self::S, Self::Src, Self::Rc];

    pub fn label(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::Src => "SRC",
            Self::Rc => "RC",
        }
    }
}

impl fmt::Display for StructureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Site location class. Only the regression model reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    #[default]
    Urban,
    Suburban,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 2] = [Self::Urban, Self::Suburban];
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Urban => f.write_str("urban"),
            Self::Suburban => f.write_str("suburban"),
        }
    }
}

/// Height tier selecting the regression coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightTier {
    LowRise,
    HighRise,
}

impl HeightTier {
    /// Hard step at `threshold` floors above grade, inclusive on the high-rise side.
    pub fn for_floors(floors_above: f64, threshold: f64) -> Self {
        if floors_above >= threshold {
            Self::HighRise
        } else {
            Self::LowRise
        }
    }
}

impl fmt::Display for HeightTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowRise => f.write_str("low-rise"),
            Self::HighRise => f.write_str("high-rise"),
        }
    }
}
