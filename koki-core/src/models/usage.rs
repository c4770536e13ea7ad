use serde::{Deserialize, Serialize};

/// Building usage vocabulary of the accumulation (per-trade) model.
///
/// Only the finishing duration depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationUsage {
    #[default]
    Office,
    Retail,
    ShoppingCenter,
    Residential,
    Hotel,
    Hospital,
    School,
    Factory,
    Warehouse,
}

impl AccumulationUsage {
    pub const ALL: [AccumulationUsage; 9] = [
        Self::Office,
        Self::Retail,
        Self::ShoppingCenter,
        Self::Residential,
        Self::Hotel,
        Self::Hospital,
        Self::School,
        Self::Factory,
        Self::Warehouse,
    ];
}

/// Building usage vocabulary of the regression (statistical) model.
///
/// Coarser than [`AccumulationUsage`] and not isomorphic to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionUsage {
    #[default]
    Office,
    Commercial,
    Residential,
    Hotel,
    Hospital,
    Education,
    Industrial,
    Warehouse,
    MixedUse,
}

impl RegressionUsage {
    pub const ALL: [RegressionUsage; 9] = [
        Self::Office,
        Self::Commercial,
        Self::Residential,
        Self::Hotel,
        Self::Hospital,
        Self::Education,
        Self::Industrial,
        Self::Warehouse,
        Self::MixedUse,
    ];
}

impl From<AccumulationUsage> for RegressionUsage {
    /// Translation between the two usage vocabularies.
    ///
    /// Retail and shopping centers both collapse into `Commercial`.
    /// Nothing maps to `MixedUse`; it can only be chosen explicitly.
    fn from(usage: AccumulationUsage) -> Self {
        match usage {
            AccumulationUsage::Office => Self::Office,
            AccumulationUsage::Retail | AccumulationUsage::ShoppingCenter => Self::Commercial,
            AccumulationUsage::Residential => Self::Residential,
            AccumulationUsage::Hotel => Self::Hotel,
            AccumulationUsage::Hospital => Self::Hospital,
            AccumulationUsage::School => Self::Education,
            AccumulationUsage::Factory => Self::Industrial,
            AccumulationUsage::Warehouse => Self::Warehouse,
        }
    }
}
