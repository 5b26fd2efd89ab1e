//! Criteria configuration - polarity and weight per dataset column.
//!
//! Callers describe every criterion once, as an ordered list of
//! `CriterionSpec`s. [`CriteriaConfig::align`] matches that list against the
//! dataset's columns and yields per-column vectors the engine can index by
//! position, so the column, polarity, and weight sets can never drift apart.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::MooraError;
use crate::domain::foundation::Polarity;

/// Percent weights recommended for the student housing dataset.
static RECOMMENDED_PERCENTAGES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Price", 30.0),
        ("Distance", 25.0),
        ("Size", 15.0),
        ("Wifi", 15.0),
        ("Security_Score", 15.0),
    ])
});

/// Polarity and importance of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    pub polarity: Polarity,
    pub weight: f64,
}

impl CriterionSpec {
    /// Creates a new criterion spec.
    pub fn new(name: impl Into<String>, polarity: Polarity, weight: f64) -> Self {
        Self {
            name: name.into(),
            polarity,
            weight,
        }
    }
}

/// Scale the caller expressed weights in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightScale {
    /// Weights sum to 1.0.
    #[default]
    Fraction,
    /// Weights sum to 100.
    Percent,
}

impl WeightScale {
    /// Converts a weight on this scale to a fraction.
    pub fn to_fraction(&self, weight: f64) -> f64 {
        match self {
            WeightScale::Fraction => weight,
            WeightScale::Percent => weight / 100.0,
        }
    }
}

/// Ready-made weight distributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreset {
    /// Every criterion gets 100/m percent.
    #[default]
    Equal,
    /// Housing-specific weights; unknown columns fall back to 100/m percent.
    Recommended,
}

impl WeightPreset {
    /// Percent weight for each column under this preset.
    pub fn percentages(&self, columns: &[String]) -> Vec<(String, f64)> {
        if columns.is_empty() {
            return Vec::new();
        }
        let equal = 100.0 / columns.len() as f64;

        columns
            .iter()
            .map(|column| {
                let weight = match self {
                    WeightPreset::Equal => equal,
                    WeightPreset::Recommended => RECOMMENDED_PERCENTAGES
                        .get(column.as_str())
                        .copied()
                        .unwrap_or(equal),
                };
                (column.clone(), weight)
            })
            .collect()
    }
}

/// Ordered criterion configuration, validated against a dataset by `align`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaConfig {
    specs: Vec<CriterionSpec>,
}

impl CriteriaConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from specs, keeping their order.
    pub fn from_specs(specs: Vec<CriterionSpec>) -> Self {
        Self { specs }
    }

    /// Adds a criterion.
    pub fn with(mut self, name: impl Into<String>, polarity: Polarity, weight: f64) -> Self {
        self.specs.push(CriterionSpec::new(name, polarity, weight));
        self
    }

    /// Builds a fraction-scaled configuration from a preset, using each
    /// column's default polarity.
    pub fn from_preset(preset: WeightPreset, columns: &[String]) -> Self {
        let specs = preset
            .percentages(columns)
            .into_iter()
            .map(|(name, percent)| {
                let polarity = Polarity::default_for(&name);
                CriterionSpec::new(name, polarity, WeightScale::Percent.to_fraction(percent))
            })
            .collect();
        Self { specs }
    }

    /// Replaces the polarity of a configured criterion.
    pub fn set_polarity(&mut self, name: &str, polarity: Polarity) -> Result<(), MooraError> {
        let spec = self
            .specs
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| MooraError::UnknownCriterion {
                criterion: name.to_string(),
            })?;
        spec.polarity = polarity;
        Ok(())
    }

    /// The configured specs in order.
    pub fn specs(&self) -> &[CriterionSpec] {
        &self.specs
    }

    /// Returns true if nothing is configured.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Looks up a criterion by name.
    pub fn get(&self, name: &str) -> Option<&CriterionSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Iterates the raw weights in configuration order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.specs.iter().map(|s| s.weight)
    }

    /// Returns a copy with every weight converted from `scale` to a fraction.
    pub fn to_fractions(&self, scale: WeightScale) -> Self {
        let specs = self
            .specs
            .iter()
            .map(|s| CriterionSpec::new(s.name.clone(), s.polarity, scale.to_fraction(s.weight)))
            .collect();
        Self { specs }
    }

    /// Matches the configuration against dataset columns.
    ///
    /// Fails on the first duplicate spec, then on the first column without a
    /// spec, then on the first spec that names no column.
    pub fn align(&self, columns: &[String]) -> Result<AlignedCriteria, MooraError> {
        let mut seen = HashSet::new();
        for spec in &self.specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(MooraError::DuplicateCriterion {
                    criterion: spec.name.clone(),
                });
            }
        }

        let mut polarities = Vec::with_capacity(columns.len());
        let mut weights = Vec::with_capacity(columns.len());
        for column in columns {
            let spec = self.get(column).ok_or_else(|| MooraError::MissingCriterion {
                criterion: column.clone(),
            })?;
            polarities.push(spec.polarity);
            weights.push(spec.weight);
        }

        if let Some(extra) = self.specs.iter().find(|s| !columns.contains(&s.name)) {
            return Err(MooraError::UnknownCriterion {
                criterion: extra.name.clone(),
            });
        }

        Ok(AlignedCriteria {
            polarities,
            weights,
        })
    }
}

/// Polarity and weight per dataset column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedCriteria {
    pub polarities: Vec<Polarity>,
    pub weights: Vec<f64>,
}

impl AlignedCriteria {
    /// Creates aligned criteria directly from per-column vectors.
    pub fn new(polarities: Vec<Polarity>, weights: Vec<f64>) -> Self {
        Self {
            polarities,
            weights,
        }
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if there are no criteria.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn kost_config() -> CriteriaConfig {
        CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.30)
            .with("Distance", Polarity::Cost, 0.25)
            .with("Size", Polarity::Benefit, 0.15)
            .with("Wifi", Polarity::Benefit, 0.15)
            .with("Security_Score", Polarity::Benefit, 0.15)
    }

    #[test]
    fn align_orders_by_dataset_columns() {
        let config = CriteriaConfig::new()
            .with("Size", Polarity::Benefit, 0.4)
            .with("Price", Polarity::Cost, 0.6);

        let aligned = config.align(&columns(&["Price", "Size"])).unwrap();
        assert_eq!(aligned.polarities, vec![Polarity::Cost, Polarity::Benefit]);
        assert_eq!(aligned.weights, vec![0.6, 0.4]);
    }

    #[test]
    fn align_rejects_missing_column() {
        let config = CriteriaConfig::new().with("Price", Polarity::Cost, 1.0);
        let err = config.align(&columns(&["Price", "Wifi"])).unwrap_err();
        assert_eq!(
            err,
            MooraError::MissingCriterion {
                criterion: "Wifi".to_string()
            }
        );
    }

    #[test]
    fn align_rejects_unknown_criterion() {
        let config = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Parking", Polarity::Benefit, 0.5);
        let err = config.align(&columns(&["Price"])).unwrap_err();
        assert_eq!(
            err,
            MooraError::UnknownCriterion {
                criterion: "Parking".to_string()
            }
        );
    }

    #[test]
    fn align_rejects_duplicates() {
        let config = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Price", Polarity::Benefit, 0.5);
        let err = config.align(&columns(&["Price"])).unwrap_err();
        assert_eq!(
            err,
            MooraError::DuplicateCriterion {
                criterion: "Price".to_string()
            }
        );
    }

    #[test]
    fn equal_preset_splits_hundred_percent() {
        let weights = WeightPreset::Equal.percentages(&columns(&["A", "B", "C", "D"]));
        assert!(weights.iter().all(|(_, w)| (*w - 25.0).abs() < 1e-12));
    }

    #[test]
    fn recommended_preset_uses_known_weights() {
        let cols = columns(&["Price", "Distance", "Size", "Wifi", "Security_Score"]);
        let weights = WeightPreset::Recommended.percentages(&cols);
        assert_eq!(weights[0], ("Price".to_string(), 30.0));
        assert_eq!(weights[1], ("Distance".to_string(), 25.0));
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn recommended_preset_falls_back_to_equal_share() {
        let weights = WeightPreset::Recommended.percentages(&columns(&["Price", "Parking"]));
        assert_eq!(weights[0].1, 30.0);
        assert_eq!(weights[1].1, 50.0);
    }

    #[test]
    fn preset_config_uses_default_polarities_and_fractions() {
        let config = CriteriaConfig::from_preset(WeightPreset::Equal, &columns(&["Price", "Size"]));
        let price = config.get("Price").unwrap();
        let size = config.get("Size").unwrap();
        assert_eq!(price.polarity, Polarity::Cost);
        assert_eq!(size.polarity, Polarity::Benefit);
        assert!((price.weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn set_polarity_overrides_preset_default() {
        let mut config = CriteriaConfig::from_preset(WeightPreset::Equal, &columns(&["Price", "Size"]));
        config.set_polarity("Price", Polarity::Benefit).unwrap();
        assert_eq!(config.get("Price").unwrap().polarity, Polarity::Benefit);

        let err = config.set_polarity("Parking", Polarity::Cost).unwrap_err();
        assert_eq!(
            err,
            MooraError::UnknownCriterion {
                criterion: "Parking".to_string()
            }
        );
    }

    #[test]
    fn percent_weights_convert_to_fractions() {
        let config = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 60.0)
            .with("Size", Polarity::Benefit, 40.0)
            .to_fractions(WeightScale::Percent);
        let weights: Vec<f64> = config.weights().collect();
        assert_eq!(weights, vec![0.6, 0.4]);
    }

    #[test]
    fn config_serializes_as_list() {
        let json = serde_json::to_value(kost_config()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "Price");
        assert_eq!(json[0]["polarity"], "cost");
    }

    #[test]
    fn config_deserializes_from_list() {
        let json = r#"[
            {"name": "Price", "polarity": "cost", "weight": 0.5},
            {"name": "Size", "polarity": "benefit", "weight": 0.5}
        ]"#;
        let config: CriteriaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.specs().len(), 2);
        assert_eq!(config.get("Size").unwrap().polarity, Polarity::Benefit);
    }
}
