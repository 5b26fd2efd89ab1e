//! ListPresetsHandler - Query handler describing the weight presets.

use serde::Serialize;

use crate::domain::analysis::{weights_sum_to_hundred, WeightPreset};
use crate::domain::foundation::Polarity;

/// Percent weight and default polarity a preset assigns to one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetWeight {
    pub criterion: String,
    pub polarity: Polarity,
    pub percent: f64,
}

/// One preset resolved against a set of columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetView {
    pub preset: WeightPreset,
    pub description: &'static str,
    pub weights: Vec<PresetWeight>,
    /// Whether the percents add up to 100 for these columns.
    pub balanced: bool,
}

/// Handler for listing presets.
#[derive(Debug, Default)]
pub struct ListPresetsHandler;

impl ListPresetsHandler {
    pub fn new() -> Self {
        Self
    }

    /// Resolves every preset against `columns`.
    pub fn handle(&self, columns: &[String]) -> Vec<PresetView> {
        [WeightPreset::Equal, WeightPreset::Recommended]
            .into_iter()
            .map(|preset| {
                let weights: Vec<PresetWeight> = preset
                    .percentages(columns)
                    .into_iter()
                    .map(|(criterion, percent)| PresetWeight {
                        polarity: Polarity::default_for(&criterion),
                        criterion,
                        percent,
                    })
                    .collect();
                let balanced = weights_sum_to_hundred(weights.iter().map(|w| w.percent));

                PresetView {
                    preset,
                    description: Self::describe(preset),
                    weights,
                    balanced,
                }
            })
            .collect()
    }

    fn describe(preset: WeightPreset) -> &'static str {
        match preset {
            WeightPreset::Equal => "Every criterion gets the same share",
            WeightPreset::Recommended => {
                "Price 30%, Distance 25%, Size 15%, Wifi 15%, Security_Score 15%"
            }
        }
    }
}
