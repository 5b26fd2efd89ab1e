//! RankAlternativesHandler - Command handler for scoring and ranking a dataset.

use tracing::debug;

use crate::config::RankingConfig;
use crate::domain::analysis::{
    weights_sum_to, CriteriaConfig, CriterionSpec, Dataset, DatasetSummary, InputValidator,
    MooraAnalyzer, MooraOutcome, RankedResult, Ranker, TieBreak, WeightPreset, WeightScale,
};
use crate::domain::foundation::{DomainError, ErrorCode, Polarity};

/// Where the polarity and weight of each criterion come from.
#[derive(Debug, Clone)]
pub enum CriteriaSource {
    /// Caller-provided specs, weights on `scale` (the configured default
    /// scale when `None`).
    Explicit {
        criteria: CriteriaConfig,
        scale: Option<WeightScale>,
    },
    /// Preset weights with default polarities, optionally overridden per
    /// column.
    Preset {
        preset: WeightPreset,
        polarities: Vec<(String, Polarity)>,
    },
}

impl Default for CriteriaSource {
    fn default() -> Self {
        CriteriaSource::Preset {
            preset: WeightPreset::default(),
            polarities: Vec::new(),
        }
    }
}

/// Command to rank a dataset.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub dataset: Dataset,
    pub criteria: CriteriaSource,
    pub tie_break: TieBreak,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub result: RankedResult,
    pub outcome: MooraOutcome,
    /// Fraction weights actually applied, in dataset column order.
    pub criteria: Vec<CriterionSpec>,
    pub summary: DatasetSummary,
}

/// Handler for ranking datasets.
pub struct RankAlternativesHandler {
    config: RankingConfig,
}

impl RankAlternativesHandler {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankAlternativesResult, DomainError> {
        let dataset = cmd.dataset;

        // 1. Enforce service limits
        self.check_limits(&dataset)?;

        // 2. Dataset errors take precedence over configuration errors
        InputValidator::validate(&dataset)?;

        // 3. Resolve configuration to fractions and match it to the columns
        let criteria = Self::resolve_criteria(cmd.criteria, &dataset, self.config.weight_scale)?;
        let aligned = criteria.align(dataset.criteria())?;

        // 4. Weight-sum precondition
        if self.config.require_normalized_weights {
            self.check_weights(&aligned.weights)?;
        }

        // 5. Score and rank
        let outcome = MooraAnalyzer::calculate(&dataset, &aligned)?;
        let result = Ranker::assemble(&dataset, &outcome.scores, cmd.tie_break)?;

        debug!(
            ranking_id = %result.ranking_id,
            alternatives = dataset.alternative_count(),
            criteria = dataset.criterion_count(),
            best = result.best().map(|r| r.label.as_str()).unwrap_or_default(),
            "Ranked dataset"
        );

        let applied = dataset
            .criteria()
            .iter()
            .zip(aligned.polarities.iter().zip(&aligned.weights))
            .map(|(name, (polarity, weight))| CriterionSpec::new(name.clone(), *polarity, *weight))
            .collect();

        Ok(RankAlternativesResult {
            summary: dataset.summary(),
            result,
            outcome,
            criteria: applied,
        })
    }

    fn check_limits(&self, dataset: &Dataset) -> Result<(), DomainError> {
        if dataset.alternative_count() > self.config.max_alternatives {
            return Err(DomainError::new(
                ErrorCode::DatasetTooLarge,
                format!(
                    "Dataset has {} alternatives, the limit is {}",
                    dataset.alternative_count(),
                    self.config.max_alternatives
                ),
            )
            .with_detail("limit", self.config.max_alternatives.to_string()));
        }
        if dataset.criterion_count() > self.config.max_criteria {
            return Err(DomainError::new(
                ErrorCode::DatasetTooLarge,
                format!(
                    "Dataset has {} criteria, the limit is {}",
                    dataset.criterion_count(),
                    self.config.max_criteria
                ),
            )
            .with_detail("limit", self.config.max_criteria.to_string()));
        }
        Ok(())
    }

    fn check_weights(&self, weights: &[f64]) -> Result<(), DomainError> {
        if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
            return Err(DomainError::new(
                ErrorCode::InvalidWeights,
                format!("Weights must be finite and non-negative, got {}", bad),
            ));
        }

        if !weights_sum_to(weights.iter().copied(), 1.0, self.config.weight_tolerance) {
            let total: f64 = weights.iter().sum();
            return Err(DomainError::new(
                ErrorCode::InvalidWeights,
                format!("Weights must add up to 100%, got {:.2}%", total * 100.0),
            )
            .with_detail("total", format!("{:.6}", total)));
        }
        Ok(())
    }

    fn resolve_criteria(
        source: CriteriaSource,
        dataset: &Dataset,
        default_scale: WeightScale,
    ) -> Result<CriteriaConfig, DomainError> {
        match source {
            CriteriaSource::Explicit { criteria, scale } => {
                Ok(criteria.to_fractions(scale.unwrap_or(default_scale)))
            }
            CriteriaSource::Preset { preset, polarities } => {
                let mut criteria = CriteriaConfig::from_preset(preset, dataset.criteria());
                for (name, polarity) in polarities {
                    criteria.set_polarity(&name, polarity)?;
                }
                Ok(criteria)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kost_dataset() -> Dataset {
        Dataset::builder()
            .criteria(vec!["Price", "Distance"])
            .alternative("Kost_A", vec![1800.0, 2.5])
            .alternative("Kost_B", vec![900.0, 1.0])
            .build()
            .unwrap()
    }

    fn explicit(criteria: CriteriaConfig, scale: Option<WeightScale>) -> RankAlternativesCommand {
        RankAlternativesCommand {
            dataset: kost_dataset(),
            criteria: CriteriaSource::Explicit { criteria, scale },
            tie_break: TieBreak::InputOrder,
        }
    }

    fn handler() -> RankAlternativesHandler {
        RankAlternativesHandler::new(RankingConfig::default())
    }

    #[test]
    fn ranks_cheaper_and_closer_first() {
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Distance", Polarity::Cost, 0.5);

        let result = handler().handle(explicit(criteria, None)).unwrap();

        assert_eq!(result.result.rows[0].label, "Kost_B");
        assert_eq!(result.result.rows[0].rank, 1);
        assert_eq!(result.result.rows[1].rank, 2);
        assert_eq!(result.summary.data_points, 4);
        assert_eq!(result.outcome.scores.len(), 2);
    }

    #[test]
    fn overflowing_weights_fail_even_without_sum_check() {
        let dataset = Dataset::builder()
            .criteria(vec!["Size", "Wifi", "Security_Score", "Price", "Distance", "Deposit"])
            .alternative("Kost_A", vec![12.0, 1.0, 4.0, 1800.0, 2.5, 500.0])
            .alternative("Kost_B", vec![9.0, 1.0, 3.0, 900.0, 1.0, 300.0])
            .build()
            .unwrap();
        let criteria = CriteriaConfig::new()
            .with("Size", Polarity::Benefit, 1e308)
            .with("Wifi", Polarity::Benefit, 1e308)
            .with("Security_Score", Polarity::Benefit, 1e308)
            .with("Price", Polarity::Cost, 1e308)
            .with("Distance", Polarity::Cost, 1e308)
            .with("Deposit", Polarity::Cost, 1e308);
        let handler = RankAlternativesHandler::new(RankingConfig {
            require_normalized_weights: false,
            ..Default::default()
        });

        let err = handler
            .handle(RankAlternativesCommand {
                dataset,
                criteria: CriteriaSource::Explicit {
                    criteria,
                    scale: None,
                },
                tie_break: TieBreak::InputOrder,
            })
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidWeights);
        assert!(err.details.contains_key("alternative"));
    }

    #[test]
    fn percent_weights_are_converted() {
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 60.0)
            .with("Distance", Polarity::Cost, 40.0);

        let result = handler()
            .handle(explicit(criteria, Some(WeightScale::Percent)))
            .unwrap();

        let weights: Vec<f64> = result.criteria.iter().map(|c| c.weight).collect();
        assert_eq!(weights, vec![0.6, 0.4]);
    }

    #[test]
    fn default_scale_comes_from_config() {
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 50.0)
            .with("Distance", Polarity::Cost, 50.0);
        let handler = RankAlternativesHandler::new(RankingConfig {
            weight_scale: WeightScale::Percent,
            ..Default::default()
        });

        assert!(handler.handle(explicit(criteria, None)).is_ok());
    }

    #[test]
    fn unbalanced_weights_are_rejected() {
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Distance", Polarity::Cost, 0.3);

        let err = handler().handle(explicit(criteria, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWeights);
        assert_eq!(err.details.get("total"), Some(&"0.800000".to_string()));
    }

    #[test]
    fn negative_weights_are_rejected() {
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 1.5)
            .with("Distance", Polarity::Cost, -0.5);

        let err = handler().handle(explicit(criteria, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWeights);
    }

    #[test]
    fn weight_check_can_be_disabled() {
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Distance", Polarity::Cost, 0.3);
        let handler = RankAlternativesHandler::new(RankingConfig {
            require_normalized_weights: false,
            ..Default::default()
        });

        assert!(handler.handle(explicit(criteria, None)).is_ok());
    }

    #[test]
    fn config_mismatch_is_reported() {
        let criteria = CriteriaConfig::new().with("Price", Polarity::Cost, 1.0);

        let err = handler().handle(explicit(criteria, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::CriteriaMismatch);
        assert_eq!(err.details.get("criterion"), Some(&"Distance".to_string()));
    }

    #[test]
    fn dataset_errors_win_over_config_errors() {
        let dataset = Dataset::builder()
            .criteria(vec!["Price"])
            .alternative("Kost_A", vec![0.0])
            .build()
            .unwrap();
        let cmd = RankAlternativesCommand {
            dataset,
            criteria: CriteriaSource::Explicit {
                criteria: CriteriaConfig::new().with("Parking", Polarity::Benefit, 1.0),
                scale: None,
            },
            tie_break: TieBreak::InputOrder,
        };

        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::NonPositiveValue);
    }

    #[test]
    fn equal_preset_uses_default_polarities() {
        let cmd = RankAlternativesCommand {
            dataset: kost_dataset(),
            criteria: CriteriaSource::default(),
            tie_break: TieBreak::InputOrder,
        };

        let result = handler().handle(cmd).unwrap();
        assert!(result.criteria.iter().all(|c| c.polarity == Polarity::Cost));
        assert_eq!(result.result.rows[0].label, "Kost_B");
    }

    #[test]
    fn preset_polarity_override_flips_ranking() {
        let cmd = RankAlternativesCommand {
            dataset: kost_dataset(),
            criteria: CriteriaSource::Preset {
                preset: WeightPreset::Equal,
                polarities: vec![
                    ("Price".to_string(), Polarity::Benefit),
                    ("Distance".to_string(), Polarity::Benefit),
                ],
            },
            tie_break: TieBreak::InputOrder,
        };

        let result = handler().handle(cmd).unwrap();
        assert_eq!(result.result.rows[0].label, "Kost_A");
    }

    #[test]
    fn recommended_preset_with_foreign_columns_fails_weight_check() {
        let dataset = Dataset::builder()
            .criteria(vec!["Price", "Parking"])
            .alternative("Kost_A", vec![1800.0, 1.0])
            .build()
            .unwrap();
        let cmd = RankAlternativesCommand {
            dataset,
            criteria: CriteriaSource::Preset {
                preset: WeightPreset::Recommended,
                polarities: Vec::new(),
            },
            tie_break: TieBreak::InputOrder,
        };

        let err = handler().handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidWeights);
    }

    #[test]
    fn oversized_dataset_is_rejected() {
        let handler = RankAlternativesHandler::new(RankingConfig {
            max_alternatives: 1,
            ..Default::default()
        });
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Distance", Polarity::Cost, 0.5);

        let err = handler.handle(explicit(criteria, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatasetTooLarge);
        assert_eq!(err.details.get("limit"), Some(&"1".to_string()));
    }

    #[test]
    fn too_many_criteria_is_rejected() {
        let handler = RankAlternativesHandler::new(RankingConfig {
            max_criteria: 1,
            ..Default::default()
        });
        let criteria = CriteriaConfig::new()
            .with("Price", Polarity::Cost, 0.5)
            .with("Distance", Polarity::Cost, 0.5);

        let err = handler.handle(explicit(criteria, None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatasetTooLarge);
    }
}
