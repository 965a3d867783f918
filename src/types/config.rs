use crate::error::{Result, RubricError};
use crate::types::rubric::{Criterion, WeightTable};
use crate::types::scoring::ClassificationThresholds;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RubricConfig {
    pub thresholds: Option<ThresholdsConfig>,
    pub weights: Option<BTreeMap<String, u32>>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub shortlisted: Option<f64>,
    pub in_review: Option<f64>,
    pub borderline: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
}

impl RubricConfig {
    pub fn thresholds(&self) -> ClassificationThresholds {
        let defaults = ClassificationThresholds::default();
        match &self.thresholds {
            Some(thresholds) => ClassificationThresholds {
                shortlisted: thresholds.shortlisted.unwrap_or(defaults.shortlisted),
                in_review: thresholds.in_review.unwrap_or(defaults.in_review),
                borderline: thresholds.borderline.unwrap_or(defaults.borderline),
            },
            None => defaults,
        }
    }

    pub fn weights(&self) -> Result<WeightTable> {
        let mut table = WeightTable::default();
        if let Some(weights) = &self.weights {
            for (key, weight) in weights {
                let criterion = Criterion::from_key(key).map_err(|_| {
                    RubricError::ConfigParse(format!("weights contains unknown key: {key}"))
                })?;
                table = table.with_override(criterion, *weight)?;
            }
        }
        Ok(table)
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<()> {
        let thresholds = self.thresholds();
        for (name, value) in [
            ("shortlisted", thresholds.shortlisted),
            ("in_review", thresholds.in_review),
            ("borderline", thresholds.borderline),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(RubricError::ConfigParse(format!(
                    "thresholds.{name} must be between 0 and 100"
                )));
            }
        }
        if thresholds.shortlisted < thresholds.in_review
            || thresholds.in_review < thresholds.borderline
        {
            return Err(RubricError::ConfigParse(format!(
                "thresholds must be ordered shortlisted >= in_review >= borderline (found {:.1} / {:.1} / {:.1})",
                thresholds.shortlisted, thresholds.in_review, thresholds.borderline
            )));
        }

        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| Criterion::from_key(key).is_err())
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(RubricError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }
        self.weights()?;

        Ok(())
    }
}
