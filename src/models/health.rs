//! Health impact panel data.

use serde::{Deserialize, Serialize};

/// Which indicator a metric tracks. Chooses icon and accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    AirQuality,
    Respiratory,
    CommunityHealth,
}

/// A progress metric: current value against a target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub title: String,
    pub value: f64,
    pub target: f64,
    pub unit: String,
    pub kind: MetricKind,
}

impl HealthMetric {
    /// Progress toward the target as a percentage in `[0, 100]`.
    ///
    /// A zero, negative or non-finite target yields 0.
    pub fn progress_percent(&self) -> f64 {
        if !self.target.is_finite() || self.target <= 0.0 || !self.value.is_finite() {
            return 0.0;
        }
        (self.value / self.target * 100.0).clamp(0.0, 100.0)
    }
}

/// Link card in the education section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalResource {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

/// Everything the health impact panel displays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthImpact {
    pub community_impact: String,
    pub metrics: Vec<HealthMetric>,
    pub resources: Vec<EducationalResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(value: f64, target: f64) -> HealthMetric {
        HealthMetric {
            title: "Air Quality Improvement".to_string(),
            value,
            target,
            unit: "%".to_string(),
            kind: MetricKind::AirQuality,
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(metric(68.0, 100.0).progress_percent(), 68.0);
        assert_eq!(metric(21.0, 42.0).progress_percent(), 50.0);
        assert_eq!(metric(0.0, 100.0).progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_percent_clamped() {
        assert_eq!(metric(150.0, 100.0).progress_percent(), 100.0);
        assert_eq!(metric(-5.0, 100.0).progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_percent_degenerate_target() {
        assert_eq!(metric(10.0, 0.0).progress_percent(), 0.0);
        assert_eq!(metric(10.0, -1.0).progress_percent(), 0.0);
        assert_eq!(metric(10.0, f64::NAN).progress_percent(), 0.0);
        assert_eq!(metric(f64::INFINITY, 100.0).progress_percent(), 0.0);
    }
}
