use serde::Serialize;

use crate::join::types::{JoinedData, JoinedFeature};
use crate::join::utility::mean;

/// Sighting statistics for one state. The mean covers only sightings with a
/// usable duration; `sightings` counts all of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateSummary {
    pub name: String,
    pub code: Option<String>,
    pub sightings: usize,
    pub mean_duration_seconds: f64,
}

impl StateSummary {
    pub fn from_feature(feature: &JoinedFeature) -> Self {
        let durations: Vec<f64> = feature
            .observations
            .iter()
            .map(|o| o.duration_seconds)
            .filter(|d| d.is_finite())
            .collect();

        Self {
            name: feature.name().unwrap_or_default().to_string(),
            code: feature.code.clone(),
            sightings: feature.count(),
            mean_duration_seconds: mean(&durations),
        }
    }

    /// `"None"`, `"1 time"` or `"N times"`.
    pub fn sightings_label(&self) -> String {
        match self.sightings {
            0 => "None".to_string(),
            1 => "1 time".to_string(),
            n => format!("{n} times"),
        }
    }
}

/// Summaries for every feature, in feature order.
pub fn summarize(joined: &JoinedData) -> Vec<StateSummary> {
    joined.features.iter().map(StateSummary::from_feature).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::StateCodes;
    use crate::join::augment::augment;
    use crate::model::{GeoFeature, Observation};

    fn obs(state: &str, duration: f64) -> Observation {
        Observation {
            country: "us".into(),
            state: state.into(),
            city: "dayton".into(),
            datetime: "7/4/2004 21:00".into(),
            duration_seconds: duration,
            duration_text: Some("a few minutes".into()),
            latitude: 39.75,
            longitude: -84.19,
            comments: "bright light".into(),
        }
    }

    #[test]
    fn test_summarize() {
        let codes: StateCodes = [("Ohio", "OH"), ("Iowa", "IA")].into_iter().collect();
        let features = vec![GeoFeature::named("Ohio"), GeoFeature::named("Iowa")];
        let observations = vec![obs("oh", 60.0), obs("oh", 120.0)];

        let joined = augment(&features, &observations, &codes);
        let summaries = summarize(&joined);

        assert_eq!(summaries[0].name, "Ohio");
        assert_eq!(summaries[0].code.as_deref(), Some("oh"));
        assert_eq!(summaries[0].sightings, 2);
        assert_eq!(summaries[0].mean_duration_seconds, 90.0);

        assert_eq!(summaries[1].sightings, 0);
        assert_eq!(summaries[1].mean_duration_seconds, 0.0);
    }

    #[test]
    fn test_mean_ignores_unusable_durations() {
        let codes: StateCodes = [("Ohio", "OH")].into_iter().collect();
        let features = vec![GeoFeature::named("Ohio")];
        let observations = vec![obs("oh", 60.0), obs("oh", f64::NAN), obs("oh", f64::INFINITY), obs("oh", 120.0)];

        let joined = augment(&features, &observations, &codes);
        let summaries = summarize(&joined);

        assert_eq!(summaries[0].sightings, 4);
        assert_eq!(summaries[0].mean_duration_seconds, 90.0);
    }

    #[test]
    fn test_sightings_label() {
        let mut s = StateSummary {
            name: "Ohio".into(),
            code: None,
            sightings: 0,
            mean_duration_seconds: 0.0,
        };
        assert_eq!(s.sightings_label(), "None");
        s.sightings = 1;
        assert_eq!(s.sightings_label(), "1 time");
        s.sightings = 12;
        assert_eq!(s.sightings_label(), "12 times");
    }
}
