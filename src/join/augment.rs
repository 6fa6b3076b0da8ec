use std::collections::HashMap;

use tracing::debug;

use crate::codes::StateCodes;
use crate::join::types::{JoinedData, JoinedFeature};
use crate::join::utility::{count_domain, value_domain};
use crate::model::{GeoFeature, Observation};

/// Attaches to every feature the US sightings whose state code matches it,
/// and derives the count and duration domains.
///
/// A feature with no name, or whose name is missing from `codes`, is
/// unmatched and receives an empty list. Never fails.
pub fn augment<'a>(
    features: &'a [GeoFeature],
    observations: &'a [Observation],
    codes: &StateCodes,
) -> JoinedData<'a> {
    let us_observations: Vec<&Observation> = observations.iter().filter(|o| o.is_us()).collect();

    // Input order is preserved within each bucket.
    let mut by_state: HashMap<String, Vec<&Observation>> = HashMap::new();
    for obs in &us_observations {
        by_state.entry(obs.state_code()).or_default().push(*obs);
    }

    let joined: Vec<JoinedFeature> = features
        .iter()
        .map(|feature| {
            let code = feature.name().and_then(|name| codes.resolve(name));
            let observations = code
                .as_deref()
                .and_then(|c| by_state.get(c))
                .cloned()
                .unwrap_or_default();

            JoinedFeature {
                feature,
                code,
                observations,
            }
        })
        .collect();

    let count_domain = count_domain(joined.iter().map(JoinedFeature::count));
    let duration_domain = value_domain(us_observations.iter().map(|o| o.duration_seconds));

    debug!(
        features = joined.len(),
        unmatched = joined.iter().filter(|f| f.code.is_none()).count(),
        us_observations = us_observations.len(),
        dropped = observations.len() - us_observations.len(),
        count_min = count_domain.min,
        count_max = count_domain.max,
        "Joined sightings to features"
    );

    JoinedData {
        features: joined,
        us_observations,
        count_domain,
        duration_domain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::types::Domain;

    fn obs(country: &str, state: &str, duration: f64) -> Observation {
        Observation {
            country: country.into(),
            state: state.into(),
            city: "springfield".into(),
            datetime: "1/1/2000 00:00".into(),
            duration_seconds: duration,
            duration_text: None,
            latitude: 0.0,
            longitude: 0.0,
            comments: String::new(),
        }
    }

    fn codes() -> StateCodes {
        [("Texas", "TX"), ("Ohio", "OH")].into_iter().collect()
    }

    #[test]
    fn test_texas_ohio_example() {
        let features = vec![GeoFeature::named("Texas"), GeoFeature::named("Ohio")];
        let observations = vec![
            obs("us", "tx", 10.0),
            obs("us", "oh", 20.0),
            obs("us", "oh", 30.0),
            obs("ca", "on", 900.0),
        ];

        let joined = augment(&features, &observations, &codes());

        assert_eq!(joined.features[0].count(), 1);
        assert_eq!(joined.features[1].count(), 2);
        assert_eq!(joined.us_observations.len(), 3);
        assert_eq!(joined.count_domain, Domain { min: 1, max: 2 });
        assert_eq!(joined.duration_domain, Domain { min: 10.0, max: 30.0 });
    }

    #[test]
    fn test_unknown_name_is_unmatched() {
        let features = vec![GeoFeature::named("Puerto Rico")];
        let observations = vec![obs("us", "pr", 5.0), obs("us", "puerto rico", 5.0)];

        let joined = augment(&features, &observations, &codes());

        assert_eq!(joined.features[0].code, None);
        assert!(joined.features[0].observations.is_empty());
        assert_eq!(joined.count_domain, Domain { min: 0, max: 0 });
    }

    #[test]
    fn test_feature_without_name_is_unmatched() {
        let features = vec![GeoFeature {
            kind: "Feature".into(),
            properties: Default::default(),
            geometry: serde_json::Value::Null,
        }];
        let observations = vec![obs("us", "tx", 5.0)];

        let joined = augment(&features, &observations, &codes());
        assert!(joined.features[0].observations.is_empty());
    }

    #[test]
    fn test_observation_state_is_normalized() {
        let features = vec![GeoFeature::named("Texas")];
        let observations = vec![obs("us", "TX", 1.0), obs("us", " tx", 2.0)];

        let joined = augment(&features, &observations, &codes());
        assert_eq!(joined.features[0].count(), 2);
    }

    #[test]
    fn test_country_must_match_exactly() {
        let features = vec![GeoFeature::named("Texas")];
        let observations = vec![obs("US", "tx", 1.0), obs("", "tx", 1.0)];

        let joined = augment(&features, &observations, &codes());
        assert!(joined.us_observations.is_empty());
        assert_eq!(joined.features[0].count(), 0);
        assert_eq!(joined.duration_domain, Domain { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_observations_are_referenced_in_input_order() {
        let features = vec![GeoFeature::named("Ohio")];
        let observations = vec![obs("us", "oh", 3.0), obs("us", "tx", 9.0), obs("us", "oh", 1.0)];

        let joined = augment(&features, &observations, &codes());
        let picked = &joined.features[0].observations;

        assert!(std::ptr::eq(picked[0], &observations[0]));
        assert!(std::ptr::eq(picked[1], &observations[2]));
    }

    #[test]
    fn test_shared_code_gives_both_features_the_same_sightings() {
        let codes: StateCodes = [("Ohio", "OH"), ("Buckeye State", "oh")].into_iter().collect();
        let features = vec![GeoFeature::named("Ohio"), GeoFeature::named("Buckeye State")];
        let observations = vec![obs("us", "oh", 1.0)];

        let joined = augment(&features, &observations, &codes);
        assert_eq!(joined.features[0].count(), 1);
        assert_eq!(joined.features[1].count(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        let joined = augment(&[], &[], &StateCodes::default());
        assert!(joined.features.is_empty());
        assert_eq!(joined.count_domain, Domain { min: 0, max: 0 });
        assert_eq!(joined.duration_domain, Domain { min: 0.0, max: 0.0 });
    }
}
