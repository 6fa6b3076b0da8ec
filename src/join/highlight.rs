use serde::Serialize;

use crate::model::Observation;

/// All sightings reported from one city.
#[derive(Debug, Clone, Serialize)]
pub struct CityGroup<'a> {
    pub city: String,
    pub observations: Vec<&'a Observation>,
}

impl CityGroup<'_> {
    pub fn count(&self) -> usize {
        self.observations.len()
    }
}

/// Groups sightings by city and keeps every city tied for the most
/// sightings, in order of first appearance.
pub fn busiest_cities<'a>(observations: &[&'a Observation]) -> Vec<CityGroup<'a>> {
    let mut groups: Vec<CityGroup<'a>> = Vec::new();

    for obs in observations {
        match groups.iter_mut().find(|g| g.city == obs.city) {
            Some(group) => group.observations.push(*obs),
            None => groups.push(CityGroup {
                city: obs.city.clone(),
                observations: vec![*obs],
            }),
        }
    }

    let max = groups.iter().map(CityGroup::count).max().unwrap_or(0);
    groups.retain(|g| g.count() == max);
    groups
}
