use crate::domain::{
    combination::value_objects::{
        BALANCING_RECOMMENDATION, CombinationAnalysis, DIGESTIVE_RECOMMENDATION,
        WARMING_RECOMMENDATION,
    },
    food::{
        entities::{CompatibilityRule, Polarity},
        helpers::title_case,
        ports::CatalogRepository,
    },
};

/// Trigger words checked against health notes, each adding its own advice.
const NOTE_TRIGGERS: [(&str, &str); 2] = [
    ("cold", WARMING_RECOMMENDATION),
    ("digest", DIGESTIVE_RECOMMENDATION),
];

/// Rules whose two keys are both in `detected`, in storage order.
/// Identical stored rules are all kept.
pub fn matching_rules(rules: Vec<CompatibilityRule>, detected: &[String]) -> Vec<CompatibilityRule> {
    rules
        .into_iter()
        .filter(|rule| detected.contains(&rule.food_key_a) && detected.contains(&rule.food_key_b))
        .collect()
}

pub fn health_recommendations(health_notes: &str) -> Vec<String> {
    let notes = health_notes.to_lowercase();

    let mut recommendations: Vec<String> = NOTE_TRIGGERS
        .iter()
        .filter(|(trigger, _)| notes.contains(trigger))
        .map(|(_, advice)| advice.to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(BALANCING_RECOMMENDATION.to_string());
    }

    recommendations
}

pub fn analyze<C>(catalog: &C, detected: &[String], health_notes: &str) -> CombinationAnalysis
where
    C: CatalogRepository,
{
    CombinationAnalysis {
        ingredients: detected.iter().map(|key| title_case(key)).collect(),
        good_combinations: matching_rules(catalog.rules(Polarity::Good), detected),
        bad_combinations: matching_rules(catalog.rules(Polarity::Bad), detected),
        recommendations: health_recommendations(health_notes),
    }
}
