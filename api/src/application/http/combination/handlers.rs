pub mod analyze_combination;
pub mod get_compatibility_rules;
pub mod get_health_conditions;
