use rand::seq::SliceRandom;
use sha2::{Digest, Sha256};

use crate::domain::{
    food::ports::CatalogRepository,
    identification::{
        entities::FoodIdentification, value_objects::MAX_IDENTIFICATION_RECIPES,
    },
};

const HASH_WINDOW: usize = 8;

/// Picks up to `count` distinct indices in `0..len` from the image digest.
///
/// Each 8-hex-character window of the SHA-256 digest is read as a `u32` and
/// reduced modulo `len`; indices already taken are skipped. Remaining slots
/// are filled with the next unused indices after the last pick. Empty input
/// yields `0, 1, 2, ...`.
pub fn hash_indices(image_data: &[u8], len: usize, count: usize) -> Vec<usize> {
    let count = count.min(len);
    let mut indices = Vec::with_capacity(count);

    if count == 0 {
        return indices;
    }

    if !image_data.is_empty() {
        let digest = hex::encode(Sha256::digest(image_data));

        let windows = (0..digest.len())
            .step_by(HASH_WINDOW)
            .filter_map(|start| digest.get(start..start + HASH_WINDOW))
            .filter_map(|window| u32::from_str_radix(window, 16).ok());

        for value in windows {
            if indices.len() == count {
                break;
            }
            let index = value as usize % len;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }

    let mut next = indices.last().map_or(0, |last| last + 1);
    while indices.len() < count {
        let index = next % len;
        if !indices.contains(&index) {
            indices.push(index);
        }
        next += 1;
    }

    indices
}

/// Index of the catalog entry selected by the image digest.
pub fn hash_index(image_data: &[u8], len: usize) -> Option<usize> {
    hash_indices(image_data, len, 1).first().copied()
}

pub fn random_key(keys: &[String]) -> Option<String> {
    keys.choose(&mut rand::thread_rng()).cloned()
}

pub fn random_keys(keys: &[String], count: usize) -> Vec<String> {
    keys.choose_multiple(&mut rand::thread_rng(), count)
        .cloned()
        .collect()
}

/// First label equal (ignoring case) to a catalog key, or the top-ranked
/// label verbatim when none match.
pub fn match_label(labels: &[String], keys: &[String]) -> Option<String> {
    labels
        .iter()
        .find_map(|label| find_key(label, keys))
        .or_else(|| labels.first().cloned())
}

/// Distinct catalog keys matched by `labels`, in label order.
pub fn match_labels(labels: &[String], keys: &[String], count: usize) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();

    for key in labels.iter().filter_map(|label| find_key(label, keys)) {
        if matched.len() == count {
            break;
        }
        if !matched.contains(&key) {
            matched.push(key);
        }
    }

    matched
}

fn find_key(label: &str, keys: &[String]) -> Option<String> {
    let label = label.trim().to_lowercase();
    keys.iter().find(|key| key.to_lowercase() == label).cloned()
}

/// Builds the identification response for `candidate`.
///
/// Candidates missing from the catalog (including raw external labels)
/// produce the fixed "Unknown Food" answer.
pub fn build_identification<C>(catalog: &C, candidate: Option<&str>) -> FoodIdentification
where
    C: CatalogRepository,
{
    let Some((key, record)) = candidate.and_then(|key| catalog.get(key).map(|r| (key, r))) else {
        return FoodIdentification::unknown();
    };

    let recipes = catalog
        .recipes()
        .into_iter()
        .filter(|recipe| recipe.uses(key))
        .take(MAX_IDENTIFICATION_RECIPES)
        .collect();

    FoodIdentification {
        description: format!("{} is a {} food", record.name, record.energetic_type),
        food_name: record.name,
        energetic_type: record.energetic_type,
        benefits: record.benefits,
        recipes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::food::entities::{EnergeticType, Recipe},
        infrastructure::catalog::StaticCatalogRepository,
    };

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_hash_index_is_stable() {
        let data = b"a photo of some ginger";
        let first = hash_index(data, 18);
        for _ in 0..10 {
            assert_eq!(hash_index(data, 18), first);
        }
    }

    #[test]
    fn test_hash_index_uses_first_eight_hex_characters() {
        let data = b"abc";
        // sha256("abc") starts with ba7816bf
        let expected = 0xba78_16bf_u32 as usize % 18;
        assert_eq!(hash_index(data, 18), Some(expected));
    }

    #[test]
    fn test_hash_index_empty_input_is_first_entry() {
        assert_eq!(hash_index(&[], 18), Some(0));
        assert_eq!(hash_index(&[], 1), Some(0));
    }

    #[test]
    fn test_hash_index_empty_catalog() {
        assert_eq!(hash_index(b"abc", 0), None);
    }

    #[test]
    fn test_hash_indices_are_distinct_and_bounded() {
        let indices = hash_indices(b"lunch", 18, 3);
        assert_eq!(indices.len(), 3);
        assert!(indices.iter().all(|i| *i < 18));
        assert_ne!(indices[0], indices[1]);
        assert_ne!(indices[1], indices[2]);
        assert_ne!(indices[0], indices[2]);
        assert_eq!(indices[0], hash_index(b"lunch", 18).unwrap());
    }

    #[test]
    fn test_hash_indices_fill_small_catalogs() {
        let mut indices = hash_indices(b"lunch", 2, 3);
        indices.sort();
        assert_eq!(indices, vec![0, 1]);

        assert_eq!(hash_indices(&[], 18, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_random_key_comes_from_catalog() {
        let keys = keys(&["ginger", "honey", "rice"]);
        for _ in 0..20 {
            let key = random_key(&keys).unwrap();
            assert!(keys.contains(&key));
        }
        assert_eq!(random_key(&[]), None);
    }

    #[test]
    fn test_random_keys_are_distinct() {
        let keys = keys(&["ginger", "honey", "rice", "pear"]);
        let mut picked = random_keys(&keys, 3);
        assert_eq!(picked.len(), 3);
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_match_label_prefers_catalog_key() {
        let catalog = keys(&["ginger", "honey"]);
        let labels = keys(&["Root vegetable", "GINGER", "Honey"]);
        assert_eq!(match_label(&labels, &catalog), Some("ginger".to_string()));
    }

    #[test]
    fn test_match_label_falls_back_to_top_label() {
        let catalog = keys(&["ginger", "honey"]);
        let labels = keys(&["Root vegetable", "Food"]);
        assert_eq!(
            match_label(&labels, &catalog),
            Some("Root vegetable".to_string())
        );
        assert_eq!(match_label(&[], &catalog), None);
    }

    #[test]
    fn test_match_labels_deduplicates_and_caps() {
        let catalog = keys(&["ginger", "honey", "rice", "pear"]);
        let labels = keys(&["Ginger", "ginger", "Food", "rice", "honey", "pear"]);
        assert_eq!(
            match_labels(&labels, &catalog, 3),
            keys(&["ginger", "rice", "honey"])
        );
    }

    #[test]
    fn test_build_identification_for_known_key() {
        let catalog = StaticCatalogRepository::seeded();
        let result = build_identification(&catalog, Some("ginger"));

        assert_eq!(result.food_name, "Ginger");
        assert_eq!(result.energetic_type, EnergeticType::Warm);
        assert_eq!(result.description, "Ginger is a warm food");
        assert_eq!(
            result.benefits,
            "Warms the body, aids digestion, reduces nausea"
        );
        let ids: Vec<&str> = result.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1"]);
    }

    #[test]
    fn test_build_identification_caps_recipes() {
        let recipe = |id: &str| Recipe {
            id: id.to_string(),
            name: id.to_string(),
            ingredients: vec!["ginger".to_string()],
            instructions: String::new(),
            prep_time_minutes: 5,
            energetic_balance: EnergeticType::Warm,
        };
        let catalog = StaticCatalogRepository::builder()
            .food("ginger", crate::infrastructure::catalog::data::foods()[0].1.clone())
            .recipe(recipe("a"))
            .recipe(recipe("b"))
            .recipe(recipe("c"))
            .recipe(recipe("d"))
            .build();

        let result = build_identification(&catalog, Some("ginger"));
        let ids: Vec<&str> = result.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_build_identification_unknown() {
        let catalog = StaticCatalogRepository::seeded();

        assert_eq!(
            build_identification(&catalog, Some("Root vegetable")),
            FoodIdentification::unknown()
        );
        assert_eq!(
            build_identification(&catalog, None),
            FoodIdentification::unknown()
        );
    }
}
