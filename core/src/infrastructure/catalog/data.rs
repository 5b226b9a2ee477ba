//! Hand-authored catalog contents loaded once at startup.

use crate::domain::food::entities::{
    CompatibilityRule, EnergeticType, FoodRecord, Polarity, Recipe, Season,
};

#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    name: &str,
    energetic_type: EnergeticType,
    season: Option<Season>,
    benefits: &str,
    warnings: Option<&str>,
    image_ref: Option<&str>,
    common_uses: &[&str],
) -> FoodRecord {
    FoodRecord {
        id: id.to_string(),
        name: name.to_string(),
        energetic_type,
        season,
        benefits: benefits.to_string(),
        warnings: warnings.map(str::to_string),
        image_ref: image_ref.map(str::to_string),
        common_uses: common_uses.iter().map(|u| u.to_string()).collect(),
    }
}

/// Catalog entries keyed by their lowercase catalog key, in insertion order.
pub fn foods() -> Vec<(&'static str, FoodRecord)> {
    use EnergeticType::*;
    use Season::*;

    vec![
        (
            "ginger",
            food(
                "1",
                "Ginger",
                Warm,
                Some(Winter),
                "Warms the body, aids digestion, reduces nausea",
                Some("Avoid with heat conditions"),
                Some("https://images.unsplash.com/photo-1615485500704-8e990f9900f7"),
                &["tea", "stir-fry", "soup"],
            ),
        ),
        (
            "watermelon",
            food(
                "2",
                "Watermelon",
                Cold,
                Some(Summer),
                "Cools body heat, hydrates, clears summer heat",
                Some("Avoid if having cold constitution"),
                Some("https://images.unsplash.com/photo-1587049352846-4a222e784bde"),
                &["fresh fruit", "juice", "smoothie"],
            ),
        ),
        (
            "rice",
            food(
                "3",
                "White Rice",
                Neutral,
                None,
                "Provides energy, easy to digest, tonifies spleen",
                None,
                Some("https://images.unsplash.com/photo-1586201375761-83865001e31c"),
                &["staple food", "congee", "rice balls"],
            ),
        ),
        (
            "cucumber",
            food(
                "4",
                "Cucumber",
                Cold,
                Some(Summer),
                "Clears heat, promotes urination, hydrates skin",
                Some("Avoid in cold weather or with weak digestion"),
                None,
                &["salad", "pickle", "juice"],
            ),
        ),
        (
            "cinnamon",
            food(
                "5",
                "Cinnamon",
                Warm,
                Some(Fall),
                "Warms kidneys, improves circulation, regulates blood sugar",
                Some("Avoid with heat symptoms"),
                None,
                &["spice", "tea", "desserts"],
            ),
        ),
        (
            "spinach",
            food(
                "6",
                "Spinach",
                Cold,
                Some(Spring),
                "Nourishes blood, moistens dryness, promotes bowel movement",
                Some("Avoid with kidney stones or weak digestion"),
                Some("https://images.unsplash.com/photo-1576045057995-568f588f82fb"),
                &["salad", "stir-fry", "smoothie"],
            ),
        ),
        (
            "bamboo_shoots",
            food(
                "7",
                "Bamboo Shoots",
                Cold,
                Some(Spring),
                "Clears heat, resolves phlegm, aids weight loss",
                Some("Avoid with cold constitution"),
                Some("https://images.unsplash.com/photo-1582736546654-8af5f7f5f494"),
                &["stir-fry", "soup", "curry"],
            ),
        ),
        (
            "strawberry",
            food(
                "8",
                "Strawberry",
                Cold,
                Some(Spring),
                "Moistens lungs, promotes fluid production, aids digestion",
                Some("Avoid if prone to diarrhea"),
                Some("https://images.unsplash.com/photo-1464965911861-746a04b4bca6"),
                &["fresh fruit", "smoothie", "dessert"],
            ),
        ),
        (
            "green_tea",
            food(
                "9",
                "Green Tea",
                Cold,
                Some(Spring),
                "Clears heat, aids digestion, antioxidant properties",
                Some("Avoid on empty stomach or with anemia"),
                Some("https://images.unsplash.com/photo-1564890369478-c89ca6d9cde9"),
                &["beverage", "matcha", "cooking"],
            ),
        ),
        (
            "mint",
            food(
                "10",
                "Mint",
                Cold,
                Some(Summer),
                "Disperses wind-heat, soothes throat, aids digestion",
                Some("Avoid with cold constitution"),
                Some("https://images.unsplash.com/photo-1628556270448-4d4e4148e1b1"),
                &["tea", "garnish", "sauce"],
            ),
        ),
        (
            "mung_bean",
            food(
                "11",
                "Mung Bean",
                Cold,
                Some(Summer),
                "Clears summer heat, detoxifies, reduces swelling",
                Some("Avoid with weak spleen/stomach"),
                Some("https://images.unsplash.com/photo-1481070414801-51fd732d7184"),
                &["soup", "sprouts", "dessert"],
            ),
        ),
        (
            "pear",
            food(
                "12",
                "Pear",
                Cold,
                Some(Fall),
                "Moistens lungs, relieves cough, clears heat",
                Some("Avoid with cold cough or diarrhea"),
                Some("https://images.unsplash.com/photo-1615484477201-9f4953340fab"),
                &["fresh fruit", "poached", "juice"],
            ),
        ),
        (
            "apple",
            food(
                "13",
                "Apple",
                Neutral,
                Some(Fall),
                "Strengthens heart, moistens lungs, aids digestion",
                None,
                Some("https://images.unsplash.com/photo-1619546813926-a78fa6372cd2"),
                &["fresh fruit", "baked", "juice"],
            ),
        ),
        (
            "sweet_potato",
            food(
                "14",
                "Sweet Potato",
                Neutral,
                Some(Fall),
                "Tonifies spleen and stomach, provides energy",
                Some("May cause bloating if eaten in excess"),
                Some("https://images.unsplash.com/photo-1596097635121-14b63a8f89c4"),
                &["roasted", "mashed", "soup"],
            ),
        ),
        (
            "honey",
            food(
                "15",
                "Honey",
                Neutral,
                Some(Fall),
                "Moistens lungs and intestines, boosts energy",
                Some("Avoid giving to infants under 1 year"),
                Some("https://images.unsplash.com/photo-1587049352846-4a222e784bde"),
                &["sweetener", "tea", "medicine"],
            ),
        ),
        (
            "lamb",
            food(
                "16",
                "Lamb",
                Warm,
                Some(Winter),
                "Warms kidney yang, strengthens body, nourishes blood",
                Some("Avoid with heat conditions or high blood pressure"),
                Some("https://images.unsplash.com/photo-1612871689353-cccf581d667b"),
                &["stew", "roast", "hot pot"],
            ),
        ),
        (
            "walnut",
            food(
                "17",
                "Walnut",
                Warm,
                Some(Winter),
                "Tonifies kidneys, strengthens brain, relieves cough",
                Some("High in calories, eat in moderation"),
                Some("https://images.unsplash.com/photo-1569605803663-e9337d901ff9"),
                &["snack", "baking", "oil"],
            ),
        ),
        (
            "black_sesame",
            food(
                "18",
                "Black Sesame",
                Neutral,
                Some(Winter),
                "Nourishes liver and kidneys, moistens intestines, darkens hair",
                Some("May cause loose stools if consumed in excess"),
                Some("https://images.unsplash.com/photo-1601493700631-ac2d2e397a20"),
                &["dessert", "paste", "topping"],
            ),
        ),
    ]
}

/// Recommended keys per season. Several keys are written with spaces and do
/// not resolve to catalog entries; lookups synthesize placeholders for them.
pub fn seasonal_recommendations() -> Vec<(Season, Vec<&'static str>)> {
    vec![
        (
            Season::Spring,
            vec!["spinach", "bamboo shoots", "strawberry", "green tea"],
        ),
        (
            Season::Summer,
            vec!["watermelon", "cucumber", "mint", "mung bean"],
        ),
        (Season::Fall, vec!["pear", "apple", "sweet potato", "honey"]),
        (
            Season::Winter,
            vec!["ginger", "lamb", "walnut", "black sesame"],
        ),
    ]
}

pub fn compatibility_rules() -> Vec<CompatibilityRule> {
    vec![
        CompatibilityRule::new("ginger", "honey", "Enhances warming effect", Polarity::Good),
        CompatibilityRule::new("cucumber", "mint", "Double cooling for summer", Polarity::Good),
        CompatibilityRule::new("rice", "ginger", "Aids digestion", Polarity::Good),
        CompatibilityRule::new("watermelon", "lamb", "Cold and hot conflict", Polarity::Bad),
        CompatibilityRule::new("cucumber", "ginger", "Opposing energies", Polarity::Bad),
        CompatibilityRule::new(
            "crab",
            "persimmon",
            "Traditional incompatibility",
            Polarity::Bad,
        ),
    ]
}

pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "r1".to_string(),
            name: "Warming Ginger Tea".to_string(),
            ingredients: vec!["ginger".to_string(), "honey".to_string(), "lemon".to_string()],
            instructions: "Slice ginger, boil for 10 mins, add honey and lemon".to_string(),
            prep_time_minutes: 15,
            energetic_balance: EnergeticType::Warm,
        },
        Recipe {
            id: "r2".to_string(),
            name: "Cooling Cucumber Salad".to_string(),
            ingredients: vec![
                "cucumber".to_string(),
                "mint".to_string(),
                "yogurt".to_string(),
            ],
            instructions: "Slice cucumber, mix with mint and yogurt, chill".to_string(),
            prep_time_minutes: 10,
            energetic_balance: EnergeticType::Cold,
        },
    ]
}
