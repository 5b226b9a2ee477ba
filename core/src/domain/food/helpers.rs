/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest, so `"bamboo shoots"` becomes `"Bamboo Shoots"` and `"mung_bean"`
/// becomes `"Mung_Bean"`.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Case-insensitive substring match; an empty query matches every key.
pub fn key_matches_query(key: &str, query: &str) -> bool {
    key.to_lowercase().contains(&query.to_lowercase())
}
