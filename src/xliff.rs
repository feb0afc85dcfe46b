use once_cell::sync::Lazy;
use regex::Regex;

// @module: XLIFF document helpers

// @const: Opening of a trans-unit with its numeric id
static TRANS_UNIT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<trans-unit id="(\d*)""#).expect("Invalid trans-unit regex")
});

/// Id of the first trans-unit in the document
pub fn first_trans_unit_id(text: &str) -> Option<String> {
    TRANS_UNIT_ID_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

/// Ids of every trans-unit, in document order
pub fn trans_unit_ids(text: &str) -> Vec<String> {
    TRANS_UNIT_ID_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
        .collect()
}
