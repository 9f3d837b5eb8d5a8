//! JavaScript/TypeScript bindings for MatchMaster
//!
//! Thin wrapper around `matchmaster-core` compiled to WebAssembly.
//! ZERO logic here — all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

/// Normalize text to its canonical key.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Idempotent: normalize(normalize(x)) === normalize(x)
///   - Output only contains [a-z0-9]
///
/// @param text - raw item text
/// @returns canonical key, possibly empty
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    matchmaster_core::normalize(text)
}

/// Match a participants snapshot.
///
/// @param participants - JSON array of `{ id, name, items }`,
///   or `{ participants: [...] }`
/// @returns JSON string: { results: [{ key, label, count }], totalParticipants }
/// @throws Error if the snapshot is not valid participant JSON
#[wasm_bindgen(js_name = "matchParticipants")]
pub fn match_participants(participants: &str) -> Result<String, JsError> {
    match_json(participants).map_err(|e| JsError::new(&e))
}

/// Snapshot JSON in, ResultSet JSON out; kept free of JS types so it runs natively
fn match_json(participants: &str) -> Result<String, String> {
    let participants =
        matchmaster_core::load_participants(participants).map_err(|e| e.to_string())?;

    let result = matchmaster_core::match_participants(&participants);
    serde_json::to_string(&result).map_err(|e| format!("Serialization error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Crème Brûlée"), "cremebrulee");
        assert_eq!(normalize("  ?! "), "");
    }

    #[test]
    fn test_match_json() {
        let out = match_json(
            r#"{"participants": [{"id":0,"items":["Pizza","Sushi"]},{"id":1,"items":["pizza ","Tacos"]}]}"#,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["totalParticipants"], 2);
        assert_eq!(json["results"][0]["label"], "Pizza");
        assert_eq!(json["results"][0]["count"], 2);
        assert_eq!(json["results"][2]["key"], "tacos");
    }

    #[test]
    fn test_match_json_malformed() {
        let err = match_json("not json").unwrap_err();
        assert!(err.contains("Invalid input"));
    }
}
