//! Structured-output schema for the lens document, in Gemini's OpenAPI subset.

use serde_json::{json, Value};

use crate::models::LensId;

fn lens_schema(with_artifact: bool) -> Value {
    let mut properties = json!({
        "headline": {"type": "STRING"},
        "content": {"type": "STRING", "description": "Markdown body with ### section headings."},
        "reasoning": {"type": "STRING", "description": "First-person rationale for the editorial slant."},
        "status": {"type": "STRING"},
    });
    if with_artifact {
        properties["artifact"] = json!({
            "type": "STRING",
            "description": "Suggested companion visual.",
        });
    }
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": ["headline", "content", "reasoning", "status"],
    })
}

/// The `responseSchema` mirroring `Project`. Every lens key is required;
/// only the raw source lens omits `artifact`.
pub fn project_response_schema() -> Value {
    let mut lenses = serde_json::Map::new();
    for id in LensId::ALL {
        lenses.insert(id.as_str().to_string(), lens_schema(id != LensId::Source));
    }
    let required: Vec<&str> = LensId::ALL.iter().map(|id| id.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "meta": {
                "type": "OBJECT",
                "properties": {
                    "title": {"type": "STRING"},
                    "role": {"type": "STRING"},
                    "timeline": {"type": "STRING"},
                    "awards": {"type": "ARRAY", "items": {"type": "STRING"}},
                },
                "required": ["title", "role", "timeline", "awards"],
            },
            "lenses": {
                "type": "OBJECT",
                "properties": lenses,
                "required": required,
            },
        },
        "required": ["meta", "lenses"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_all_four_lenses() {
        let schema = project_response_schema();
        let required = schema["properties"]["lenses"]["required"].as_array().unwrap();
        assert_eq!(
            required,
            &vec![json!("recruiter"), json!("engineer"), json!("designer"), json!("source")]
        );
    }

    #[test]
    fn test_source_lens_has_no_artifact_property() {
        let schema = project_response_schema();
        let lenses = &schema["properties"]["lenses"]["properties"];
        assert!(lenses["recruiter"]["properties"].get("artifact").is_some());
        assert!(lenses["source"]["properties"].get("artifact").is_none());
        let required = lenses["engineer"]["required"].as_array().unwrap();
        assert!(!required.contains(&json!("artifact")));
    }
}
