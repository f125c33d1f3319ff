use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Any JSON document. Its shape is only inspected by `first_text`, so a
/// missing or wrong-typed level reads as "no text" instead of a decode error.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct GenerateResponse(Value);

impl GenerateResponse {
    pub fn from_text(text: &str) -> Self {
        Self(serde_json::json!({
            "candidates": [ { "content": { "parts": [ { "text": text } ] } } ]
        }))
    }

    pub fn first_text(&self) -> Option<&str> {
        self.0
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_shape() {
        let body = serde_json::to_value(GenerateRequest::from_prompt("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn first_text_walks_the_nested_path() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Try Dune."},{"text":"ignored"}]}},
               {"content":{"parts":[{"text":"second"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_text(), Some("Try Dune."));
        assert_eq!(GenerateResponse::from_text("x").first_text(), Some("x"));
    }

    #[test]
    fn missing_levels_yield_none() {
        for body in [
            r#"{}"#,
            r#"{"candidates":null}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":{}}"#,
            r#"{"candidates":"abc"}"#,
            r#"{"candidates":[{"content":null}]}"#,
            r#"{"candidates":[{"content":{"parts":null}}]}"#,
            r#"{"candidates":[{"content":{"parts":"x"}}]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":null}]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":42}]}}]}"#,
            r#"{"error":{"code":400,"message":"API key not valid"}}"#,
            r#"[1, 2, 3]"#,
        ] {
            let response: GenerateResponse = serde_json::from_str(body).unwrap();
            assert_eq!(response.first_text(), None, "{body}");
        }
    }

    #[test]
    fn non_json_body_fails_to_decode() {
        assert!(serde_json::from_str::<GenerateResponse>("<html>").is_err());
    }
}
