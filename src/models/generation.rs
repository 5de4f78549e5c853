use crate::errors::RelayError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "tinyllama";

/// Inbound body of `POST /api/ollama`. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub struct GenerationRequest {
    pub prompt: Option<Value>,
    pub model: Option<String>,
}

/// Body forwarded to the generation service.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GeneratePayload {
    pub prompt: String,
    pub model: String,
}

impl GenerationRequest {
    pub fn into_payload(self) -> Result<GeneratePayload, RelayError> {
        let prompt = match self.prompt {
            Some(Value::String(prompt)) if !prompt.is_empty() => prompt,
            Some(value) if is_truthy(&value) => {
                return Err(RelayError::InvalidBody(format!(
                    "prompt must be a string, got {}",
                    value
                )))
            }
            _ => return Err(RelayError::MissingPrompt),
        };

        Ok(GeneratePayload {
            prompt,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

// Empty strings, zero, false, null and empty containers all count as no prompt.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: serde_json::Value) -> GenerationRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn model_defaults_to_tinyllama() {
        let payload = parse(json!({ "prompt": "hi" })).into_payload().unwrap();
        assert_eq!(payload.model, "tinyllama");

        let payload = parse(json!({ "prompt": "hi", "model": null }))
            .into_payload()
            .unwrap();
        assert_eq!(payload.model, "tinyllama");
    }

    #[test]
    fn prompt_and_model_pass_through_untouched() {
        let payload = parse(json!({
            "prompt": "  Why is the sky blue?\n",
            "model": "llama3",
            "temperature": 0.2
        }))
        .into_payload()
        .unwrap();
        assert_eq!(
            payload,
            GeneratePayload {
                prompt: "  Why is the sky blue?\n".to_string(),
                model: "llama3".to_string(),
            }
        );
    }

    #[test]
    fn missing_empty_or_null_prompt_is_rejected() {
        for body in [
            json!({}),
            json!({ "prompt": "" }),
            json!({ "prompt": null, "model": "llama3" }),
            json!({ "prompt": false }),
            json!({ "prompt": 0 }),
            json!({ "prompt": 0.0 }),
            json!({ "prompt": [] }),
            json!({ "prompt": {} }),
        ] {
            assert!(matches!(
                parse(body).into_payload(),
                Err(RelayError::MissingPrompt)
            ));
        }
    }

    #[test]
    fn non_string_prompt_is_invalid() {
        for body in [
            json!({ "prompt": 42 }),
            json!({ "prompt": true }),
            json!({ "prompt": ["hi"] }),
        ] {
            assert!(matches!(
                parse(body).into_payload(),
                Err(RelayError::InvalidBody(_))
            ));
        }
    }

    #[test]
    fn payload_serializes_only_prompt_and_model() {
        let payload = GeneratePayload {
            prompt: "hi".to_string(),
            model: "tinyllama".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "prompt": "hi", "model": "tinyllama" })
        );
    }
}
