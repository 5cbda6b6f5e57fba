//! Pull the blurb out of whatever shape the completion service sent back.

use serde_json::Value;

/// First non-blank text found, trying in order:
/// 1. `output[].content[]` items of type `output_text` (responses protocol)
/// 2. top-level `output_text`
/// 3. flat `text` / `content` strings on `output[]` items
/// 4. `choices[].message.content` or `choices[].text` (chat protocol)
pub fn extract_text(body: &Value) -> Option<String> {
    let output = body.get("output").and_then(Value::as_array);

    let structured = output.and_then(|items| {
        items
            .iter()
            .filter(|item| item.get("type").and_then(Value::as_str) == Some("message"))
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten()
            .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .find_map(non_blank)
    });

    structured
        .or_else(|| body.get("output_text").and_then(Value::as_str).and_then(non_blank))
        .or_else(|| {
            output.and_then(|items| {
                items.iter().find_map(|item| {
                    ["text", "content"]
                        .iter()
                        .filter_map(|key| item.get(*key).and_then(Value::as_str))
                        .find_map(non_blank)
                })
            })
        })
        .or_else(|| {
            body.get("choices")
                .and_then(Value::as_array)
                .and_then(|choices| {
                    choices.iter().find_map(|choice| {
                        choice
                            .pointer("/message/content")
                            .and_then(Value::as_str)
                            .or_else(|| choice.get("text").and_then(Value::as_str))
                            .and_then(non_blank)
                    })
                })
        })
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
