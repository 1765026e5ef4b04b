// Prompt constants for verse retrieval.

use serde_json::Value;

/// Verse-finding prompt. Replace `{topic}` and `{topic_json}` before sending.
///
/// `{topic_json}` is the topic as a JSON string literal so the example object
/// stays valid JSON whatever the caller typed.
pub const VERSE_PROMPT_TEMPLATE: &str = r#"I'm an educator preparing a lesson on the following topic or principle:
"{topic}"

For educational purposes only, I need to find 3-5 Bible verses that relate to this topic.

For each verse:
1. Provide the specific Bible reference (book, chapter, and verse)
2. Include the verse text
3. Explain how this verse relates to the topic for educational study

This is strictly for educational and comparative religious studies purposes.

IMPORTANT: Return ONLY a raw JSON object with NO markdown formatting, NO code blocks, and NO backticks.

The JSON structure should be:
{
  "topic": {topic_json},
  "verses": [
    {
      "reference": "Book Chapter:Verse",
      "text": "The verse text",
      "explanation": "Educational explanation of how this relates to the topic"
    }
  ]
}"#;

/// Renders the verse-finding prompt for `topic`.
///
/// Placeholders are filled in a single scan of the template, so text inside
/// the topic is never itself treated as a placeholder.
pub fn build_prompt(topic: &str) -> String {
    let topic_json = Value::String(topic.to_string()).to_string();

    let mut out = String::with_capacity(VERSE_PROMPT_TEMPLATE.len() + 2 * topic_json.len());
    let mut rest = VERSE_PROMPT_TEMPLATE;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix("{topic_json}") {
            out.push_str(&topic_json);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{topic}") {
            out.push_str(topic);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_topic() {
        let prompt = build_prompt("The nature and importance of faith");
        assert!(prompt.contains("\"The nature and importance of faith\"\n"));
        assert!(prompt.contains("\"topic\": \"The nature and importance of faith\""));
    }

    #[test]
    fn test_prompt_requests_verse_fields_and_count() {
        let prompt = build_prompt("Hope");
        assert!(prompt.contains("3-5 Bible verses"));
        assert!(prompt.contains("\"reference\""));
        assert!(prompt.contains("\"text\""));
        assert!(prompt.contains("\"explanation\""));
    }

    #[test]
    fn test_prompt_frames_educational_use_and_raw_json() {
        let prompt = build_prompt("Hope");
        assert!(prompt.contains("comparative religious studies"));
        assert!(prompt.contains("NO markdown formatting"));
        assert!(prompt.contains("NO backticks"));
    }

    #[test]
    fn test_prompt_escapes_topic_inside_json_example() {
        let prompt = build_prompt(r#"the "greatest" commandment"#);
        assert!(prompt.contains(r#""topic": "the \"greatest\" commandment""#));
    }

    #[test]
    fn test_prompt_placeholder_text_in_topic_is_not_expanded() {
        let topic = r#"a"{topic}"#;
        let prompt = build_prompt(topic);
        assert!(prompt.contains(r#""topic": "a\"{topic}","#));
        assert!(prompt.contains("\"a\"{topic}\"\n"));

        let json_start = prompt.find("{\n  \"topic\"").unwrap();
        let example: serde_json::Value = serde_json::from_str(&prompt[json_start..]).unwrap();
        assert_eq!(example["topic"], topic);
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        let prompt = build_prompt("Wisdom");
        assert!(!prompt.contains("{topic}"));
        assert!(!prompt.contains("{topic_json}"));
    }

    #[test]
    fn test_prompt_is_pure() {
        assert_eq!(build_prompt("Love"), build_prompt("Love"));
    }
}
