use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};

/// Current UTC time as an RFC 3339 string with millisecond precision.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// String argument, or `""` when absent.
pub(crate) fn str_arg<'a>(args: &'a Map<String, Value>, key: &str) -> &'a str {
    args.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Pretty-printed JSON; falls back to compact output.
pub(crate) fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Concatenated text of every `text` item in a tool result.
#[cfg(test)]
pub(crate) fn result_text(result: &pool_protocol::ToolCallResult) -> String {
    result
        .content
        .iter()
        .filter(|c| c.content_type == "text")
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_utc_with_millis() {
        let ts = now_rfc3339();
        assert!(ts.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn str_arg_defaults_to_empty() {
        let mut args = Map::new();
        args.insert("a".into(), Value::from("x"));
        args.insert("n".into(), Value::from(3));
        assert_eq!(str_arg(&args, "a"), "x");
        assert_eq!(str_arg(&args, "n"), "");
        assert_eq!(str_arg(&args, "missing"), "");
    }
}
