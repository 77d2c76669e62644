use std::collections::HashMap;

use tera::{Value, try_get_value};

/// Entity-encodes `& < > " '`. Other characters, `/` included, are kept.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub(super) fn html_entities(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = try_get_value!("html_entities", "value", String, value);
    Ok(Value::String(escape_html(&s)))
}
