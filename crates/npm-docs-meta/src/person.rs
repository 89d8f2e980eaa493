//! npm "person" fields (`author`, `contributors`).
//!
//! npm accepts either a string `"Name <email> (url)"` or an object with
//! `name`, `email` and `url` keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Person {
    /// Read a person from a manifest value in either npm form
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => parse_person(s),
            Value::Object(_) => serde_json::from_value::<Person>(value.clone())
                .ok()
                .and_then(normalize),
            _ => None,
        }
    }
}

/// Parse `"Name <email> (url)"`; email and url are optional.
///
/// Returns `None` when no name is present.
pub fn parse_person(input: &str) -> Option<Person> {
    let (rest, url) = take_delimited(input, '(', ')');
    let (rest, email) = take_delimited(&rest, '<', '>');

    normalize(Person {
        name: rest,
        email,
        url,
    })
}

/// Split off the first `open ... close` section, returning the remainder and
/// the trimmed inner text.
fn take_delimited(input: &str, open: char, close: char) -> (String, Option<String>) {
    let Some(start) = input.find(open) else {
        return (input.to_string(), None);
    };
    let Some(len) = input[start + open.len_utf8()..].find(close) else {
        return (input.to_string(), None);
    };

    let inner_start = start + open.len_utf8();
    let inner = input[inner_start..inner_start + len].to_string();
    let mut rest = input[..start].to_string();
    rest.push_str(&input[inner_start + len + close.len_utf8()..]);

    (rest, Some(inner))
}

fn normalize(person: Person) -> Option<Person> {
    let clean = |s: String| {
        let s = s.trim().to_string();
        (!s.is_empty()).then_some(s)
    };

    Some(Person {
        name: clean(person.name)?,
        email: person.email.and_then(clean),
        url: person.url.and_then(clean),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_string() {
        let person = parse_person("Jane Doe <jane@example.com> (https://jane.dev)").unwrap();
        assert_eq!(person.name, "Jane Doe");
        assert_eq!(person.email.as_deref(), Some("jane@example.com"));
        assert_eq!(person.url.as_deref(), Some("https://jane.dev"));
    }

    #[test]
    fn test_parse_name_only() {
        let person = parse_person("  Jane  ").unwrap();
        assert_eq!(person.name, "Jane");
        assert_eq!(person.email, None);
        assert_eq!(person.url, None);
    }

    #[test]
    fn test_parse_url_before_email() {
        let person = parse_person("Jane (https://jane.dev) <jane@example.com>").unwrap();
        assert_eq!(person.name, "Jane");
        assert_eq!(person.email.as_deref(), Some("jane@example.com"));
        assert_eq!(person.url.as_deref(), Some("https://jane.dev"));
    }

    #[test]
    fn test_parse_without_name() {
        assert_eq!(parse_person("<jane@example.com>"), None);
        assert_eq!(parse_person(""), None);
    }

    #[test]
    fn test_from_object() {
        let person = Person::from_value(&json!({"name": "Jane", "email": "jane@example.com"})).unwrap();
        assert_eq!(person.name, "Jane");
        assert_eq!(person.email.as_deref(), Some("jane@example.com"));

        assert_eq!(Person::from_value(&json!({"email": "jane@example.com"})), None);
        assert_eq!(Person::from_value(&json!(42)), None);
    }
}
