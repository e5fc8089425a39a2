/*
 * content_disposition.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Formdata, a multipart/form-data inspection library.
 *
 * Formdata is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Formdata is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Formdata.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Content-Disposition header of a form-data part (RFC 7578 subset).

use std::collections::HashMap;

/// The only directive whose parameters are interpreted.
pub const FORM_DATA: &str = "form-data";

/// Directive plus `key=value` parameters. Empty (no directive) unless the header said `form-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDisposition {
    directive: Option<String>,
    parameter_map: HashMap<String, String>,
}

impl ContentDisposition {
    pub fn new<I, K, V>(directive: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            directive: Some(directive.into()),
            parameter_map: parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get_directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }

    pub fn is_form_data(&self) -> bool {
        self.directive.as_deref() == Some(FORM_DATA)
    }

    /// Parameter lookup. Keys are matched exactly as they appeared in the header.
    pub fn get_parameter(&self, key: &str) -> Option<&str> {
        self.parameter_map.get(key).map(String::as_str)
    }

    pub fn has_parameter(&self, key: &str) -> bool {
        self.parameter_map.contains_key(key)
    }

    pub fn get_name(&self) -> Option<&str> {
        self.get_parameter("name")
    }

    pub fn get_filename(&self) -> Option<&str> {
        self.get_parameter("filename")
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameter_map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when no directive was recorded (absent header, or a directive other than form-data).
    pub fn is_empty(&self) -> bool {
        self.directive.is_none() && self.parameter_map.is_empty()
    }
}

/// Parse the value following `Content-Disposition:`.
///
/// Returns None when the directive is not `form-data`; the caller leaves its disposition untouched.
/// Tokens are separated by `;` without regard to quoting, so a quoted value containing `;` is cut.
pub fn parse_content_disposition(value: &str) -> Option<ContentDisposition> {
    let mut tokens = value.trim().split(';');
    let directive = tokens.next()?.trim();
    if directive != FORM_DATA {
        log::debug!("ignoring Content-Disposition directive {:?}", directive);
        return None;
    }
    let mut parameter_map = HashMap::new();
    for token in tokens {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        parameter_map.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    Some(ContentDisposition {
        directive: Some(directive.to_string()),
        parameter_map,
    })
}

/// Strip exactly one pair of surrounding double quotes. Escapes inside are left as they are.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_data_with_name_and_filename() {
        let cd = parse_content_disposition(r#" form-data; name="upload"; filename="a.txt""#).unwrap();
        assert_eq!(cd.get_directive(), Some("form-data"));
        assert_eq!(cd.get_name(), Some("upload"));
        assert_eq!(cd.get_filename(), Some("a.txt"));
        assert!(cd.is_form_data());
    }

    #[test]
    fn other_directive_is_dropped() {
        assert!(parse_content_disposition(r#"attachment; filename="a.txt""#).is_none());
        assert!(parse_content_disposition("Form-Data; name=x").is_none());
    }

    #[test]
    fn unquoted_and_spaced_values() {
        let cd = parse_content_disposition("form-data ;  name = field1 ; size=12").unwrap();
        assert_eq!(cd.get_name(), Some("field1"));
        assert_eq!(cd.get_parameter("size"), Some("12"));
    }

    #[test]
    fn only_one_quote_pair_is_stripped() {
        let cd = parse_content_disposition(r#"form-data; name=""x""; filename="a\"b.txt""#).unwrap();
        assert_eq!(cd.get_name(), Some(r#""x""#));
        assert_eq!(cd.get_filename(), Some(r#"a\"b.txt"#));
    }

    #[test]
    fn empty_quoted_value() {
        let cd = parse_content_disposition(r#"form-data; name="f"; filename="""#).unwrap();
        assert_eq!(cd.get_filename(), Some(""));
        let cd = parse_content_disposition(r#"form-data; name=""#).unwrap();
        assert_eq!(cd.get_name(), Some("\""));
    }

    #[test]
    fn value_keeps_text_after_first_equals() {
        let cd = parse_content_disposition("form-data; name=a=b").unwrap();
        assert_eq!(cd.get_name(), Some("a=b"));
    }

    #[test]
    fn tokens_without_equals_are_skipped() {
        let cd = parse_content_disposition("form-data; flag; =orphan; name=x;").unwrap();
        assert_eq!(cd.get_name(), Some("x"));
        assert!(!cd.has_parameter("flag"));
        assert_eq!(cd.parameters().count(), 1);
    }

    #[test]
    fn directive_alone() {
        let cd = parse_content_disposition("form-data").unwrap();
        assert_eq!(cd.get_directive(), Some("form-data"));
        assert_eq!(cd.parameters().count(), 0);
        assert!(!cd.is_empty());
        assert!(ContentDisposition::default().is_empty());
    }
}
