/*
 * config.rs
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

//! Render options: which media types are shown as text and how large a binary payload
//! may be before it is summarized. Loadable from JSON (`textualContentTypes`,
//! `maxSizeToShowFullBinaryPayload`, both optional).

use serde::{Deserialize, Serialize};

use crate::multipart::RenderError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Media types decoded as UTF-8 in addition to the well-known textual list.
    pub textual_content_types: Vec<String>,
    /// Binary payloads strictly shorter than this are shown in full as base64; others are summarized.
    pub max_size_to_show_full_binary_payload: usize,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn textual_content_type(mut self, media_type: impl Into<String>) -> Self {
        self.textual_content_types.push(media_type.into());
        self
    }

    #[must_use]
    pub fn max_size_to_show_full_binary_payload(mut self, size: usize) -> Self {
        self.max_size_to_show_full_binary_payload = size;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_always_summarize() {
        let o = RenderOptions::default();
        assert!(o.textual_content_types.is_empty());
        assert_eq!(o.max_size_to_show_full_binary_payload, 0);
    }

    #[test]
    fn from_json_camel_case() {
        let o = RenderOptions::from_json(
            r#"{"textualContentTypes":["text/csv"],"maxSizeToShowFullBinaryPayload":1024}"#,
        )
        .unwrap();
        assert_eq!(o.textual_content_types, vec!["text/csv".to_string()]);
        assert_eq!(o.max_size_to_show_full_binary_payload, 1024);
    }

    #[test]
    fn from_json_partial_and_empty() {
        let o = RenderOptions::from_json(r#"{"maxSizeToShowFullBinaryPayload":8}"#).unwrap();
        assert_eq!(o, RenderOptions::new().max_size_to_show_full_binary_payload(8));
        assert_eq!(RenderOptions::from_json("{}").unwrap(), RenderOptions::default());
    }

    #[test]
    fn from_json_rejects_bad_input() {
        assert!(RenderOptions::from_json(r#"{"maxSizeToShowFullBinaryPayload":-1}"#).is_err());
        assert!(RenderOptions::from_json("not json").is_err());
    }

    #[test]
    fn json_round_trip_via_builder() {
        let o = RenderOptions::new()
            .textual_content_type("text/csv")
            .max_size_to_show_full_binary_payload(16);
        let json = o.to_json().unwrap();
        assert_eq!(RenderOptions::from_json(&json).unwrap(), o);
    }
}
