/*
 * part.rs
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

//! Parse result: Multipart and its Parts.

use std::collections::HashMap;

use bytes::Bytes;

use super::content_disposition::ContentDisposition;
use super::content_type::{media_type, DEFAULT_CONTENT_TYPE};

/// One section of a multipart body.
///
/// `headers` and `data` are views into the parsed buffer. Both are None for a degraded part,
/// i.e. a section without a blank line between its header block and its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Part {
    content_disposition: ContentDisposition,
    content_type: Option<String>,
    headers: Option<Bytes>,
    data: Option<Bytes>,
    extensions: HashMap<String, String>,
}

impl Part {
    pub(crate) fn degraded() -> Self {
        Self::default()
    }

    pub(crate) fn new(headers: Bytes, data: Bytes) -> Self {
        Self {
            headers: Some(headers),
            data: Some(data),
            ..Self::default()
        }
    }

    pub(crate) fn set_content_disposition(&mut self, cd: ContentDisposition) {
        self.content_disposition = cd;
    }

    pub(crate) fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    pub(crate) fn set_extension(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extensions.insert(key.into(), value.into());
    }

    pub fn get_content_disposition(&self) -> &ContentDisposition {
        &self.content_disposition
    }

    /// Raw Content-Type value, parameters included.
    pub fn get_content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Media type without parameters, `text/plain` when the header is absent.
    pub fn get_media_type(&self) -> &str {
        media_type(self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE))
    }

    /// Header block exactly as it appeared, without the blank separator line.
    pub fn get_headers(&self) -> Option<&Bytes> {
        self.headers.as_ref()
    }

    pub fn get_data(&self) -> Option<&Bytes> {
        self.data.as_ref()
    }

    /// Value of a header other than Content-Disposition and Content-Type, by exact key.
    pub fn get_extension(&self, key: &str) -> Option<&str> {
        self.extensions.get(key).map(String::as_str)
    }

    pub fn extensions(&self) -> &HashMap<String, String> {
        &self.extensions
    }

    pub fn get_name(&self) -> Option<&str> {
        self.content_disposition.get_name()
    }

    pub fn get_filename(&self) -> Option<&str> {
        self.content_disposition.get_filename()
    }

    pub fn is_file(&self) -> bool {
        self.get_filename().is_some()
    }

    pub fn is_degraded(&self) -> bool {
        self.headers.is_none() && self.data.is_none()
    }
}

/// Parsed body. The empty value (no boundary, no parts) stands for "nothing could be parsed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multipart {
    boundary: Option<String>,
    parts: Vec<Part>,
}

impl Multipart {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(boundary: String, parts: Vec<Part>) -> Self {
        Self {
            boundary: Some(boundary),
            parts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_none() && self.parts.is_empty()
    }

    pub fn get_boundary(&self) -> Option<&str> {
        self.boundary.as_deref()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// First part whose Content-Disposition name equals `name`.
    pub fn get_part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.get_name() == Some(name))
    }
}
