/*
 * content_type.rs
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

//! Content-Type of a part: media type extraction and the textual/binary decision.

/// Assumed when a part carries no Content-Type header.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

/// Media types always rendered as UTF-8 text.
pub const WELL_KNOWN_TEXTUAL_CONTENT_TYPES: &[&str] = &[
    "text/plain",
    "text/html",
    "text/xml",
    "text/javascript",
    "application/json",
];

/// Media type without parameters: `text/plain; charset=utf-8` gives `text/plain`.
pub fn media_type(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or("").trim()
}

/// Whether a part with this Content-Type (None means the default) is decoded as text.
/// `extra` is consulted in addition to the well-known list. Media types compare exactly, so
/// `Text/HTML` is binary.
pub fn is_textual<S: AsRef<str>>(content_type: Option<&str>, extra: &[S]) -> bool {
    let media = media_type(content_type.unwrap_or(DEFAULT_CONTENT_TYPE));
    WELL_KNOWN_TEXTUAL_CONTENT_TYPES
        .iter()
        .copied()
        .chain(extra.iter().map(|t| t.as_ref().trim()))
        .any(|t| t == media)
}
