/*
 * utils.rs
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

//! Boundary conformance checks (RFC 2046). Used for diagnostics only; parsing accepts any boundary.

/// Checks if a character is valid in a MIME boundary (RFC 2046 bchars, excluding space).
#[inline]
pub fn is_boundary_char(c: u8) -> bool {
    matches!(c,
        b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' |
        b'\'' | b'(' | b')' | b'+' | b'_' | b',' | b'-' | b'.' |
        b'/' | b':' | b'=' | b'?'
    )
}

/// Validates MIME boundary: 1-70 chars from the boundary set, space allowed except last.
pub fn is_valid_boundary(boundary: &str) -> bool {
    let b = boundary.as_bytes();
    match b.split_last() {
        Some((&last, rest)) => {
            b.len() <= 70 && is_boundary_char(last) && rest.iter().all(|&c| c == b' ' || is_boundary_char(c))
        }
        None => false,
    }
}
