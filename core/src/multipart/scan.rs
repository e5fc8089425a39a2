/*
 * scan.rs
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

//! Byte-splitting primitives. All results are `Bytes` views into the input; nothing is copied.

use bytes::Bytes;
use memchr::memmem;

pub const CRLF: &[u8] = b"\r\n";
pub const DOUBLE_CRLF: &[u8] = b"\r\n\r\n";

/// Position of the first occurrence of `needle` in `haystack`.
#[inline]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    memmem::find(haystack, needle)
}

/// Split on every occurrence of `delimiter`. N occurrences yield N+1 segments (some may be empty).
pub fn split(buf: &Bytes, delimiter: &[u8]) -> Vec<Bytes> {
    let mut segments = Vec::new();
    if delimiter.is_empty() {
        segments.push(buf.clone());
        return segments;
    }
    let mut cur = 0;
    for n in memmem::find_iter(buf, delimiter) {
        segments.push(buf.slice(cur..n));
        cur = n + delimiter.len();
    }
    segments.push(buf.slice(cur..));
    segments
}

/// Split at the first occurrence of `delimiter`; the delimiter itself is dropped.
pub fn split_once(buf: &Bytes, delimiter: &[u8]) -> Option<(Bytes, Bytes)> {
    let n = find(buf, delimiter)?;
    Some((buf.slice(..n), buf.slice(n + delimiter.len()..)))
}

/// Drop one leading and one trailing CRLF, each only when present.
pub fn trim_crlf(buf: &Bytes) -> Bytes {
    let mut start = 0;
    let mut end = buf.len();
    if buf.starts_with(CRLF) {
        start = CRLF.len();
    }
    if end - start >= CRLF.len() && buf[start..end].ends_with(CRLF) {
        end -= CRLF.len();
    }
    buf.slice(start..end)
}

/// Bytes before the first CRLF, or None when the buffer has no line terminator.
pub fn first_line(buf: &[u8]) -> Option<&[u8]> {
    find(buf, CRLF).map(|n| &buf[..n])
}
