/*
 * parser.rs
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

//! multipart/form-data parser over a complete in-memory body.
//!
//! The body is cut at the first closing delimiter (`CRLF--boundary--`), the remainder is split on
//! every `--boundary CRLF` that opens the body or follows a CRLF, and each non-empty section is divided at its first blank line into a
//! header block and a payload. Nothing here panics or returns an error to `parse` callers: a body
//! that cannot be decomposed yields [`Multipart::empty`], a section without a blank line yields a
//! degraded [`Part`].

use bytes::Bytes;

use crate::multipart::scan::{first_line, find, split, split_once, trim_crlf, CRLF, DOUBLE_CRLF};
use crate::multipart::content_disposition::parse_content_disposition;
use crate::multipart::error::ParseError;
use crate::multipart::part::{Multipart, Part};
use crate::multipart::utils::is_valid_boundary;

const CONTENT_DISPOSITION: &str = "Content-Disposition:";
const CONTENT_TYPE: &str = "Content-Type:";

/// Parse `body`, using `boundary` when given (and non-empty) or detecting it from the first line.
pub fn parse(body: Bytes, boundary: Option<&str>) -> Multipart {
    match try_parse(body, boundary) {
        Ok(multipart) => multipart,
        Err(ParseError::EmptyBody) => Multipart::empty(),
        Err(e @ ParseError::BoundaryNotDetected) => {
            log::warn!("{}", e);
            Multipart::empty()
        }
        Err(e) => {
            log::debug!("{}", e);
            Multipart::empty()
        }
    }
}

/// Same as [`parse`] for a borrowed buffer. The body is copied once; parts share that copy.
pub fn parse_slice(body: &[u8], boundary: Option<&str>) -> Multipart {
    parse(Bytes::copy_from_slice(body), boundary)
}

/// Parse, reporting why a body could not be decomposed instead of returning the empty value.
pub fn try_parse(body: Bytes, boundary: Option<&str>) -> Result<Multipart, ParseError> {
    if body.is_empty() {
        return Err(ParseError::EmptyBody);
    }
    let boundary = match boundary.filter(|b| !b.is_empty()) {
        Some(b) => b.to_string(),
        None => detect_boundary(&body).ok_or(ParseError::BoundaryNotDetected)?,
    };
    if !is_valid_boundary(&boundary) {
        log::debug!("boundary {:?} is not RFC 2046 conformant", boundary);
    }

    let start_line = format!("--{}\r\n", boundary);
    let delimiter = format!("\r\n{}", start_line);
    let end_line = format!("\r\n--{}--", boundary);
    let end = find(&body, end_line.as_bytes()).ok_or_else(|| ParseError::MissingEndMarker {
        boundary: boundary.clone(),
    })?;
    // A start line only counts at the top of the body or directly after a CRLF.
    let region = body.slice(..end);
    let region = if region.starts_with(start_line.as_bytes()) {
        region.slice(start_line.len()..)
    } else {
        region
    };
    let sections: Vec<Bytes> = split(&region, delimiter.as_bytes())
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if sections.is_empty() {
        return Err(ParseError::NoSections { boundary });
    }
    log::debug!("boundary {:?}: {} section(s)", boundary, sections.len());

    let parts = sections.iter().map(parse_section).collect();
    Ok(Multipart::new(boundary, parts))
}

/// Boundary from a first line of the form `--boundary`. The line must be CRLF-terminated UTF-8.
fn detect_boundary(body: &[u8]) -> Option<String> {
    let line = std::str::from_utf8(first_line(body)?).ok()?;
    line.strip_prefix("--")
        .filter(|b| !b.is_empty())
        .map(str::to_string)
}

fn parse_section(section: &Bytes) -> Part {
    let section = trim_crlf(section);
    let Some((headers, data)) = split_once(&section, DOUBLE_CRLF) else {
        log::warn!("part must have headers and data");
        return Part::degraded();
    };
    let mut part = Part::new(headers.clone(), trim_crlf(&data));
    for line in split(&headers, CRLF) {
        process_header_line(&mut part, &String::from_utf8_lossy(&line));
    }
    part
}

fn process_header_line(part: &mut Part, line: &str) {
    if let Some(value) = line.strip_prefix(CONTENT_DISPOSITION) {
        if let Some(cd) = parse_content_disposition(value) {
            part.set_content_disposition(cd);
        }
    } else if let Some(value) = line.strip_prefix(CONTENT_TYPE) {
        part.set_content_type(value.trim());
    } else if let Some((name, value)) = split_header(line) {
        part.set_extension(name, value);
    }
}

/// `name: value` split at the first colon. Lines without a colon or with an empty name are skipped.
fn split_header(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim()))
}
