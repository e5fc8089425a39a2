/*
 * render.rs
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

//! Human-readable rendering of a multipart body.
//!
//! Each part is printed as its boundary line, its raw header block, a blank line and its payload.
//! Textual payloads are decoded as UTF-8; binary payloads are shown as base64 when shorter than
//! the configured limit, otherwise as `<N octets>: sha256 <hex>`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};

use crate::config::RenderOptions;
use crate::multipart::content_type::is_textual;
use crate::multipart::parser::parse_slice;
use crate::multipart::part::{Multipart, Part};

const LINE_FEED: &str = "\r\n";

/// Parse and render `body`. Returns an empty string when nothing could be parsed.
pub fn pretty_print(
    body: &[u8],
    boundary: Option<&str>,
    textual_content_types: Option<&[String]>,
    max_size_to_show_full_binary_payload: Option<usize>,
) -> String {
    let options = RenderOptions {
        textual_content_types: textual_content_types.map(<[String]>::to_vec).unwrap_or_default(),
        max_size_to_show_full_binary_payload: max_size_to_show_full_binary_payload.unwrap_or(0),
    };
    pretty_print_with(body, boundary, &options)
}

pub fn pretty_print_with(body: &[u8], boundary: Option<&str>, options: &RenderOptions) -> String {
    render(&parse_slice(body, boundary), options)
}

/// Render an already parsed body.
pub fn render(multipart: &Multipart, options: &RenderOptions) -> String {
    let Some(boundary) = multipart.get_boundary() else {
        return String::new();
    };
    let start_line = format!("--{}", boundary);
    let end_line = format!("{}--{}--", LINE_FEED, boundary);
    let blocks: Vec<String> = multipart
        .parts()
        .iter()
        .enumerate()
        .map(|(index, part)| {
            if part.is_degraded() {
                log::warn!("part {} has no headers and data, rendering it empty", index);
            }
            let headers = part
                .get_headers()
                .map(|h| String::from_utf8_lossy(h).into_owned())
                .unwrap_or_default();
            let data = render_data(part, options);
            [start_line.as_str(), headers.as_str(), "", data.as_str()].join(LINE_FEED)
        })
        .collect();
    let mut out = blocks.join(LINE_FEED);
    out.push_str(&end_line);
    out
}

/// Payload of one part as display text. A degraded part renders as an empty string.
pub fn render_data(part: &Part, options: &RenderOptions) -> String {
    let Some(data) = part.get_data() else {
        return String::new();
    };
    if is_textual(part.get_content_type(), &options.textual_content_types) {
        String::from_utf8_lossy(data).into_owned()
    } else if data.len() < options.max_size_to_show_full_binary_payload {
        BASE64.encode(data)
    } else {
        summarize(data)
    }
}

/// `<N octets>: sha256 <hex digest>`
pub fn summarize(data: &[u8]) -> String {
    format!("<{} octets>: sha256 {:x}", data.len(), Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn summary_of_empty_payload() {
        assert_eq!(summarize(b""), format!("<0 octets>: sha256 {}", EMPTY_SHA256));
    }

    #[test]
    fn summary_of_abc() {
        assert_eq!(
            summarize(b"abc"),
            "<3 octets>: sha256 ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn textual_part_round_trips_text() {
        let body = "--B\r\nContent-Disposition: form-data; name=\"f\"\r\nContent-Type: text/plain\r\n\r\nhéllo wörld\r\n--B--";
        let out = pretty_print(body.as_bytes(), None, None, None);
        assert_eq!(
            out,
            "--B\r\nContent-Disposition: form-data; name=\"f\"\r\nContent-Type: text/plain\r\n\r\nhéllo wörld\r\n--B--"
        );
    }

    #[test]
    fn binary_part_is_summarized_by_default() {
        let body = b"--B\r\nContent-Type: image/png\r\n\r\nabc\r\n--B--";
        let out = pretty_print(body, None, None, None);
        assert_eq!(
            out,
            "--B\r\nContent-Type: image/png\r\n\r\n<3 octets>: sha256 ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\r\n--B--"
        );
    }

    #[test]
    fn binary_part_below_limit_is_base64() {
        let body = b"--B\r\nContent-Type: image/png\r\n\r\nabc\r\n--B--";
        let out = pretty_print(body, None, None, Some(4));
        assert_eq!(out, "--B\r\nContent-Type: image/png\r\n\r\nYWJj\r\n--B--");
        let out = pretty_print(body, None, None, Some(3));
        assert!(out.contains("<3 octets>"));
    }

    #[test]
    fn empty_binary_payload_is_summarized() {
        let body = b"--B\r\nContent-Type: application/octet-stream\r\n\r\n\r\n\r\n--B\r\nContent-Type: text/plain\r\n\r\nx\r\n--B--";
        let out = pretty_print(body, None, None, None);
        assert!(out.contains(&format!("<0 octets>: sha256 {}", EMPTY_SHA256)));
    }

    #[test]
    fn extra_textual_types_are_added() {
        let body = b"--B\r\nContent-Type: text/csv; charset=utf-8\r\n\r\na,b\r\n--B\r\nX-A: 1\r\n\r\nplain\r\n--B--";
        let extra = vec!["text/csv".to_string()];
        let out = pretty_print(body, Some("B"), Some(extra.as_slice()), None);
        assert_eq!(
            out,
            "--B\r\nContent-Type: text/csv; charset=utf-8\r\n\r\na,b\r\n--B\r\nX-A: 1\r\n\r\nplain\r\n--B--"
        );
    }

    #[test]
    fn degraded_part_renders_empty() {
        let body = b"--B\r\nX-Broken: yes\r\n--B\r\nContent-Type: text/plain\r\n\r\nok\r\n--B--";
        let out = pretty_print(body, None, None, None);
        assert_eq!(out, "--B\r\n\r\n\r\n\r\n--B\r\nContent-Type: text/plain\r\n\r\nok\r\n--B--");
    }

    mod capture {
        use std::sync::Mutex;

        use log::{Level, Log, Metadata, Record};

        pub static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

        struct WarningLog;

        impl Log for WarningLog {
            fn enabled(&self, metadata: &Metadata) -> bool {
                metadata.level() <= Level::Warn
            }

            fn log(&self, record: &Record) {
                if self.enabled(record.metadata()) {
                    if let Ok(mut w) = WARNINGS.lock() {
                        w.push(record.args().to_string());
                    }
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: WarningLog = WarningLog;

        pub fn install() {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    #[test]
    fn degraded_part_is_reported() {
        capture::install();
        let body = b"--B\r\nX-Broken: yes\r\n--B\r\nContent-Type: text/plain\r\n\r\nok\r\n--B--";
        pretty_print(body, None, None, None);
        let warnings = capture::WARNINGS.lock().unwrap();
        assert!(warnings
            .iter()
            .any(|w| w == "part 0 has no headers and data, rendering it empty"));
    }

    #[test]
    fn unparseable_body_renders_empty() {
        assert_eq!(pretty_print(b"", None, None, None), "");
        assert_eq!(pretty_print(b"no boundary here\r\n", None, None, None), "");
        assert_eq!(render(&Multipart::empty(), &RenderOptions::default()), "");
    }

    #[test]
    fn options_struct_matches_positional_arguments() {
        let body = b"--B\r\nContent-Type: image/png\r\n\r\nabc\r\n--B--";
        let options = RenderOptions::new().max_size_to_show_full_binary_payload(10);
        assert_eq!(
            pretty_print_with(body, None, &options),
            pretty_print(body, None, None, Some(10))
        );
    }
}
