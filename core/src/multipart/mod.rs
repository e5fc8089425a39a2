/*
 * mod.rs
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

//! multipart/form-data parsing (complete in-memory bodies) and pretty printing.

mod scan;
mod content_disposition;
mod content_type;
mod error;
mod parser;
mod part;
mod render;
mod utils;

pub use content_disposition::{parse_content_disposition, ContentDisposition, FORM_DATA};
pub use content_type::{is_textual, media_type, DEFAULT_CONTENT_TYPE, WELL_KNOWN_TEXTUAL_CONTENT_TYPES};
pub use error::{ParseError, RenderError};
pub use parser::{parse, parse_slice, try_parse};
pub use part::{Multipart, Part};
pub use render::{pretty_print, pretty_print_with, render, render_data, summarize};
pub use utils::{is_boundary_char, is_valid_boundary};
