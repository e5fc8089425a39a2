/*
 * lib.rs
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

//! C FFI for formdata core. Bodies are passed as (pointer, length); string parameters are UTF-8
//! NUL-terminated and may be NULL where documented. Returned strings are freed with
//! formdata_free_string.

use libc::{c_char, c_int, size_t};
use std::ffi::{CStr, CString};
use std::ptr;
use std::slice;

use formdata_core::{parse_slice, pretty_print_with, RenderOptions};

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> = std::cell::RefCell::new(None);
}

fn set_last_error(msg: &str) {
    let msg = CString::new(msg).unwrap_or_default();
    LAST_ERROR.with(|e| *e.borrow_mut() = Some(msg));
}

fn clear_last_error() {
    LAST_ERROR.with(|e| *e.borrow_mut() = None);
}

/// Borrow a C string. Err when it is not valid UTF-8; Ok(None) for NULL.
unsafe fn ptr_to_str<'a>(ptr: *const c_char) -> Result<Option<&'a str>, &'static str> {
    if ptr.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(Some)
        .map_err(|_| "string argument is not valid UTF-8")
}

unsafe fn body_slice<'a>(body: *const u8, body_len: size_t) -> Option<&'a [u8]> {
    if body_len == 0 {
        Some(&[])
    } else if body.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(body, body_len))
    }
}

#[no_mangle]
pub extern "C" fn formdata_version() -> *const c_char {
    b"0.1.0\0".as_ptr() as *const c_char
}

/// Last error message from a failed call on this thread. Valid until next FFI call. Do not free.
#[no_mangle]
pub extern "C" fn formdata_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string returned by formdata_pretty_print. No-op if ptr is NULL.
///
/// # Safety
/// `ptr` must be NULL or a pointer returned by formdata_pretty_print, freed once.
#[no_mangle]
pub unsafe extern "C" fn formdata_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        let _ = CString::from_raw(ptr);
    }
}

/// Shared argument handling of the pretty-print entry points. None after setting the last error.
unsafe fn render_args(
    body: *const u8,
    body_len: size_t,
    boundary: *const c_char,
    options_json: *const c_char,
) -> Option<String> {
    let Some(body) = body_slice(body, body_len) else {
        set_last_error("body is NULL");
        return None;
    };
    let (boundary, options_json) = match (ptr_to_str(boundary), ptr_to_str(options_json)) {
        (Ok(b), Ok(o)) => (b, o),
        (Err(e), _) | (_, Err(e)) => {
            set_last_error(e);
            return None;
        }
    };
    let options = match options_json.map(RenderOptions::from_json).transpose() {
        Ok(o) => o.unwrap_or_default(),
        Err(e) => {
            set_last_error(&e.to_string());
            return None;
        }
    };
    Some(pretty_print_with(body, boundary, &options))
}

/// Render a multipart body as text. boundary: NULL to detect it from the first line.
/// options_json: NULL for defaults, else a JSON object with optional `textualContentTypes`
/// and `maxSizeToShowFullBinaryPayload`. Returns a newly allocated string (empty when the body
/// cannot be parsed), or NULL on invalid arguments (see formdata_last_error).
/// A textual payload containing a NUL byte cannot be returned as a C string: the call returns
/// NULL with an error; use formdata_pretty_print_bytes for such bodies.
///
/// # Safety
/// `body` must point to `body_len` readable bytes; string arguments must be NULL or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn formdata_pretty_print(
    body: *const u8,
    body_len: size_t,
    boundary: *const c_char,
    options_json: *const c_char,
) -> *mut c_char {
    clear_last_error();
    let Some(text) = render_args(body, body_len, boundary, options_json) else {
        return ptr::null_mut();
    };
    match CString::new(text) {
        Ok(s) => s.into_raw(),
        Err(_) => {
            set_last_error("rendered text contains NUL, use formdata_pretty_print_bytes");
            ptr::null_mut()
        }
    }
}

/// Same as formdata_pretty_print, returning UTF-8 bytes (not NUL-terminated) and their length in
/// `out_len`. Free with formdata_free_bytes(ptr, len). Returns NULL on invalid arguments.
/// An empty result is a non-NULL pointer with length 0.
///
/// # Safety
/// As formdata_pretty_print; `out_len` must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn formdata_pretty_print_bytes(
    body: *const u8,
    body_len: size_t,
    boundary: *const c_char,
    options_json: *const c_char,
    out_len: *mut size_t,
) -> *mut u8 {
    clear_last_error();
    if out_len.is_null() {
        set_last_error("out_len is NULL");
        return ptr::null_mut();
    }
    let Some(text) = render_args(body, body_len, boundary, options_json) else {
        return ptr::null_mut();
    };
    let bytes = text.into_bytes().into_boxed_slice();
    *out_len = bytes.len();
    Box::into_raw(bytes) as *mut u8
}

/// Free a buffer returned by formdata_pretty_print_bytes. No-op if ptr is NULL.
///
/// # Safety
/// `ptr` and `len` must be exactly what formdata_pretty_print_bytes returned.
#[no_mangle]
pub unsafe extern "C" fn formdata_free_bytes(ptr: *mut u8, len: size_t) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(ptr, len)));
    }
}

/// Number of parts in a multipart body (0 when it cannot be parsed), or -1 on invalid arguments.
///
/// # Safety
/// Same requirements as formdata_pretty_print.
#[no_mangle]
pub unsafe extern "C" fn formdata_part_count(
    body: *const u8,
    body_len: size_t,
    boundary: *const c_char,
) -> c_int {
    clear_last_error();
    let Some(body) = body_slice(body, body_len) else {
        set_last_error("body is NULL");
        return -1;
    };
    let boundary = match ptr_to_str(boundary) {
        Ok(b) => b,
        Err(e) => {
            set_last_error(e);
            return -1;
        }
    };
    c_int::try_from(parse_slice(body, boundary).len()).unwrap_or(c_int::MAX)
}
