//! C-FFI layer for MatchMaster — used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `matchmaster-core`.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `mm_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Result from a MatchMaster FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `mm_free_string()`.
#[repr(C)]
pub struct MmResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl MmResult {
    fn ok(value: String) -> Self {
        MmResult {
            result: CString::new(value).unwrap_or_default().into_raw(),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        MmResult {
            result: std::ptr::null_mut(),
            error: CString::new(msg).unwrap_or_default().into_raw(),
        }
    }
}

/// Helper: convert a C string pointer to a Rust &str.
/// Returns None if the pointer is null or not valid UTF-8.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Normalize text to its canonical key.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `mm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn mm_normalize(text: *const c_char) -> MmResult {
    match cstr_to_str(text) {
        Some(s) => MmResult::ok(matchmaster_core::normalize(s)),
        None => MmResult::err("null or invalid UTF-8 input".into()),
    }
}

/// Match a participants snapshot.
/// Input: JSON array of participants, or `{ "participants": [...] }`.
/// Returns JSON: { "results": [{ "key", "label", "count" }], "totalParticipants": n }
///
/// # Safety
/// `participants` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `mm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn mm_match(participants: *const c_char) -> MmResult {
    let json = match cstr_to_str(participants) {
        Some(s) => s,
        None => return MmResult::err("null or invalid UTF-8 input".into()),
    };

    let participants = match matchmaster_core::load_participants(json) {
        Ok(p) => p,
        Err(e) => return MmResult::err(e.to_string()),
    };

    let result = matchmaster_core::match_participants(&participants);
    match serde_json::to_string(&result) {
        Ok(json) => MmResult::ok(json),
        Err(e) => MmResult::err(format!("Serialization error: {}", e)),
    }
}

/// Free a string previously returned by a MatchMaster FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a MatchMaster FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn mm_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
