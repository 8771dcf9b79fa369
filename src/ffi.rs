//! C FFI layer for the powerbridge library.
//!
//! This module provides a C-compatible interface for native UI hosts
//! (Swift, GTK4, webview shells, etc.) to invoke channel methods.
//!
//! Outcomes are serialized as JSON strings for cross-language compatibility.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::bridge::{BatteryChannel, MethodCall, MethodOutcome};
use crate::config::Config;
use crate::platform;

/// Opaque handle to the bridge.
///
/// Created by `powerbridge_new()` and must be freed with
/// `powerbridge_free()`.
pub struct PowerBridge {
    channel: BatteryChannel,
}

/// Create a new bridge instance.
///
/// Loads configuration and binds the OS-appropriate platform backend.
/// The caller is responsible for calling `powerbridge_free()` to release
/// the memory.
#[no_mangle]
pub extern "C" fn powerbridge_new() -> *mut PowerBridge {
    let config = Config::load();
    let channel = BatteryChannel::new(
        config.channel.name.clone(),
        config.app_id(),
        platform::current(),
    );

    Box::into_raw(Box::new(PowerBridge { channel }))
}

/// Free a bridge instance.
///
/// # Safety
/// The handle must be a valid pointer returned by `powerbridge_new()`.
/// After calling this function, the handle is no longer valid.
#[no_mangle]
pub unsafe extern "C" fn powerbridge_free(handle: *mut PowerBridge) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Invoke a channel method by name and return the outcome as JSON.
///
/// # Arguments
/// * `handle` - A valid PowerBridge handle from `powerbridge_new()`
/// * `method` - The method name as a C string (UTF-8)
///
/// # Returns
/// A JSON string containing the tagged outcome. The caller must free this
/// string using `powerbridge_string_free()`. Returns null for a null
/// handle or a method name that is not valid UTF-8.
///
/// # Safety
/// The handle must be valid and the method must be a valid C string.
#[no_mangle]
pub unsafe extern "C" fn powerbridge_invoke(
    handle: *mut PowerBridge,
    method: *const c_char,
) -> *mut c_char {
    if handle.is_null() || method.is_null() {
        return ptr::null_mut();
    }

    let bridge = &*handle;

    let method_str = match CStr::from_ptr(method).to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    let outcome = bridge.channel.handle(&MethodCall::new(method_str));
    outcome_to_c_string(&outcome)
}

/// Free a string allocated by the FFI functions.
///
/// # Safety
/// The pointer must be a valid string returned by one of the FFI
/// functions, or null (which is safely ignored).
#[no_mangle]
pub unsafe extern "C" fn powerbridge_string_free(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

fn outcome_to_c_string(outcome: &MethodOutcome) -> *mut c_char {
    let json = match serde_json::to_string(outcome) {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    match CString::new(json) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_guards_null_inputs() {
        let method = CString::new("isIgnoringBatteryOptimizations").unwrap();
        unsafe {
            assert!(powerbridge_invoke(ptr::null_mut(), method.as_ptr()).is_null());

            let handle = powerbridge_new();
            assert!(powerbridge_invoke(handle, ptr::null()).is_null());
            powerbridge_free(handle);
        }
    }

    #[test]
    fn test_unknown_method_round_trips_as_json() {
        let method = CString::new("unknownMethod").unwrap();
        unsafe {
            let handle = powerbridge_new();
            let raw = powerbridge_invoke(handle, method.as_ptr());
            assert!(!raw.is_null());

            let json = CStr::from_ptr(raw).to_str().unwrap().to_string();
            powerbridge_string_free(raw);
            powerbridge_free(handle);

            let outcome: MethodOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, MethodOutcome::NotImplemented);
        }
    }

    #[test]
    fn test_free_ignores_null() {
        unsafe {
            powerbridge_free(ptr::null_mut());
            powerbridge_string_free(ptr::null_mut());
        }
    }
}
