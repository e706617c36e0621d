//! Payload sanitization: renders an arbitrary byte payload as a
//! human-readable string.
//!
//! Payloads arrive untyped, so rendering runs through an ordered chain of
//! try-parse steps; the first step that claims the payload wins and the hex
//! step always claims. The chain order is part of the contract:
//!
//! 1. JSON object: pass through verbatim.
//! 2. UTF-8 text: `true`/`false` and float literals pass through; any other
//!    all-printable text becomes a quoted escaped literal.
//! 3. First 8 bytes as a little-endian f64, if finite.
//! 4. First 4 bytes as a little-endian i32.
//! 5. `0x`-prefixed hex of the raw bytes.

use serde_json::{Map, Value};
use std::fmt::Write as _;
use std::str;

/// Renders `payload` for display. Total and deterministic.
pub fn sanitize(payload: &[u8]) -> String {
    try_json_object(payload)
        .or_else(|| try_text(payload))
        .or_else(|| try_f64_le(payload))
        .or_else(|| try_i32_le(payload))
        .unwrap_or_else(|| hex(payload))
}

/// JSON objects are already legible; keep the raw text untouched.
fn try_json_object(payload: &[u8]) -> Option<String> {
    let text = str::from_utf8(payload).ok()?;
    serde_json::from_str::<Map<String, Value>>(text).ok()?;
    Some(text.to_string())
}

fn try_text(payload: &[u8]) -> Option<String> {
    let text = str::from_utf8(payload).ok()?;

    if text == "true" || text == "false" {
        return Some(text.to_string());
    }

    if text.parse::<f64>().is_ok() {
        return Some(text.to_string());
    }

    // Quote printable text so embedded quotes and escapes stay unambiguous.
    if text.chars().all(|c| !c.is_control()) {
        return Some(format!("{text:?}"));
    }

    None
}

fn try_f64_le(payload: &[u8]) -> Option<String> {
    let bytes: [u8; 8] = payload.get(..8)?.try_into().ok()?;
    let value = f64::from_le_bytes(bytes);
    // NaN and infinities read as garbage more often than as intent.
    if value.is_finite() {
        Some(format!("{value:.6}"))
    } else {
        None
    }
}

fn try_i32_le(payload: &[u8]) -> Option<String> {
    let bytes: [u8; 4] = payload.get(..4)?.try_into().ok()?;
    Some(i32::from_le_bytes(bytes).to_string())
}

fn hex(payload: &[u8]) -> String {
    let mut out = String::with_capacity(2 + payload.len() * 2);
    out.push_str("0x");
    for byte in payload {
        let _ = write!(out, "{byte:02x}");
    }
    out
}
