//! Fuzz target for attribute-path parsing and resolution.
//!
//! Goal: parse and resolve should **never panic** on any input.
//! Parsing may return errors; resolution may return nothing.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_attr_path
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

use gatekit_types::{AttrPath, HttpMethod, RequestContext};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing arbitrary text - should never panic
    let Ok(path) = AttrPath::parse(text) else {
        return;
    };

    // Resolving against request data and an object shaped from the same
    // input - should never panic
    let value = serde_json::from_str::<serde_json::Value>(text)
        .unwrap_or_else(|_| serde_json::Value::String(text.to_string()));

    let anon = RequestContext::anonymous(HttpMethod::Get).with_data(value.clone());
    let auth = RequestContext::authenticated(text, HttpMethod::Post).with_data(value.clone());

    let _ = path.resolve(&anon, None);
    let _ = path.resolve(&anon, Some(&value));
    let _ = path.resolve(&auth, Some(&value));
});
