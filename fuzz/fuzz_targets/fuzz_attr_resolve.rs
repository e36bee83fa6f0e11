//! Fuzz target for attribute-path resolution over structured inputs.
//!
//! Goal: resolution should **never panic** for any combination of path
//! segments, principal state and request/object data. It may resolve to
//! nothing; panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_attr_resolve
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use gatekit_types::{AttrPath, HttpMethod, RequestContext};

/// Structured input for resolution fuzzing.
/// Using Arbitrary allows libFuzzer to generate more meaningful test cases.
#[derive(Arbitrary, Debug)]
struct ResolveInput {
    /// Resolve under the `object` root instead of `request`.
    object_root: bool,
    /// Dotted-path segments after the root.
    segments: Vec<String>,
    /// Authenticated principal id, or anonymous when absent.
    principal: Option<String>,
    /// Flat key/value entries for the request data and target object.
    entries: Vec<(String, String)>,
}

fuzz_target!(|input: ResolveInput| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if input.segments.len() > 16 || input.entries.len() > 32 {
        return;
    }

    let root = if input.object_root { "object" } else { "request" };
    let mut path = root.to_string();
    for segment in &input.segments {
        if segment.len() > 64 {
            return;
        }
        path.push('.');
        path.push_str(segment);
    }

    // Parsing may reject the assembled path - should never panic
    let Ok(path) = AttrPath::parse(&path) else {
        return;
    };

    let mut map = serde_json::Map::new();
    for (key, value) in input.entries {
        if key.len() > 64 || value.len() > 256 {
            return;
        }
        map.insert(key, serde_json::Value::String(value));
    }
    let data = serde_json::Value::Object(map);

    let req = match input.principal {
        Some(id) => RequestContext::authenticated(id, HttpMethod::Post),
        None => RequestContext::anonymous(HttpMethod::Get),
    }
    .with_data(data.clone());

    // Resolution may come up empty - should never panic
    let _ = path.resolve(&req, None);
    let _ = path.resolve(&req, Some(&data));
});
