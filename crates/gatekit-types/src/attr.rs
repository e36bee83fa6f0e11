use crate::{PermissionError, RequestContext, TargetObject};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// Whitelisted roots an attribute path may start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrRoot {
    Request,
    Object,
}

impl AttrRoot {
    pub fn as_str(self) -> &'static str {
        match self {
            AttrRoot::Request => "request",
            AttrRoot::Object => "object",
        }
    }
}

/// A restricted dotted attribute path: `request.user`, `object.owner.id`.
///
/// Paths are validated at construction: the root must be one of the
/// whitelisted names (`request`, `object`) and every segment must be a
/// plain identifier. There is no expression syntax of any kind, which is
/// what keeps object-attribute comparisons safe against caller-influenced
/// strings.
///
/// Resolution is total: any step that cannot be resolved yields `None`,
/// never an error. Callers compare resolved values and fail closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttrPath {
    root: AttrRoot,
    segments: Vec<String>,
}

impl AttrPath {
    /// Parse and validate a dotted path.
    pub fn parse(path: &str) -> Result<Self, PermissionError> {
        let invalid = |reason: &str| PermissionError::InvalidAttrPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = path.split('.');
        let root = match parts.next() {
            Some("request") => AttrRoot::Request,
            Some("object") => AttrRoot::Object,
            Some("") | None => return Err(invalid("empty path")),
            Some(_) => return Err(invalid("root must be 'request' or 'object'")),
        };

        let segments: Vec<String> = parts.map(str::to_string).collect();
        if segments.is_empty() {
            return Err(invalid("path needs at least one segment after the root"));
        }
        for seg in &segments {
            if !is_identifier(seg) {
                return Err(invalid("segments must be plain identifiers"));
            }
        }

        Ok(Self { root, segments })
    }

    pub fn root(&self) -> AttrRoot {
        self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolve the path against a request and an optional target object.
    ///
    /// Under the `request` root the first segment is interpreted as:
    /// - `user`: the authenticated principal id (anonymous resolves to
    ///   nothing),
    /// - `method`: the HTTP method string,
    /// - anything else: a key into [`RequestContext::data`].
    ///
    /// Remaining segments index nested JSON maps.
    pub fn resolve(&self, req: &RequestContext, obj: Option<&TargetObject>) -> Option<JsonValue> {
        match self.root {
            AttrRoot::Object => {
                let mut current = obj?;
                for seg in &self.segments {
                    current = current.as_object()?.get(seg)?;
                }
                Some(current.clone())
            }
            AttrRoot::Request => {
                let (first, rest) = self.segments.split_first()?;
                let head: JsonValue = match first.as_str() {
                    "user" => JsonValue::String(req.principal.id()?.to_string()),
                    "method" => JsonValue::String(req.method.as_str().to_string()),
                    key => req.data.as_object()?.get(key)?.clone(),
                };
                let mut current = &head;
                for seg in rest {
                    current = current.as_object()?.get(seg)?;
                }
                Some(current.clone())
            }
        }
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.as_str())?;
        for seg in &self.segments {
            write!(f, ".{seg}")?;
        }
        Ok(())
    }
}

impl FromStr for AttrPath {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttrPath::parse(s)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
