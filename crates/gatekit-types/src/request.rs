use crate::Principal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an unrecognized HTTP method string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct ParseMethodError(pub String);

/// HTTP method of the incoming request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Options,
    Post,
    Put,
    Patch,
    Delete,
    Trace,
    Connect,
}

/// Methods considered read-only for permission purposes.
pub const SAFE_METHODS: [HttpMethod; 3] = [HttpMethod::Get, HttpMethod::Head, HttpMethod::Options];

impl HttpMethod {
    /// True for the read-only methods (GET, HEAD, OPTIONS).
    pub fn is_safe(self) -> bool {
        SAFE_METHODS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "TRACE" => Ok(HttpMethod::Trace),
            "CONNECT" => Ok(HttpMethod::Connect),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// The resource instance under object-level authorization.
///
/// Kept as open-ended JSON: the core never interprets it beyond what an
/// attribute path asks for.
pub type TargetObject = JsonValue;

/// Everything the host supplies about an incoming request.
///
/// Passed by shared reference on every check; never mutated by the core.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    pub principal: Principal,
    pub method: HttpMethod,

    /// Auxiliary request data, reachable from attribute paths under the
    /// `request` root (e.g. `request.tenant`).
    pub data: JsonValue,
}

impl RequestContext {
    pub fn anonymous(method: HttpMethod) -> Self {
        Self {
            principal: Principal::Anonymous,
            method,
            data: JsonValue::Null,
        }
    }

    pub fn authenticated<S: Into<String>>(id: S, method: HttpMethod) -> Self {
        Self {
            principal: Principal::authenticated(id),
            method,
            data: JsonValue::Null,
        }
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = data;
        self
    }
}

/// The controller/view the host is authorizing against.
///
/// Opaque to the core; forwarded unchanged to every component so that
/// host-specific components can branch on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ViewContext {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ViewContext {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            action: None,
        }
    }

    pub fn with_action<S: Into<String>>(mut self, action: S) -> Self {
        self.action = Some(action.into());
        self
    }
}
