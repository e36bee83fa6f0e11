use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The identity a request is made under.
///
/// Deliberately small: components only ever ask "is this authenticated,
/// and if so, as whom". Anything richer belongs in
/// [`crate::RequestContext::data`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Principal {
    Anonymous,
    Authenticated { id: String },
}

impl Principal {
    pub fn authenticated<S: Into<String>>(id: S) -> Self {
        Principal::Authenticated { id: id.into() }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Principal::Authenticated { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Principal::Anonymous)
    }

    /// The authenticated identity, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Principal::Anonymous => None,
            Principal::Authenticated { id } => Some(id),
        }
    }
}

impl Default for Principal {
    fn default() -> Self {
        Principal::Anonymous
    }
}
