use std::fmt;
use thiserror::Error;

/// Which producer slot of a composed permission was involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprSlot {
    Global,
    Object,
}

impl fmt::Display for ExprSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprSlot::Global => f.write_str("global"),
            ExprSlot::Object => f.write_str("object"),
        }
    }
}

/// Errors surfaced by permission evaluation.
///
/// These all indicate a misconfigured policy or a failing component, never
/// an ordinary deny. Composite evaluation does not catch them: the first
/// error aborts the whole tree and reaches the host unchanged, which must
/// treat it as an internal error rather than an implicit allow.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The policy was invoked without declaring the corresponding
    /// expression producer.
    #[error("no {0} permission expression declared")]
    MissingExpression(ExprSlot),

    /// A producer yielded an expression with zero components.
    #[error("permission expression has no components")]
    EmptyExpression,

    /// An attribute path failed whitelist or grammar validation.
    #[error("invalid attribute path '{path}': {reason}")]
    InvalidAttrPath { path: String, reason: String },

    /// A leaf component failed (e.g. an external lookup it performs).
    #[error("permission component '{component}' failed: {reason}")]
    Component { component: String, reason: String },
}

impl PermissionError {
    pub fn component<C: Into<String>, R: Into<String>>(component: C, reason: R) -> Self {
        PermissionError::Component {
            component: component.into(),
            reason: reason.into(),
        }
    }
}
