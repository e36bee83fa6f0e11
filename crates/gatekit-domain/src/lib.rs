//! Pure permission evaluation (no IO).
//!
//! Input: a request/view context (plus an optional target object).
//! Output: a single allow/deny boolean, or an error for misconfigured
//! policies.

#![forbid(unsafe_code)]

pub mod component;
pub mod components;
pub mod composed;
pub mod expr;

pub use component::PermissionComponent;
pub use composed::{normalize, ComposedPermission};
pub use expr::{Expr, IntoExpr};

#[cfg(test)]
mod props;
#[cfg(test)]
mod test_support;
