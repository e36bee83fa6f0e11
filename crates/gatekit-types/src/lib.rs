//! Stable vocabulary types used across the gatekit workspace.
//!
//! This crate is intentionally boring:
//! - the principal and request/view context passed to every check
//! - restricted dotted attribute paths for object-level comparisons
//! - the shared error enum

#![forbid(unsafe_code)]

pub mod attr;
pub mod error;
pub mod principal;
pub mod request;

pub use attr::{AttrPath, AttrRoot};
pub use error::{ExprSlot, PermissionError};
pub use principal::Principal;
pub use request::{
    HttpMethod, ParseMethodError, RequestContext, TargetObject, ViewContext, SAFE_METHODS,
};
