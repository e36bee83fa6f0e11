//! Composable permission components for request authorization.
//!
//! Atomic checks ([`PermissionComponent`]) combine through `&`, `|` and `!`
//! into immutable expression trees ([`Expr`]), and a policy binds a global
//! and an object expression into the two-phase contract a host framework
//! calls ([`ComposedPermission`]).
//!
//! ```
//! use gatekit::components::{AllowOnlyAuthenticated, AllowOnlySafeMethod};
//! use gatekit::{ComposedPermission, Expr, HttpMethod, RequestContext, ViewContext};
//!
//! struct ReadOrAuthenticated;
//!
//! impl ComposedPermission for ReadOrAuthenticated {
//!     fn global_set(&self) -> Option<Expr> {
//!         Some(AllowOnlyAuthenticated | AllowOnlySafeMethod)
//!     }
//! }
//!
//! let req = RequestContext::anonymous(HttpMethod::Get);
//! let view = ViewContext::new("documents");
//! assert!(ReadOrAuthenticated.has_permission(&req, &view).unwrap());
//! ```

#![forbid(unsafe_code)]

pub use gatekit_domain::components;
pub use gatekit_domain::{normalize, ComposedPermission, Expr, IntoExpr, PermissionComponent};
pub use gatekit_types::{
    AttrPath, AttrRoot, ExprSlot, HttpMethod, ParseMethodError, PermissionError, Principal,
    RequestContext, TargetObject, ViewContext, SAFE_METHODS,
};
