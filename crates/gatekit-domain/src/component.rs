use crate::expr::{Expr, IntoExpr};
use gatekit_types::{PermissionError, RequestContext, TargetObject, ViewContext};
use std::fmt;

/// A unit permission check.
///
/// Components are stateless: a single instance may sit in several places of
/// an AND/OR tree and be shared across concurrent requests, so the trait
/// requires `Send + Sync` and implementations must not hold per-request
/// mutable state. Components may read shared collaborators (a session
/// store, a database) but must not write through them during a check.
///
/// Only [`check`](Self::check) is mandatory. A component that implements
/// global logic alone is automatically equally applicable at the object
/// level via the default [`check_object`](Self::check_object).
///
/// # Example
///
/// ```
/// use gatekit_domain::PermissionComponent;
/// use gatekit_types::{PermissionError, RequestContext, ViewContext};
///
/// #[derive(Debug)]
/// struct AllowStaff;
///
/// impl PermissionComponent for AllowStaff {
///     fn check(&self, req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
///         Ok(req.data["is_staff"] == true)
///     }
/// }
/// ```
pub trait PermissionComponent: fmt::Debug + Send + Sync {
    /// The global (request-level) check. Must not reference a target object.
    fn check(&self, req: &RequestContext, view: &ViewContext) -> Result<bool, PermissionError>;

    /// The object-level check. Defaults to the global check.
    fn check_object(
        &self,
        req: &RequestContext,
        view: &ViewContext,
        _obj: &TargetObject,
    ) -> Result<bool, PermissionError> {
        self.check(req, view)
    }

    /// New AND node over `self` and `other`; neither operand is mutated.
    fn and<R: IntoExpr>(self, other: R) -> Expr
    where
        Self: Sized + 'static,
    {
        Expr::leaf(self) & other
    }

    /// New OR node over `self` and `other`; neither operand is mutated.
    fn or<R: IntoExpr>(self, other: R) -> Expr
    where
        Self: Sized + 'static,
    {
        Expr::leaf(self) | other
    }

    /// New NOT node wrapping `self`.
    fn negate(self) -> Expr
    where
        Self: Sized + 'static,
    {
        !Expr::leaf(self)
    }
}
