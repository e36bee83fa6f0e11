use crate::expr::Expr;
use gatekit_types::{ExprSlot, PermissionError, RequestContext, TargetObject, ViewContext};

/// Canonicalize a producer's raw expression into a uniform OR root.
///
/// A root that is already an `Any` node is kept; anything else is wrapped
/// as a singleton `Any` (semantically a pass-through). A root `Any`/`All`
/// with zero components is a configuration error and propagates rather
/// than silently deciding either way.
pub fn normalize(raw: Expr) -> Result<Expr, PermissionError> {
    match raw {
        Expr::Any(children) if children.is_empty() => Err(PermissionError::EmptyExpression),
        Expr::All(children) if children.is_empty() => Err(PermissionError::EmptyExpression),
        root @ Expr::Any(_) => Ok(root),
        other => Ok(Expr::Any(vec![other])),
    }
}

/// The two-phase authorization contract a host framework invokes.
///
/// A concrete policy declares its expressions as zero-argument producers,
/// not stored trees:
///
/// ```
/// use gatekit_domain::components::{AllowOnlyAuthenticated, AllowOnlySafeMethod};
/// use gatekit_domain::{ComposedPermission, Expr};
///
/// struct ReadOrAuthenticated;
///
/// impl ComposedPermission for ReadOrAuthenticated {
///     fn global_set(&self) -> Option<Expr> {
///         Some(AllowOnlyAuthenticated | AllowOnlySafeMethod)
///     }
///
///     fn object_set(&self) -> Option<Expr> {
///         self.global_set()
///     }
/// }
/// ```
///
/// Both entry points re-run the producer and normalization on every call.
/// No tree is ever cached on the policy instance, so an instance the host
/// creates once and reuses across many in-flight requests accumulates no
/// state. The repeated allocation is deliberate; correctness under
/// instance reuse outweighs it.
///
/// A producer left undeclared returns `None` and the corresponding entry
/// point fails loudly with [`PermissionError::MissingExpression`] — a
/// misconfigured policy must never quietly deny (or allow).
pub trait ComposedPermission: Send + Sync {
    /// Producer for the request-level expression, checked before any
    /// object is loaded.
    fn global_set(&self) -> Option<Expr> {
        None
    }

    /// Producer for the object-level expression, checked once a specific
    /// object is in hand.
    fn object_set(&self) -> Option<Expr> {
        None
    }

    /// Request-level entry point: `normalize(global_set()).check(..)`.
    fn has_permission(
        &self,
        req: &RequestContext,
        view: &ViewContext,
    ) -> Result<bool, PermissionError> {
        let raw = self
            .global_set()
            .ok_or(PermissionError::MissingExpression(ExprSlot::Global))?;
        normalize(raw)?.check(req, view)
    }

    /// Object-level entry point: `normalize(object_set()).check_object(..)`.
    fn has_object_permission(
        &self,
        req: &RequestContext,
        view: &ViewContext,
        obj: &TargetObject,
    ) -> Result<bool, PermissionError> {
        let raw = self
            .object_set()
            .ok_or(PermissionError::MissingExpression(ExprSlot::Object))?;
        normalize(raw)?.check_object(req, view, obj)
    }
}
