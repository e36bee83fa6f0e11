//! Built-in leaf components.
//!
//! These cover the common cases a policy composes: allow everything, gate on
//! authentication state, gate on HTTP method, and object-ownership style
//! attribute comparison.

mod allow_all;
mod anonymous;
mod attr_equals;
mod authenticated;
mod safe_method;

pub use allow_all::AllowAll;
pub use anonymous::AllowOnlyAnonymous;
pub use attr_equals::ObjectAttrEquals;
pub use authenticated::AllowOnlyAuthenticated;
pub use safe_method::AllowOnlySafeMethod;


/// Wires a component type into the expression algebra: `IntoExpr` plus the
/// `&`, `|` and `!` operators. A blanket impl over every
/// `PermissionComponent` would fall foul of trait coherence, so the
/// built-ins opt in per type.
macro_rules! impl_component_ops {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::expr::IntoExpr for $ty {
                fn into_expr(self) -> $crate::expr::Expr {
                    $crate::expr::Expr::leaf(self)
                }
            }

            impl<R: $crate::expr::IntoExpr> ::std::ops::BitAnd<R> for $ty {
                type Output = $crate::expr::Expr;

                fn bitand(self, rhs: R) -> $crate::expr::Expr {
                    $crate::expr::Expr::leaf(self) & rhs
                }
            }

            impl<R: $crate::expr::IntoExpr> ::std::ops::BitOr<R> for $ty {
                type Output = $crate::expr::Expr;

                fn bitor(self, rhs: R) -> $crate::expr::Expr {
                    $crate::expr::Expr::leaf(self) | rhs
                }
            }

            impl ::std::ops::Not for $ty {
                type Output = $crate::expr::Expr;

                fn not(self) -> $crate::expr::Expr {
                    !$crate::expr::Expr::leaf(self)
                }
            }
        )+
    };
}

impl_component_ops!(
    AllowAll,
    AllowOnlyAnonymous,
    AllowOnlyAuthenticated,
    AllowOnlySafeMethod,
    ObjectAttrEquals,
);
