use crate::component::PermissionComponent;
use gatekit_types::{PermissionError, RequestContext, TargetObject, ViewContext};
use std::ops;
use std::sync::Arc;

/// An immutable permission expression tree.
///
/// Leaves are shared [`PermissionComponent`]s; interior nodes are the three
/// boolean combinators. Trees are never mutated after construction: the
/// operators consume their operands and allocate a new node, sharing leaves
/// structurally through `Arc`. Cloning a tree is cheap for the same reason.
///
/// Evaluation short-circuits: `Any` stops at the first true child, `All` at
/// the first false one, and an error raised by any child aborts the whole
/// evaluation immediately.
#[derive(Clone, Debug)]
pub enum Expr {
    /// A single component.
    Leaf(Arc<dyn PermissionComponent>),
    /// OR: true iff any child is true. Empty `Any` is false.
    Any(Vec<Expr>),
    /// AND: true iff all children are true. Empty `All` is true.
    All(Vec<Expr>),
    /// NOT: complement of its single child.
    Not(Box<Expr>),
}

impl Expr {
    pub fn leaf<C: PermissionComponent + 'static>(component: C) -> Expr {
        Expr::Leaf(Arc::new(component))
    }

    /// OR over a collection of expressions.
    pub fn any_of<I: IntoIterator<Item = Expr>>(children: I) -> Expr {
        Expr::Any(children.into_iter().collect())
    }

    /// AND over a collection of expressions.
    pub fn all_of<I: IntoIterator<Item = Expr>>(children: I) -> Expr {
        Expr::All(children.into_iter().collect())
    }

    /// Global (request-level) evaluation.
    pub fn check(&self, req: &RequestContext, view: &ViewContext) -> Result<bool, PermissionError> {
        match self {
            Expr::Leaf(component) => component.check(req, view),
            Expr::Any(children) => {
                for child in children {
                    if child.check(req, view)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Expr::All(children) => {
                for child in children {
                    if !child.check(req, view)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Expr::Not(inner) => Ok(!inner.check(req, view)?),
        }
    }

    /// Object-level evaluation.
    pub fn check_object(
        &self,
        req: &RequestContext,
        view: &ViewContext,
        obj: &TargetObject,
    ) -> Result<bool, PermissionError> {
        match self {
            Expr::Leaf(component) => component.check_object(req, view, obj),
            Expr::Any(children) => {
                for child in children {
                    if child.check_object(req, view, obj)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Expr::All(children) => {
                for child in children {
                    if !child.check_object(req, view, obj)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Expr::Not(inner) => Ok(!inner.check_object(req, view, obj)?),
        }
    }
}

/// Conversion into an expression tree.
///
/// Implemented for `Expr` itself and for every built-in component type;
/// user-defined components reach the same place through [`Expr::leaf`] or
/// the [`PermissionComponent`] combinators.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

// Chaining the same operator keeps the tree shallow: when the left operand
// is already an Any/All node its children are extended instead of nested,
// so `a | b | c` is one Any node with three children. Whether to flatten
// depends only on the left operand's variant; `a & b` with an Any left
// operand nests.

impl<R: IntoExpr> ops::BitOr<R> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        let rhs = rhs.into_expr();
        match self {
            Expr::Any(mut children) => {
                children.push(rhs);
                Expr::Any(children)
            }
            lhs => Expr::Any(vec![lhs, rhs]),
        }
    }
}

impl<R: IntoExpr> ops::BitAnd<R> for Expr {
    type Output = Expr;

    fn bitand(self, rhs: R) -> Expr {
        let rhs = rhs.into_expr();
        match self {
            Expr::All(mut children) => {
                children.push(rhs);
                Expr::All(children)
            }
            lhs => Expr::All(vec![lhs, rhs]),
        }
    }
}

impl ops::Not for Expr {
    type Output = Expr;

    /// Always wraps in a fresh NOT node, regardless of the operand's variant.
    fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}
