use crate::component::PermissionComponent;
use gatekit_types::{AttrPath, PermissionError, RequestContext, TargetObject, ViewContext};

/// Object-level component comparing two resolved attribute paths for
/// equality.
///
/// Paths use the restricted dotted grammar of [`AttrPath`] — whitelisted
/// `request`/`object` roots, plain identifier segments, no expression
/// syntax. Both paths are validated at construction; a malformed path is a
/// configuration error, not a runtime denial.
///
/// At evaluation time the component fails closed: if either path cannot be
/// resolved (missing attribute, anonymous principal behind `request.user`,
/// non-map step) the check returns `false`. It never raises for a
/// resolution failure and never treats one as a grant.
///
/// In a global (request-level) context the component passes; it only
/// constrains the object phase.
///
/// # Example
///
/// ```
/// use gatekit_domain::components::ObjectAttrEquals;
///
/// let owner_only = ObjectAttrEquals::new("request.user", "object.owner").unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ObjectAttrEquals {
    left: AttrPath,
    right: AttrPath,
}

impl ObjectAttrEquals {
    pub fn new(left: &str, right: &str) -> Result<Self, PermissionError> {
        Ok(Self {
            left: AttrPath::parse(left)?,
            right: AttrPath::parse(right)?,
        })
    }

    pub fn paths(&self) -> (&AttrPath, &AttrPath) {
        (&self.left, &self.right)
    }
}

impl PermissionComponent for ObjectAttrEquals {
    fn check(&self, _req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        // Object-level only: pass-through at the global phase.
        Ok(true)
    }

    fn check_object(
        &self,
        req: &RequestContext,
        _view: &ViewContext,
        obj: &TargetObject,
    ) -> Result<bool, PermissionError> {
        match (
            self.left.resolve(req, Some(obj)),
            self.right.resolve(req, Some(obj)),
        ) {
            (Some(left), Some(right)) => Ok(left == right),
            _ => Ok(false),
        }
    }
}
