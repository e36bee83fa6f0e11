use crate::component::PermissionComponent;
use gatekit_types::{PermissionError, RequestContext, ViewContext};

/// Allows every request, global and object level.
///
/// Useful as the global half of a policy whose real constraint is
/// object-level.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl PermissionComponent for AllowAll {
    fn check(&self, _req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        Ok(true)
    }
}
