use crate::component::PermissionComponent;
use gatekit_types::{PermissionError, RequestContext, ViewContext};

/// Allows only authenticated requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowOnlyAuthenticated;

impl PermissionComponent for AllowOnlyAuthenticated {
    fn check(&self, req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        Ok(req.principal.is_authenticated())
    }
}
