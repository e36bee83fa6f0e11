use crate::component::PermissionComponent;
use gatekit_types::{PermissionError, RequestContext, ViewContext};

/// Allows only unauthenticated requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowOnlyAnonymous;

impl PermissionComponent for AllowOnlyAnonymous {
    fn check(&self, req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        Ok(req.principal.is_anonymous())
    }
}
