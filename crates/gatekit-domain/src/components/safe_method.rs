use crate::component::PermissionComponent;
use gatekit_types::{PermissionError, RequestContext, ViewContext};

/// Allows only the read-only HTTP methods (GET, HEAD, OPTIONS).
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowOnlySafeMethod;

impl PermissionComponent for AllowOnlySafeMethod {
    fn check(&self, req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        Ok(req.method.is_safe())
    }
}
