use crate::component::PermissionComponent;
use crate::expr::Expr;
use gatekit_types::{HttpMethod, PermissionError, RequestContext, ViewContext};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Component with a fixed outcome.
#[derive(Clone, Copy, Debug)]
pub struct Fixed(pub bool);

impl PermissionComponent for Fixed {
    fn check(&self, _req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        Ok(self.0)
    }
}

/// Component that counts how often it was evaluated; the counter is shared
/// with the test through an `Arc` so short-circuiting can be observed.
#[derive(Debug)]
pub struct Probe {
    outcome: bool,
    hits: Arc<AtomicUsize>,
}

impl PermissionComponent for Probe {
    fn check(&self, _req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(self.outcome)
    }
}

/// Component that always raises.
#[derive(Debug)]
pub struct Failing(pub &'static str);

impl PermissionComponent for Failing {
    fn check(&self, _req: &RequestContext, _view: &ViewContext) -> Result<bool, PermissionError> {
        Err(PermissionError::component("Failing", self.0))
    }
}

pub fn allow() -> Expr {
    Expr::leaf(Fixed(true))
}

pub fn deny() -> Expr {
    Expr::leaf(Fixed(false))
}

pub fn fixed(outcome: bool) -> Expr {
    Expr::leaf(Fixed(outcome))
}

pub fn probe(outcome: bool) -> (Expr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let component = Probe {
        outcome,
        hits: Arc::clone(&hits),
    };
    (Expr::leaf(component), hits)
}

pub fn failing(reason: &'static str) -> Expr {
    Expr::leaf(Failing(reason))
}

pub fn anon_get() -> RequestContext {
    RequestContext::anonymous(HttpMethod::Get)
}

pub fn view() -> ViewContext {
    ViewContext::new("test-view")
}
