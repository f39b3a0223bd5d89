#![allow(dead_code)]

use bunner_csrf_rs::constants::method;
use bunner_csrf_rs::{CsrfDecision, CsrfGuard, CsrfOptions, RequestContext, RequestedWithPolicy};

pub const LOCAL_HOST: &str = "localhost:8080";

#[derive(Default)]
pub struct GuardBuilder {
    requested_with: Option<RequestedWithPolicy>,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested_with(mut self, policy: RequestedWithPolicy) -> Self {
        self.requested_with = Some(policy);
        self
    }

    pub fn build(self) -> CsrfGuard {
        let CsrfOptions {
            requested_with: default_requested_with,
        } = CsrfOptions::default();

        CsrfGuard::new(CsrfOptions {
            requested_with: self.requested_with.unwrap_or(default_requested_with),
        })
    }
}

pub struct RequestBuilder {
    method: String,
    host: Option<String>,
    origin: Option<String>,
    referer: Option<String>,
    content_type: Option<String>,
    requested_with: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            host: Some(LOCAL_HOST.into()),
            origin: None,
            referer: None,
            content_type: None,
            requested_with: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn without_host(mut self) -> Self {
        self.host = None;
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = Some(referer.into());
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn requested_with(mut self, value: impl Into<String>) -> Self {
        self.requested_with = Some(value.into());
        self
    }

    pub fn check(self, guard: &CsrfGuard) -> CsrfDecision {
        let RequestBuilder {
            method,
            host,
            origin,
            referer,
            content_type,
            requested_with,
        } = self;

        let ctx = RequestContext {
            method: &method,
            host: host.as_deref(),
            origin: origin.as_deref(),
            referer: referer.as_deref(),
            content_type: content_type.as_deref(),
            requested_with: requested_with.as_deref(),
        };
        guard.check(&ctx)
    }
}

pub fn guard() -> GuardBuilder {
    GuardBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
