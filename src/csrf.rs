use crate::authority::Authority;
use crate::context::RequestContext;
use crate::options::{CsrfOptions, RequestedWithPolicy};
use crate::origin::{origin_matches, referer_matches};
use crate::result::{CsrfDecision, RejectionReason};
use crate::util::{is_form_content_type, is_safe_method};

/// Evaluates a request with the default [`CsrfOptions`].
pub fn evaluate(request: &RequestContext<'_>) -> CsrfDecision {
    CsrfGuard::default().check(request)
}

/// Origin/referer based CSRF filter.
///
/// A request is allowed straight away when its method is one a plain HTML
/// form cannot send, when it carries `X-Requested-With` (under
/// [`RequestedWithPolicy::Bypass`]), or when its body is not one a form can
/// produce. Everything else must prove it comes from the site named by its
/// `Host` header through `Origin` or, failing that, `Referer`.
///
/// The guard holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct CsrfGuard {
    options: CsrfOptions,
}

impl CsrfGuard {
    pub fn new(options: CsrfOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsrfOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CsrfDecision {
        let decision = self.process(request);

        match decision {
            CsrfDecision::Allow => {
                tracing::trace!(method = request.method, "csrf check passed");
            }
            CsrfDecision::Reject(reason) => {
                tracing::debug!(
                    method = request.method,
                    reason = reason.as_str(),
                    "rejected request without same-site evidence"
                );
            }
        }

        decision
    }

    fn process(&self, request: &RequestContext<'_>) -> CsrfDecision {
        if is_safe_method(request.method) {
            return CsrfDecision::Allow;
        }

        if self.options.requested_with == RequestedWithPolicy::Bypass
            && request.requested_with.is_some()
        {
            return CsrfDecision::Allow;
        }

        if !is_form_content_type(request.content_type) {
            return CsrfDecision::Allow;
        }

        self.process_evidence(request)
    }

    fn process_evidence(&self, request: &RequestContext<'_>) -> CsrfDecision {
        let Some(expected) = Self::resolve_host(request.host) else {
            return CsrfDecision::Reject(RejectionReason::MissingHost);
        };

        if let Some(origin) = request.origin {
            return if origin_matches(origin, &expected) {
                CsrfDecision::Allow
            } else {
                CsrfDecision::Reject(RejectionReason::OriginMismatch)
            };
        }

        if let Some(referer) = request.referer {
            return if referer_matches(referer, &expected) {
                CsrfDecision::Allow
            } else {
                CsrfDecision::Reject(RejectionReason::RefererMismatch)
            };
        }

        if self.options.requested_with == RequestedWithPolicy::Corroborate
            && request.requested_with.is_some()
        {
            return CsrfDecision::Allow;
        }

        CsrfDecision::Reject(RejectionReason::NoEvidence)
    }

    fn resolve_host(host: Option<&str>) -> Option<Authority> {
        match Authority::from_host_header(host?) {
            Ok(authority) => Some(authority),
            Err(err) => {
                tracing::trace!(error = %err, "unparsable host header");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;
