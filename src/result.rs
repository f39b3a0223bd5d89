use thiserror::Error;

/// Status a caller must answer with when a request is rejected.
pub const FORBIDDEN_STATUS: u16 = 403;

/// Outcome of evaluating a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfDecision {
    Allow,
    Reject(RejectionReason),
}

/// Why a request was rejected. Meant for server-side diagnostics only and
/// never sent back to the client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    #[error("request has no usable Host header to compare against")]
    MissingHost,
    #[error("Origin header does not match the request host")]
    OriginMismatch,
    #[error("Referer header does not match the request host")]
    RefererMismatch,
    #[error("request carries neither an Origin nor a Referer header")]
    NoEvidence,
}

impl RejectionReason {
    /// Stable code suitable for log fields and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::MissingHost => "missing-host",
            RejectionReason::OriginMismatch => "origin-mismatch",
            RejectionReason::RefererMismatch => "referer-mismatch",
            RejectionReason::NoEvidence => "no-evidence-present",
        }
    }
}

impl CsrfDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CsrfDecision::Allow)
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            CsrfDecision::Allow => None,
            CsrfDecision::Reject(reason) => Some(*reason),
        }
    }

    /// `None` when the request may continue to its handler.
    pub fn status(&self) -> Option<u16> {
        match self {
            CsrfDecision::Allow => None,
            CsrfDecision::Reject(_) => Some(FORBIDDEN_STATUS),
        }
    }

    pub fn into_result(self) -> Result<(), RejectionReason> {
        match self {
            CsrfDecision::Allow => Ok(()),
            CsrfDecision::Reject(reason) => Err(reason),
        }
    }
}

impl From<RejectionReason> for CsrfDecision {
    fn from(reason: RejectionReason) -> Self {
        CsrfDecision::Reject(reason)
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
