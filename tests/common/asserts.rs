#![allow(dead_code)]

use bunner_csrf_rs::{CsrfDecision, RejectionReason};

pub fn assert_allowed(decision: CsrfDecision) {
    match decision {
        CsrfDecision::Allow => {}
        other => panic!("expected request to be allowed, got {:?}", other),
    }
}

pub fn assert_rejected(decision: CsrfDecision) -> RejectionReason {
    match decision {
        CsrfDecision::Reject(reason) => reason,
        other => panic!("expected request to be rejected, got {:?}", other),
    }
}
