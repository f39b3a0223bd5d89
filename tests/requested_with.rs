mod common;

use bunner_csrf_rs::constants::FORM_CONTENT_TYPES;
use bunner_csrf_rs::{RejectionReason, RequestedWithPolicy};
use common::asserts::{assert_allowed, assert_rejected};
use common::builders::{guard, request};

mod bypass {
    use super::*;

    #[test]
    fn should_allow_when_header_present_then_ignore_origin_and_referer() {
        let guard = guard().build();

        for ctype in FORM_CONTENT_TYPES {
            for value in ["XMLHttpRequest", "fetch", ""] {
                let decision = request()
                    .content_type(ctype)
                    .requested_with(value)
                    .origin("https://example.com:8080")
                    .referer("https://example.com:8080/foo")
                    .check(&guard);

                assert_allowed(decision);
            }
        }
    }

    #[test]
    fn should_allow_when_header_present_and_host_missing_then_skip_host_check() {
        let guard = guard().build();

        let decision = request()
            .without_host()
            .content_type("text/plain")
            .requested_with("XMLHttpRequest")
            .check(&guard);

        assert_allowed(decision);
    }
}

mod corroborate {
    use super::*;

    #[test]
    fn should_reject_when_referer_foreign_then_not_trust_header() {
        let guard = guard()
            .requested_with(RequestedWithPolicy::Corroborate)
            .build();

        let reason = assert_rejected(
            request()
                .content_type("application/x-www-form-urlencoded")
                .requested_with("XMLHttpRequest")
                .referer("https://localhost:8081/foo")
                .check(&guard),
        );

        assert_eq!(reason, RejectionReason::RefererMismatch);
    }

    #[test]
    fn should_reject_when_host_missing_then_report_missing_host() {
        let guard = guard()
            .requested_with(RequestedWithPolicy::Corroborate)
            .build();

        let reason = assert_rejected(
            request()
                .without_host()
                .content_type("text/plain")
                .requested_with("XMLHttpRequest")
                .check(&guard),
        );

        assert_eq!(reason, RejectionReason::MissingHost);
    }

    #[test]
    fn should_allow_when_origin_matches_then_accept_with_header() {
        let guard = guard()
            .requested_with(RequestedWithPolicy::Corroborate)
            .build();

        let decision = request()
            .content_type("text/plain")
            .requested_with("XMLHttpRequest")
            .origin("https://localhost:8080")
            .check(&guard);

        assert_allowed(decision);
    }
}
