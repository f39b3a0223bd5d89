use crate::authority::Authority;
use crate::constants::MAX_ORIGIN_LENGTH;

/// Returns `true` when the `Origin` header lists at least one origin and
/// every whitespace-separated origin has the expected authority.
pub fn origin_matches(origin: &str, expected: &Authority) -> bool {
    if origin.len() > MAX_ORIGIN_LENGTH {
        tracing::trace!(length = origin.len(), "origin header too long");
        return false;
    }

    let mut candidates = origin.split_whitespace().peekable();
    if candidates.peek().is_none() {
        return false;
    }

    candidates.all(|candidate| url_matches(candidate, expected))
}

/// Returns `true` when the `Referer` URL has the expected authority.
///
/// `Referer` carries the full page URL, so its length is not capped; the
/// server's header size limit bounds it.
pub fn referer_matches(referer: &str, expected: &Authority) -> bool {
    url_matches(referer.trim(), expected)
}

fn url_matches(value: &str, expected: &Authority) -> bool {
    match Authority::from_url(value) {
        Ok(authority) => authority == *expected,
        Err(err) => {
            tracing::trace!(error = %err, "unparsable url in request header");
            false
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
