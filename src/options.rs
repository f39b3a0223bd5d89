/// How an `X-Requested-With` header is weighed against `Origin`/`Referer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestedWithPolicy {
    /// Any `X-Requested-With` value skips the origin check entirely. A
    /// cross-site request able to set the header (for example through a
    /// permissive CORS setup elsewhere) also skips it.
    #[default]
    Bypass,
    /// `X-Requested-With` only stands in for missing `Origin` and `Referer`
    /// headers. A present but foreign `Origin` or `Referer` still rejects.
    Corroborate,
}

#[derive(Debug, Clone, Default)]
pub struct CsrfOptions {
    pub requested_with: RequestedWithPolicy,
}

impl CsrfOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested_with(mut self, policy: RequestedWithPolicy) -> Self {
        self.requested_with = policy;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
