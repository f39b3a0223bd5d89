pub mod header {
    pub const HOST: &str = "Host";
    pub const ORIGIN: &str = "Origin";
    pub const REFERER: &str = "Referer";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const X_REQUESTED_WITH: &str = "X-Requested-With";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod content_type {
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
    pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
    pub const TEXT_PLAIN: &str = "text/plain";
    pub const APPLICATION_JSON: &str = "application/json";
}

/// Methods a plain HTML form cannot issue cross-site. Requests using them are
/// never checked.
pub const SAFE_METHODS: [&str; 4] = [method::GET, method::HEAD, method::PUT, method::DELETE];

/// Bodies a plain HTML form can submit cross-site without a preflight.
pub const FORM_CONTENT_TYPES: [&str; 3] = [
    content_type::FORM_URLENCODED,
    content_type::MULTIPART_FORM_DATA,
    content_type::TEXT_PLAIN,
];

/// `Origin` values longer than this are treated as a mismatch without parsing.
pub const MAX_ORIGIN_LENGTH: usize = 4_096;
