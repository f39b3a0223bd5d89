/// Borrowed view of the request metadata the guard inspects.
///
/// Each header is `None` when absent. A present but empty header is
/// `Some("")`, which the guard treats differently from absence.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub host: Option<&'a str>,
    pub origin: Option<&'a str>,
    pub referer: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub requested_with: Option<&'a str>,
}
