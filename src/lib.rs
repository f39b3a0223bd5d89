mod authority;
pub mod constants;
mod context;
mod csrf;
mod headers;
mod options;
mod origin;
mod result;
mod util;

pub use authority::{Authority, AuthorityError};
pub use context::RequestContext;
pub use csrf::{CsrfGuard, evaluate};
pub use headers::RequestHeaders;
pub use options::{CsrfOptions, RequestedWithPolicy};
pub use origin::{origin_matches, referer_matches};
pub use result::{CsrfDecision, FORBIDDEN_STATUS, RejectionReason};
pub use url::Host;
pub use util::{equals_ignore_case, media_type_essence};
