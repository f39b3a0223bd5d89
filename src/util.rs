use crate::constants::{FORM_CONTENT_TYPES, SAFE_METHODS};

#[doc(hidden)]
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.eq_ignore_ascii_case(b)
}

/// Returns the `type/subtype` part of a media type, without parameters.
#[doc(hidden)]
pub fn media_type_essence(value: &str) -> &str {
    match value.split_once(';') {
        Some((essence, _)) => essence.trim(),
        None => value.trim(),
    }
}

/// Methods are case-sensitive tokens, so `delete` is not `DELETE`.
pub(crate) fn is_safe_method(method: &str) -> bool {
    SAFE_METHODS.contains(&method)
}

pub(crate) fn is_form_content_type(content_type: Option<&str>) -> bool {
    let Some(value) = content_type else {
        return false;
    };

    let essence = media_type_essence(value);
    FORM_CONTENT_TYPES
        .iter()
        .any(|form| equals_ignore_case(form, essence))
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
