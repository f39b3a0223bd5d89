use crate::constants::header;
use crate::context::RequestContext;
use indexmap::IndexMap;
use indexmap::map::Entry;

/// Owned request headers with case-insensitive lookup.
///
/// Framework adapters copy the incoming headers in here and borrow a
/// [`RequestContext`] from it. A repeated `Origin` line is appended to the
/// earlier value with a single space, which is the header's own list syntax.
/// For any other header the first line wins.
#[derive(Debug, Default, Clone)]
pub struct RequestHeaders {
    headers: IndexMap<String, String>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.insert(name, value);
        }
        headers
    }

    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: AsRef<str>,
        V: Into<String>,
    {
        let key = name.as_ref().trim().to_ascii_lowercase();
        let is_list = key.eq_ignore_ascii_case(header::ORIGIN);

        match self.headers.entry(key) {
            Entry::Occupied(mut entry) if is_list => {
                let existing = entry.get_mut();
                existing.push(' ');
                existing.push_str(&value.into());
            }
            Entry::Occupied(_) => {}
            Entry::Vacant(entry) => {
                entry.insert(value.into());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let key = name.trim().to_ascii_lowercase();
        self.headers.get(&key).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn context<'a>(&'a self, method: &'a str) -> RequestContext<'a> {
        RequestContext {
            method,
            host: self.get(header::HOST),
            origin: self.get(header::ORIGIN),
            referer: self.get(header::REFERER),
            content_type: self.get(header::CONTENT_TYPE),
            requested_with: self.get(header::X_REQUESTED_WITH),
        }
    }
}

impl<N, V> FromIterator<(N, V)> for RequestHeaders
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
