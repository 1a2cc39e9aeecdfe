//! Request parameter sources.
//!
//! Services read raw key/value parameters through [`ParameterSource`] so they
//! do not depend on how the transport parsed the request.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to a request's raw parameters.
pub trait ParameterSource {
    /// Value of the parameter `name`, or `None` if absent.
    ///
    /// A parameter present with an empty value yields `Some("")`.
    fn parameter(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> ParameterSource for HashMap<String, String, S> {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ParameterSource for BTreeMap<String, String> {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<P: ParameterSource + ?Sized> ParameterSource for &P {
    fn parameter(&self, name: &str) -> Option<&str> {
        (**self).parameter(name)
    }
}

// =============================================================================
// Query String Parameters
// =============================================================================

/// Parameters parsed from a URL query string.
///
/// Names are matched ASCII case-insensitively, so `QUADKEY=0` and
/// `quadkey=0` are the same parameter. When a name repeats, the first
/// occurrence wins. Values are percent-decoded.
///
/// # Example
///
/// ```
/// use tile_gateway::service::{ParameterSource, QueryParams};
///
/// let params = QueryParams::parse("?LAYERS=roads&quadkey=0313&format=image%2Fjpeg");
///
/// assert_eq!(params.parameter("layers"), Some("roads"));
/// assert_eq!(params.parameter("format"), Some("image/jpeg"));
/// assert_eq!(params.parameter("bbox"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Number of parsed pairs, duplicates included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the query string held no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl ParameterSource for QueryParams {
    fn parameter(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
