//! Query string encoding for resource options.
//!
//! Each options type declares its fields through [`ToQuery`], choosing per
//! field whether a zero value is omitted. Scalars encode as `key=value`; list
//! fields encode as one bracketed parameter per element:
//!
//! ```rust
//! use balldontlie::core::query::{add_options, QueryWriter, ToQuery};
//!
//! struct Filter {
//!     seasons: Vec<u16>,
//!     search: String,
//! }
//!
//! impl ToQuery for Filter {
//!     fn write_query(&self, query: &mut QueryWriter) {
//!         query.field_omit_empty("seasons", &self.seasons);
//!         query.field_omit_empty("search", &self.search);
//!     }
//! }
//!
//! let filter = Filter { seasons: vec![2018, 2019], search: String::new() };
//! let path = add_options("/api/v1/games", Some(&filter)).unwrap();
//! assert_eq!(path, "/api/v1/games?seasons%5B%5D=2018&seasons%5B%5D=2019");
//! ```

use crate::error::{Error, Result};
use std::sync::LazyLock;
use url::{form_urlencoded, Url};


/// Placeholder origin used only to validate relative paths.
static PATH_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("static base URL"));

/// A single query value that renders as one string.
pub trait QueryScalar {
    fn to_query_string(&self) -> String;
    fn is_zero(&self) -> bool;
}

/// Anything that can be written under a query key.
pub trait QueryValue {
    fn is_zero(&self) -> bool;
    fn append_to(&self, key: &str, query: &mut QueryWriter);
}

/// Declares how an options value maps to query parameters.
pub trait ToQuery {
    fn write_query(&self, query: &mut QueryWriter);
}

impl<T: ToQuery + ?Sized> ToQuery for &T {
    fn write_query(&self, query: &mut QueryWriter) {
        (**self).write_query(query)
    }
}

/// Collects key/value pairs in field order.
#[derive(Debug, Default)]
pub struct QueryWriter {
    pairs: Vec<(String, String)>,
}

impl QueryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a field unconditionally.
    pub fn field<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        value.append_to(key, self);
        self
    }

    /// Write a field unless it holds its type's zero value.
    pub fn field_omit_empty<V: QueryValue + ?Sized>(&mut self, key: &str, value: &V) -> &mut Self {
        if !value.is_zero() {
            value.append_to(key, self);
        }
        self
    }

    /// Append a raw pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Canonical encoding: keys sorted, values kept in insertion order.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.pairs.iter().collect();
        // stable sort keeps repeated keys in input order
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.into_iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }
}

macro_rules! numeric_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl QueryScalar for $t {
                fn to_query_string(&self) -> String {
                    self.to_string()
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

numeric_scalar!(u8, u16, u32, u64, i16, i32, i64);

impl QueryScalar for bool {
    fn to_query_string(&self) -> String {
        let literal = if *self { "true" } else { "false" };
        literal.to_string()
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

impl QueryScalar for String {
    fn to_query_string(&self) -> String {
        self.clone()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl QueryScalar for str {
    fn to_query_string(&self) -> String {
        self.to_string()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! scalar_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl QueryValue for $t {
                fn is_zero(&self) -> bool {
                    QueryScalar::is_zero(self)
                }

                fn append_to(&self, key: &str, query: &mut QueryWriter) {
                    query.push(key, self.to_query_string());
                }
            }
        )*
    };
}

scalar_value!(u8, u16, u32, u64, i16, i32, i64, bool, String, str);

impl<T: QueryScalar> QueryValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn append_to(&self, key: &str, query: &mut QueryWriter) {
        if let Some(value) = self {
            query.push(key, value.to_query_string());
        }
    }
}

impl<T: QueryScalar> QueryValue for [T] {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn append_to(&self, key: &str, query: &mut QueryWriter) {
        let key = format!("{key}[]");
        for value in self {
            query.push(key.as_str(), value.to_query_string());
        }
    }
}

impl<T: QueryScalar> QueryValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn append_to(&self, key: &str, query: &mut QueryWriter) {
        self.as_slice().append_to(key, query)
    }
}

/// Append the encoded `options` to `path`.
///
/// With no options the path comes back untouched. A query already present
/// on the path is merged with the encoded options. A path that cannot be
/// parsed yields [`Error::InvalidPath`], which still carries the original
/// path.
pub fn add_options<O: ToQuery + ?Sized>(path: &str, options: Option<&O>) -> Result<String> {
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    let parsed = PATH_BASE.join(path).map_err(|source| Error::InvalidPath {
        path: path.to_string(),
        source,
    })?;

    let mut query = QueryWriter::new();
    for (key, value) in parsed.query_pairs() {
        query.push(key, value);
    }
    options.write_query(&mut query);

    let (without_fragment, fragment) = match path.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (path, None),
    };
    let bare = without_fragment
        .split_once('?')
        .map_or(without_fragment, |(head, _)| head);

    let mut out = bare.to_string();
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query.encode());
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    Ok(out)
}
