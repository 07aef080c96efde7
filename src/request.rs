//! Request descriptors plus the path and parameter encoding shared by every API call.

// crates.io
use http::Method;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Characters left untouched by [`encode_params`]: RFC 3986 unreserved characters.
const PARAM_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Media type requested by calls that must receive JSON.
pub const APPLICATION_JSON: &str = "application/json";
/// Content type of form-encoded request bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Per-call description of an authenticated API request.
///
/// Parameters become the query string for `GET` requests and the form-encoded body for
/// every other method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Ordered path segments; normalized by [`path_join`].
	pub segments: Vec<String>,
	/// Query or body parameters.
	pub params: BTreeMap<String, String>,
	/// Optional `Accept` header value.
	pub accept: Option<&'static str>,
}
impl ApiRequest {
	/// Creates a request for the given method and path segments.
	pub fn new<I, S>(method: Method, segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			method,
			segments: segments.into_iter().map(Into::into).collect(),
			params: BTreeMap::new(),
			accept: None,
		}
	}

	/// Creates a `GET` request.
	pub fn get<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(Method::GET, segments)
	}

	/// Creates a `POST` request.
	pub fn post<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(Method::POST, segments)
	}

	/// Adds or replaces a parameter.
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());

		self
	}

	/// Sets the `Accept` header value.
	pub fn accept(mut self, media_type: &'static str) -> Self {
		self.accept = Some(media_type);

		self
	}

	/// Returns the normalized path (no leading slash).
	pub fn path(&self) -> String {
		path_join(self.segments.iter().map(String::as_str))
	}

	/// Returns `true` when parameters travel in the request body.
	pub fn sends_body(&self) -> bool {
		self.method != Method::GET && self.method != Method::HEAD
	}

	/// Resolves the absolute URL against `base`, replacing its path and query.
	pub fn url(&self, base: &Url) -> Url {
		let mut url = base.clone();

		url.set_path(&self.path());

		if self.sends_body() || self.params.is_empty() {
			url.set_query(None);
		} else {
			url.set_query(Some(&encode_params(&self.params)));
		}

		url
	}

	/// Returns the encoded request body, or an empty body for query-string methods.
	pub fn body(&self) -> Vec<u8> {
		if self.sends_body() && !self.params.is_empty() {
			encode_params(&self.params).into_bytes()
		} else {
			Vec::new()
		}
	}
}

/// Joins path segments after trimming surrounding `/` and dropping empty segments.
pub fn path_join<I, S>(segments: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut buf = String::new();

	for segment in segments {
		let trimmed = segment.as_ref().trim_matches('/');

		if trimmed.is_empty() {
			continue;
		}
		if !buf.is_empty() {
			buf.push('/');
		}

		buf.push_str(trimmed);
	}

	buf
}

/// Percent-encodes each key and value independently and joins the pairs with `&`.
pub fn encode_params<'a, I>(params: I) -> String
where
	I: IntoIterator<Item = (&'a String, &'a String)>,
{
	let mut buf = String::new();

	for (idx, (key, value)) in params.into_iter().enumerate() {
		if idx > 0 {
			buf.push('&');
		}

		buf.extend(utf8_percent_encode(key, PARAM_ENCODE_SET));
		buf.push('=');
		buf.extend(utf8_percent_encode(value, PARAM_ENCODE_SET));
	}

	buf
}

/// Decodes a query string or form body back into a parameter map.
pub fn decode_params(encoded: &str) -> BTreeMap<String, String> {
	form_urlencoded::parse(encoded.as_bytes()).into_owned().collect()
}
