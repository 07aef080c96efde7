//! Client-level error types shared across the token provider, REST caller, and configuration.

// self
use crate::{_prelude::*, auth::IdentifierError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Structured JSON decoding failure carrying the path of the offending field.
pub type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credential exchange against the token endpoint failed.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Authenticated API call failed at the HTTP layer.
	#[error(transparent)]
	Http(#[from] HttpError),
	/// Response body could not be decoded into the expected schema.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

/// Configuration and validation failures raised before any request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] http::Error),
	/// A required setting was not supplied.
	#[error("Missing required setting `{name}`.")]
	MissingSetting {
		/// Setting or environment variable name.
		name: &'static str,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL does not use HTTPS.
	#[error("Base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Base URL cannot carry a path (e.g. `mailto:` or `data:` URLs).
	#[error("Base URL cannot be used as a base: {url}.")]
	UnsupportedBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// API version label is not recognized.
	#[error("Unknown API version `{value}`; expected v1, preview1, or openpreview1.")]
	UnknownVersion {
		/// Rejected label.
		value: String,
	},
	/// A path identifier failed validation.
	#[error("Identifier is invalid.")]
	InvalidIdentifier(#[from] IdentifierError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Failures raised while exchanging client credentials for an access token.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// The token endpoint could not be reached.
	#[error("Token endpoint could not be reached.")]
	Transport(#[source] TransportError),
	/// The token endpoint answered with a non-success status.
	#[error("Token endpoint rejected the credentials with status {status}: {body}.")]
	Rejected {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Bounded preview of the response body.
		body: String,
	},
	/// The token endpoint returned JSON without a usable `access_token`.
	#[error("Token endpoint returned a malformed response.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: JsonPathError,
	},
	/// The token endpoint returned an empty `access_token`.
	#[error("Token endpoint returned an empty access token.")]
	EmptyAccessToken,
}

/// Failures raised by authenticated API calls.
#[derive(Debug, ThisError)]
pub enum HttpError {
	/// The API answered with a non-success status.
	#[error("{method} {path} failed with status {status}: {body}.")]
	Status {
		/// HTTP method of the failing call.
		method: String,
		/// Normalized request path.
		path: String,
		/// HTTP status code.
		status: u16,
		/// Bounded preview of the response body.
		body: String,
	},
	/// The request never produced a response.
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Failures raised while decoding API responses.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body is not valid JSON or does not match the expected schema.
	#[error("Response from {path} could not be decoded.")]
	Json {
		/// Normalized request path whose response failed to decode.
		path: String,
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: JsonPathError,
	},
	/// Practice list repeated an identifier.
	#[error("Practice `{id}` appears more than once in the practice list.")]
	DuplicatePractice {
		/// Repeated practice identifier.
		id: String,
	},
}

/// Failure to obtain any response from the transport.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Decodes a complete JSON body, recording the path of the first mismatching field.
///
/// Bytes after the top-level value (other than whitespace) are a syntax error.
pub(crate) fn decode_json<T>(body: &[u8]) -> Result<T, JsonPathError>
where
	T: for<'de> Deserialize<'de>,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);
	let value = serde_path_to_error::deserialize(&mut deserializer)?;

	// Only whitespace may follow the first value.
	deserializer
		.end()
		.map_err(|e| serde_path_to_error::Error::new(serde_path_to_error::Track::new().path(), e))?;

	Ok(value)
}

/// Returns a bounded, lossy UTF-8 preview of a response body for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
	const LIMIT: usize = 256;

	let text = String::from_utf8_lossy(body);
	let trimmed = text.trim();

	if trimmed.len() <= LIMIT {
		return trimmed.to_owned();
	}

	let mut end = LIMIT;

	while !trimmed.is_char_boundary(end) {
		end -= 1;
	}

	format!("{}...", &trimmed[..end])
}
