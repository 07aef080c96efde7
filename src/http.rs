//! Transport primitives for token exchanges and authenticated API calls.
//!
//! The module exposes [`ApiHttpClient`], the client's only dependency on an HTTP stack,
//! together with the reqwest-backed [`ReqwestHttpClient`]. Requests and responses use the
//! [`http`] crate types so custom transports never see reqwest-specific structures.

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Outbound request handed to a transport.
pub type HttpRequest = http::Request<Vec<u8>>;
/// Fully buffered response returned by a transport.
pub type HttpResponse = http::Response<Vec<u8>>;
/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing API requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared between
/// the token provider and the REST caller behind an [`Arc`]. The returned response must be
/// fully buffered; any connection or stream the transport acquires has to be released
/// before the future resolves, on success and failure alike.
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request` and returns the buffered response, whatever its status.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// reqwest-backed transport that never follows redirects.
///
/// The token endpoint must answer the credential POST itself; a `3xx` is surfaced as a
/// rejected exchange instead of replaying the `Authorization: Basic` header elsewhere. API
/// calls use the same policy, so a redirect shows up as an [`HttpError::Status`].
///
/// [`HttpError::Status`]: crate::error::HttpError::Status
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a transport with reqwest's defaults plus the no-redirect policy.
	pub fn new() -> Result<Self, ConfigError> {
		Self::from_builder(ReqwestClient::builder())
	}

	/// Finishes `builder` with the no-redirect policy applied on top of the caller's settings.
	pub fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, ConfigError> {
		Ok(Self(builder.redirect(reqwest::redirect::Policy::none()).build()?))
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok::<_, ReqwestError>(response_new)
		})
	}
}
