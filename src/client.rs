//! Authenticated REST caller for the MDP API.

pub mod token;

mod practice;

pub use practice::DEFAULT_DEPARTMENT_LIMIT;
pub use token::*;

// crates.io
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::{self, ConfigError, DecodeError, HttpError, TransportError},
	http::{ApiHttpClient, HttpRequest},
	obs::{self, CallKind, CallOutcome, CallSpan},
	request::{ApiRequest, FORM_URLENCODED},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestMdpClient = MdpClient<ReqwestHttpClient>;

/// Issues authenticated calls against a single MDP deployment.
///
/// The client owns the configuration, the transport, and the [`TokenProvider`] whose cached
/// bearer token is attached to every request. Operations are plain `async fn`s; nothing is
/// retried and no timeout is applied beyond what the transport enforces.
pub struct MdpClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Configuration shared with the token provider.
	pub config: Arc<ClientConfig>,
	/// Bearer token source.
	pub tokens: TokenProvider<C>,
}
impl<C> MdpClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		let config = Arc::new(config);
		let http_client = http_client.into();
		let tokens = TokenProvider::new(config.clone(), http_client.clone());

		Self { http_client, config, tokens }
	}

	/// Sends `request` with the bearer token attached and decodes the JSON response.
	pub async fn send<T>(&self, kind: CallKind, request: ApiRequest) -> Result<T>
	where
		T: for<'de> Deserialize<'de>,
	{
		let span = CallSpan::new(kind, "send");

		span.instrument(async move {
			let token = self.tokens.get_token().await?;

			obs::record_call_outcome(kind, CallOutcome::Attempt);

			let result = self.dispatch(kind, &request, &token.bearer_authorization()).await;

			obs::record_result(kind, &result);

			result
		})
		.await
	}

	/// Sends a caller-assembled `GET` request and decodes the JSON response.
	pub async fn get_json<T>(&self, request: ApiRequest) -> Result<T>
	where
		T: for<'de> Deserialize<'de>,
	{
		self.send(CallKind::Custom, request).await
	}

	async fn dispatch<T>(&self, kind: CallKind, request: &ApiRequest, bearer: &str) -> Result<T>
	where
		T: for<'de> Deserialize<'de>,
	{
		let url = request.url(&self.config.base_url);
		let path = request.path();
		let mut builder = http::Request::builder()
			.method(request.method.clone())
			.uri(url.as_str())
			.header(AUTHORIZATION, bearer);

		if let Some(accept) = request.accept {
			builder = builder.header(ACCEPT, accept);
		}
		if request.sends_body() {
			builder = builder.header(CONTENT_TYPE, FORM_URLENCODED);
		}

		let http_request: HttpRequest = builder.body(request.body()).map_err(ConfigError::from)?;

		obs::trace_dispatch(kind, &request.method, &url);

		let response = self
			.http_client
			.execute(http_request)
			.await
			.map_err(|e| HttpError::Transport(TransportError::network(e)))?;
		let status = response.status();

		if !status.is_success() {
			return Err(HttpError::Status {
				method: request.method.to_string(),
				path,
				status: status.as_u16(),
				body: error::body_preview(response.body()),
			}
			.into());
		}

		let decoded = error::decode_json(response.body())
			.map_err(|source| DecodeError::Json { path, source })?;

		Ok(decoded)
	}
}
#[cfg(feature = "reqwest")]
impl MdpClient<ReqwestHttpClient> {
	/// Creates a client backed by [`ReqwestHttpClient::new`].
	pub fn new(config: ClientConfig) -> Result<Self> {
		Ok(Self::with_http_client(config, ReqwestHttpClient::new()?))
	}

	/// Loads the configuration from the environment and creates a reqwest-backed client.
	pub fn from_env() -> Result<Self> {
		Self::new(ClientConfig::from_env()?)
	}
}
impl<C> Debug for MdpClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MdpClient")
			.field("base_url", &self.config.base_url.as_str())
			.field("version", &self.config.version)
			.field("client_key", &self.config.credentials.client_key)
			.finish()
	}
}
