//! Client-credentials token acquisition with a process-lifetime cache.
//!
//! [`TokenProvider::get_token`] returns the cached bearer token when one exists and only
//! otherwise calls the version's token endpoint. The cache sits behind an async mutex held
//! across the exchange, so concurrent callers piggy-back on a single in-flight request
//! instead of stampeding the endpoint. Tokens never expire from the cache; call
//! [`TokenProvider::invalidate`] to force a fresh exchange.

// crates.io
use http::{
	Method,
	header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::ClientConfig,
	error::{self, AuthError, ConfigError, TransportError},
	http::{ApiHttpClient, HttpRequest},
	model::TokenResponse,
	obs::{self, CallKind, CallOutcome, CallSpan},
	request::{self, APPLICATION_JSON, FORM_URLENCODED},
};

const GRANT_TYPE: &str = "client_credentials";

/// Performs the client-credentials exchange and caches the resulting bearer token.
pub struct TokenProvider<C>
where
	C: ?Sized + ApiHttpClient,
{
	http_client: Arc<C>,
	config: Arc<ClientConfig>,
	cache: AsyncMutex<Option<AccessToken>>,
}
impl<C> TokenProvider<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a provider with an empty cache.
	pub fn new(config: impl Into<Arc<ClientConfig>>, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			config: config.into(),
			cache: AsyncMutex::new(None),
		}
	}

	/// Returns the cached token, exchanging the client credentials first when none is cached.
	pub async fn get_token(&self) -> Result<AccessToken> {
		let span = CallSpan::new(CallKind::Token, "get_token");

		span.instrument(async move {
			let mut cached = self.cache.lock().await;

			if let Some(token) = cached.as_ref() {
				return Ok(token.clone());
			}

			obs::record_call_outcome(CallKind::Token, CallOutcome::Attempt);

			let result = self.exchange().await;

			obs::record_result(CallKind::Token, &result);

			let token = result?;

			*cached = Some(token.clone());

			Ok(token)
		})
		.await
	}

	/// Returns the cached token without performing any I/O.
	pub async fn cached(&self) -> Option<AccessToken> {
		self.cache.lock().await.clone()
	}

	/// Drops the cached token so the next [`get_token`](Self::get_token) call re-authenticates.
	pub async fn invalidate(&self) -> Option<AccessToken> {
		self.cache.lock().await.take()
	}

	async fn exchange(&self) -> Result<AccessToken> {
		let url = self.config.token_url();
		let form = BTreeMap::from([("grant_type".to_owned(), GRANT_TYPE.to_owned())]);
		let request: HttpRequest = http::Request::builder()
			.method(Method::POST)
			.uri(url.as_str())
			.header(AUTHORIZATION, self.config.credentials.basic_authorization())
			.header(CONTENT_TYPE, FORM_URLENCODED)
			.header(ACCEPT, APPLICATION_JSON)
			.body(request::encode_params(&form).into_bytes())
			.map_err(ConfigError::from)?;

		obs::trace_dispatch(CallKind::Token, &Method::POST, &url);

		let response = self
			.http_client
			.execute(request)
			.await
			.map_err(|e| AuthError::Transport(TransportError::network(e)))?;
		let status = response.status();

		if !status.is_success() {
			return Err(AuthError::Rejected {
				status: status.as_u16(),
				body: error::body_preview(response.body()),
			}
			.into());
		}

		let payload: TokenResponse = error::decode_json(response.body())
			.map_err(|source| AuthError::MalformedResponse { source })?;

		if payload.access_token.is_empty() {
			return Err(AuthError::EmptyAccessToken.into());
		}

		Ok(AccessToken::new(payload.access_token, OffsetDateTime::now_utc()))
	}
}
impl<C> Debug for TokenProvider<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenProvider")
			.field("token_url", &self.config.token_url().as_str())
			.field("client_key", &self.config.credentials.client_key)
			.finish()
	}
}
