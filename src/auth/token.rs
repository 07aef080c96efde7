//! Cached bearer token handed out by the token provider.

// self
use crate::{_prelude::*, auth::Secret};

/// Bearer token obtained through the client-credentials grant.
///
/// The API does not require callers to track expiry, so only the instant the token was
/// obtained is recorded. The token stays valid for as long as the provider caches it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
	/// Token value; callers must avoid logging it.
	pub secret: Secret,
	/// Instant the token endpoint answered.
	pub obtained_at: OffsetDateTime,
}
impl AccessToken {
	/// Wraps a token value obtained at the provided instant.
	pub fn new(value: impl Into<String>, obtained_at: OffsetDateTime) -> Self {
		Self { secret: Secret::new(value), obtained_at }
	}

	/// Returns the raw token value.
	pub fn expose(&self) -> &str {
		self.secret.expose()
	}

	/// Returns the `Authorization` header value for authenticated API calls.
	pub fn bearer_authorization(&self) -> String {
		format!("Bearer {}", self.secret.expose())
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("secret", &self.secret)
			.field("obtained_at", &self.obtained_at)
			.finish()
	}
}
