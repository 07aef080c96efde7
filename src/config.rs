//! Client configuration: credentials, base URL, and API version.
//!
//! [`ClientConfig`] is an explicit, validated value handed to the client at construction.
//! Build it with [`ClientConfig::builder`] or load it from the process environment with
//! [`ClientConfig::from_env`]. The base URL must use HTTPS; only its scheme, host, and port
//! are used because every request replaces the path.

/// Builder API for assembling client configurations.
pub mod builder;
/// API version labels and their OAuth prefixes.
pub mod version;

pub use builder::*;
pub use version::*;

// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError, request};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.athenahealth.com";

/// Environment variable holding the application key.
pub const ENV_KEY: &str = "MDP_KEY";
/// Environment variable holding the application secret.
pub const ENV_SECRET: &str = "MDP_SECRET";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "MDP_BASE_URL";
/// Environment variable overriding the API version.
pub const ENV_VERSION: &str = "MDP_VERSION";

/// Immutable client configuration consumed by the token provider and REST caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// Application key/secret pair.
	pub credentials: Credentials,
	/// HTTPS origin hosting both the OAuth and REST endpoints.
	pub base_url: Url,
	/// API version used for path prefixes and the token endpoint.
	pub version: ApiVersion,
}
impl ClientConfig {
	/// Creates a new builder.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Loads the configuration from `MDP_KEY`, `MDP_SECRET`, `MDP_BASE_URL`, and
	/// `MDP_VERSION`.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Loads the configuration through an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());
		let key = read(ENV_KEY).ok_or(ConfigError::MissingSetting { name: ENV_KEY })?;
		let secret = read(ENV_SECRET).ok_or(ConfigError::MissingSetting { name: ENV_SECRET })?;
		let mut builder = Self::builder().client_key(key).client_secret(secret);

		if let Some(raw) = read(ENV_BASE_URL) {
			builder = builder.base_url_str(&raw)?;
		}
		if let Some(raw) = read(ENV_VERSION) {
			builder = builder.version(raw.parse()?);
		}

		builder.build()
	}

	/// Returns the absolute URL of this version's token endpoint.
	pub fn token_url(&self) -> Url {
		let mut url = self.base_url.clone();
		let path = request::path_join([self.version.auth_prefix(), "/token"]);

		url.set_path(&path);
		url.set_query(None);

		url
	}
}
