// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::{ApiVersion, ClientConfig, DEFAULT_BASE_URL},
	error::ConfigError,
};

/// Builder for [`ClientConfig`] values.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
	/// Application key.
	pub client_key: Option<String>,
	/// Application secret.
	pub client_secret: Option<String>,
	/// HTTPS origin; defaults to [`DEFAULT_BASE_URL`].
	pub base_url: Option<Url>,
	/// API version; defaults to [`ApiVersion::Preview1`].
	pub version: ApiVersion,
}
impl ClientConfigBuilder {
	/// Sets the application key.
	pub fn client_key(mut self, key: impl Into<String>) -> Self {
		self.client_key = Some(key.into());

		self
	}

	/// Sets the application secret.
	pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Sets the base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Parses and sets the base URL.
	pub fn base_url_str(self, raw: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl { source })?;

		Ok(self.base_url(url))
	}

	/// Overrides the API version.
	pub fn version(mut self, version: ApiVersion) -> Self {
		self.version = version;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let client_key = self
			.client_key
			.filter(|key| !key.is_empty())
			.ok_or(ConfigError::MissingSetting { name: "client_key" })?;
		let client_secret = self
			.client_secret
			.filter(|secret| !secret.is_empty())
			.ok_or(ConfigError::MissingSetting { name: "client_secret" })?;
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(DEFAULT_BASE_URL)
				.map_err(|source| ConfigError::InvalidBaseUrl { source })?,
		};

		validate_base_url(&base_url)?;

		Ok(ClientConfig {
			credentials: Credentials::new(client_key, client_secret),
			base_url,
			version: self.version,
		})
	}
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
	if url.scheme() != "https" {
		return Err(ConfigError::InsecureBaseUrl { url: url.to_string() });
	}
	if url.cannot_be_a_base() || url.host().is_none() {
		return Err(ConfigError::UnsupportedBaseUrl { url: url.to_string() });
	}

	Ok(())
}
