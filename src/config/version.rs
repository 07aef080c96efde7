// self
use crate::{_prelude::*, error::ConfigError};

/// MDP API versions recognized by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
	/// Production API.
	V1,
	/// Preview sandbox.
	#[default]
	Preview1,
	/// Open preview sandbox.
	OpenPreview1,
}
impl ApiVersion {
	/// Returns the version label used as the first path segment of every API call.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiVersion::V1 => "v1",
			ApiVersion::Preview1 => "preview1",
			ApiVersion::OpenPreview1 => "openpreview1",
		}
	}

	/// Returns the OAuth path prefix that hosts this version's token endpoint.
	pub const fn auth_prefix(self) -> &'static str {
		match self {
			ApiVersion::V1 => "/oauth",
			ApiVersion::Preview1 => "/oauthpreview",
			ApiVersion::OpenPreview1 => "/oauthopenpreview",
		}
	}
}
impl Display for ApiVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ApiVersion {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"v1" => Ok(ApiVersion::V1),
			"preview1" => Ok(ApiVersion::Preview1),
			"openpreview1" => Ok(ApiVersion::OpenPreview1),
			other => Err(ConfigError::UnknownVersion { value: other.to_owned() }),
		}
	}
}
