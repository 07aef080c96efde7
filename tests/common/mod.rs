#![allow(dead_code)]

// crates.io
use httpmock::{Mock, prelude::*};
// self
use mdp_client::{
	client::{ReqwestMdpClient, TokenProvider},
	config::{ApiVersion, ClientConfig},
	http::ReqwestHttpClient,
	reqwest::Client,
	url::Url,
};

pub const CLIENT_KEY: &str = "mdp-key";
pub const CLIENT_SECRET: &str = "mdp-secret";
/// `base64("mdp-key:mdp-secret")` with the `Basic` scheme.
pub const BASIC_HEADER: &str = "Basic bWRwLWtleTptZHAtc2VjcmV0";

/// Builds the crate's reqwest transport, accepting the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let builder =
		Client::builder().danger_accept_invalid_certs(true).danger_accept_invalid_hostnames(true);

	ReqwestHttpClient::from_builder(builder)
		.expect("Failed to build insecure Reqwest client for tests.")
}

/// Builds a configuration pointing at the mock server.
pub fn build_config(server: &MockServer, version: ApiVersion) -> ClientConfig {
	ClientConfig::builder()
		.client_key(CLIENT_KEY)
		.client_secret(CLIENT_SECRET)
		.base_url(Url::parse(&server.url("/")).expect("Mock base URL should parse successfully."))
		.version(version)
		.build()
		.expect("Client configuration should build successfully.")
}

/// Constructs a reqwest-backed client talking to the mock server.
pub fn build_test_client(server: &MockServer, version: ApiVersion) -> ReqwestMdpClient {
	ReqwestMdpClient::with_http_client(build_config(server, version), test_reqwest_http_client())
}

/// Constructs a standalone token provider talking to the mock server.
pub fn build_token_provider(
	server: &MockServer,
	version: ApiVersion,
) -> TokenProvider<ReqwestHttpClient> {
	TokenProvider::new(build_config(server, version), test_reqwest_http_client())
}

/// Registers a token endpoint answering with `token` for the given version.
pub async fn mock_token<'a>(server: &'a MockServer, version: ApiVersion, token: &str) -> Mock<'a> {
	let path = format!("{}/token", version.auth_prefix());
	let body = format!("{{\"access_token\":\"{token}\",\"expires_in\":\"3600\"}}");

	server
		.mock_async(|when, then| {
			when.method(POST)
				.path(path.as_str())
				.header("authorization", BASIC_HEADER)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("grant_type=client_credentials");
			then.status(200).header("content-type", "application/json").body(body.as_str());
		})
		.await
}
