//! Redacted holder for the application secret and issued bearer tokens.

// self
use crate::_prelude::*;

/// Sensitive string that prints as `Secret(<redacted>)`.
///
/// [`expose`](Self::expose) is the only way back to the raw value, so every use of the
/// plaintext (header construction) is greppable.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);
impl Secret {
	/// Takes ownership of `value`.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Plaintext value, for building `Authorization` headers only.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Secret(<redacted>)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::Credentials;

	#[test]
	fn debug_output_hides_value() {
		let secret = Secret::new("mdp-secret");

		assert_eq!(format!("{secret:?}"), "Secret(<redacted>)");
		assert_eq!(secret.expose(), "mdp-secret");
	}

	#[test]
	fn credentials_debug_hides_secret() {
		let rendered = format!("{:?}", Credentials::new("mdp-key", "mdp-secret"));

		assert!(rendered.contains("mdp-key"));
		assert!(!rendered.contains("mdp-secret"));
	}
}
