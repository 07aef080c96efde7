//! Typed response schemas for the MDP endpoints used by the client.
//!
//! Every schema decodes through `serde_path_to_error`, so a missing or mistyped field fails
//! fast with the JSON path of the offending value. Unknown fields are ignored.

// self
use crate::{
	_prelude::*,
	auth::{DepartmentId, PracticeId},
	error::DecodeError,
};

/// Body returned by the token endpoint.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
	/// Bearer token value.
	pub access_token: String,
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse").field("access_token", &"<redacted>").finish()
	}
}

/// Body returned by `GET {version}/{practice}/practiceinfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeInfoResponse {
	/// Practices visible to the application.
	pub practiceinfo: Vec<PracticeInfo>,
}

/// Single entry of the practice list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeInfo {
	/// Practice identifier.
	pub practiceid: PracticeId,
	/// Display name.
	pub name: String,
}

/// Practice identifiers mapped to display names, ordered by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeRegistry(BTreeMap<PracticeId, String>);
impl PracticeRegistry {
	/// Builds a registry, rejecting practice lists that repeat an identifier.
	pub fn from_practices<I>(practices: I) -> Result<Self, DecodeError>
	where
		I: IntoIterator<Item = PracticeInfo>,
	{
		let mut map = BTreeMap::new();

		for PracticeInfo { practiceid, name } in practices {
			if map.contains_key(&practiceid) {
				return Err(DecodeError::DuplicatePractice { id: practiceid.into() });
			}

			map.insert(practiceid, name);
		}

		Ok(Self(map))
	}

	/// Returns the display name registered for `id`.
	pub fn name(&self, id: &str) -> Option<&str> {
		self.0.get(id).map(String::as_str)
	}

	/// Returns the lowest practice identifier, if any.
	pub fn first(&self) -> Option<&PracticeId> {
		self.0.keys().next()
	}

	/// Iterates over the registered practice identifiers.
	pub fn ids(&self) -> impl Iterator<Item = &PracticeId> {
		self.0.keys()
	}

	/// Iterates over identifier/name pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&PracticeId, &str)> {
		self.0.iter().map(|(id, name)| (id, name.as_str()))
	}

	/// Number of registered practices.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no practice is registered.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl TryFrom<PracticeInfoResponse> for PracticeRegistry {
	type Error = DecodeError;

	fn try_from(response: PracticeInfoResponse) -> Result<Self, Self::Error> {
		Self::from_practices(response.practiceinfo)
	}
}

/// Body returned by `GET {version}/{practice}/departments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepartmentsResponse {
	/// Departments in the practice, up to the requested limit.
	pub departments: Vec<Department>,
	/// Total number of departments reported by the API.
	#[serde(default)]
	pub totalcount: Option<u64>,
}

/// Single department entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
	/// Department identifier.
	pub departmentid: DepartmentId,
	/// Display name.
	pub name: String,
	/// Remaining vendor fields (address, timezone, flags, ...).
	#[serde(flatten)]
	pub details: BTreeMap<String, serde_json::Value>,
}

/// CCDA patient care plan document.
///
/// The document schema is vendor-defined and open-ended, so it is kept as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarePlan(pub serde_json::Value);

/// Acknowledgement returned after creating an appointment note.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentNote(pub serde_json::Value);
