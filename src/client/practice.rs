//! Practice-scoped MDP operations: practice info, departments, care plans, and notes.

// self
use crate::{
	_prelude::*,
	auth::{AppointmentId, PatientId, PracticeId},
	client::MdpClient,
	http::ApiHttpClient,
	model::{AppointmentNote, CarePlan, DepartmentsResponse, PracticeInfoResponse, PracticeRegistry},
	obs::CallKind,
	request::{APPLICATION_JSON, ApiRequest},
};

/// Department page size used by the sample tour.
pub const DEFAULT_DEPARTMENT_LIMIT: u32 = 15;

impl<C> MdpClient<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Lists the practices visible from `practice` (`GET {version}/{practice}/practiceinfo`).
	pub async fn practices(&self, practice: &PracticeId) -> Result<PracticeRegistry> {
		let segments: [&str; 3] = [self.version(), practice, "practiceinfo"];
		let request = ApiRequest::get(segments);
		let response: PracticeInfoResponse = self.send(CallKind::PracticeInfo, request).await?;

		Ok(PracticeRegistry::try_from(response)?)
	}

	/// Lists up to `limit` departments of `practice`
	/// (`GET {version}/{practice}/departments?limit={limit}`).
	pub async fn departments(
		&self,
		practice: &PracticeId,
		limit: u32,
	) -> Result<DepartmentsResponse> {
		let segments: [&str; 3] = [self.version(), practice, "/departments"];
		let request = ApiRequest::get(segments).param("limit", limit.to_string());

		self.send(CallKind::Departments, request).await
	}

	/// Lists departments for every practice in `registry`, one request at a time.
	pub async fn departments_for(
		&self,
		registry: &PracticeRegistry,
		limit: u32,
	) -> Result<BTreeMap<PracticeId, DepartmentsResponse>> {
		let mut all = BTreeMap::new();

		for practice in registry.ids() {
			let departments = self.departments(practice, limit).await?;

			all.insert(practice.clone(), departments);
		}

		Ok(all)
	}

	/// Fetches the CCDA care plan of `patient`
	/// (`GET {version}/{practice}/ccda/{patient}/patientcareplan`).
	pub async fn care_plan(&self, practice: &PracticeId, patient: &PatientId) -> Result<CarePlan> {
		let segments: [&str; 5] = [self.version(), practice, "ccda", patient, "patientcareplan"];
		let request = ApiRequest::get(segments).accept(APPLICATION_JSON);

		self.send(CallKind::CarePlan, request).await
	}

	/// Attaches a note to an appointment
	/// (`POST {version}/{practice}/appointments/{appointment}/notes`).
	pub async fn set_appointment_note(
		&self,
		practice: &PracticeId,
		appointment: &AppointmentId,
		text: &str,
	) -> Result<AppointmentNote> {
		let segments: [&str; 5] =
			[self.version(), practice, "/appointments", appointment, "/notes"];
		let request = ApiRequest::post(segments).param("notetext", text);

		self.send(CallKind::AppointmentNote, request).await
	}

	fn version(&self) -> &'static str {
		self.config.version.as_str()
	}
}
