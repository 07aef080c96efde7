//! Walks the MDP preview sandbox the way the vendor's getting-started guide does: authenticate,
//! list practices, list their departments, then optionally fetch a care plan and attach an
//! appointment note.
//!
//! Configure with `MDP_KEY`, `MDP_SECRET`, and optionally `MDP_BASE_URL`, `MDP_VERSION`,
//! `MDP_PRACTICE_ID`, `MDP_PATIENT_ID`, and `MDP_APPOINTMENT_ID`. Set `RUST_LOG=info` and
//! enable the `tracing` feature to see each request as it is dispatched.

// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use mdp_client::{
	auth::{AppointmentId, PatientId, PracticeId},
	client::{DEFAULT_DEPARTMENT_LIMIT, ReqwestMdpClient},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

	let client = ReqwestMdpClient::from_env()?;
	let starter = PracticeId::new(env_or("MDP_PRACTICE_ID", "1"))?;
	let practices = client.practices(&starter).await?;

	for (id, name) in practices.iter() {
		println!("Practice {id}: {name}.");
	}

	let departments = client.departments_for(&practices, DEFAULT_DEPARTMENT_LIMIT).await?;

	for (practice, response) in &departments {
		println!("Practice {practice} has {} department(s).", response.departments.len());

		for department in &response.departments {
			println!("  {}: {}", department.departmentid, department.name);
		}
	}

	if let Some(patient) = std::env::var("MDP_PATIENT_ID").ok() {
		let care_plan = client.care_plan(&starter, &PatientId::new(patient)?).await?;

		println!("Care plan: {:#}.", care_plan.0);
	}
	if let (Some(appointment), Some(practice)) =
		(std::env::var("MDP_APPOINTMENT_ID").ok(), practices.first())
	{
		let note = client
			.set_appointment_note(
				practice,
				&AppointmentId::new(appointment)?,
				"Hello from the Rust MDP client.",
			)
			.await?;

		println!("Appointment note: {}.", note.0);
	}

	Ok(())
}

fn env_or(name: &str, default: &str) -> String {
	std::env::var(name).unwrap_or_else(|_| default.to_owned())
}
