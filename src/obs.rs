//! Optional observability helpers for token exchanges and API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `mdp_client.call` with the `call`
//!   (operation) and `stage` (call site) fields, plus an `info` event naming each target URL.
//! - Enable `metrics` to increment the `mdp_client_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Client-credentials exchange against the token endpoint.
	Token,
	/// Practice list lookup.
	PracticeInfo,
	/// Department list lookup.
	Departments,
	/// Patient care plan fetch.
	CarePlan,
	/// Appointment note creation.
	AppointmentNote,
	/// Caller-assembled request sent through the generic helpers.
	Custom,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Token => "token",
			CallKind::PracticeInfo => "practice_info",
			CallKind::Departments => "departments",
			CallKind::CarePlan => "care_plan",
			CallKind::AppointmentNote => "appointment_note",
			CallKind::Custom => "custom",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// A request is about to be dispatched.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the success or failure of a finished call.
pub fn record_result<T>(kind: CallKind, result: &Result<T>) {
	match result {
		Ok(_) => record_call_outcome(kind, CallOutcome::Success),
		Err(_) => record_call_outcome(kind, CallOutcome::Failure),
	}
}
