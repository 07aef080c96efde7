// self
use crate::obs::{CallKind, CallOutcome};

/// Counter bumped once per attempt, success, and failure.
pub const CALL_COUNTER: &str = "mdp_client_call_total";

/// Bumps [`CALL_COUNTER`] labeled with `call` and `outcome`. No-op without `metrics`.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(CALL_COUNTER, "call" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}
