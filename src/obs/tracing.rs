// self
use crate::{_prelude::*, obs::CallKind};

/// Future returned by [`CallSpan::instrument`]: wrapped in the span with `tracing`.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`CallSpan::instrument`]: the input future itself.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// `mdp_client.call` span carried by one token exchange or API call.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens the span; `stage` names the method that started it.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("mdp_client.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Runs `fut` inside the span. Nothing is entered across `.await`.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits an event naming the request about to be dispatched (when tracing is enabled).
///
/// Only the method and URL are logged; header values never are.
pub fn trace_dispatch(kind: CallKind, method: &http::Method, url: &Url) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(call = kind.as_str(), %method, %url, "Calling MDP endpoint.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, method, url);
	}
}
