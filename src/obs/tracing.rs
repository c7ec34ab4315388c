// self
use crate::{_prelude::*, obs::WizardOp};

/// Emits a diagnostic event under the `provider_wizard` target when `tracing` is enabled.
macro_rules! wizard_event {
	($level:ident, $($arg:tt)+) => {{
		#[cfg(feature = "tracing")]
		::tracing::$level!(target: "provider_wizard", $($arg)+);
	}};
}
pub(crate) use wizard_event;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOp<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOp<F> = F;

/// A span builder used by wizard operations.
#[derive(Clone, Debug)]
pub struct WizardSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl WizardSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(op: WizardOp, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("provider_wizard.op", op = op.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, stage);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> WizardSpanGuard {
		#[cfg(feature = "tracing")]
		{
			WizardSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			WizardSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOp<Fut>
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

/// RAII guard returned by [`WizardSpan::entered`].
pub struct WizardSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for WizardSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("WizardSpanGuard(..)")
	}
}
