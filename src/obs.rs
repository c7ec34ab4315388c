//! Optional observability helpers for wizard operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit diagnostics under the `provider_wizard` target and
//!   spans named `provider_wizard.op` with the `op` and `stage` fields.
//! - Enable `metrics` to increment the `provider_wizard_op_total` counter for every
//!   attempt/success/decline/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Wizard operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardOp {
	/// Accepting the in-progress provider into the session.
	FinishAdd,
	/// Persisting the session's providers.
	Finalize,
}
impl WizardOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			WizardOp::FinishAdd => "finish_add",
			WizardOp::Finalize => "finalize",
		}
	}
}
impl Display for WizardOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Operation declined without side effects (e.g. invalid provider).
	Declined,
	/// Failure propagated back to the caller.
	Failure,
}
impl WizardOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			WizardOutcome::Attempt => "attempt",
			WizardOutcome::Success => "success",
			WizardOutcome::Declined => "declined",
			WizardOutcome::Failure => "failure",
		}
	}
}
impl Display for WizardOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
