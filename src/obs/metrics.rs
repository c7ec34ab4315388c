// self
use crate::obs::{WizardOp, WizardOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_wizard_outcome(op: WizardOp, outcome: WizardOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"provider_wizard_op_total",
			"op" => op.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}
