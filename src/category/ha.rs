//! High-availability provider types, one per dispatched service.

// self
use crate::{
	_prelude::*,
	category::{Category, CategoryWizard, TypeSelection},
	error::ConfigError,
	provider::{DisplayField, FieldBindings, ParamValidator, ProviderConfig, WizardProviderConfig},
};

const TYPES: [&str; 6] = ["WEBHDFS", "HIVE", "YARN", "OOZIE", "HBASE", "WEBHCAT"];

/// Wizard for the HA category.
#[derive(Debug, Default)]
pub struct HaWizard {
	selection: TypeSelection,
}
impl HaWizard {
	const STEPS: usize = 4;

	fn build(service: &str) -> Option<WizardProviderConfig> {
		if !TYPES.contains(&service) {
			return None;
		}

		let role = Category::Ha.role();
		let key = |setting: &str| format!("{service}.{setting}");
		let binding = FieldBindings::new(service, role)
			.field(DisplayField::new("Enabled", key("enabled")).validator(ParamValidator::Boolean))
			.field(
				DisplayField::new("Max Failover Attempts", key("maxFailoverAttempts"))
					.validator(ParamValidator::at_least(0)),
			)
			.field(
				DisplayField::new("Failover Sleep", key("failoverSleep"))
					.validator(ParamValidator::at_least(0)),
			)
			.field(DisplayField::new("ZooKeeper Ensemble", key("zookeeperEnsemble")))
			.field(DisplayField::new("ZooKeeper Namespace", key("zookeeperNamespace")));
		let config = ProviderConfig::new(role, "HaProvider").with_params([(key("enabled"), "true")]);

		Some(WizardProviderConfig::new(config).with_binding(binding))
	}
}
impl CategoryWizard for HaWizard {
	fn category(&self) -> Category {
		Category::Ha
	}

	fn types(&self) -> Vec<String> {
		TYPES.iter().map(|t| (*t).to_owned()).collect()
	}

	fn steps(&self) -> usize {
		Self::STEPS
	}

	fn selected_type(&self) -> Option<&str> {
		self.selection.selected()
	}

	fn select_type(&mut self, provider_type: &str) -> Result<(), ConfigError> {
		self.selection.select(Category::Ha, &TYPES, provider_type)
	}

	fn provider_config(&mut self) -> Option<&mut WizardProviderConfig> {
		self.selection.config_or_build(Self::build)
	}

	fn reset(&mut self) {
		self.selection.clear();
	}
}
