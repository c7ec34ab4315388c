//! Identity assertion provider types.

// self
use crate::{
	_prelude::*,
	category::{Category, CategoryWizard, TypeSelection},
	error::ConfigError,
	provider::{DisplayField, FieldBindings, ParamValidator, ProviderConfig, WizardProviderConfig},
};

const DEFAULT: &str = "Default";
const CONCAT: &str = "Concat";
const SWITCH_CASE: &str = "Switch Case";
const REGEX: &str = "Regular Expression";
const TYPES: [&str; 4] = [DEFAULT, CONCAT, SWITCH_CASE, REGEX];

/// Wizard for the identity assertion category.
#[derive(Debug, Default)]
pub struct IdentityAssertionWizard {
	selection: TypeSelection,
}
impl IdentityAssertionWizard {
	const STEPS: usize = 4;

	fn build(provider_type: &str) -> Option<WizardProviderConfig> {
		let role = Category::IdentityAssertion.role();
		let (name, binding) = match provider_type {
			DEFAULT => (
				"Default",
				FieldBindings::new(DEFAULT, role)
					.field(DisplayField::new("Principal Mapping", "principal.mapping"))
					.field(DisplayField::new("Group Principal Mapping", "group.principal.mapping")),
			),
			CONCAT => (
				"Concat",
				FieldBindings::new(CONCAT, role)
					.field(DisplayField::new("Prefix", "concat.prefix"))
					.field(DisplayField::new("Suffix", "concat.suffix"))
					.require_any_of(["Prefix", "Suffix"]),
			),
			SWITCH_CASE => {
				let case = || ParamValidator::one_of(["upper", "lower", "none"]);

				(
					"SwitchCase",
					FieldBindings::new(SWITCH_CASE, role)
						.field(DisplayField::new("Principal Case", "principal.case").validator(case()))
						.field(
							DisplayField::new("Group Principal Case", "group.principal.case")
								.validator(case()),
						),
				)
			},
			REGEX => (
				"Regex",
				FieldBindings::new(REGEX, role)
					.field(DisplayField::new("Input", "input").required())
					.field(DisplayField::new("Output", "output").required())
					.field(DisplayField::new("Lookup", "lookup"))
					.field(
						DisplayField::new(
							"Use Original on Lookup Failure",
							"use.original.on.lookup.failure",
						)
						.validator(ParamValidator::Boolean),
					),
			),
			_ => return None,
		};

		Some(WizardProviderConfig::new(ProviderConfig::new(role, name)).with_binding(binding))
	}
}
impl CategoryWizard for IdentityAssertionWizard {
	fn category(&self) -> Category {
		Category::IdentityAssertion
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
		self.selection.select(Category::IdentityAssertion, &TYPES, provider_type)
	}

	fn provider_config(&mut self) -> Option<&mut WizardProviderConfig> {
		self.selection.config_or_build(Self::build)
	}

	fn reset(&mut self) {
		self.selection.clear();
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn configured(provider_type: &str) -> WizardProviderConfig {
		let mut wizard = IdentityAssertionWizard::default();

		wizard.select_type(provider_type).expect("Catalog type should be selectable.");
		wizard.provider_config().cloned().expect("Selected type should build a config.")
	}

	#[test]
	fn default_mapping_is_optional() {
		let pc = configured(DEFAULT);

		assert!(pc.is_valid());
		assert_eq!(pc.config.role, "identity-assertion");
		assert_eq!(pc.display_name(), "Default (identity-assertion)");
	}

	#[test]
	fn concat_needs_prefix_or_suffix() {
		let mut pc = configured(CONCAT);

		assert!(!pc.is_valid());

		pc.set_display_param("Prefix", "svc-");

		assert!(pc.is_valid());
	}

	#[test]
	fn regex_requires_input_and_output() {
		let mut pc = configured(REGEX);

		pc.set_display_param("Input", "(.*)@EXAMPLE.COM");

		assert!(!pc.is_valid());

		pc.set_display_param("Output", "{1}");
		pc.set_display_param("Use Original on Lookup Failure", "maybe");

		assert!(!pc.is_valid_param_value("Use Original on Lookup Failure"));

		pc.set_display_param("Use Original on Lookup Failure", "true");

		assert!(pc.is_valid());
		assert_eq!(pc.config.name, "Regex");
	}
}
