//! Authorization provider types.

// self
use crate::{
	_prelude::*,
	category::{Category, CategoryWizard, TypeSelection},
	error::ConfigError,
	provider::{DisplayField, FieldBindings, ParamValidator, ProviderConfig, WizardProviderConfig},
};

const ACLS: &str = "ACLs";
const RANGER: &str = "Ranger";
const TYPES: [&str; 2] = [ACLS, RANGER];

/// Wizard for the authorization category.
#[derive(Debug, Default)]
pub struct AuthorizationWizard {
	selection: TypeSelection,
}
impl AuthorizationWizard {
	const STEPS: usize = 4;

	fn build(provider_type: &str) -> Option<WizardProviderConfig> {
		let role = Category::Authorization.role();

		match provider_type {
			ACLS => Some(
				WizardProviderConfig::new(ProviderConfig::new(role, "AclsAuthz")).with_binding(
					FieldBindings::new(ACLS, role)
						.field(
							DisplayField::new("Processing Mode", "acl.mode")
								.validator(ParamValidator::one_of(["AND", "OR"])),
						)
						.field(DisplayField::new("Access Control List", "knox.acl").required()),
				),
			),
			RANGER => Some(WizardProviderConfig::new(ProviderConfig::new(role, "XASecurePDPKnox"))),
			_ => None,
		}
	}
}
impl CategoryWizard for AuthorizationWizard {
	fn category(&self) -> Category {
		Category::Authorization
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
		self.selection.select(Category::Authorization, &TYPES, provider_type)
	}

	fn provider_config(&mut self) -> Option<&mut WizardProviderConfig> {
		self.selection.config_or_build(Self::build)
	}

	fn reset(&mut self) {
		self.selection.clear();
	}
}
