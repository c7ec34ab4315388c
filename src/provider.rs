//! Provider configuration data (what gets persisted) and its optional wizard capabilities.
//!
//! [`ProviderConfig`] is the persisted unit: role, name, enabled flag, and parameters.
//! [`WizardProviderConfig`] wraps it with the capabilities a provider type may carry while the
//! wizard is collecting values: a [`DisplayBinding`] describing its human-facing fields and an
//! [`OrderedParam`] hook that fixes parameter order at acceptance time.

pub mod binding;
pub mod ordering;

pub use binding::*;
pub use ordering::*;

// self
use crate::{_prelude::*, param::ParamSet};

/// Persisted provider entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Category-level role discriminator (`authentication`, `ha`, ...).
	pub role: String,
	/// Provider type identifier.
	pub name: String,
	/// Whether the provider is active.
	pub enabled: bool,
	/// Provider parameters.
	#[serde(default)]
	pub params: ParamSet,
}
impl ProviderConfig {
	/// Creates an enabled provider with no parameters.
	pub fn new(role: impl Into<String>, name: impl Into<String>) -> Self {
		Self { role: role.into(), name: name.into(), enabled: true, params: ParamSet::new() }
	}

	/// Overrides the enabled flag.
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;

		self
	}

	/// Seeds parameters, appending to (or replacing) existing ones.
	pub fn with_params<I, K, V>(mut self, params: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.params.extend(params);

		self
	}

	/// Returns the value of `key`.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.get(key)
	}

	/// Sets `key` to `value`.
	pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.params.set(key, value);
	}
}

/// Provider configuration as handled inside the wizard.
///
/// Capabilities are explicit optional fields and are consulted where they matter; none of them
/// is ever persisted. Use [`WizardProviderConfig::to_persisted`] to obtain the stripped form.
#[derive(Clone)]
pub struct WizardProviderConfig {
	/// The provider data that will be persisted.
	pub config: ProviderConfig,
	/// Display-field metadata, when the provider type exposes editable fields.
	pub binding: Option<Arc<dyn DisplayBinding>>,
	/// Canonical parameter ordering, when the provider type requires one.
	pub ordering: Option<Arc<dyn OrderedParam>>,
}
impl WizardProviderConfig {
	/// Wraps a bare provider configuration without capabilities.
	pub fn new(config: ProviderConfig) -> Self {
		Self { config, binding: None, ordering: None }
	}

	/// Attaches a display binding.
	pub fn with_binding(mut self, binding: impl 'static + DisplayBinding) -> Self {
		self.binding = Some(Arc::new(binding));

		self
	}

	/// Attaches a parameter ordering.
	pub fn with_ordering(mut self, ordering: impl 'static + OrderedParam) -> Self {
		self.ordering = Some(Arc::new(ordering));

		self
	}

	/// Human-facing field names; empty without a display binding.
	pub fn display_property_names(&self) -> Vec<String> {
		self.binding.as_ref().map(|b| b.display_property_names()).unwrap_or_default()
	}

	/// Resolves the parameter key bound to `display_name`.
	pub fn property_binding(&self, display_name: &str) -> Option<String> {
		self.binding.as_ref().and_then(|b| b.property_binding(display_name))
	}

	/// Sets the parameter bound to `display_name`; returns the key that was written.
	pub fn set_display_param(&mut self, display_name: &str, value: impl Into<String>) -> Option<String> {
		let key = self.property_binding(display_name)?;

		self.config.set_param(key.clone(), value);

		Some(key)
	}

	/// Returns the value of the parameter bound to `display_name`.
	pub fn display_param(&self, display_name: &str) -> Option<&str> {
		let key = self.property_binding(display_name)?;

		self.config.param(&key)
	}

	/// Whether `display_name` should be masked.
	pub fn is_password_param(&self, display_name: &str) -> bool {
		self.binding.as_ref().is_some_and(|b| b.is_password_param(display_name))
	}

	/// Field-level validity; true without a display binding.
	pub fn is_valid_param_value(&self, display_name: &str) -> bool {
		self.binding.as_ref().is_none_or(|b| b.is_valid_param_value(display_name, &self.config.params))
	}

	/// Whole-config validity gate; true without a display binding.
	pub fn is_valid(&self) -> bool {
		self.binding.as_ref().is_none_or(|b| b.is_valid(&self.config.params))
	}

	/// Applies the parameter ordering, if any.
	pub fn apply_ordering(&mut self) {
		if let Some(ordering) = self.ordering.as_ref() {
			let params = std::mem::take(&mut self.config.params);

			self.config.params = ordering.order_params(params);
		}
	}

	/// Label shown for a configured provider: `"<type> (<role>)"`.
	pub fn display_name(&self) -> String {
		match self.binding.as_ref() {
			Some(binding) => format!("{} ({})", binding.provider_type(), binding.role()),
			None => format!("{} ({})", self.config.name, self.config.role),
		}
	}

	/// Copies the four persisted fields into a fresh [`ProviderConfig`].
	pub fn to_persisted(&self) -> ProviderConfig {
		ProviderConfig {
			role: self.config.role.clone(),
			name: self.config.name.clone(),
			enabled: self.config.enabled,
			params: self.config.params.clone(),
		}
	}

	/// Iterates over parameters with values of password fields replaced by `<redacted>`.
	pub fn redacted_params(&self) -> impl Iterator<Item = (&str, &str)> {
		let secret_keys = self
			.binding
			.as_ref()
			.map(|b| {
				b.display_property_names()
					.into_iter()
					.filter(|name| b.is_password_param(name))
					.filter_map(|name| b.property_binding(&name))
					.collect::<Vec<_>>()
			})
			.unwrap_or_default();

		self.config.params.iter().map(move |(key, value)| {
			if secret_keys.iter().any(|k| k == key) { (key, "<redacted>") } else { (key, value) }
		})
	}
}
impl From<ProviderConfig> for WizardProviderConfig {
	fn from(config: ProviderConfig) -> Self {
		Self::new(config)
	}
}
impl Debug for WizardProviderConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("WizardProviderConfig")
			.field("role", &self.config.role)
			.field("name", &self.config.name)
			.field("enabled", &self.config.enabled)
			.field("params", &self.redacted_params().collect::<Vec<_>>())
			.field("binding", &self.binding.is_some())
			.field("ordering", &self.ordering.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn credential_config() -> WizardProviderConfig {
		let binding = FieldBindings::new("Static", "authentication")
			.field(DisplayField::new("Username", "user.name").required())
			.field(DisplayField::new("Password", "user.pass").required().password());

		WizardProviderConfig::new(ProviderConfig::new("authentication", "StaticProvider"))
			.with_binding(binding)
	}

	#[test]
	fn display_params_write_through_bindings() {
		let mut pc = credential_config();

		assert_eq!(pc.set_display_param("Username", "admin"), Some("user.name".into()));
		assert_eq!(pc.set_display_param("Unknown", "ignored"), None);
		assert_eq!(pc.display_param("Username"), Some("admin"));
		assert_eq!(pc.config.params.len(), 1);
		assert!(!pc.is_valid());

		pc.set_display_param("Password", "secret");

		assert!(pc.is_valid());
	}

	#[test]
	fn bare_configs_are_valid_and_unbound() {
		let pc = WizardProviderConfig::new(ProviderConfig::new("authorization", "XASecurePDPKnox"));

		assert!(pc.is_valid());
		assert!(pc.is_valid_param_value("Anything"));
		assert!(pc.display_property_names().is_empty());
		assert_eq!(pc.display_name(), "XASecurePDPKnox (authorization)");
	}

	#[test]
	fn display_name_prefers_binding_type() {
		assert_eq!(credential_config().display_name(), "Static (authentication)");
	}

	#[test]
	fn debug_output_redacts_password_values() {
		let mut pc = credential_config();

		pc.set_display_param("Username", "admin");
		pc.set_display_param("Password", "hunter2");

		let rendered = format!("{pc:?}");

		assert!(rendered.contains("admin"));
		assert!(!rendered.contains("hunter2"));
		assert!(rendered.contains("<redacted>"));
	}

	#[test]
	fn persisted_form_serializes_four_fields() {
		let mut pc = credential_config();

		pc.set_display_param("Username", "admin");

		let value = serde_json::to_value(pc.to_persisted()).expect("Provider should serialize.");
		let object = value.as_object().expect("Provider should serialize to an object.");
		let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();

		keys.sort_unstable();

		assert_eq!(keys, ["enabled", "name", "params", "role"]);
	}
}
