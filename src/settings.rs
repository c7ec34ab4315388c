//! Wizard settings and their builder.

// self
use crate::{
	_prelude::*, category::Category, document::DocumentFormat, error::ConfigError,
	resource::PROVIDER_CONFIG_RESOURCE_TYPE,
};

/// Validated settings consumed by [`WizardController`](crate::wizard::WizardController).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
	/// Resource type the finished document is created under.
	pub resource_type: String,
	/// Category selected when a session opens.
	pub default_category: Category,
	/// Document serialization format.
	pub format: DocumentFormat,
}
impl WizardSettings {
	/// Creates a builder seeded with defaults.
	pub fn builder() -> WizardSettingsBuilder {
		WizardSettingsBuilder::default()
	}

	/// Checks the settings, e.g. after deserializing them.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.resource_type.trim().is_empty() {
			return Err(ConfigError::EmptyResourceType);
		}

		Ok(())
	}

	/// File name for a document called `name`.
	pub fn document_name(&self, name: &str) -> String {
		format!("{name}.{}", self.format.extension())
	}
}
impl Default for WizardSettings {
	fn default() -> Self {
		Self {
			resource_type: PROVIDER_CONFIG_RESOURCE_TYPE.to_owned(),
			default_category: Category::default(),
			format: DocumentFormat::default(),
		}
	}
}

/// Builder for [`WizardSettings`].
#[derive(Debug, Default)]
pub struct WizardSettingsBuilder {
	/// Resource type override.
	pub resource_type: Option<String>,
	/// Default category override.
	pub default_category: Option<Category>,
	/// Format override.
	pub format: Option<DocumentFormat>,
}
impl WizardSettingsBuilder {
	/// Sets the resource type.
	pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
		self.resource_type = Some(resource_type.into());

		self
	}

	/// Sets the category selected on open.
	pub fn default_category(mut self, category: Category) -> Self {
		self.default_category = Some(category);

		self
	}

	/// Sets the document format.
	pub fn format(mut self, format: DocumentFormat) -> Self {
		self.format = Some(format);

		self
	}

	/// Consumes the builder and validates the resulting settings.
	pub fn build(self) -> Result<WizardSettings, ConfigError> {
		let defaults = WizardSettings::default();
		let settings = WizardSettings {
			resource_type: self
				.resource_type
				.map(|t| t.trim().to_owned())
				.unwrap_or(defaults.resource_type),
			default_category: self.default_category.unwrap_or(defaults.default_category),
			format: self.format.unwrap_or(defaults.format),
		};

		settings.validate()?;

		Ok(settings)
	}
}
