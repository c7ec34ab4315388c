//! Contracts for the resource collaborators the wizard persists through, plus bundled backends.

pub mod file;
pub mod memory;

pub use file::FileResourceService;
pub use memory::MemoryResourceService;

// self
use crate::{
	_prelude::*,
	document::{self, DocumentError, DocumentFormat},
	provider::ProviderConfig,
};

/// Resource type under which provider configuration documents live.
pub const PROVIDER_CONFIG_RESOURCE_TYPE: &str = "Provider Configurations";

/// Boxed future returned by [`ResourceService`] operations.
pub type ResourceFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, ResourceError>> + 'a + Send>>;

/// Named resource managed by the backing store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Resource {
	/// Resource name, including its extension.
	pub name: String,
}
impl Resource {
	/// Creates a resource handle.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Persistence collaborator that stores documents and tracks the selected resource.
pub trait ResourceService
where
	Self: Send + Sync,
{
	/// Stores `body` as `resource` under `resource_type`.
	fn create_resource<'a>(
		&'a self,
		resource_type: &'a str,
		resource: &'a Resource,
		body: String,
	) -> ResourceFuture<'a, ()>;

	/// Encodes providers for [`ResourceService::create_resource`].
	fn serialize_provider_configuration(
		&self,
		providers: &[ProviderConfig],
		format: DocumentFormat,
	) -> Result<String, DocumentError> {
		document::serialize_providers(providers, format)
	}

	/// Lists the stored provider configuration resources.
	fn get_provider_config_resources(&self) -> ResourceFuture<'_, Vec<Resource>>;

	/// Marks `resource` as the selected one.
	fn selected_resource(&self, resource: Resource);
}

/// Listing collaborator notified when the active resource type changes.
pub trait ResourceTypesService
where
	Self: Send + Sync,
{
	/// Switches the listing to `resource_type`.
	fn select_resource_type(&self, resource_type: &str);
}

/// [`ResourceTypesService`] that records the last selected resource type.
#[derive(Debug, Default)]
pub struct ResourceTypeSelection(Mutex<Option<String>>);
impl ResourceTypeSelection {
	/// Last selected resource type.
	pub fn selected(&self) -> Option<String> {
		self.0.lock().clone()
	}
}
impl ResourceTypesService for ResourceTypeSelection {
	fn select_resource_type(&self, resource_type: &str) {
		*self.0.lock() = Some(resource_type.to_owned());
	}
}

/// Error type produced by [`ResourceService`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ResourceError {
	/// Body could not be encoded or decoded by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
	/// A resource with the same name already exists.
	#[error("Resource `{name}` already exists.")]
	Conflict {
		/// Conflicting resource name.
		name: String,
	},
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn resource_error_converts_into_wizard_error_with_source() {
		let resource_error = ResourceError::Backend { message: "gateway unreachable".into() };
		let wizard_error: Error = resource_error.clone().into();

		assert!(matches!(wizard_error, Error::Resource(_)));
		assert!(wizard_error.to_string().contains("gateway unreachable"));

		let source = StdError::source(&wizard_error)
			.expect("Wizard error should expose the original resource error as its source.");

		assert_eq!(source.to_string(), resource_error.to_string());
	}

	#[test]
	fn resource_type_selection_keeps_latest() {
		let selection = ResourceTypeSelection::default();

		assert_eq!(selection.selected(), None);

		selection.select_resource_type("Descriptors");
		selection.select_resource_type(PROVIDER_CONFIG_RESOURCE_TYPE);

		assert_eq!(selection.selected().as_deref(), Some(PROVIDER_CONFIG_RESOURCE_TYPE));
	}
}
