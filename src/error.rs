//! Wizard-level error types shared across categories, documents, and resource backends.

// self
use crate::_prelude::*;

/// Wizard-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical wizard error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Resource backend failure.
	#[error("{0}")]
	Resource(
		#[from]
		#[source]
		crate::resource::ResourceError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider configuration document could not be encoded or parsed.
	#[error(transparent)]
	Document(#[from] crate::document::DocumentError),

	/// Another finalize call is still running for this session.
	#[error("A provider configuration is already being persisted for this session.")]
	FinalizeInProgress,
}

/// Configuration and input failures raised by the wizard.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// Category name does not match any known category.
	#[error("Unknown provider category `{name}`.")]
	UnknownCategory {
		/// Name that failed to resolve.
		name: String,
	},
	/// No wizard is registered for the category.
	#[error("No wizard is registered for category `{category}`.")]
	UnregisteredCategory {
		/// Category label.
		category: &'static str,
	},
	/// Provider type is not offered by the category.
	#[error("Category `{category}` does not offer provider type `{provider_type}`.")]
	UnknownProviderType {
		/// Category label.
		category: &'static str,
		/// Requested provider type.
		provider_type: String,
	},
	/// The session has no document name to persist under.
	#[error("Provider configuration name is missing.")]
	MissingDocumentName,
	/// Settings declare an empty resource type.
	#[error("Resource type must not be empty.")]
	EmptyResourceType,
}
