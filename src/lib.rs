//! Typed provider-configuration wizard: category strategies, display-field bindings, ordered
//! parameter sets, and clean document persistence behind pluggable resource services.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod category;
pub mod document;
pub mod error;
pub mod obs;
pub mod param;
pub mod provider;
pub mod resource;
pub mod settings;
pub mod wizard;
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and fixtures shared by unit and integration tests.

	pub use crate::_prelude::*;

	// self
	use crate::{
		category::CategoryRegistry,
		resource::{MemoryResourceService, ResourceTypeSelection},
		wizard::WizardController,
	};

	/// Controller wired to the given registry plus in-memory resource collaborators.
	pub fn memory_controller(
		registry: CategoryRegistry,
	) -> (WizardController, Arc<MemoryResourceService>, Arc<ResourceTypeSelection>) {
		let resources = Arc::new(MemoryResourceService::default());
		let resource_types = Arc::new(ResourceTypeSelection::default());
		let mut controller =
			WizardController::new(Arc::new(registry), resources.clone(), resource_types.clone());

		controller.open();

		(controller, resources, resource_types)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
