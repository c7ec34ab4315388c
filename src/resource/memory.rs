//! Thread-safe in-memory [`ResourceService`] for local development and tests.

// self
use crate::{
	_prelude::*,
	resource::{PROVIDER_CONFIG_RESOURCE_TYPE, Resource, ResourceError, ResourceFuture, ResourceService},
};

type ResourceMap = Arc<RwLock<BTreeMap<(String, String), String>>>;

/// Keeps resource bodies in-process, keyed by resource type and name.
#[derive(Clone, Debug)]
pub struct MemoryResourceService {
	resources: ResourceMap,
	selected: Arc<Mutex<Option<Resource>>>,
	provider_config_type: String,
}
impl MemoryResourceService {
	/// Overrides the resource type listed by
	/// [`ResourceService::get_provider_config_resources`].
	pub fn with_provider_config_type(mut self, resource_type: impl Into<String>) -> Self {
		self.provider_config_type = resource_type.into();

		self
	}

	/// Returns the stored body for `name` under `resource_type`.
	pub fn body(&self, resource_type: &str, name: &str) -> Option<String> {
		self.resources.read().get(&(resource_type.to_owned(), name.to_owned())).cloned()
	}

	/// Resource most recently passed to [`ResourceService::selected_resource`].
	pub fn selected(&self) -> Option<Resource> {
		self.selected.lock().clone()
	}

	/// Number of stored resources across all types.
	pub fn len(&self) -> usize {
		self.resources.read().len()
	}

	/// Returns true when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.resources.read().is_empty()
	}

	fn create_now(
		map: ResourceMap,
		resource_type: String,
		name: String,
		body: String,
	) -> Result<(), ResourceError> {
		let mut guard = map.write();
		let key = (resource_type, name);

		if guard.contains_key(&key) {
			return Err(ResourceError::Conflict { name: key.1 });
		}

		guard.insert(key, body);

		Ok(())
	}

	fn list_now(map: ResourceMap, resource_type: String) -> Vec<Resource> {
		map.read()
			.keys()
			.filter(|(kind, _)| *kind == resource_type)
			.map(|(_, name)| Resource::new(name.as_str()))
			.collect()
	}
}
impl Default for MemoryResourceService {
	fn default() -> Self {
		Self {
			resources: Default::default(),
			selected: Default::default(),
			provider_config_type: PROVIDER_CONFIG_RESOURCE_TYPE.to_owned(),
		}
	}
}
impl ResourceService for MemoryResourceService {
	fn create_resource<'a>(
		&'a self,
		resource_type: &'a str,
		resource: &'a Resource,
		body: String,
	) -> ResourceFuture<'a, ()> {
		let map = self.resources.clone();
		let resource_type = resource_type.to_owned();
		let name = resource.name.clone();

		Box::pin(async move { Self::create_now(map, resource_type, name, body) })
	}

	fn get_provider_config_resources(&self) -> ResourceFuture<'_, Vec<Resource>> {
		let map = self.resources.clone();
		let resource_type = self.provider_config_type.clone();

		Box::pin(async move { Ok(Self::list_now(map, resource_type)) })
	}

	fn selected_resource(&self, resource: Resource) {
		*self.selected.lock() = Some(resource);
	}
}
