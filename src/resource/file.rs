//! Directory-backed [`ResourceService`] for lightweight deployments.

// std
use std::{
	fs::{self, File},
	io::{ErrorKind, Write},
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	document::{self, DocumentFormat},
	resource::{PROVIDER_CONFIG_RESOURCE_TYPE, Resource, ResourceError, ResourceFuture, ResourceService},
};

/// Stores each resource type in its own directory below a root.
///
/// Provider configuration bodies are parsed before they are written, so a malformed document
/// never reaches disk.
#[derive(Clone, Debug)]
pub struct FileResourceService {
	root: PathBuf,
	provider_config_type: String,
	selected: Arc<Mutex<Option<Resource>>>,
}
impl FileResourceService {
	/// Opens (or creates) a resource root.
	pub fn open(root: impl Into<PathBuf>) -> Result<Self, ResourceError> {
		let root = root.into();

		fs::create_dir_all(&root).map_err(|e| ResourceError::Backend {
			message: format!("Failed to create resource root {}: {e}", root.display()),
		})?;

		Ok(Self {
			root,
			provider_config_type: PROVIDER_CONFIG_RESOURCE_TYPE.to_owned(),
			selected: Default::default(),
		})
	}

	/// Overrides the resource type listed by
	/// [`ResourceService::get_provider_config_resources`].
	pub fn with_provider_config_type(mut self, resource_type: impl Into<String>) -> Self {
		self.provider_config_type = resource_type.into();

		self
	}

	/// Directory holding resources of `resource_type`.
	pub fn type_dir(&self, resource_type: &str) -> PathBuf {
		let slug = resource_type
			.trim()
			.chars()
			.map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
			.collect::<String>();

		self.root.join(slug)
	}

	/// Resource most recently passed to [`ResourceService::selected_resource`].
	pub fn selected(&self) -> Option<Resource> {
		self.selected.lock().clone()
	}

	fn validate_name(name: &str) -> Result<(), ResourceError> {
		if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
			return Err(ResourceError::Backend { message: format!("Invalid resource name `{name}`") });
		}

		Ok(())
	}

	fn validate_body(&self, resource_type: &str, name: &str, body: &str) -> Result<(), ResourceError> {
		if resource_type != self.provider_config_type {
			return Ok(());
		}

		let format = match Path::new(name).extension().and_then(|e| e.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case(DocumentFormat::Json.extension()) =>
				DocumentFormat::Json,
			_ => return Ok(()),
		};

		document::parse_providers(body, format)
			.map(|_| ())
			.map_err(|e| ResourceError::Serialization { message: format!("{name}: {e}") })
	}

	fn write_atomically(dir: &Path, name: &str, body: &[u8]) -> Result<(), ResourceError> {
		// Hidden names are never valid resource names, so the staging file cannot collide.
		let tmp_path = dir.join(format!(".{name}.tmp"));
		let path = dir.join(name);

		{
			let mut file = File::create(&tmp_path).map_err(|e| ResourceError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(body).map_err(|e| ResourceError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| ResourceError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &path).map_err(|e| ResourceError::Backend {
			message: format!("Failed to replace {}: {e}", path.display()),
		})
	}

	fn create_now(&self, resource_type: &str, name: &str, body: &str) -> Result<(), ResourceError> {
		Self::validate_name(name)?;
		self.validate_body(resource_type, name, body)?;

		let dir = self.type_dir(resource_type);

		fs::create_dir_all(&dir).map_err(|e| ResourceError::Backend {
			message: format!("Failed to create resource directory {}: {e}", dir.display()),
		})?;

		let path = dir.join(name);

		if path.exists() {
			return Err(ResourceError::Conflict { name: name.to_owned() });
		}

		Self::write_atomically(&dir, name, body.as_bytes())
	}

	fn list_now(&self) -> Result<Vec<Resource>, ResourceError> {
		let dir = self.type_dir(&self.provider_config_type);
		let entries = match fs::read_dir(&dir) {
			Ok(entries) => entries,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
			Err(e) =>
				return Err(ResourceError::Backend {
					message: format!("Failed to list {}: {e}", dir.display()),
				}),
		};
		let mut resources = Vec::new();

		for entry in entries {
			let entry = entry.map_err(|e| ResourceError::Backend {
				message: format!("Failed to read entry in {}: {e}", dir.display()),
			})?;
			let path = entry.path();

			if !path.is_file() {
				continue;
			}
			if let Some(name) = path.file_name().and_then(|n| n.to_str())
				&& !name.starts_with('.')
			{
				resources.push(Resource::new(name));
			}
		}

		resources.sort();

		Ok(resources)
	}
}
impl ResourceService for FileResourceService {
	fn create_resource<'a>(
		&'a self,
		resource_type: &'a str,
		resource: &'a Resource,
		body: String,
	) -> ResourceFuture<'a, ()> {
		Box::pin(async move { self.create_now(resource_type, &resource.name, &body) })
	}

	fn get_provider_config_resources(&self) -> ResourceFuture<'_, Vec<Resource>> {
		Box::pin(async move { self.list_now() })
	}

	fn selected_resource(&self, resource: Resource) {
		*self.selected.lock() = Some(resource);
	}
}
