// std
use std::time::Duration;
// crates.io
use tokio::time;
// self
use provider_wizard::{
	_preludet::*,
	category::{Category, CategoryRegistry},
	document::DocumentFormat,
	error::ConfigError,
	provider::ProviderConfig,
	resource::{
		MemoryResourceService, PROVIDER_CONFIG_RESOURCE_TYPE, Resource, ResourceError,
		ResourceFuture, ResourceService, ResourceTypeSelection,
	},
	settings::WizardSettings,
	wizard::WizardController,
};

/// Delegates to an in-memory store, optionally delaying writes or failing either phase.
#[derive(Default)]
struct ScriptedResources {
	inner: MemoryResourceService,
	create_delay: Option<Duration>,
	fail_create: bool,
	fail_listing: bool,
}
impl ResourceService for ScriptedResources {
	fn create_resource<'a>(
		&'a self,
		resource_type: &'a str,
		resource: &'a Resource,
		body: String,
	) -> ResourceFuture<'a, ()> {
		Box::pin(async move {
			if let Some(delay) = self.create_delay {
				time::sleep(delay).await;
			}
			if self.fail_create {
				return Err(ResourceError::Backend { message: "gateway unreachable".into() });
			}

			self.inner.create_resource(resource_type, resource, body).await
		})
	}

	fn get_provider_config_resources(&self) -> ResourceFuture<'_, Vec<Resource>> {
		Box::pin(async move {
			if self.fail_listing {
				return Err(ResourceError::Backend { message: "listing unavailable".into() });
			}

			self.inner.get_provider_config_resources().await
		})
	}

	fn selected_resource(&self, resource: Resource) {
		self.inner.selected_resource(resource);
	}
}

fn scripted_controller(
	resources: Arc<ScriptedResources>,
) -> (WizardController, Arc<ResourceTypeSelection>) {
	let resource_types = Arc::new(ResourceTypeSelection::default());
	let mut wizard = WizardController::new(
		Arc::new(CategoryRegistry::default()),
		resources,
		resource_types.clone(),
	);

	wizard.open();
	wizard.select_provider_type("Anonymous").expect("Anonymous should be offered.");

	assert!(wizard.on_finish_add());

	wizard.set_name("sandbox");

	(wizard, resource_types)
}

#[tokio::test]
async fn concurrent_finalize_is_rejected() {
	let resources = Arc::new(ScriptedResources {
		create_delay: Some(Duration::from_millis(50)),
		..Default::default()
	});
	let (wizard, _) = scripted_controller(resources.clone());
	let (first, second) = tokio::join!(wizard.on_close(), async {
		time::sleep(Duration::from_millis(5)).await;

		wizard.on_close().await
	});

	assert!(first.is_ok());
	assert!(matches!(second, Err(Error::FinalizeInProgress)));
	assert_eq!(resources.inner.len(), 1);
}

#[tokio::test]
async fn persistence_failure_keeps_the_session() {
	let resources = Arc::new(ScriptedResources { fail_create: true, ..Default::default() });
	let (wizard, resource_types) = scripted_controller(resources.clone());
	let err = wizard.on_close().await.expect_err("Backend failure must propagate.");

	assert!(matches!(err, Error::Resource(ResourceError::Backend { .. })));
	assert!(err.to_string().contains("gateway unreachable"));
	assert_eq!(wizard.providers().len(), 1);
	assert_eq!(wizard.name(), "sandbox");
	assert!(resources.inner.selected().is_none());
	assert_eq!(resource_types.selected(), None);
}

#[tokio::test]
async fn refresh_failure_is_reported_as_unselected() {
	let resources = Arc::new(ScriptedResources { fail_listing: true, ..Default::default() });
	let (wizard, resource_types) = scripted_controller(resources.clone());
	let outcome = wizard.on_close().await.expect("Persisting should succeed.");

	assert_eq!(outcome.resource, Resource::new("sandbox.json"));
	assert!(!outcome.selected);
	assert_eq!(resource_types.selected().as_deref(), Some(PROVIDER_CONFIG_RESOURCE_TYPE));
	assert!(resources.inner.body(PROVIDER_CONFIG_RESOURCE_TYPE, "sandbox.json").is_some());
	assert!(resources.inner.selected().is_none());
}

#[tokio::test]
async fn listing_under_another_type_leaves_nothing_selected() {
	let resources = Arc::new(MemoryResourceService::default().with_provider_config_type("Descriptors"));
	let resource_types = Arc::new(ResourceTypeSelection::default());
	let mut wizard = WizardController::new(
		Arc::new(CategoryRegistry::default()),
		resources.clone(),
		resource_types.clone(),
	);

	wizard.open();
	wizard.set_name("sandbox");

	let outcome = wizard.on_close().await.expect("Empty sessions still persist.");

	assert!(!outcome.selected);
	assert_eq!(resource_types.selected().as_deref(), Some(PROVIDER_CONFIG_RESOURCE_TYPE));
	assert_eq!(
		resources.body(PROVIDER_CONFIG_RESOURCE_TYPE, "sandbox.json").as_deref(),
		Some("[]")
	);
}

#[tokio::test]
async fn duplicate_name_conflicts() {
	let resources = Arc::new(ScriptedResources::default());
	let (wizard, _) = scripted_controller(resources);

	wizard.on_close().await.expect("First finalize should succeed.");

	let err = wizard.on_close().await.expect_err("Second finalize must conflict.");

	assert!(matches!(
		err,
		Error::Resource(ResourceError::Conflict { ref name }) if name == "sandbox.json"
	));
}

#[tokio::test]
async fn custom_settings_route_the_document() {
	let settings = WizardSettings::builder()
		.resource_type("Shared Providers")
		.default_category(Category::Authorization)
		.format(DocumentFormat::Json)
		.build()
		.expect("Settings should build.");
	let resources =
		Arc::new(MemoryResourceService::default().with_provider_config_type("Shared Providers"));
	let mut wizard = WizardController::new(
		Arc::new(CategoryRegistry::default()),
		resources.clone(),
		Arc::new(ResourceTypeSelection::default()),
	)
	.with_settings(settings);

	wizard.open();
	wizard.select_provider_type("ACLs").expect("ACLs should be offered.");

	assert!(!wizard.on_finish_add());

	wizard.set_provider_param_binding("Access Control List", "admin;*;*");

	assert!(wizard.on_finish_add());

	wizard.set_name("team");

	let outcome = wizard.on_close().await.expect("Finalize should succeed.");

	assert!(outcome.selected);

	let body = resources.body("Shared Providers", "team.json").expect("Document should be stored.");
	let providers: Vec<ProviderConfig> =
		serde_json::from_str(&body).expect("Stored document should parse.");

	assert_eq!(providers[0].role, "authorization");
	assert_eq!(providers[0].name, "AclsAuthz");
}

#[tokio::test]
async fn whitespace_name_is_missing() {
	let resources = Arc::new(ScriptedResources::default());
	let (mut wizard, _) = scripted_controller(resources.clone());

	wizard.set_name("   ");

	let err = wizard.on_close().await.expect_err("Blank names must be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::MissingDocumentName)));
	assert!(resources.inner.is_empty());
}

#[tokio::test]
async fn document_name_keeps_the_name_as_given() {
	let resources = Arc::new(ScriptedResources::default());
	let (mut wizard, _) = scripted_controller(resources.clone());

	wizard.set_name("sandbox ");

	let outcome = wizard.on_close().await.expect("Padded names are not blank.");

	assert_eq!(outcome.resource, Resource::new("sandbox .json"));
	assert!(outcome.selected);
	assert!(resources.inner.body(PROVIDER_CONFIG_RESOURCE_TYPE, "sandbox .json").is_some());
	assert!(resources.inner.body(PROVIDER_CONFIG_RESOURCE_TYPE, "sandbox.json").is_none());
}
