// std
use std::{env, fs, path::PathBuf, process, time::SystemTime};
// self
use provider_wizard::{
	_preludet::*,
	category::{Category, CategoryRegistry},
	document::{self, DocumentFormat},
	resource::{FileResourceService, PROVIDER_CONFIG_RESOURCE_TYPE, Resource, ResourceTypeSelection},
	wizard::WizardController,
};

fn temp_root(label: &str) -> PathBuf {
	let nanos = SystemTime::now()
		.duration_since(SystemTime::UNIX_EPOCH)
		.expect("System clock should be after the Unix epoch.")
		.as_nanos();

	env::temp_dir().join(format!("provider_wizard_{label}_{}_{nanos}", process::id()))
}

#[tokio::test]
async fn finalize_writes_document_to_disk() {
	let root = temp_root("finalize");
	let resources =
		Arc::new(FileResourceService::open(&root).expect("Failed to open resource root."));
	let mut wizard = WizardController::new(
		Arc::new(CategoryRegistry::default()),
		resources.clone(),
		Arc::new(ResourceTypeSelection::default()),
	);

	wizard.open();
	wizard.select_category(Category::IdentityAssertion);
	wizard.select_provider_type("Concat").expect("Concat should be offered.");

	assert!(!wizard.on_finish_add());

	wizard.set_provider_param_binding("Suffix", "@EXAMPLE.COM");

	assert!(wizard.on_finish_add());

	wizard.set_name("cluster");

	let outcome = wizard.on_close().await.expect("Finalize should succeed.");

	assert!(outcome.selected);
	assert_eq!(resources.selected(), Some(Resource::new("cluster.json")));

	let path = resources.type_dir(PROVIDER_CONFIG_RESOURCE_TYPE).join("cluster.json");
	let body = fs::read_to_string(&path)
		.unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
	let providers = document::parse_providers(&body, DocumentFormat::Json)
		.expect("Stored document should parse.");

	assert_eq!(providers.len(), 1);
	assert_eq!(providers[0].name, "Concat");
	assert_eq!(providers[0].param("concat.suffix"), Some("@EXAMPLE.COM"));

	fs::remove_dir_all(&root).unwrap_or_else(|e| {
		panic!("Failed to remove temporary resource root {}: {e}", root.display())
	});
}
