//! Wizard controller: step tracking, category dispatch, acceptance, and finalization.
//!
//! The controller is driven by discrete operator actions. Every state transition is
//! synchronous (`&mut self`); the only asynchronous boundary is [`WizardController::on_close`],
//! which persists the session's providers and then refreshes and selects the new resource.

// self
use crate::{
	_prelude::*,
	category::{Category, CategoryRegistry, SharedCategoryWizard},
	error::ConfigError,
	obs::{self, WizardOp, WizardOutcome, WizardSpan, wizard_event},
	provider::{ProviderConfig, WizardProviderConfig},
	resource::{Resource, ResourceService, ResourceTypesService},
	settings::WizardSettings,
};

/// Landing step shown when a session opens.
pub const ROOT_STEP: usize = 0;
/// Category selection step.
pub const CATEGORY_STEP: usize = 1;
/// Provider type selection step.
pub const TYPE_STEP: usize = 2;
/// First parameter entry step.
pub const PARAMS_STEP: usize = 3;
/// Credential entry step, reached only in categories that span more than four steps.
pub const CREDENTIALS_STEP: usize = 4;

/// Result of a successful [`WizardController::on_close`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalizeOutcome {
	/// Resource the document was created as.
	pub resource: Resource,
	/// Whether the refreshed listing contained the resource and it was selected.
	pub selected: bool,
}

/// Top-level provider configuration wizard.
pub struct WizardController {
	settings: WizardSettings,
	registry: Arc<CategoryRegistry>,
	resources: Arc<dyn ResourceService>,
	resource_types: Arc<dyn ResourceTypesService>,
	step: usize,
	selected_category: Category,
	providers: Vec<WizardProviderConfig>,
	name: String,
	finalize_guard: AsyncMutex<()>,
}
impl WizardController {
	/// Creates a controller over the given category registry and resource collaborators.
	///
	/// Pass [`CategoryRegistry::shared`] to reuse the process-wide category wizards.
	pub fn new(
		registry: Arc<CategoryRegistry>,
		resources: Arc<dyn ResourceService>,
		resource_types: Arc<dyn ResourceTypesService>,
	) -> Self {
		let settings = WizardSettings::default();

		Self {
			selected_category: settings.default_category,
			settings,
			registry,
			resources,
			resource_types,
			step: ROOT_STEP,
			providers: Vec::new(),
			name: String::new(),
			finalize_guard: AsyncMutex::new(()),
		}
	}

	/// Replaces the settings and selects their default category.
	pub fn with_settings(mut self, settings: WizardSettings) -> Self {
		self.selected_category = settings.default_category;
		self.settings = settings;

		self
	}

	/// Active settings.
	pub fn settings(&self) -> &WizardSettings {
		&self.settings
	}

	/// Starts a fresh session.
	pub fn open(&mut self) {
		self.reset();
	}

	/// Clears the session and the per-session state of every category wizard.
	pub fn reset(&mut self) {
		for category in self.registry.categories() {
			if let Some(wizard) = self.registry.get(category) {
				wizard.lock().reset();
			}
		}

		self.step = ROOT_STEP;
		self.name.clear();
		self.providers.clear();
		self.selected_category = self.settings.default_category;
	}

	/// Current step.
	pub fn step(&self) -> usize {
		self.step
	}

	/// Advances one step, stopping at [`WizardController::last_step`].
	pub fn on_next_step(&mut self) {
		self.step = (self.step + 1).min(self.last_step());
	}

	/// Goes back one step, stopping at [`ROOT_STEP`].
	pub fn on_previous_step(&mut self) {
		self.step = self.step.saturating_sub(1);
	}

	/// Highest reachable step for the selected category.
	pub fn last_step(&self) -> usize {
		self.registry
			.get(self.selected_category)
			.map(|wizard| wizard.lock().steps())
			.unwrap_or(0)
			.saturating_sub(1)
			.max(PARAMS_STEP)
	}

	/// Whether the selected category has steps beyond the current one.
	pub fn has_more_steps(&self) -> bool {
		match self.registry.get(self.selected_category) {
			Some(wizard) => self.step + 1 < wizard.lock().steps(),
			None => false,
		}
	}

	/// Whether the wizard sits on the landing step.
	pub fn is_root_step(&self) -> bool {
		self.step == ROOT_STEP
	}

	/// Whether the wizard sits on the category step.
	pub fn is_provider_category_step(&self) -> bool {
		self.step == CATEGORY_STEP
	}

	/// Whether the wizard sits on the provider type step.
	pub fn is_provider_type_step(&self) -> bool {
		self.step == TYPE_STEP
	}

	/// Whether the wizard sits on the first parameter step.
	pub fn is_provider_params_step(&self) -> bool {
		self.step == PARAMS_STEP
	}

	/// Whether the wizard sits on the credential entry step.
	pub fn is_provider_credentials_step(&self) -> bool {
		self.step == CREDENTIALS_STEP
	}

	/// Categories offered by the wizard.
	pub fn provider_categories(&self) -> &'static [Category] {
		&Category::ALL
	}

	/// Selected category.
	pub fn selected_category(&self) -> Category {
		self.selected_category
	}

	/// Selects a category.
	pub fn select_category(&mut self, category: Category) {
		self.selected_category = category;
	}

	/// Selects a category by its label.
	pub fn select_category_named(&mut self, name: &str) -> Result<(), ConfigError> {
		self.selected_category = name.parse()?;

		Ok(())
	}

	/// Wizard for `category`, or for the selected category when `None`.
	pub fn category_wizard(&self, category: Option<Category>) -> Option<SharedCategoryWizard> {
		self.registry.get(category.unwrap_or(self.selected_category))
	}

	/// Provider types of `category` (or the selected category); empty when unresolved.
	pub fn provider_types(&self, category: Option<Category>) -> Vec<String> {
		let category = category.unwrap_or(self.selected_category);

		match self.registry.get(category) {
			Some(wizard) => wizard.lock().types(),
			None => {
				wizard_event!(debug, category = %category, "Unresolved category wizard.");

				Vec::new()
			},
		}
	}

	/// Selects a provider type within the selected category.
	pub fn select_provider_type(&mut self, provider_type: &str) -> Result<(), ConfigError> {
		let wizard = self.registry.get(self.selected_category).ok_or(
			ConfigError::UnregisteredCategory { category: self.selected_category.as_str() },
		)?;
		let mut guard = wizard.lock();

		guard.select_type(provider_type)
	}

	/// Display fields of the in-progress provider; empty when nothing is selected.
	pub fn provider_params(&self) -> Vec<String> {
		self.with_provider_config(|pc| pc.display_property_names()).unwrap_or_default()
	}

	/// Writes `value` into the parameter bound to `display_name`.
	#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
	pub fn set_provider_param_binding(&mut self, display_name: &str, value: &str) {
		let written = self.with_provider_config(|pc| pc.set_display_param(display_name, value));

		match written {
			Some(Some(key)) => wizard_event!(debug, key = %key, "Set provider param value."),
			Some(None) =>
				wizard_event!(debug, display_name, "No provider property configured for field."),
			None => {},
		}
	}

	/// Value of the parameter bound to `display_name`; empty when unbound or unset.
	pub fn provider_param_binding(&self, display_name: &str) -> String {
		self.with_provider_config(|pc| pc.display_param(display_name).map(str::to_owned))
			.flatten()
			.unwrap_or_default()
	}

	/// Whether `display_name` should be masked.
	pub fn is_password_param(&self, display_name: &str) -> bool {
		self.with_provider_config(|pc| pc.is_password_param(display_name)).unwrap_or(false)
	}

	/// Field-level validity of `display_name`; true when nothing is selected.
	pub fn is_valid_param_value(&self, display_name: &str) -> bool {
		self.with_provider_config(|pc| pc.is_valid_param_value(display_name)).unwrap_or(true)
	}

	/// Whole-config validity gate applied by [`WizardController::on_finish_add`].
	pub fn is_provider_config_valid(pc: &WizardProviderConfig) -> bool {
		pc.is_valid()
	}

	/// Providers accepted in this session.
	pub fn providers(&self) -> &[WizardProviderConfig] {
		&self.providers
	}

	/// `"<type> (<role>)"` labels of the accepted providers.
	pub fn configured_provider_display_names(&self) -> Vec<String> {
		self.providers.iter().map(WizardProviderConfig::display_name).collect()
	}

	/// Document name without extension.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets the document name.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// Accepts the in-progress provider of the selected category.
	///
	/// When the provider exists and is valid, its parameter ordering is applied, it is appended
	/// to the session, the step returns to [`ROOT_STEP`], and the category wizard is reset.
	/// Otherwise nothing changes. Returns whether the provider was accepted.
	pub fn on_finish_add(&mut self) -> bool {
		let _span = WizardSpan::new(WizardOp::FinishAdd, "on_finish_add").entered();

		obs::record_wizard_outcome(WizardOp::FinishAdd, WizardOutcome::Attempt);

		let Some(wizard) = self.registry.get(self.selected_category) else {
			wizard_event!(debug, category = %self.selected_category, "Unresolved category wizard.");
			obs::record_wizard_outcome(WizardOp::FinishAdd, WizardOutcome::Declined);

			return false;
		};
		let mut guard = wizard.lock();

		wizard_event!(
			debug,
			category = %self.selected_category,
			provider_type = guard.selected_type().unwrap_or("undefined"),
			"Finishing provider."
		);

		let accepted = match guard.provider_config() {
			Some(pc) if Self::is_provider_config_valid(pc) => {
				let mut pc = pc.clone();

				pc.apply_ordering();

				Some(pc)
			},
			Some(_) => {
				wizard_event!(debug, "Provider config is invalid; staying on the current step.");

				None
			},
			None => {
				wizard_event!(debug, "No provider config to accept; select a provider type first.");

				None
			},
		};
		let Some(pc) = accepted else {
			obs::record_wizard_outcome(WizardOp::FinishAdd, WizardOutcome::Declined);

			return false;
		};

		wizard_event!(
			debug,
			name = %pc.config.name,
			role = %pc.config.role,
			enabled = pc.config.enabled,
			"Accepted provider."
		);
		#[cfg(feature = "tracing")]
		for (key, value) in pc.redacted_params() {
			wizard_event!(debug, key, value, "Accepted provider param.");
		}

		self.providers.push(pc);
		self.step = ROOT_STEP;
		guard.reset();
		obs::record_wizard_outcome(WizardOp::FinishAdd, WizardOutcome::Success);

		true
	}

	/// Stripped copies of the accepted providers, as they will be persisted.
	pub fn persisted_providers(&self) -> Vec<ProviderConfig> {
		self.providers.iter().map(WizardProviderConfig::to_persisted).collect()
	}

	/// Persists the session as `<name>.<ext>` and then selects it in the refreshed listing.
	///
	/// Persistence failures propagate and leave the session intact so the call can be retried.
	/// A failure while refreshing the listing is logged and reported through
	/// [`FinalizeOutcome::selected`], because the document already exists at that point.
	/// Only one call may run at a time; a concurrent call fails with
	/// [`Error::FinalizeInProgress`].
	pub async fn on_close(&self) -> Result<FinalizeOutcome> {
		let span = WizardSpan::new(WizardOp::Finalize, "on_close");

		span.instrument(self.finalize()).await
	}

	#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
	async fn finalize(&self) -> Result<FinalizeOutcome> {
		let Some(_in_flight) = self.finalize_guard.try_lock() else {
			wizard_event!(debug, "Finalize already in progress.");
			obs::record_wizard_outcome(WizardOp::Finalize, WizardOutcome::Declined);

			return Err(Error::FinalizeInProgress);
		};

		obs::record_wizard_outcome(WizardOp::Finalize, WizardOutcome::Attempt);

		let result = self.persist().await;

		match &result {
			Ok(_) => obs::record_wizard_outcome(WizardOp::Finalize, WizardOutcome::Success),
			Err(e) => {
				wizard_event!(debug, error = %e, "Failed to persist provider configuration.");
				obs::record_wizard_outcome(WizardOp::Finalize, WizardOutcome::Failure);
			},
		}

		result
	}

	#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
	async fn persist(&self) -> Result<FinalizeOutcome> {
		if self.name.trim().is_empty() {
			return Err(ConfigError::MissingDocumentName.into());
		}

		let resource = Resource::new(self.settings.document_name(&self.name));
		let providers = self.persisted_providers();
		let body = self.resources.serialize_provider_configuration(&providers, self.settings.format)?;

		self.resources.create_resource(&self.settings.resource_type, &resource, body).await?;

		wizard_event!(
			debug,
			resource = %resource.name,
			providers = providers.len(),
			"Persisted provider configuration."
		);

		self.resource_types.select_resource_type(&self.settings.resource_type);

		let selected = match self.resources.get_provider_config_resources().await {
			Ok(listed) => match listed.into_iter().find(|r| r.name == resource.name) {
				Some(found) => {
					self.resources.selected_resource(found);

					true
				},
				None => false,
			},
			Err(e) => {
				wizard_event!(warn, error = %e, "Failed to refresh provider configuration resources.");

				false
			},
		};

		Ok(FinalizeOutcome { resource, selected })
	}

	fn with_provider_config<R, F>(&self, f: F) -> Option<R>
	where
		F: FnOnce(&mut WizardProviderConfig) -> R,
	{
		let Some(wizard) = self.registry.get(self.selected_category) else {
			wizard_event!(debug, category = %self.selected_category, "Unresolved category wizard.");

			return None;
		};
		let mut guard = wizard.lock();

		match guard.provider_config() {
			Some(pc) => Some(f(pc)),
			None => {
				wizard_event!(
					debug,
					category = %self.selected_category,
					"No provider config from category wizard."
				);

				None
			},
		}
	}
}
impl Debug for WizardController {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("WizardController")
			.field("settings", &self.settings)
			.field("registry", &self.registry)
			.field("step", &self.step)
			.field("selected_category", &self.selected_category)
			.field("providers", &self.providers)
			.field("name", &self.name)
			.finish()
	}
}
