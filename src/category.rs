//! Provider categories and the per-category wizard strategies.
//!
//! Each [`Category`] owns one [`CategoryWizard`]: a self-contained strategy exposing the fixed
//! provider types of the category and building a [`WizardProviderConfig`] for the selected one.
//! [`CategoryRegistry`] is the single registration point the controller dispatches through.

pub mod authentication;
pub mod authorization;
pub mod ha;
pub mod identity_assertion;

pub use authentication::AuthenticationWizard;
pub use authorization::AuthorizationWizard;
pub use ha::HaWizard;
pub use identity_assertion::IdentityAssertionWizard;

// std
use std::sync::OnceLock;
// self
use crate::{_prelude::*, error::ConfigError, provider::WizardProviderConfig};

/// Wizard strategy shared by every session, guarded for exclusive mutation.
pub type SharedCategoryWizard = Arc<Mutex<Box<dyn CategoryWizard>>>;

/// Top-level provider grouping.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
	/// Authentication providers.
	#[default]
	Authentication,
	/// Authorization providers.
	Authorization,
	/// Identity assertion providers.
	#[serde(rename = "Identity Assertion")]
	IdentityAssertion,
	/// High-availability providers.
	#[serde(rename = "HA")]
	Ha,
}
impl Category {
	/// Every category, in presentation order.
	pub const ALL: [Category; 4] =
		[Category::Authentication, Category::Authorization, Category::IdentityAssertion, Category::Ha];

	/// Label shown to the operator.
	pub const fn as_str(self) -> &'static str {
		match self {
			Category::Authentication => "Authentication",
			Category::Authorization => "Authorization",
			Category::IdentityAssertion => "Identity Assertion",
			Category::Ha => "HA",
		}
	}

	/// Role written into persisted providers of this category.
	pub const fn role(self) -> &'static str {
		match self {
			Category::Authentication => "authentication",
			Category::Authorization => "authorization",
			Category::IdentityAssertion => "identity-assertion",
			Category::Ha => "ha",
		}
	}
}
impl Display for Category {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Category {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Category::ALL
			.into_iter()
			.find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ConfigError::UnknownCategory { name: s.to_owned() })
	}
}

/// Per-category strategy that drives provider type selection and config construction.
///
/// Instances are long-lived and reused across wizard sessions; [`CategoryWizard::reset`]
/// clears the per-session selection without touching the type catalog.
pub trait CategoryWizard: Send {
	/// Category served by this wizard; used as the registry key.
	fn category(&self) -> Category;

	/// Provider types offered by the category.
	fn types(&self) -> Vec<String>;

	/// Number of wizard steps the category's workflow spans, counted from the root step.
	fn steps(&self) -> usize;

	/// Currently selected provider type.
	fn selected_type(&self) -> Option<&str>;

	/// Selects a provider type. Unknown types are rejected and leave the selection untouched.
	fn select_type(&mut self, provider_type: &str) -> Result<(), ConfigError>;

	/// In-progress config for the selected type, built on first access.
	fn provider_config(&mut self) -> Option<&mut WizardProviderConfig>;

	/// Clears the selected type and any in-progress config.
	fn reset(&mut self);
}

/// Selection state shared by the bundled category wizards.
#[derive(Debug, Default)]
pub struct TypeSelection {
	selected: Option<String>,
	config: Option<WizardProviderConfig>,
}
impl TypeSelection {
	/// Currently selected type.
	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	/// Selects `provider_type` if `types` offers it.
	///
	/// Re-selecting the current type keeps the in-progress config; switching types drops it.
	pub fn select(
		&mut self,
		category: Category,
		types: &[&str],
		provider_type: &str,
	) -> Result<(), ConfigError> {
		if !types.contains(&provider_type) {
			return Err(ConfigError::UnknownProviderType {
				category: category.as_str(),
				provider_type: provider_type.to_owned(),
			});
		}
		if self.selected.as_deref() != Some(provider_type) {
			self.selected = Some(provider_type.to_owned());
			self.config = None;
		}

		Ok(())
	}

	/// Returns the in-progress config, building it from the selected type when missing.
	pub fn config_or_build<F>(&mut self, build: F) -> Option<&mut WizardProviderConfig>
	where
		F: FnOnce(&str) -> Option<WizardProviderConfig>,
	{
		if self.config.is_none() {
			let provider_type = self.selected.as_deref()?;

			self.config = build(provider_type);
		}

		self.config.as_mut()
	}

	/// Clears selection and config.
	pub fn clear(&mut self) {
		self.selected = None;
		self.config = None;
	}
}

/// Registry mapping each category to its shared wizard.
#[derive(Clone)]
pub struct CategoryRegistry {
	wizards: BTreeMap<Category, SharedCategoryWizard>,
}
impl CategoryRegistry {
	/// Registry without any category wizard.
	pub fn empty() -> Self {
		Self { wizards: BTreeMap::new() }
	}

	/// Process-wide registry holding the bundled wizards.
	pub fn shared() -> Arc<Self> {
		static SHARED: OnceLock<Arc<CategoryRegistry>> = OnceLock::new();

		SHARED.get_or_init(|| Arc::new(Self::default())).clone()
	}

	/// Registers (or replaces) the wizard for its category.
	pub fn register(mut self, wizard: impl 'static + CategoryWizard) -> Self {
		let category = wizard.category();

		self.wizards.insert(category, Arc::new(Mutex::new(Box::new(wizard))));

		self
	}

	/// Wizard registered for `category`.
	pub fn get(&self, category: Category) -> Option<SharedCategoryWizard> {
		self.wizards.get(&category).cloned()
	}

	/// Registered categories in presentation order.
	pub fn categories(&self) -> Vec<Category> {
		self.wizards.keys().copied().collect()
	}
}
impl Default for CategoryRegistry {
	fn default() -> Self {
		Self::empty()
			.register(AuthenticationWizard::default())
			.register(AuthorizationWizard::default())
			.register(IdentityAssertionWizard::default())
			.register(HaWizard::default())
	}
}
impl Debug for CategoryRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CategoryRegistry").field("categories", &self.categories()).finish()
	}
}
