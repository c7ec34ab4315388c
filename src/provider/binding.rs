//! Display-field bindings between wizard fields and provider parameters.

// self
use crate::{_prelude::*, param::ParamSet};

/// Maps the human-facing fields of a provider type onto its parameter keys.
///
/// This is the only place the generic wizard learns which parameters a provider type needs.
/// Validation hooks receive the current parameter set so implementations stay stateless and
/// can be shared between every config built for the same type.
pub trait DisplayBinding: Send + Sync {
	/// Human-facing provider type label (e.g. `LDAP`).
	fn provider_type(&self) -> &str;

	/// Role the provider fills.
	fn role(&self) -> &str;

	/// Field names to render, in display order.
	fn display_property_names(&self) -> Vec<String>;

	/// Parameter key behind `display_name`, if the field is known.
	fn property_binding(&self, display_name: &str) -> Option<String>;

	/// Whether `display_name` should be masked by the presentation layer.
	fn is_password_param(&self, display_name: &str) -> bool;

	/// Field-level validity used for inline feedback. Unknown fields are valid.
	fn is_valid_param_value(&self, display_name: &str, params: &ParamSet) -> bool;

	/// Whole-config validity gate checked before the wizard accepts the config.
	///
	/// The default requires every display field to be valid.
	fn is_valid(&self, params: &ParamSet) -> bool {
		self.display_property_names().iter().all(|name| self.is_valid_param_value(name, params))
	}
}

/// Value check applied to a display field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ParamValidator {
	/// Any value is accepted.
	#[default]
	Any,
	/// Absolute URL.
	Url,
	/// Base-10 integer, optionally bounded (inclusive).
	Integer {
		/// Lower bound.
		min: Option<i64>,
		/// Upper bound.
		max: Option<i64>,
	},
	/// `true` or `false`, case-insensitive.
	Boolean,
	/// One of the listed choices, case-insensitive.
	OneOf(Vec<String>),
}
impl ParamValidator {
	/// Integer validator with an inclusive lower bound.
	pub fn at_least(min: i64) -> Self {
		Self::Integer { min: Some(min), max: None }
	}

	/// Choice validator built from string slices.
	pub fn one_of<I, S>(choices: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::OneOf(choices.into_iter().map(Into::into).collect())
	}

	/// Checks a non-empty value.
	pub fn accepts(&self, value: &str) -> bool {
		match self {
			Self::Any => true,
			Self::Url => Url::parse(value).is_ok(),
			Self::Integer { min, max } => match value.trim().parse::<i64>() {
				Ok(n) => min.is_none_or(|m| n >= m) && max.is_none_or(|m| n <= m),
				Err(_) => false,
			},
			Self::Boolean =>
				value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false"),
			Self::OneOf(choices) => choices.iter().any(|c| c.eq_ignore_ascii_case(value.trim())),
		}
	}
}

/// One human-facing field of a provider type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayField {
	/// Label shown to the operator.
	pub display_name: String,
	/// Underlying parameter key.
	pub param: String,
	/// Whether the value must be masked.
	pub password: bool,
	/// Whether an empty value makes the field invalid.
	pub required: bool,
	/// Check applied to non-empty values.
	pub validator: ParamValidator,
}
impl DisplayField {
	/// Creates an optional, unmasked field accepting any value.
	pub fn new(display_name: impl Into<String>, param: impl Into<String>) -> Self {
		Self {
			display_name: display_name.into(),
			param: param.into(),
			password: false,
			required: false,
			validator: ParamValidator::Any,
		}
	}

	/// Marks the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;

		self
	}

	/// Marks the field as a password.
	pub fn password(mut self) -> Self {
		self.password = true;

		self
	}

	/// Sets the value check.
	pub fn validator(mut self, validator: ParamValidator) -> Self {
		self.validator = validator;

		self
	}

	/// Validates the field against `params`.
	pub fn is_valid_in(&self, params: &ParamSet) -> bool {
		match params.get(&self.param).map(str::trim).filter(|v| !v.is_empty()) {
			Some(value) => self.validator.accepts(value),
			None => !self.required,
		}
	}
}

/// Table-driven [`DisplayBinding`] used by the bundled provider catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldBindings {
	provider_type: String,
	role: String,
	fields: Vec<DisplayField>,
	any_of: Vec<Vec<String>>,
}
impl FieldBindings {
	/// Creates an empty table for a provider type label and role.
	pub fn new(provider_type: impl Into<String>, role: impl Into<String>) -> Self {
		Self { provider_type: provider_type.into(), role: role.into(), fields: Vec::new(), any_of: Vec::new() }
	}

	/// Appends a field.
	pub fn field(mut self, field: DisplayField) -> Self {
		self.fields.push(field);

		self
	}

	/// Requires at least one of the named fields to carry a value.
	pub fn require_any_of<I, S>(mut self, display_names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.any_of.push(display_names.into_iter().map(Into::into).collect());

		self
	}

	/// Declared fields.
	pub fn fields(&self) -> &[DisplayField] {
		&self.fields
	}

	fn find(&self, display_name: &str) -> Option<&DisplayField> {
		self.fields.iter().find(|f| f.display_name == display_name)
	}

	fn has_value(&self, display_name: &str, params: &ParamSet) -> bool {
		self.find(display_name)
			.and_then(|f| params.get(&f.param))
			.is_some_and(|v| !v.trim().is_empty())
	}
}
impl DisplayBinding for FieldBindings {
	fn provider_type(&self) -> &str {
		&self.provider_type
	}

	fn role(&self) -> &str {
		&self.role
	}

	fn display_property_names(&self) -> Vec<String> {
		self.fields.iter().map(|f| f.display_name.clone()).collect()
	}

	fn property_binding(&self, display_name: &str) -> Option<String> {
		self.find(display_name).map(|f| f.param.clone())
	}

	fn is_password_param(&self, display_name: &str) -> bool {
		self.find(display_name).is_some_and(|f| f.password)
	}

	fn is_valid_param_value(&self, display_name: &str, params: &ParamSet) -> bool {
		self.find(display_name).is_none_or(|f| f.is_valid_in(params))
	}

	fn is_valid(&self, params: &ParamSet) -> bool {
		self.fields.iter().all(|f| f.is_valid_in(params))
			&& self.any_of.iter().all(|group| group.iter().any(|name| self.has_value(name, params)))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn ldap_like() -> FieldBindings {
		FieldBindings::new("LDAP", "authentication")
			.field(
				DisplayField::new("Directory URL", "main.ldapRealm.contextFactory.url")
					.required()
					.validator(ParamValidator::Url),
			)
			.field(
				DisplayField::new("Session Timeout", "sessionTimeout")
					.validator(ParamValidator::at_least(0)),
			)
			.field(DisplayField::new("Bind Password", "bind.password").password())
	}

	#[test]
	fn validators_cover_each_kind() {
		assert!(ParamValidator::Url.accepts("ldap://localhost:33389"));
		assert!(!ParamValidator::Url.accepts("localhost"));
		assert!(ParamValidator::at_least(0).accepts("30"));
		assert!(!ParamValidator::at_least(0).accepts("-1"));
		assert!(!ParamValidator::at_least(0).accepts("thirty"));
		assert!(ParamValidator::Boolean.accepts("TRUE"));
		assert!(!ParamValidator::Boolean.accepts("yes"));
		assert!(ParamValidator::one_of(["AND", "OR"]).accepts("or"));
		assert!(!ParamValidator::one_of(["AND", "OR"]).accepts("XOR"));
	}

	#[test]
	fn required_fields_gate_validity() {
		let binding = ldap_like();
		let mut params = ParamSet::new();

		assert!(!binding.is_valid(&params));
		assert!(!binding.is_valid_param_value("Directory URL", &params));
		assert!(binding.is_valid_param_value("Session Timeout", &params));

		params.set("main.ldapRealm.contextFactory.url", "ldap://localhost:33389");

		assert!(binding.is_valid(&params));

		params.set("sessionTimeout", "soon");

		assert!(!binding.is_valid_param_value("Session Timeout", &params));
		assert!(!binding.is_valid(&params));
	}

	#[test]
	fn unknown_fields_are_unbound_and_valid() {
		let binding = ldap_like();

		assert_eq!(binding.property_binding("Nope"), None);
		assert!(binding.is_valid_param_value("Nope", &ParamSet::new()));
		assert!(!binding.is_password_param("Nope"));
		assert!(binding.is_password_param("Bind Password"));
	}

	#[test]
	fn any_of_groups_require_one_value() {
		let binding = FieldBindings::new("Concat", "identity-assertion")
			.field(DisplayField::new("Prefix", "concat.prefix"))
			.field(DisplayField::new("Suffix", "concat.suffix"))
			.require_any_of(["Prefix", "Suffix"]);

		assert!(!binding.is_valid(&ParamSet::new()));
		assert!(!binding.is_valid(&ParamSet::new().with("concat.suffix", "  ")));
		assert!(binding.is_valid(&ParamSet::new().with("concat.suffix", "@EXAMPLE.COM")));
	}
}
