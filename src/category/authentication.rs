//! Authentication provider types.

// self
use crate::{
	_prelude::*,
	category::{Category, CategoryWizard, TypeSelection},
	error::ConfigError,
	provider::{
		DisplayField, FieldBindings, KeyOrder, ParamValidator, ProviderConfig,
		WizardProviderConfig,
	},
};

const ANONYMOUS: &str = "Anonymous";
const LDAP: &str = "LDAP";
const PAM: &str = "PAM";
const KERBEROS: &str = "Kerberos";
const SSO: &str = "SSO";
const JWT: &str = "JWT";
const HEADER_PREAUTH: &str = "Header Pre-Auth";
const TYPES: [&str; 7] = [ANONYMOUS, LDAP, PAM, KERBEROS, SSO, JWT, HEADER_PREAUTH];

const SHIRO: &str = "ShiroProvider";
const SESSION_TIMEOUT: &str = "sessionTimeout";
const SHIRO_URLS: &str = "urls./**";
const HADOOP_AUTH_PREFIX: &str = "hadoop.auth.config";

/// Wizard for the authentication category.
#[derive(Debug, Default)]
pub struct AuthenticationWizard {
	selection: TypeSelection,
}
impl AuthenticationWizard {
	// Credential-taking providers get a page after the parameter step.
	const STEPS: usize = 5;

	fn build(provider_type: &str) -> Option<WizardProviderConfig> {
		let role = Category::Authentication.role();
		let config = match provider_type {
			ANONYMOUS => WizardProviderConfig::new(ProviderConfig::new(role, "Anonymous")),
			LDAP => ldap(role),
			PAM => pam(role),
			KERBEROS => {
				let key = |suffix: &str| format!("{HADOOP_AUTH_PREFIX}.{suffix}");

				WizardProviderConfig::new(ProviderConfig::new(role, "HadoopAuth").with_params([
					("config.prefix".to_owned(), HADOOP_AUTH_PREFIX.to_owned()),
					(key("type"), "kerberos".to_owned()),
				]))
				.with_binding(
					FieldBindings::new(KERBEROS, role)
						.field(DisplayField::new("Principal", key("kerberos.principal")).required())
						.field(DisplayField::new("Keytab", key("kerberos.keytab")).required())
						.field(DisplayField::new("Name Rules", key("kerberos.name.rules")))
						.field(
							DisplayField::new("Signature Secret", key("signature.secret")).password(),
						),
				)
			},
			SSO => WizardProviderConfig::new(ProviderConfig::new(role, "SSOCookieProvider"))
				.with_binding(
					FieldBindings::new(SSO, role).field(
						DisplayField::new("Provider URL", "sso.authentication.provider.url")
							.required()
							.validator(ParamValidator::Url),
					),
				),
			JWT => WizardProviderConfig::new(ProviderConfig::new(role, "JWTProvider")).with_binding(
				FieldBindings::new(JWT, role)
					.field(DisplayField::new("Token Audience", "knox.token.audiences")),
			),
			HEADER_PREAUTH => WizardProviderConfig::new(ProviderConfig::new(role, "HeaderPreAuth"))
				.with_binding(
					FieldBindings::new(HEADER_PREAUTH, role)
						.field(DisplayField::new("Custom Header", "preauth.custom.header"))
						.field(DisplayField::new("Validation Method", "preauth.validation.method")),
				),
			_ => return None,
		};

		Some(config)
	}
}
impl CategoryWizard for AuthenticationWizard {
	fn category(&self) -> Category {
		Category::Authentication
	}

	fn types(&self) -> Vec<String> {
		TYPES.iter().map(|t| (*t).to_owned()).collect()
	}

	fn steps(&self) -> usize {
		Self::STEPS
	}

	fn selected_type(&self) -> Option<&str> {
		self.selection.selected()
	}

	fn select_type(&mut self, provider_type: &str) -> Result<(), ConfigError> {
		self.selection.select(Category::Authentication, &TYPES, provider_type)
	}

	fn provider_config(&mut self) -> Option<&mut WizardProviderConfig> {
		self.selection.config_or_build(Self::build)
	}

	fn reset(&mut self) {
		self.selection.clear();
	}
}

fn session_timeout_field() -> DisplayField {
	DisplayField::new("Session Timeout", SESSION_TIMEOUT).validator(ParamValidator::at_least(0))
}

fn ldap(role: &str) -> WizardProviderConfig {
	const REALM: &str = "main.ldapRealm";
	const CONTEXT_FACTORY: &str = "main.ldapContextFactory";
	const REALM_FACTORY: &str = "main.ldapRealm.contextFactory";
	const USER_DN: &str = "main.ldapRealm.userDnTemplate";
	const URL: &str = "main.ldapRealm.contextFactory.url";
	const MECHANISM: &str = "main.ldapRealm.contextFactory.authenticationMechanism";

	let config = ProviderConfig::new(role, SHIRO).with_params([
		(SESSION_TIMEOUT, "30"),
		(REALM, "org.apache.knox.gateway.shirorealm.KnoxLdapRealm"),
		(CONTEXT_FACTORY, "org.apache.knox.gateway.shirorealm.KnoxLdapContextFactory"),
		(REALM_FACTORY, "$ldapContextFactory"),
		(MECHANISM, "simple"),
		(SHIRO_URLS, "authcBasic"),
	]);

	WizardProviderConfig::new(config)
		.with_binding(
			FieldBindings::new(LDAP, role)
				.field(DisplayField::new("Directory URL", URL).required().validator(ParamValidator::Url))
				.field(DisplayField::new("User DN Template", USER_DN).required())
				.field(
					DisplayField::new("Authentication Mechanism", MECHANISM)
						.validator(ParamValidator::one_of(["simple", "none", "DIGEST-MD5"])),
				)
				.field(session_timeout_field()),
		)
		.with_ordering(KeyOrder::new([
			SESSION_TIMEOUT,
			REALM,
			CONTEXT_FACTORY,
			REALM_FACTORY,
			USER_DN,
			URL,
			MECHANISM,
			SHIRO_URLS,
		]))
}

fn pam(role: &str) -> WizardProviderConfig {
	const REALM: &str = "main.pamRealm";
	const SERVICE: &str = "main.pamRealm.service";

	let config = ProviderConfig::new(role, SHIRO).with_params([
		(SESSION_TIMEOUT, "30"),
		(REALM, "org.apache.knox.gateway.shirorealm.KnoxPamRealm"),
		(SHIRO_URLS, "authcBasic"),
	]);

	WizardProviderConfig::new(config)
		.with_binding(
			FieldBindings::new(PAM, role)
				.field(DisplayField::new("PAM Service", SERVICE).required())
				.field(session_timeout_field()),
		)
		.with_ordering(KeyOrder::new([SESSION_TIMEOUT, REALM, SERVICE, SHIRO_URLS]))
}
