//! Provider configuration document codec.

// self
use crate::{_prelude::*, provider::ProviderConfig};

/// Serialization formats supported for provider configuration documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
	/// JSON array of provider entries.
	#[default]
	Json,
}
impl DocumentFormat {
	/// Stable format label.
	pub const fn as_str(self) -> &'static str {
		match self {
			DocumentFormat::Json => "json",
		}
	}

	/// File extension used for documents in this format.
	pub const fn extension(self) -> &'static str {
		match self {
			DocumentFormat::Json => "json",
		}
	}
}
impl Display for DocumentFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Encoding and parsing failures for provider configuration documents.
#[derive(Debug, ThisError)]
pub enum DocumentError {
	/// Providers could not be encoded.
	#[error("Provider configuration could not be serialized.")]
	Encode(#[source] serde_json::Error),
	/// Document body is not a valid provider configuration.
	#[error("Provider configuration is malformed at `{}`.", .0.path())]
	Parse(#[source] serde_path_to_error::Error<serde_json::Error>),
}

/// Serializes providers into a document body.
pub fn serialize_providers(
	providers: &[ProviderConfig],
	format: DocumentFormat,
) -> Result<String, DocumentError> {
	match format {
		DocumentFormat::Json =>
			serde_json::to_string_pretty(providers).map_err(DocumentError::Encode),
	}
}

/// Parses a document body back into providers, keeping parameter order.
pub fn parse_providers(
	body: &str,
	format: DocumentFormat,
) -> Result<Vec<ProviderConfig>, DocumentError> {
	match format {
		DocumentFormat::Json => {
			let mut de = serde_json::Deserializer::from_str(body);

			serde_path_to_error::deserialize(&mut de).map_err(DocumentError::Parse)
		},
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn documents_are_arrays_of_provider_entries() {
		let providers = vec![
			ProviderConfig::new("authentication", "ShiroProvider")
				.with_params([("sessionTimeout", "30"), ("urls./**", "authcBasic")]),
			ProviderConfig::new("authorization", "XASecurePDPKnox").with_enabled(false),
		];
		let body = serialize_providers(&providers, DocumentFormat::Json)
			.expect("Providers should serialize.");
		let value: serde_json::Value =
			serde_json::from_str(&body).expect("Document should be valid JSON.");

		assert_eq!(
			value,
			serde_json::json!([
				{
					"role": "authentication",
					"name": "ShiroProvider",
					"enabled": true,
					"params": { "sessionTimeout": "30", "urls./**": "authcBasic" }
				},
				{ "role": "authorization", "name": "XASecurePDPKnox", "enabled": false, "params": {} }
			])
		);
		assert_eq!(
			parse_providers(&body, DocumentFormat::Json).expect("Document should parse."),
			providers
		);
	}

	#[test]
	fn parse_errors_report_the_json_path() {
		let body = r#"[{"role":"ha","name":"HaProvider","enabled":"yes","params":{}}]"#;
		let err = parse_providers(body, DocumentFormat::Json)
			.expect_err("String enabled flag must be rejected.");

		assert!(err.to_string().contains("[0].enabled"), "unexpected message: {err}");
	}

	#[test]
	fn missing_params_default_to_empty() {
		let body = r#"[{"role":"authorization","name":"AclsAuthz","enabled":true}]"#;
		let providers =
			parse_providers(body, DocumentFormat::Json).expect("Params should be optional.");

		assert!(providers[0].params.is_empty());
	}
}
