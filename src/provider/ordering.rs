//! Canonical parameter ordering applied when a provider is accepted.

// self
use crate::param::ParamSet;

/// Lets a provider type reorder its parameters once, at acceptance time.
pub trait OrderedParam: Send + Sync {
	/// Returns `params` in canonical order.
	fn order_params(&self, params: ParamSet) -> ParamSet;
}

/// Orders listed keys first, in list order; remaining keys follow in their existing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOrder {
	keys: Vec<String>,
}
impl KeyOrder {
	/// Creates an ordering from the canonical key list.
	pub fn new<I, S>(keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { keys: keys.into_iter().map(Into::into).collect() }
	}

	/// Canonical key list.
	pub fn keys(&self) -> &[String] {
		&self.keys
	}
}
impl OrderedParam for KeyOrder {
	fn order_params(&self, mut params: ParamSet) -> ParamSet {
		let mut ordered = ParamSet::new();

		for key in self.keys.iter() {
			if let Some(value) = params.remove(key) {
				ordered.set(key.as_str(), value);
			}
		}

		ordered.extend(params.iter());

		ordered
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn listed_keys_lead_and_rest_keep_order() {
		let order = KeyOrder::new(["a", "b", "missing"]);
		let params = ParamSet::new().with("z", "1").with("b", "2").with("y", "3").with("a", "4");
		let ordered = order.order_params(params);

		assert_eq!(ordered.keys().collect::<Vec<_>>(), ["a", "b", "z", "y"]);
		assert_eq!(ordered.get("a"), Some("4"));
	}

	#[test]
	fn empty_order_is_identity() {
		let params = ParamSet::new().with("k2", "v").with("k1", "v");

		assert_eq!(KeyOrder::default().order_params(params.clone()), params);
	}
}
