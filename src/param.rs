//! Ordered provider parameter bag.

// crates.io
use indexmap::{IndexMap, map::Iter};
// self
use crate::_prelude::*;

/// Ordered mapping from parameter key to value.
///
/// Keys are unique and keep their insertion position; replacing the value of an existing key
/// does not move it. The set serializes as a JSON object whose members follow that order, and
/// parsing keeps the order found in the document, because some provider types (Shiro realms in
/// particular) depend on it. Equality is order-sensitive.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
	entries: IndexMap<String, String>,
}
impl ParamSet {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true when no parameters are set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Returns true if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Sets `key` to `value`, returning the previous value.
	///
	/// New keys are appended; existing keys keep their position.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.entries.insert(key.into(), value.into())
	}

	/// Builder-style variant of [`ParamSet::set`].
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(key, value);

		self
	}

	/// Removes `key`, returning its value. Remaining keys keep their order.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.shift_remove(key)
	}

	/// Iterates over `(key, value)` pairs in order.
	pub fn iter(&self) -> ParamIter<'_> {
		ParamIter { inner: self.entries.iter() }
	}

	/// Iterates over keys in order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}
}
impl PartialEq for ParamSet {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}
impl Eq for ParamSet {}
impl Debug for ParamSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_map().entries(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for ParamSet
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut params = Self::new();

		params.extend(iter);

		params
	}
}
impl<K, V> Extend<(K, V)> for ParamSet
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (K, V)>,
	{
		self.entries.extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
	}
}
impl<'a> IntoIterator for &'a ParamSet {
	type IntoIter = ParamIter<'a>;
	type Item = (&'a str, &'a str);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over `(key, value)` pairs of a [`ParamSet`].
pub struct ParamIter<'a> {
	inner: Iter<'a, String, String>,
}
impl<'a> Iterator for ParamIter<'a> {
	type Item = (&'a str, &'a str);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}
