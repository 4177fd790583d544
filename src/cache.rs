use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A call signature: the entry point and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
	function: &'static str,
	args: Box<str>,
}

impl CacheKey {
	pub fn new(function: &'static str, args: &impl Debug) -> Self {
		Self {
			function,
			args: format!("{args:?}").into(),
		}
	}

	pub fn function(&self) -> &'static str {
		self.function
	}
}

/// Memoizes results of [`crate::Inflector`] calls.
///
/// Results are pure functions of the key, so a cache may drop or race entries freely.
pub trait Cache {
	fn get(&self, key: &CacheKey) -> Option<String>;
	fn insert(&self, key: CacheKey, value: String);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl Cache for NoCache {
	fn get(&self, _key: &CacheKey) -> Option<String> {
		None
	}

	fn insert(&self, _key: CacheKey, _value: String) {}
}

/// Unbounded cache shared behind a mutex.
#[derive(Debug, Default)]
pub struct MemoCache {
	map: Mutex<HashMap<CacheKey, Box<str>>>,
}

impl MemoCache {
	pub fn new() -> Self {
		Self::default()
	}

	// Entries are always complete, so a panic elsewhere can't leave one half-written.
	fn map(&self) -> MutexGuard<'_, HashMap<CacheKey, Box<str>>> {
		self.map.lock().unwrap_or_else(PoisonError::into_inner)
	}

	pub fn len(&self) -> usize {
		self.map().len()
	}

	pub fn is_empty(&self) -> bool {
		self.map().is_empty()
	}

	pub fn clear(&self) {
		self.map().clear();
	}
}

impl Cache for MemoCache {
	fn get(&self, key: &CacheKey) -> Option<String> {
		self.map().get(key).map(|value| value.to_string())
	}

	fn insert(&self, key: CacheKey, value: String) {
		self.map().insert(key, value.into());
	}
}

impl<T: Cache + ?Sized> Cache for &T {
	fn get(&self, key: &CacheKey) -> Option<String> {
		(**self).get(key)
	}

	fn insert(&self, key: CacheKey, value: String) {
		(**self).insert(key, value);
	}
}

impl<T: Cache + ?Sized> Cache for std::sync::Arc<T> {
	fn get(&self, key: &CacheKey) -> Option<String> {
		(**self).get(key)
	}

	fn insert(&self, key: CacheKey, value: String) {
		(**self).insert(key, value);
	}
}

#[cfg(test)]
mod tests {
	use super::{Cache, CacheKey, MemoCache, NoCache};

	#[test]
	fn test_key() {
		let a = CacheKey::new("pluralize", &("word", None::<&str>));
		let b = CacheKey::new("pluralize", &("word", Some("")));
		let c = CacheKey::new("singularize", &("word", None::<&str>));
		assert_ne!(a, b);
		assert_ne!(a, c);
		assert_eq!(a, CacheKey::new("pluralize", &("word", None::<&str>)));
		assert_eq!(c.function(), "singularize");
	}

	#[test]
	fn test_memo() {
		let cache = MemoCache::new();
		let key = CacheKey::new("titleize", &("a b",));
		assert!(cache.is_empty());
		assert_eq!(cache.get(&key), None);

		cache.insert(key.clone(), "A B".into());
		assert_eq!(cache.get(&key).as_deref(), Some("A B"));
		assert_eq!(cache.len(), 1);

		cache.clear();
		assert!(cache.is_empty());
	}

	#[test]
	fn test_none() {
		let key = CacheKey::new("titleize", &("a b",));
		NoCache.insert(key.clone(), "A B".into());
		assert_eq!(NoCache.get(&key), None);
	}
}
