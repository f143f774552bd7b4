//! Cached values and binding policy.

/// Cached value.
///
/// A cached value is used to prevent issuing costy GPU commands if we know the target value is
/// already set to what the command tries to set. For instance, if you ask to bind framebuffer `34`
/// once, that value will be set on the GPU and cached on our side. Later, if no other binding has
/// occurred, binding framebuffer `34` again doesn’t need anything GPU-wise.
///
/// An empty cache means the GPU-side value is unknown, so that any value is considered invalid.
#[derive(Debug)]
pub(crate) struct Cached<T>(Option<T>)
where
  T: PartialEq;

impl<T> Cached<T>
where
  T: PartialEq,
{
  /// Cache a value.
  pub(crate) fn new(initial: T) -> Self {
    Cached(Some(initial))
  }

  /// Explicitly invalidate a value.
  ///
  /// This is necessary when we want to be able to force a GPU command to run.
  pub(crate) fn invalidate(&mut self) {
    self.0 = None;
  }

  pub(crate) fn set(&mut self, value: T) {
    self.0 = Some(value);
  }

  /// The cached value, if known.
  pub(crate) fn get(&self) -> Option<&T> {
    self.0.as_ref()
  }

  /// Check if the cached value is invalid regarding a value.
  ///
  /// A non-cached value (i.e. empty) is always invalid whatever compared value. If a value is
  /// already cached, then it’s invalid if it’s not equal ([`PartialEq`]) to the input value.
  pub(crate) fn is_invalid_with<F>(&self, valid: F) -> bool
  where
    F: FnOnce(&T) -> bool,
  {
    match &self.0 {
      Some(ref t) => !valid(t),
      _ => true,
    }
  }
}

/// Should a binding be cached or forced to the provided value?
///
/// A forced binding always issues the native call; it still updates the cache.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Bind {
  Forced,
  Cached,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalidated_value_is_always_invalid() {
    let mut cached = Cached::new(3);

    assert!(!cached.is_invalid_with(|x| *x == 3));
    assert!(cached.is_invalid_with(|x| *x == 4));

    cached.invalidate();
    assert!(cached.is_invalid_with(|x| *x == 3));
    assert_eq!(cached.get(), None);

    cached.set(4);
    assert_eq!(cached.get(), Some(&4));
  }
}
