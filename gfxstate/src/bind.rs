//! Bind caching.
//!
//! Binding an object is cheap to ask for but not free on the GPU side. A [`BindCache`] remembers,
//! for every [`BindTarget`], which object was bound last, and skips the native call when the same
//! object is asked for again.

use log::{debug, trace};

use crate::cache::{Bind, Cached};

/// Binding point.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BindTarget {
  Framebuffer,
  Renderbuffer,
  ArrayBuffer,
  ElementArrayBuffer,
  Program,
}

impl BindTarget {
  /// Every binding point.
  pub const ALL: [BindTarget; 5] = [
    BindTarget::Framebuffer,
    BindTarget::Renderbuffer,
    BindTarget::ArrayBuffer,
    BindTarget::ElementArrayBuffer,
    BindTarget::Program,
  ];

  fn index(self) -> usize {
    self as usize
  }
}

/// Last bound object of every binding point.
///
/// `None` is the unbound sentinel (object `0` in OpenGL).
#[derive(Debug)]
pub struct BindCache<H>
where
  H: PartialEq,
{
  slots: [Cached<Option<H>>; 5],
}

impl<H> Default for BindCache<H>
where
  H: PartialEq,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<H> BindCache<H>
where
  H: PartialEq,
{
  /// Create a cache assuming nothing is bound.
  pub fn new() -> Self {
    BindCache {
      slots: [
        Cached::new(None),
        Cached::new(None),
        Cached::new(None),
        Cached::new(None),
        Cached::new(None),
      ],
    }
  }

  /// Bind `handle` to `target`, calling `native` only if required.
  ///
  /// Returns whether `native` was called.
  pub fn bind<F>(&mut self, target: BindTarget, handle: Option<&H>, bind: Bind, native: F) -> bool
  where
    H: Clone,
    F: FnOnce(BindTarget, Option<&H>),
  {
    let slot = &mut self.slots[target.index()];

    if bind == Bind::Cached && !slot.is_invalid_with(|cached| cached.as_ref() == handle) {
      trace!("{:?} already bound", target);
      return false;
    }

    trace!("binding {:?}", target);
    native(target, handle);
    slot.set(handle.cloned());

    true
  }

  /// Object currently bound to `target`, if known.
  ///
  /// `Some(None)` means nothing is bound; `None` means the binding is unknown.
  pub fn bound(&self, target: BindTarget) -> Option<Option<&H>> {
    self.slots[target.index()].get().map(Option::as_ref)
  }

  /// Forget what is bound to `target`.
  pub fn invalidate(&mut self, target: BindTarget) {
    debug!("invalidating {:?} binding", target);
    self.slots[target.index()].invalidate();
  }

  /// Forget what is bound to every binding point.
  pub fn invalidate_all(&mut self) {
    for &target in &BindTarget::ALL {
      self.invalidate(target);
    }
  }

  /// Record that `handle` was deleted.
  ///
  /// Deleting a bound object unbinds it, so every binding point it was bound to is now unbound.
  pub fn forget(&mut self, handle: &H) {
    for (slot, target) in self.slots.iter_mut().zip(BindTarget::ALL.iter()) {
      let bound = matches!(slot.get(), Some(Some(h)) if h == handle);

      if bound {
        debug!("{:?} object deleted while bound", target);
        slot.set(None);
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bind(cache: &mut BindCache<u32>, target: BindTarget, handle: Option<u32>) -> bool {
    cache.bind(target, handle.as_ref(), Bind::Cached, |_, _| {})
  }

  #[test]
  fn same_handle_binds_once() {
    let mut cache = BindCache::new();

    assert!(bind(&mut cache, BindTarget::Framebuffer, Some(3)));
    assert!(!bind(&mut cache, BindTarget::Framebuffer, Some(3)));
    assert!(bind(&mut cache, BindTarget::Framebuffer, Some(4)));
    assert_eq!(cache.bound(BindTarget::Framebuffer), Some(Some(&4)));
  }

  #[test]
  fn starts_unbound() {
    let mut cache = BindCache::new();

    assert_eq!(cache.bound(BindTarget::Program), Some(None));
    assert!(!bind(&mut cache, BindTarget::Program, None));
  }

  #[test]
  fn targets_are_independent() {
    let mut cache = BindCache::new();

    assert!(bind(&mut cache, BindTarget::ArrayBuffer, Some(1)));
    assert!(bind(&mut cache, BindTarget::ElementArrayBuffer, Some(1)));
    assert!(!bind(&mut cache, BindTarget::ArrayBuffer, Some(1)));
  }

  #[test]
  fn forced_bind_always_calls() {
    let mut cache = BindCache::new();
    let mut calls = 0;

    for _ in 0..2 {
      cache.bind(BindTarget::Renderbuffer, Some(&7), Bind::Forced, |target, handle| {
        assert_eq!(target, BindTarget::Renderbuffer);
        assert_eq!(handle, Some(&7));
        calls += 1;
      });
    }

    assert_eq!(calls, 2);
    assert!(!bind(&mut cache, BindTarget::Renderbuffer, Some(7)));
  }

  #[test]
  fn invalidation_forces_next_bind() {
    let mut cache = BindCache::new();

    bind(&mut cache, BindTarget::Framebuffer, Some(3));
    bind(&mut cache, BindTarget::Program, Some(3));
    cache.invalidate_all();

    assert_eq!(cache.bound(BindTarget::Framebuffer), None);
    assert!(bind(&mut cache, BindTarget::Framebuffer, Some(3)));
    assert!(bind(&mut cache, BindTarget::Program, Some(3)));
  }

  #[test]
  fn forgetting_deleted_objects() {
    let mut cache = BindCache::new();

    bind(&mut cache, BindTarget::Framebuffer, Some(3));
    bind(&mut cache, BindTarget::Renderbuffer, Some(5));
    cache.forget(&3);

    assert_eq!(cache.bound(BindTarget::Framebuffer), Some(None));
    assert_eq!(cache.bound(BindTarget::Renderbuffer), Some(Some(&5)));
    assert!(bind(&mut cache, BindTarget::Framebuffer, Some(3)));
  }
}
