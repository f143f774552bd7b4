//! State reconciliation.
//!
//! A [`Reconciler`] remembers the last [`StateSet`] it made active. Loading a new one only emits
//! the native calls required to go from the former to the latter:
//!
//! 1. Every slot mentioned by the active set but not by the new one is reverted to its default
//!    value, unless it already holds it.
//! 2. Every slot mentioned by the new set is set to its new value, unless the active set already
//!    holds that very value.
//!
//! The new set then becomes the active one. Loading the same set twice in a row emits nothing the
//! second time.

use log::{debug, trace};

use crate::state::{Slot, StateSet};

/// Something that can apply slot values on the GPU.
///
/// Closures taking a slot value are sinks, which comes in handy to reconcile state without any
/// backend around.
pub trait Apply<S> {
  /// Apply a single slot value.
  fn apply(&mut self, value: &S);
}

impl<S, F> Apply<S> for F
where
  F: FnMut(&S),
{
  fn apply(&mut self, value: &S) {
    self(value)
  }
}

/// Owner of an active [`StateSet`].
#[derive(Debug)]
pub struct Reconciler<S>
where
  S: Slot,
{
  active: StateSet<S>,
  // GPU-side value of every slot is unknown
  all_stale: bool,
  // slots whose GPU-side value is unknown
  stale: Vec<S::Key>,
}

impl<S> Default for Reconciler<S>
where
  S: Slot,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<S> Reconciler<S>
where
  S: Slot,
{
  /// Create a reconciler assuming every slot holds its default value.
  pub fn new() -> Self {
    Reconciler {
      active: StateSet::empty(),
      all_stale: false,
      stale: Vec::new(),
    }
  }

  /// Last loaded state set.
  pub fn active(&self) -> &StateSet<S> {
    &self.active
  }

  /// Forget what the GPU holds.
  ///
  /// The next [`Reconciler::load`] applies every descriptor of its target and reverts every
  /// descriptor of the active set it doesn’t mention, whatever the values.
  pub fn invalidate(&mut self) {
    debug!("invalidating every slot");
    self.all_stale = true;
    self.stale.clear();
  }

  /// Forget what the GPU holds for a single slot.
  pub fn invalidate_key(&mut self, key: S::Key) {
    if !self.all_stale && !self.stale.contains(&key) {
      debug!("invalidating slot {:?}", key);
      self.stale.push(key);
    }
  }

  fn is_stale(&self, key: S::Key) -> bool {
    self.all_stale || self.stale.contains(&key)
  }

  /// Make `target` the active state set, applying the differences through `sink`.
  ///
  /// `None` stands for the empty state set: every slot reverts to its default value.
  ///
  /// Returns the number of values applied.
  pub fn load<A>(&mut self, target: Option<&StateSet<S>>, sink: &mut A) -> usize
  where
    A: Apply<S>,
  {
    let target = target.cloned().unwrap_or_default();

    if !self.all_stale && self.stale.is_empty() && self.active.ptr_eq(&target) {
      trace!("state set already active");
      return 0;
    }

    let mut applied = 0;

    // revert what the target doesn’t mention
    for (i, cur) in self.active.iter().enumerate() {
      if self.active.is_shadowed(i) || target.find(cur.key()).is_some() {
        continue;
      }

      if self.is_stale(cur.key()) || !cur.is_default() {
        trace!("reverting {:?}", cur.default_value());
        sink.apply(cur.default_value());
        applied += 1;
      }
    }

    // apply what changed
    for (i, dst) in target.iter().enumerate() {
      if target.is_shadowed(i) {
        continue;
      }

      if !self.is_stale(dst.key()) {
        if let Some(cur) = self.active.find(dst.key()) {
          if cur.value() == dst.value() {
            continue;
          }
        }
      }

      trace!("applying {:?}", dst.value());
      sink.apply(dst.value());
      applied += 1;
    }

    self.active = target;
    self.all_stale = false;
    self.stale.clear();

    applied
  }
}
