//! State slots, descriptors and state sets.
//!
//! A [`Descriptor`] pairs the value a slot must hold with the value that slot holds when the
//! context starts. Descriptors are plain values: building one never touches the GPU. They are
//! gathered into a [`StateSet`], an immutable and cheaply clonable sequence that can be handed to a
//! [`Reconciler`](crate::reconcile::Reconciler).

use std::fmt::Debug;
use std::rc::Rc;
use std::slice;

/// A closed family of state slot values.
///
/// Every variant of an implementor is a value for one slot; [`Slot::key`] names that slot. Two
/// values with the same key replace each other on the GPU.
pub trait Slot: Clone + Debug + PartialEq {
  /// Identifier of a slot.
  type Key: Copy + Debug + Eq;

  /// Slot this value is meant for.
  fn key(&self) -> Self::Key;
}

/// A slot value along with the slot’s default value.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor<S> {
  value: S,
  default: S,
}

impl<S> Descriptor<S>
where
  S: Slot,
{
  /// Create a new descriptor.
  ///
  /// Both values must be meant for the same slot.
  pub fn new(value: S, default: S) -> Self {
    debug_assert_eq!(value.key(), default.key());
    Descriptor { value, default }
  }

  /// Slot this descriptor is meant for.
  #[inline]
  pub fn key(&self) -> S::Key {
    self.value.key()
  }

  /// Value the slot must hold.
  #[inline]
  pub fn value(&self) -> &S {
    &self.value
  }

  /// Value the slot holds at startup.
  #[inline]
  pub fn default_value(&self) -> &S {
    &self.default
  }

  /// Whether the value is the default one.
  #[inline]
  pub fn is_default(&self) -> bool {
    self.value == self.default
  }

  /// A descriptor that reverts this descriptor’s slot.
  pub fn to_default(&self) -> Self {
    Descriptor {
      value: self.default.clone(),
      default: self.default.clone(),
    }
  }
}

/// An ordered, immutable sequence of [`Descriptor`]s.
///
/// Cloning a state set is cheap, as its descriptors are shared.
///
/// Keys are expected to be unique. If several descriptors share the same key, only the first one
/// is visible: the others are shadowed and never reach the GPU.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSet<S> {
  descriptors: Rc<[Descriptor<S>]>,
}

impl<S> Default for StateSet<S> {
  fn default() -> Self {
    StateSet {
      descriptors: Rc::new([]),
    }
  }
}

impl<S> StateSet<S>
where
  S: Slot,
{
  /// Create a new state set out of descriptors, keeping their order.
  pub fn new<I>(descriptors: I) -> Self
  where
    I: IntoIterator<Item = Descriptor<S>>,
  {
    descriptors.into_iter().collect()
  }

  /// A state set mentioning no slot, that is, everything at its default value.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Number of descriptors, shadowed ones included.
  #[inline]
  pub fn len(&self) -> usize {
    self.descriptors.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.descriptors.is_empty()
  }

  /// Iterate over the descriptors, shadowed ones included.
  #[inline]
  pub fn iter(&self) -> slice::Iter<Descriptor<S>> {
    self.descriptors.iter()
  }

  /// Find the first descriptor for a given slot.
  pub fn find(&self, key: S::Key) -> Option<&Descriptor<S>> {
    self.descriptors.iter().find(|d| d.key() == key)
  }

  /// Whether two state sets share the same storage.
  ///
  /// Two state sets sharing storage are equal; the opposite doesn’t hold.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.descriptors, &other.descriptors)
  }

  /// Complete this state set with the descriptors of `fallback` whose slot is not mentioned.
  ///
  /// Descriptors of `self` come first, in order.
  pub fn or(&self, fallback: &Self) -> Self {
    let missing = fallback
      .iter()
      .filter(|d| self.find(d.key()).is_none())
      .cloned();

    self.iter().cloned().chain(missing).collect()
  }

  pub(crate) fn position(&self, key: S::Key) -> Option<usize> {
    self.descriptors.iter().position(|d| d.key() == key)
  }

  /// Whether the descriptor at `index` is hidden by an earlier one with the same key.
  pub(crate) fn is_shadowed(&self, index: usize) -> bool {
    let key = self.descriptors[index].key();
    self.descriptors[..index].iter().any(|d| d.key() == key)
  }
}

impl<S> std::iter::FromIterator<Descriptor<S>> for StateSet<S> {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = Descriptor<S>>,
  {
    let descriptors: Vec<_> = iter.into_iter().collect();

    StateSet {
      descriptors: descriptors.into(),
    }
  }
}

impl<'a, S> IntoIterator for &'a StateSet<S> {
  type Item = &'a Descriptor<S>;
  type IntoIter = slice::Iter<'a, Descriptor<S>>;

  fn into_iter(self) -> Self::IntoIter {
    self.descriptors.iter()
  }
}
