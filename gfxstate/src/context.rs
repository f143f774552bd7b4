//! Graphics context.
//!
//! A [`Context`] owns a backend along with everything required to talk to it efficiently:
//!
//! - A [`Reconciler`] over the global pipeline state (blending, culling, viewport…), driven by
//!   [`Context::load`].
//! - A [`BindCache`] shared with every object created from the context.
//!
//! Pipeline state is expressed with [`ContextState`] values, built out of the descriptor
//! constructors of the context:
//!
//! ```ignore
//! let state = ctx.new_state(vec![
//!   ctx.enable(Feature::Blend),
//!   ctx.blend_equation(BlendEquation::FuncAdd),
//!   ctx.viewport([0, 0, 800, 600]),
//! ]);
//!
//! ctx.load(Some(&state));
//! // everything back to default
//! ctx.load(None);
//! ```

use log::debug;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::backend::state::State;
use crate::backend::Backend;
use crate::bind::{BindCache, BindTarget};
use crate::cache::Bind;
use crate::defaults::Defaults;
use crate::enums::{BlendEquation, Facet, Feature, Orientation};
use crate::error::GraphicsError;
use crate::framebuffer::{Framebuffer, FramebufferError};
use crate::reconcile::{Apply, Reconciler};
use crate::renderbuffer::{Renderbuffer, RenderbufferError};
use crate::state::{Descriptor, Slot, StateSet};

/// Value of a global pipeline state slot.
#[derive(Clone, Debug, PartialEq)]
pub enum ContextValue<H> {
  /// Constant blending color, each channel in `[0, 1]`.
  BlendColor([f32; 4]),
  BlendEquation(BlendEquation),
  /// Whether the depth buffer is written to.
  DepthMask(bool),
  /// Program in use, if any.
  UseProgram(Option<H>),
  /// Viewport, as `[x, y, width, height]`.
  Viewport([i32; 4]),
  /// Scissor box, as `[x, y, width, height]`.
  Scissor([i32; 4]),
  LineWidth(f32),
  /// Which color channels are written to.
  ColorMask([bool; 4]),
  CullFace(Facet),
  FrontFace(Orientation),
  /// Whether a feature is enabled.
  Capability(Feature, bool),
  /// Whether the vertex attribute array at the given index is enabled.
  VertexAttribArray(u32, bool),
}

/// Global pipeline state slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContextKey {
  BlendColor,
  BlendEquation,
  DepthMask,
  UseProgram,
  Viewport,
  Scissor,
  LineWidth,
  ColorMask,
  CullFace,
  FrontFace,
  Capability(Feature),
  VertexAttribArray(u32),
}

impl<H> Slot for ContextValue<H>
where
  H: Clone + std::fmt::Debug + PartialEq,
{
  type Key = ContextKey;

  fn key(&self) -> ContextKey {
    match *self {
      ContextValue::BlendColor(_) => ContextKey::BlendColor,
      ContextValue::BlendEquation(_) => ContextKey::BlendEquation,
      ContextValue::DepthMask(_) => ContextKey::DepthMask,
      ContextValue::UseProgram(_) => ContextKey::UseProgram,
      ContextValue::Viewport(_) => ContextKey::Viewport,
      ContextValue::Scissor(_) => ContextKey::Scissor,
      ContextValue::LineWidth(_) => ContextKey::LineWidth,
      ContextValue::ColorMask(_) => ContextKey::ColorMask,
      ContextValue::CullFace(_) => ContextKey::CullFace,
      ContextValue::FrontFace(_) => ContextKey::FrontFace,
      ContextValue::Capability(feature, _) => ContextKey::Capability(feature),
      ContextValue::VertexAttribArray(index, _) => ContextKey::VertexAttribArray(index),
    }
  }
}

/// Global pipeline state of a [`Context`].
pub type ContextState<B> = StateSet<ContextValue<<B as State>::Handle>>;

/// Descriptor of a global pipeline state slot of a [`Context`].
pub type ContextDescriptor<B> = Descriptor<ContextValue<<B as State>::Handle>>;

/// Clamp every channel of a color to `[0, 1]`; NaN channels take the matching `default` channel.
pub(crate) fn clamp_color(color: [f32; 4], default: [f32; 4]) -> [f32; 4] {
  let mut clamped = default;

  for (channel, value) in clamped.iter_mut().zip(color) {
    if !value.is_nan() {
      *channel = value.clamp(0., 1.);
    }
  }

  clamped
}

/// Context options.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextOpt {
  bind_caching: bool,
  defaults: Option<Defaults>,
}

impl Default for ContextOpt {
  /// Defaults:
  ///
  /// - `bind_caching`: `true`.
  /// - `defaults`: `None`, so that the backend’s defaults are used.
  fn default() -> Self {
    ContextOpt {
      bind_caching: true,
      defaults: None,
    }
  }
}

impl ContextOpt {
  /// Whether binds are cached.
  ///
  /// With bind caching disabled, every bind issues a native call.
  #[inline]
  pub fn set_bind_caching(self, bind_caching: bool) -> Self {
    ContextOpt {
      bind_caching,
      ..self
    }
  }

  #[inline]
  pub fn bind_caching(&self) -> bool {
    self.bind_caching
  }

  /// Override the default values supplied by the backend.
  #[inline]
  pub fn set_defaults<D>(self, defaults: D) -> Self
  where
    D: Into<Option<Defaults>>,
  {
    ContextOpt {
      defaults: defaults.into(),
      ..self
    }
  }

  #[inline]
  pub fn defaults(&self) -> Option<&Defaults> {
    self.defaults.as_ref()
  }
}

/// Who last reconciled the clear values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ClearOwner {
  /// Nobody; clear values hold their defaults.
  Pristine,
  /// Clear values are unknown.
  Unknown,
  /// The framebuffer with the given identifier.
  Framebuffer(u64),
}

/// State shared by a context and the objects it created.
pub(crate) struct Shared<B>
where
  B: Backend,
{
  pub(crate) backend: B,
  pub(crate) binds: BindCache<B::Handle>,
  pub(crate) bind: Bind,
  pub(crate) clear_owner: ClearOwner,
  next_id: u64,
}

impl<B> Shared<B>
where
  B: Backend,
{
  /// Bind through the bind cache.
  pub(crate) fn bind(&mut self, target: BindTarget, handle: Option<&B::Handle>) -> bool {
    let backend = &mut self.backend;

    self
      .binds
      .bind(target, handle, self.bind, |target, handle| unsafe {
        backend.bind(target, handle)
      })
  }

  pub(crate) fn next_id(&mut self) -> u64 {
    self.next_id += 1;
    self.next_id
  }
}

/// Applies context slot values, routing programs through the bind cache.
struct StateSink<'a, B>(&'a mut Shared<B>)
where
  B: Backend;

impl<'a, B> Apply<ContextValue<B::Handle>> for StateSink<'a, B>
where
  B: Backend,
{
  fn apply(&mut self, value: &ContextValue<B::Handle>) {
    match *value {
      ContextValue::UseProgram(ref program) => {
        self.0.bind(BindTarget::Program, program.as_ref());
      }

      _ => unsafe { self.0.backend.apply_context(value) },
    }
  }
}

/// Graphics context.
///
/// A context is bound to the thread it was created on.
pub struct Context<B>
where
  B: Backend,
{
  shared: Rc<RefCell<Shared<B>>>,
  state: Reconciler<ContextValue<B::Handle>>,
  defaults: Defaults,
}

impl<B> Context<B>
where
  B: Backend,
{
  /// Create a context with default options.
  pub fn new(backend: B) -> Self {
    Self::with_opt(backend, ContextOpt::default())
  }

  /// Create a context.
  pub fn with_opt(backend: B, opt: ContextOpt) -> Self {
    let defaults = opt
      .defaults()
      .cloned()
      .unwrap_or_else(|| backend.defaults());
    let bind = if opt.bind_caching() {
      Bind::Cached
    } else {
      Bind::Forced
    };

    debug!("creating context (bind: {:?})", bind);

    let shared = Shared {
      backend,
      binds: BindCache::new(),
      bind,
      clear_owner: ClearOwner::Pristine,
      next_id: 0,
    };

    Context {
      shared: Rc::new(RefCell::new(shared)),
      state: Reconciler::new(),
      defaults,
    }
  }

  /// Default values reverted to by reconciliation.
  pub fn defaults(&self) -> &Defaults {
    &self.defaults
  }

  /// Access the backend.
  ///
  /// # Safety
  ///
  /// Changing native state behind the context’s back desynchronizes it. Call
  /// [`Context::invalidate`] afterwards if you do so.
  pub unsafe fn backend(&self) -> RefMut<B> {
    RefMut::map(self.shared.borrow_mut(), |shared| &mut shared.backend)
  }

  /// Gather descriptors into a state set.
  pub fn new_state<I>(&self, descriptors: I) -> ContextState<B>
  where
    I: IntoIterator<Item = ContextDescriptor<B>>,
  {
    StateSet::new(descriptors)
  }

  /// Currently active pipeline state.
  pub fn state(&self) -> &ContextState<B> {
    self.state.active()
  }

  /// Make `state` the active pipeline state.
  ///
  /// Slots `state` doesn’t mention revert to their default values; `None` reverts everything.
  /// Only the native calls required to go from the active state to `state` are issued.
  ///
  /// Returns the number of slot values applied.
  pub fn load(&mut self, state: Option<&ContextState<B>>) -> usize {
    let mut shared = self.shared.borrow_mut();
    self.state.load(state, &mut StateSink(&mut *shared))
  }

  /// Bind an object through the bind cache.
  ///
  /// Binding a program this way overrides the program slot of the active state until the next
  /// load restores it. If the active state doesn’t mention the program slot, nothing restores it:
  /// the program stays in use, even across `load(None)`.
  ///
  /// Returns whether a native bind happened.
  pub fn bind(&mut self, target: BindTarget, handle: Option<&B::Handle>) -> bool {
    let bound = self.shared.borrow_mut().bind(target, handle);

    // the program slot no longer reflects what is in use
    if bound && target == BindTarget::Program {
      self.state.invalidate_key(ContextKey::UseProgram);
    }

    bound
  }

  /// Forget everything known about native state.
  ///
  /// Use this after letting foreign code issue native calls. The next load re-applies every slot,
  /// the next binds issue native calls and framebuffers re-apply their clear values.
  pub fn invalidate(&mut self) {
    debug!("invalidating context");
    self.state.invalidate();

    let mut shared = self.shared.borrow_mut();
    shared.binds.invalidate_all();
    shared.clear_owner = ClearOwner::Unknown;
  }

  /// Fetch the oldest error recorded by the device.
  pub fn check(&mut self) -> Result<(), GraphicsError> {
    unsafe { self.shared.borrow_mut().backend.check() }
  }

  pub fn flush(&mut self) {
    unsafe { self.shared.borrow_mut().backend.flush() }
  }

  /// Block until every issued command has completed.
  pub fn finish(&mut self) {
    unsafe { self.shared.borrow_mut().backend.finish() }
  }

  /// The framebuffer provided by the window system.
  pub fn back_buffer(&mut self) -> Framebuffer<B> {
    Framebuffer::new(self.shared.clone(), None, &self.defaults)
  }

  pub fn new_framebuffer(&mut self) -> Result<Framebuffer<B>, FramebufferError> {
    let handle = unsafe { self.shared.borrow_mut().backend.new_framebuffer() }
      .ok_or(FramebufferError::CannotCreate)?;

    debug!("created framebuffer {:?}", handle);
    Ok(Framebuffer::new(
      self.shared.clone(),
      Some(handle),
      &self.defaults,
    ))
  }

  pub fn new_renderbuffer(&mut self) -> Result<Renderbuffer<B>, RenderbufferError> {
    let handle = unsafe { self.shared.borrow_mut().backend.new_renderbuffer() }
      .ok_or(RenderbufferError::CannotCreate)?;

    debug!("created renderbuffer {:?}", handle);
    Ok(Renderbuffer::new(self.shared.clone(), handle))
  }

  pub fn blend_color(&self, color: [f32; 4]) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::BlendColor(clamp_color(color, self.defaults.blend_color())),
      ContextValue::BlendColor(self.defaults.blend_color()),
    )
  }

  pub fn blend_equation(&self, equation: BlendEquation) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::BlendEquation(equation),
      ContextValue::BlendEquation(self.defaults.blend_equation()),
    )
  }

  pub fn depth_mask(&self, enabled: bool) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::DepthMask(enabled),
      ContextValue::DepthMask(self.defaults.depth_mask()),
    )
  }

  /// Use a program, or no program at all.
  pub fn use_program(&self, program: Option<&B::Handle>) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::UseProgram(program.cloned()),
      ContextValue::UseProgram(None),
    )
  }

  pub fn viewport(&self, viewport: [i32; 4]) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::Viewport(viewport),
      ContextValue::Viewport(self.defaults.viewport()),
    )
  }

  pub fn scissor(&self, scissor: [i32; 4]) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::Scissor(scissor),
      ContextValue::Scissor(self.defaults.scissor()),
    )
  }

  /// Line width; NaN selects the default.
  pub fn line_width(&self, width: f32) -> ContextDescriptor<B> {
    let width = if width.is_nan() {
      self.defaults.line_width()
    } else {
      width
    };

    Descriptor::new(
      ContextValue::LineWidth(width),
      ContextValue::LineWidth(self.defaults.line_width()),
    )
  }

  pub fn color_mask(&self, mask: [bool; 4]) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::ColorMask(mask),
      ContextValue::ColorMask(self.defaults.color_mask()),
    )
  }

  pub fn cull_face(&self, facet: Facet) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::CullFace(facet),
      ContextValue::CullFace(self.defaults.cull_face()),
    )
  }

  pub fn front_face(&self, orientation: Orientation) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::FrontFace(orientation),
      ContextValue::FrontFace(self.defaults.front_face()),
    )
  }

  /// Enable a feature.
  ///
  /// Enabling and disabling the same feature target the same slot.
  pub fn enable(&self, feature: Feature) -> ContextDescriptor<B> {
    self.capability(feature, true)
  }

  /// Disable a feature.
  pub fn disable(&self, feature: Feature) -> ContextDescriptor<B> {
    self.capability(feature, false)
  }

  fn capability(&self, feature: Feature, enabled: bool) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::Capability(feature, enabled),
      ContextValue::Capability(feature, self.defaults.feature(feature)),
    )
  }

  pub fn vertex_attrib_array(&self, index: u32, enabled: bool) -> ContextDescriptor<B> {
    Descriptor::new(
      ContextValue::VertexAttribArray(index, enabled),
      ContextValue::VertexAttribArray(index, self.defaults.vertex_attrib_array()),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn colors_are_clamped() {
    assert_eq!(clamp_color([-1., 0.5, 2., 1.], [0.; 4]), [0., 0.5, 1., 1.]);
  }

  #[test]
  fn nan_channels_take_the_default() {
    assert_eq!(
      clamp_color([f32::NAN, 0.5, f32::NAN, 1.], [0.25; 4]),
      [0.25, 0.5, 0.25, 1.]
    );
  }

  #[test]
  fn capability_keys_are_per_feature() {
    let blend = ContextValue::<u32>::Capability(Feature::Blend, true);
    let no_blend = ContextValue::<u32>::Capability(Feature::Blend, false);
    let depth = ContextValue::<u32>::Capability(Feature::DepthTest, true);

    assert_eq!(blend.key(), no_blend.key());
    assert_ne!(blend.key(), depth.key());
    assert_ne!(
      ContextValue::<u32>::VertexAttribArray(0, true).key(),
      ContextValue::<u32>::VertexAttribArray(1, true).key()
    );
  }

  #[test]
  fn bind_caching_is_on_by_default() {
    let opt = ContextOpt::default();

    assert!(opt.bind_caching());
    assert_eq!(opt.defaults(), None);

    let opt = opt
      .set_bind_caching(false)
      .set_defaults(Defaults::gl().set_line_width(2.));
    assert!(!opt.bind_caching());
    assert_eq!(opt.defaults().map(Defaults::line_width), Some(2.));
  }
}
