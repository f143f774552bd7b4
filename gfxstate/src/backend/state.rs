//! State backend.

use std::fmt;

use crate::bind::BindTarget;
use crate::context::ContextValue;
use crate::defaults::Defaults;
use crate::framebuffer::FramebufferValue;

/// Native state-change calls.
pub unsafe trait State {
  /// Native object handle.
  ///
  /// Handles are compared to decide whether an object is already bound.
  type Handle: Clone + fmt::Debug + PartialEq;

  /// Startup value of every reconciled slot, as seen by this backend.
  fn defaults(&self) -> Defaults;

  /// Apply a context slot value.
  ///
  /// [`ContextValue::UseProgram`] values are routed through the bind cache by the core and reach
  /// [`State::bind`] instead.
  unsafe fn apply_context(&mut self, value: &ContextValue<Self::Handle>);

  /// Apply a framebuffer clear value.
  unsafe fn apply_framebuffer(&mut self, value: &FramebufferValue);

  /// Bind an object, or unbind the binding point if `handle` is `None`.
  unsafe fn bind(&mut self, target: BindTarget, handle: Option<&Self::Handle>);
}
