//! Graphics state.

use gfxstate::backend::state::State;
use gfxstate::{BindTarget, ContextValue, Defaults, EnumTableError, FramebufferValue};
use gl::types::*;
use std::cell::RefCell;
use std::error;
use std::fmt;

use crate::gl2::GL2;

// TLS synchronization barrier for `GL2`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

/// Take the state of the current thread.
pub(crate) fn acquire() -> Result<(), StateQueryError> {
  TLS_ACQUIRE_GFX_STATE.with(|rc| {
    rc.borrow_mut()
      .take()
      .ok_or(StateQueryError::UnavailableGLState)
  })
}

/// Give the state of the current thread back.
pub(crate) fn release() {
  TLS_ACQUIRE_GFX_STATE.with(|rc| {
    *rc.borrow_mut() = Some(());
  });
}

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// The graphics state is unavailable.
  ///
  /// That might occur if you try to have more than one backend on the same thread.
  UnavailableGLState,
  /// Some abstract enumerations have no OpenGL counterpart.
  IncompleteEnumTable(EnumTableError),
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
      StateQueryError::IncompleteEnumTable(ref e) => write!(f, "incomplete enum table: {}", e),
    }
  }
}

impl error::Error for StateQueryError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      StateQueryError::IncompleteEnumTable(e) => Some(e),
      _ => None,
    }
  }
}

impl From<EnumTableError> for StateQueryError {
  fn from(e: EnumTableError) -> Self {
    StateQueryError::IncompleteEnumTable(e)
  }
}

pub(crate) unsafe fn get_ctx_viewport() -> [GLint; 4] {
  let mut data = [0; 4];
  gl::GetIntegerv(gl::VIEWPORT, data.as_mut_ptr());
  data
}

pub(crate) unsafe fn get_ctx_scissor() -> [GLint; 4] {
  let mut data = [0; 4];
  gl::GetIntegerv(gl::SCISSOR_BOX, data.as_mut_ptr());
  data
}

fn gl_bool(b: bool) -> GLboolean {
  if b {
    gl::TRUE
  } else {
    gl::FALSE
  }
}

unsafe impl State for GL2 {
  type Handle = GLuint;

  fn defaults(&self) -> Defaults {
    self.defaults.clone()
  }

  unsafe fn apply_context(&mut self, value: &ContextValue<GLuint>) {
    match *value {
      ContextValue::BlendColor([r, g, b, a]) => gl::BlendColor(r, g, b, a),
      ContextValue::BlendEquation(equation) => gl::BlendEquation(self.enums.get(equation)),
      ContextValue::DepthMask(enabled) => gl::DepthMask(gl_bool(enabled)),
      ContextValue::UseProgram(ref program) => self.bind(BindTarget::Program, program.as_ref()),
      ContextValue::Viewport([x, y, w, h]) => gl::Viewport(x, y, w, h),
      ContextValue::Scissor([x, y, w, h]) => gl::Scissor(x, y, w, h),
      ContextValue::LineWidth(width) => gl::LineWidth(width),
      ContextValue::ColorMask([r, g, b, a]) => {
        gl::ColorMask(gl_bool(r), gl_bool(g), gl_bool(b), gl_bool(a))
      }
      ContextValue::CullFace(facet) => gl::CullFace(self.enums.get(facet)),
      ContextValue::FrontFace(orientation) => gl::FrontFace(self.enums.get(orientation)),
      ContextValue::Capability(feature, true) => gl::Enable(self.enums.get(feature)),
      ContextValue::Capability(feature, false) => gl::Disable(self.enums.get(feature)),
      ContextValue::VertexAttribArray(index, true) => gl::EnableVertexAttribArray(index),
      ContextValue::VertexAttribArray(index, false) => gl::DisableVertexAttribArray(index),
    }
  }

  unsafe fn apply_framebuffer(&mut self, value: &FramebufferValue) {
    match *value {
      FramebufferValue::ClearColor([r, g, b, a]) => gl::ClearColor(r, g, b, a),
      FramebufferValue::ClearDepth(depth) => gl::ClearDepth(depth),
      FramebufferValue::ClearStencil(stencil) => gl::ClearStencil(stencil),
    }
  }

  unsafe fn bind(&mut self, target: BindTarget, handle: Option<&GLuint>) {
    let handle = handle.copied().unwrap_or(0);

    match target {
      BindTarget::Framebuffer => gl::BindFramebuffer(gl::FRAMEBUFFER, handle),
      BindTarget::Renderbuffer => gl::BindRenderbuffer(gl::RENDERBUFFER, handle),
      BindTarget::ArrayBuffer => gl::BindBuffer(gl::ARRAY_BUFFER, handle),
      BindTarget::ElementArrayBuffer => gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, handle),
      BindTarget::Program => gl::UseProgram(handle),
    }
  }
}
