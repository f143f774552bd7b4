//! OpenGL 2.x backend.
//!
//! This module implements an OpenGL 2.x backend, framebuffer objects included, for gfxstate. The
//! backend type is [`GL2`].

mod device;
mod enums;
mod framebuffer;
mod renderbuffer;
mod state;

pub use self::state::StateQueryError;

use gfxstate::{Defaults, EnumTable};
use gl::types::*;
use log::debug;
use std::marker::PhantomData;
use std::os::raw::c_void;

/// An OpenGL 2.x backend.
///
/// Only one backend can live on a given thread at a time.
#[derive(Debug)]
pub struct GL2 {
  _a: PhantomData<*const ()>, // !Send and !Sync
  enums: EnumTable<GLenum>,
  defaults: Defaults,
}

impl GL2 {
  /// Create a new OpenGL 2.x backend from the OpenGL context current on this thread.
  ///
  /// The initial viewport and scissor box are queried from the context and become the values
  /// they revert to.
  pub fn new() -> Result<Self, StateQueryError> {
    state::acquire()?;

    let backend = Self::from_context();

    if backend.is_err() {
      state::release();
    }

    backend
  }

  /// Load the OpenGL function pointers with `loader`, then create the backend.
  pub fn with_loader<F>(loader: F) -> Result<Self, StateQueryError>
  where
    F: FnMut(&'static str) -> *const c_void,
  {
    gl::load_with(loader);
    Self::new()
  }

  fn from_context() -> Result<Self, StateQueryError> {
    let enums = enums::enum_table()?;
    let (viewport, scissor) = unsafe { (state::get_ctx_viewport(), state::get_ctx_scissor()) };

    debug!(
      "OpenGL 2 backend created (viewport: {:?}, scissor: {:?})",
      viewport, scissor
    );

    Ok(GL2 {
      _a: PhantomData,
      enums,
      defaults: Defaults::gl().set_viewport(viewport).set_scissor(scissor),
    })
  }
}

impl Drop for GL2 {
  fn drop(&mut self) {
    state::release();
  }
}
