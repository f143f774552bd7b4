//! Renderbuffers.
//!
//! A renderbuffer is an image that can only be rendered to, typically used as a depth or stencil
//! attachment of a [`Framebuffer`](crate::framebuffer::Framebuffer).

use log::debug;
use std::cell::RefCell;
use std::error;
use std::fmt;
use std::rc::Rc;

use crate::backend::Backend;
use crate::bind::BindTarget;
use crate::context::Shared;
use crate::enums::RenderbufferFormat;

/// Renderbuffer error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderbufferError {
  /// The backend couldn’t create a renderbuffer.
  CannotCreate,
}

impl fmt::Display for RenderbufferError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      RenderbufferError::CannotCreate => f.write_str("cannot create renderbuffer"),
    }
  }
}

impl error::Error for RenderbufferError {}

/// A renderbuffer.
pub struct Renderbuffer<B>
where
  B: Backend,
{
  handle: B::Handle,
  shared: Rc<RefCell<Shared<B>>>,
}

impl<B> Renderbuffer<B>
where
  B: Backend,
{
  pub(crate) fn new(shared: Rc<RefCell<Shared<B>>>, handle: B::Handle) -> Self {
    Renderbuffer { handle, shared }
  }

  pub fn handle(&self) -> &B::Handle {
    &self.handle
  }

  /// Allocate the renderbuffer’s storage.
  pub fn storage(&mut self, format: RenderbufferFormat, width: u32, height: u32) {
    let mut shared = self.shared.borrow_mut();

    shared.bind(BindTarget::Renderbuffer, Some(&self.handle));
    unsafe {
      shared
        .backend
        .renderbuffer_storage(format, width, height)
    };
  }

  /// Delete the renderbuffer.
  pub fn delete(self) {}
}

impl<B> Drop for Renderbuffer<B>
where
  B: Backend,
{
  fn drop(&mut self) {
    let mut shared = self.shared.borrow_mut();

    debug!("deleting renderbuffer {:?}", self.handle);
    unsafe { shared.backend.destroy_renderbuffer(&self.handle) };
    shared.binds.forget(&self.handle);
  }
}
