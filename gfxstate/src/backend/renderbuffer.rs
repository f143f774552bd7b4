//! Renderbuffer backend.

use crate::backend::state::State;
use crate::enums::RenderbufferFormat;

pub unsafe trait Renderbuffer: State {
  /// Create a new renderbuffer object, or `None` if the backend ran out of them.
  unsafe fn new_renderbuffer(&mut self) -> Option<Self::Handle>;

  unsafe fn destroy_renderbuffer(&mut self, renderbuffer: &Self::Handle);

  /// Allocate storage for the currently bound renderbuffer.
  unsafe fn renderbuffer_storage(&mut self, format: RenderbufferFormat, width: u32, height: u32);
}
