use gfxstate::backend::renderbuffer::Renderbuffer;
use gfxstate::enums::RenderbufferFormat;
use gl::types::*;

use crate::gl2::GL2;

unsafe impl Renderbuffer for GL2 {
  unsafe fn new_renderbuffer(&mut self) -> Option<GLuint> {
    let mut handle: GLuint = 0;
    gl::GenRenderbuffers(1, &mut handle);

    if handle == 0 {
      None
    } else {
      Some(handle)
    }
  }

  unsafe fn destroy_renderbuffer(&mut self, renderbuffer: &GLuint) {
    gl::DeleteRenderbuffers(1, renderbuffer);
  }

  unsafe fn renderbuffer_storage(&mut self, format: RenderbufferFormat, width: u32, height: u32) {
    gl::RenderbufferStorage(
      gl::RENDERBUFFER,
      self.enums.get(format),
      width as GLsizei,
      height as GLsizei,
    );
  }
}
