use gfxstate::backend::framebuffer::Framebuffer;
use gfxstate::enums::{FramebufferAttachment, TextureTarget};
use gfxstate::{ClearMask, IncompleteReason};
use gl::types::*;
use std::os::raw::c_void;

use crate::gl2::GL2;

unsafe impl Framebuffer for GL2 {
  unsafe fn new_framebuffer(&mut self) -> Option<GLuint> {
    let mut handle: GLuint = 0;
    gl::GenFramebuffers(1, &mut handle);

    if handle == 0 {
      None
    } else {
      Some(handle)
    }
  }

  unsafe fn destroy_framebuffer(&mut self, framebuffer: &GLuint) {
    gl::DeleteFramebuffers(1, framebuffer);
  }

  unsafe fn clear(&mut self, mask: ClearMask) {
    gl::Clear(clear_mask_to_glbitfield(mask));
  }

  unsafe fn read_pixels_u8(&mut self, x: i32, y: i32, width: u32, height: u32, dst: &mut [u8]) {
    gl::ReadPixels(
      x,
      y,
      width as GLsizei,
      height as GLsizei,
      gl::RGBA,
      gl::UNSIGNED_BYTE,
      dst.as_mut_ptr() as *mut c_void,
    );
  }

  unsafe fn attach_texture_2d(
    &mut self,
    attachment: FramebufferAttachment,
    target: TextureTarget,
    texture: &GLuint,
  ) {
    gl::FramebufferTexture2D(
      gl::FRAMEBUFFER,
      self.enums.get(attachment),
      self.enums.get(target),
      *texture,
      0,
    );
  }

  unsafe fn attach_renderbuffer(&mut self, attachment: FramebufferAttachment, renderbuffer: &GLuint) {
    gl::FramebufferRenderbuffer(
      gl::FRAMEBUFFER,
      self.enums.get(attachment),
      gl::RENDERBUFFER,
      *renderbuffer,
    );
  }

  unsafe fn framebuffer_status(&mut self) -> Result<(), IncompleteReason> {
    framebuffer_status_from_glenum(gl::CheckFramebufferStatus(gl::FRAMEBUFFER))
  }
}

// only reported by framebuffer objects from GL_EXT_framebuffer_object, absent from core profiles
const FRAMEBUFFER_INCOMPLETE_DIMENSIONS: GLenum = 0x8CD9;

fn framebuffer_status_from_glenum(status: GLenum) -> Result<(), IncompleteReason> {
  match status {
    gl::FRAMEBUFFER_COMPLETE => Ok(()),
    gl::FRAMEBUFFER_UNDEFINED => Err(IncompleteReason::Undefined),
    gl::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => Err(IncompleteReason::IncompleteAttachment),
    gl::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => Err(IncompleteReason::MissingAttachment),
    FRAMEBUFFER_INCOMPLETE_DIMENSIONS => Err(IncompleteReason::IncompleteDimensions),
    gl::FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER => Err(IncompleteReason::IncompleteDrawBuffer),
    gl::FRAMEBUFFER_INCOMPLETE_READ_BUFFER => Err(IncompleteReason::IncompleteReadBuffer),
    gl::FRAMEBUFFER_UNSUPPORTED => Err(IncompleteReason::Unsupported),
    gl::FRAMEBUFFER_INCOMPLETE_MULTISAMPLE => Err(IncompleteReason::IncompleteMultisample),
    _ => panic!(
      "unknown OpenGL framebuffer incomplete status! status={}",
      status
    ),
  }
}

fn clear_mask_to_glbitfield(mask: ClearMask) -> GLbitfield {
  let mut bits = 0;

  if mask.contains(ClearMask::COLOR) {
    bits |= gl::COLOR_BUFFER_BIT;
  }

  if mask.contains(ClearMask::DEPTH) {
    bits |= gl::DEPTH_BUFFER_BIT;
  }

  if mask.contains(ClearMask::STENCIL) {
    bits |= gl::STENCIL_BUFFER_BIT;
  }

  bits
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clear_mask_bits() {
    assert_eq!(clear_mask_to_glbitfield(ClearMask::empty()), 0);
    assert_eq!(
      clear_mask_to_glbitfield(ClearMask::COLOR | ClearMask::STENCIL),
      gl::COLOR_BUFFER_BIT | gl::STENCIL_BUFFER_BIT
    );
  }

  #[test]
  fn framebuffer_statuses() {
    assert_eq!(framebuffer_status_from_glenum(gl::FRAMEBUFFER_COMPLETE), Ok(()));
    assert_eq!(
      framebuffer_status_from_glenum(0x8CD9),
      Err(IncompleteReason::IncompleteDimensions)
    );
    assert_eq!(
      framebuffer_status_from_glenum(gl::FRAMEBUFFER_UNSUPPORTED),
      Err(IncompleteReason::Unsupported)
    );
  }

  #[test]
  #[should_panic]
  fn unknown_framebuffer_status() {
    let _ = framebuffer_status_from_glenum(0);
  }
}
