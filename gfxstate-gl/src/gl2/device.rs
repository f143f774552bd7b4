use gfxstate::backend::device::Device;
use gfxstate::GraphicsError;
use gl::types::*;

use crate::gl2::GL2;

unsafe impl Device for GL2 {
  unsafe fn check(&mut self) -> Result<(), GraphicsError> {
    match gl::GetError() {
      gl::NO_ERROR => Ok(()),
      code => Err(graphics_error(code)),
    }
  }

  unsafe fn flush(&mut self) {
    gl::Flush();
  }

  unsafe fn finish(&mut self) {
    gl::Finish();
  }
}

fn graphics_error(code: GLenum) -> GraphicsError {
  match code {
    gl::OUT_OF_MEMORY => GraphicsError::OutOfMemory,
    gl::INVALID_ENUM => GraphicsError::InvalidEnum,
    gl::INVALID_OPERATION => GraphicsError::InvalidOperation,
    gl::INVALID_FRAMEBUFFER_OPERATION => GraphicsError::InvalidFramebufferOperation,
    gl::INVALID_VALUE => GraphicsError::InvalidValue,
    gl::STACK_OVERFLOW => GraphicsError::StackOverflow,
    gl::STACK_UNDERFLOW => GraphicsError::StackUnderflow,
    gl::CONTEXT_LOST => GraphicsError::ContextLost,
    _ => GraphicsError::Unknown(code),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_codes() {
    assert_eq!(graphics_error(gl::INVALID_VALUE), GraphicsError::InvalidValue);
    assert_eq!(graphics_error(0x1234), GraphicsError::Unknown(0x1234));
  }
}
