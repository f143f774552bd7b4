use gfxstate::backend::device::Device;
use gfxstate::GraphicsError;
use web_sys::WebGlRenderingContext;

use crate::webgl1::WebGL1;

unsafe impl Device for WebGL1 {
  unsafe fn check(&mut self) -> Result<(), GraphicsError> {
    match self.ctx.get_error() {
      WebGlRenderingContext::NO_ERROR => Ok(()),
      WebGlRenderingContext::OUT_OF_MEMORY => Err(GraphicsError::OutOfMemory),
      WebGlRenderingContext::INVALID_ENUM => Err(GraphicsError::InvalidEnum),
      WebGlRenderingContext::INVALID_OPERATION => Err(GraphicsError::InvalidOperation),
      WebGlRenderingContext::INVALID_FRAMEBUFFER_OPERATION => {
        Err(GraphicsError::InvalidFramebufferOperation)
      }
      WebGlRenderingContext::INVALID_VALUE => Err(GraphicsError::InvalidValue),
      WebGlRenderingContext::CONTEXT_LOST_WEBGL => Err(GraphicsError::ContextLost),
      code => Err(GraphicsError::Unknown(code)),
    }
  }

  unsafe fn flush(&mut self) {
    self.ctx.flush();
  }

  unsafe fn finish(&mut self) {
    self.ctx.finish();
  }
}
