use gfxstate::backend::framebuffer::Framebuffer;
use gfxstate::enums::{FramebufferAttachment, TextureTarget};
use gfxstate::{ClearMask, IncompleteReason};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{WebGlFramebuffer, WebGlRenderbuffer, WebGlRenderingContext, WebGlTexture};

use crate::webgl1::WebGL1;

unsafe impl Framebuffer for WebGL1 {
  unsafe fn new_framebuffer(&mut self) -> Option<JsValue> {
    self.ctx.create_framebuffer().map(JsValue::from)
  }

  unsafe fn destroy_framebuffer(&mut self, framebuffer: &JsValue) {
    self
      .ctx
      .delete_framebuffer(Some(framebuffer.unchecked_ref::<WebGlFramebuffer>()));
  }

  unsafe fn clear(&mut self, mask: ClearMask) {
    let mut bits = 0;

    if mask.contains(ClearMask::COLOR) {
      bits |= WebGlRenderingContext::COLOR_BUFFER_BIT;
    }

    if mask.contains(ClearMask::DEPTH) {
      bits |= WebGlRenderingContext::DEPTH_BUFFER_BIT;
    }

    if mask.contains(ClearMask::STENCIL) {
      bits |= WebGlRenderingContext::STENCIL_BUFFER_BIT;
    }

    self.ctx.clear(bits);
  }

  unsafe fn read_pixels_u8(&mut self, x: i32, y: i32, width: u32, height: u32, dst: &mut [u8]) {
    let r = self.ctx.read_pixels_with_opt_u8_array(
      x,
      y,
      width as i32,
      height as i32,
      WebGlRenderingContext::RGBA,
      WebGlRenderingContext::UNSIGNED_BYTE,
      Some(dst),
    );

    if let Err(e) = r {
      warn!("cannot read pixels: {:?}", e);
    }
  }

  unsafe fn attach_texture_2d(
    &mut self,
    attachment: FramebufferAttachment,
    target: TextureTarget,
    texture: &JsValue,
  ) {
    self.ctx.framebuffer_texture_2d(
      WebGlRenderingContext::FRAMEBUFFER,
      self.enums.get(attachment),
      self.enums.get(target),
      Some(texture.unchecked_ref::<WebGlTexture>()),
      0,
    );
  }

  unsafe fn attach_renderbuffer(&mut self, attachment: FramebufferAttachment, renderbuffer: &JsValue) {
    self.ctx.framebuffer_renderbuffer(
      WebGlRenderingContext::FRAMEBUFFER,
      self.enums.get(attachment),
      WebGlRenderingContext::RENDERBUFFER,
      Some(renderbuffer.unchecked_ref::<WebGlRenderbuffer>()),
    );
  }

  unsafe fn framebuffer_status(&mut self) -> Result<(), IncompleteReason> {
    let status = self
      .ctx
      .check_framebuffer_status(WebGlRenderingContext::FRAMEBUFFER);

    match status {
      WebGlRenderingContext::FRAMEBUFFER_COMPLETE => Ok(()),
      WebGlRenderingContext::FRAMEBUFFER_INCOMPLETE_ATTACHMENT => {
        Err(IncompleteReason::IncompleteAttachment)
      }
      WebGlRenderingContext::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT => {
        Err(IncompleteReason::MissingAttachment)
      }
      WebGlRenderingContext::FRAMEBUFFER_INCOMPLETE_DIMENSIONS => {
        Err(IncompleteReason::IncompleteDimensions)
      }
      WebGlRenderingContext::FRAMEBUFFER_UNSUPPORTED => Err(IncompleteReason::Unsupported),
      _ => panic!(
        "unknown WebGL framebuffer incomplete status! status={}",
        status
      ),
    }
  }
}
