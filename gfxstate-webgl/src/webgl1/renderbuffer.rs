use gfxstate::backend::renderbuffer::Renderbuffer;
use gfxstate::enums::RenderbufferFormat;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{WebGlRenderbuffer, WebGlRenderingContext};

use crate::webgl1::WebGL1;

unsafe impl Renderbuffer for WebGL1 {
  unsafe fn new_renderbuffer(&mut self) -> Option<JsValue> {
    self.ctx.create_renderbuffer().map(JsValue::from)
  }

  unsafe fn destroy_renderbuffer(&mut self, renderbuffer: &JsValue) {
    self
      .ctx
      .delete_renderbuffer(Some(renderbuffer.unchecked_ref::<WebGlRenderbuffer>()));
  }

  unsafe fn renderbuffer_storage(&mut self, format: RenderbufferFormat, width: u32, height: u32) {
    self.ctx.renderbuffer_storage(
      WebGlRenderingContext::RENDERBUFFER,
      self.enums.get(format),
      width as i32,
      height as i32,
    );
  }
}
