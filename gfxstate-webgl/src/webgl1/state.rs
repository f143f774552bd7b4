//! Graphics state.

use gfxstate::backend::state::State;
use gfxstate::{BindTarget, ContextValue, Defaults, EnumTableError, FramebufferValue};
use js_sys::Int32Array;
use std::error;
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
  WebGlBuffer, WebGlFramebuffer, WebGlProgram, WebGlRenderbuffer, WebGlRenderingContext,
};

use crate::webgl1::WebGL1;

/// An error that might happen when the context is queried.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// Unknown viewport initial state.
  UnknownViewportInitialState,
  /// Unknown scissor box initial state.
  UnknownScissorInitialState,
  /// Some abstract enumerations have no WebGL counterpart.
  IncompleteEnumTable(EnumTableError),
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnknownViewportInitialState => write!(f, "unknown viewport initial state"),

      StateQueryError::UnknownScissorInitialState => write!(f, "unknown scissor initial state"),

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

// Workaround around the lack of implementor for [`TryFrom`] on [`JsValue`].
trait GetWebGLParam<T> {
  fn get_webgl_param(&mut self, param: u32) -> Option<T>;
}

impl GetWebGLParam<Int32Array> for WebGlRenderingContext {
  fn get_webgl_param(&mut self, param: u32) -> Option<Int32Array> {
    self.get_parameter(param).ok().map(|a| a.into())
  }
}

fn get_ctx_box(ctx: &mut WebGlRenderingContext, param: u32) -> Option<[i32; 4]> {
  let array: Int32Array = ctx.get_webgl_param(param)?;

  if array.length() != 4 {
    return None;
  }

  let mut data = [0; 4];
  array.copy_to(&mut data);
  Some(data)
}

pub(crate) fn get_ctx_viewport(
  ctx: &mut WebGlRenderingContext,
) -> Result<[i32; 4], StateQueryError> {
  get_ctx_box(ctx, WebGlRenderingContext::VIEWPORT)
    .ok_or(StateQueryError::UnknownViewportInitialState)
}

pub(crate) fn get_ctx_scissor(
  ctx: &mut WebGlRenderingContext,
) -> Result<[i32; 4], StateQueryError> {
  get_ctx_box(ctx, WebGlRenderingContext::SCISSOR_BOX)
    .ok_or(StateQueryError::UnknownScissorInitialState)
}

unsafe impl State for WebGL1 {
  type Handle = JsValue;

  fn defaults(&self) -> Defaults {
    self.defaults.clone()
  }

  unsafe fn apply_context(&mut self, value: &ContextValue<JsValue>) {
    match *value {
      ContextValue::BlendColor([r, g, b, a]) => self.ctx.blend_color(r, g, b, a),
      ContextValue::BlendEquation(equation) => self.ctx.blend_equation(self.enums.get(equation)),
      ContextValue::DepthMask(enabled) => self.ctx.depth_mask(enabled),
      ContextValue::UseProgram(ref program) => self.bind(BindTarget::Program, program.as_ref()),
      ContextValue::Viewport([x, y, w, h]) => self.ctx.viewport(x, y, w, h),
      ContextValue::Scissor([x, y, w, h]) => self.ctx.scissor(x, y, w, h),
      ContextValue::LineWidth(width) => self.ctx.line_width(width),
      ContextValue::ColorMask([r, g, b, a]) => self.ctx.color_mask(r, g, b, a),
      ContextValue::CullFace(facet) => self.ctx.cull_face(self.enums.get(facet)),
      ContextValue::FrontFace(orientation) => self.ctx.front_face(self.enums.get(orientation)),
      ContextValue::Capability(feature, true) => self.ctx.enable(self.enums.get(feature)),
      ContextValue::Capability(feature, false) => self.ctx.disable(self.enums.get(feature)),
      ContextValue::VertexAttribArray(index, true) => self.ctx.enable_vertex_attrib_array(index),
      ContextValue::VertexAttribArray(index, false) => self.ctx.disable_vertex_attrib_array(index),
    }
  }

  unsafe fn apply_framebuffer(&mut self, value: &FramebufferValue) {
    match *value {
      FramebufferValue::ClearColor([r, g, b, a]) => self.ctx.clear_color(r, g, b, a),
      FramebufferValue::ClearDepth(depth) => self.ctx.clear_depth(depth as f32),
      FramebufferValue::ClearStencil(stencil) => self.ctx.clear_stencil(stencil),
    }
  }

  unsafe fn bind(&mut self, target: BindTarget, handle: Option<&JsValue>) {
    match target {
      BindTarget::Framebuffer => self.ctx.bind_framebuffer(
        WebGlRenderingContext::FRAMEBUFFER,
        handle.map(|h| h.unchecked_ref::<WebGlFramebuffer>()),
      ),

      BindTarget::Renderbuffer => self.ctx.bind_renderbuffer(
        WebGlRenderingContext::RENDERBUFFER,
        handle.map(|h| h.unchecked_ref::<WebGlRenderbuffer>()),
      ),

      BindTarget::ArrayBuffer => self.ctx.bind_buffer(
        WebGlRenderingContext::ARRAY_BUFFER,
        handle.map(|h| h.unchecked_ref::<WebGlBuffer>()),
      ),

      BindTarget::ElementArrayBuffer => self.ctx.bind_buffer(
        WebGlRenderingContext::ELEMENT_ARRAY_BUFFER,
        handle.map(|h| h.unchecked_ref::<WebGlBuffer>()),
      ),

      BindTarget::Program => self
        .ctx
        .use_program(handle.map(|h| h.unchecked_ref::<WebGlProgram>())),
    }
  }
}
