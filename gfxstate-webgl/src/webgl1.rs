//! WebGL 1.0 backend support.

mod device;
mod enums;
mod framebuffer;
mod renderbuffer;
mod state;

pub use crate::webgl1::state::StateQueryError;
use gfxstate::{Defaults, EnumTable};
use log::debug;
use web_sys::WebGlRenderingContext;

/// The WebGL 1 backend.
///
/// Object handles are the JavaScript objects WebGL hands out, compared by identity.
#[derive(Debug)]
pub struct WebGL1 {
  ctx: WebGlRenderingContext,
  enums: EnumTable<u32>,
  defaults: Defaults,
}

impl WebGL1 {
  /// Create a backend out of a canvas context.
  ///
  /// The initial viewport and scissor box are queried from the context and become the values
  /// they revert to.
  pub fn new(mut ctx: WebGlRenderingContext) -> Result<Self, StateQueryError> {
    let enums = enums::enum_table()?;
    let viewport = state::get_ctx_viewport(&mut ctx)?;
    let scissor = state::get_ctx_scissor(&mut ctx)?;

    debug!(
      "WebGL 1 backend created (viewport: {:?}, scissor: {:?})",
      viewport, scissor
    );

    Ok(WebGL1 {
      ctx,
      enums,
      defaults: Defaults::gl().set_viewport(viewport).set_scissor(scissor),
    })
  }

  /// The underlying canvas context.
  pub fn ctx(&self) -> &WebGlRenderingContext {
    &self.ctx
  }
}
