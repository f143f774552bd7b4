use crate::Backend;

pub type Renderbuffer = gfxstate::renderbuffer::Renderbuffer<Backend>;
pub use gfxstate::renderbuffer::RenderbufferError;
