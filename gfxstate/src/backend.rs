//! Backend interfacing.
//!
//! A backend is the native call surface: it knows how to apply a slot value, how to bind an
//! object and how to run the few native operations framebuffers and renderbuffers need. Whether a
//! call is needed at all is decided by the core, never by the backend.

pub mod device;
pub mod framebuffer;
pub mod renderbuffer;
pub mod state;

/// Everything a [`Context`](crate::context::Context) needs from a backend.
///
/// This trait is implemented for any type implementing all the backend traits.
pub trait Backend:
  state::State + framebuffer::Framebuffer + renderbuffer::Renderbuffer + device::Device
{
}

impl<B> Backend for B where
  B: state::State + framebuffer::Framebuffer + renderbuffer::Renderbuffer + device::Device
{
}
