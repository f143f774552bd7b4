use crate::Backend;

pub type Framebuffer = gfxstate::framebuffer::Framebuffer<Backend>;
pub use gfxstate::framebuffer::{
  ClearMask, FramebufferError, FramebufferKey, FramebufferState, FramebufferValue,
  IncompleteReason,
};
