//! Framebuffer backend.
//!
//! Every operation but creation and destruction applies to the currently bound framebuffer.

use crate::backend::state::State;
use crate::enums::{FramebufferAttachment, TextureTarget};
use crate::framebuffer::{ClearMask, IncompleteReason};

pub unsafe trait Framebuffer: State {
  /// Create a new framebuffer object, or `None` if the backend ran out of them.
  unsafe fn new_framebuffer(&mut self) -> Option<Self::Handle>;

  unsafe fn destroy_framebuffer(&mut self, framebuffer: &Self::Handle);

  unsafe fn clear(&mut self, mask: ClearMask);

  /// Read a rectangle of RGBA8 pixels into `dst`, which is at least `width * height * 4` bytes.
  ///
  /// `width` and `height` both fit in an `i32`.
  unsafe fn read_pixels_u8(&mut self, x: i32, y: i32, width: u32, height: u32, dst: &mut [u8]);

  unsafe fn attach_texture_2d(
    &mut self,
    attachment: FramebufferAttachment,
    target: TextureTarget,
    texture: &Self::Handle,
  );

  unsafe fn attach_renderbuffer(
    &mut self,
    attachment: FramebufferAttachment,
    renderbuffer: &Self::Handle,
  );

  unsafe fn framebuffer_status(&mut self) -> Result<(), IncompleteReason>;
}
