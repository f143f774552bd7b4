//! Error-checking backend decorator.
//!
//! [`Checked`] wraps any backend and asks it for errors after every native call it forwards, so
//! that a failing call is reported right where it happened instead of whenever
//! [`Context::check`](crate::context::Context::check) is next called. The context doesn’t know
//! whether its backend is checked.

use log::error;
use std::fmt;

use crate::backend::device::Device;
use crate::backend::framebuffer::Framebuffer;
use crate::backend::renderbuffer::Renderbuffer;
use crate::backend::state::State;
use crate::bind::BindTarget;
use crate::context::ContextValue;
use crate::defaults::Defaults;
use crate::enums::{FramebufferAttachment, RenderbufferFormat, TextureTarget};
use crate::error::GraphicsError;
use crate::framebuffer::{ClearMask, FramebufferValue, IncompleteReason};

/// What to do when a forwarded call fails.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CheckMode {
  /// Log the error and panic.
  Panic,
  /// Only log the error.
  Log,
}

impl Default for CheckMode {
  fn default() -> Self {
    CheckMode::Panic
  }
}

/// A backend checking for errors after every call.
#[derive(Debug)]
pub struct Checked<B> {
  inner: B,
  mode: CheckMode,
}

impl<B> Checked<B>
where
  B: Device,
{
  /// Wrap a backend, panicking on errors.
  pub fn new(inner: B) -> Self {
    Self::with_mode(inner, CheckMode::default())
  }

  pub fn with_mode(inner: B, mode: CheckMode) -> Self {
    Checked { inner, mode }
  }

  pub fn mode(&self) -> CheckMode {
    self.mode
  }

  pub fn inner(&self) -> &B {
    &self.inner
  }

  pub fn into_inner(self) -> B {
    self.inner
  }

  unsafe fn after(&mut self, call: fmt::Arguments) {
    if let Err(e) = self.inner.check() {
      error!("{} failed: {}", call, e);

      if self.mode == CheckMode::Panic {
        panic!("{} failed: {}", call, e);
      }
    }
  }
}

unsafe impl<B> State for Checked<B>
where
  B: State + Device,
{
  type Handle = B::Handle;

  fn defaults(&self) -> Defaults {
    self.inner.defaults()
  }

  unsafe fn apply_context(&mut self, value: &ContextValue<Self::Handle>) {
    self.inner.apply_context(value);
    self.after(format_args!("apply_context({:?})", value));
  }

  unsafe fn apply_framebuffer(&mut self, value: &FramebufferValue) {
    self.inner.apply_framebuffer(value);
    self.after(format_args!("apply_framebuffer({:?})", value));
  }

  unsafe fn bind(&mut self, target: BindTarget, handle: Option<&Self::Handle>) {
    self.inner.bind(target, handle);
    self.after(format_args!("bind({:?}, {:?})", target, handle));
  }
}

unsafe impl<B> Framebuffer for Checked<B>
where
  B: Framebuffer + Device,
{
  unsafe fn new_framebuffer(&mut self) -> Option<Self::Handle> {
    let handle = self.inner.new_framebuffer();
    self.after(format_args!("new_framebuffer"));
    handle
  }

  unsafe fn destroy_framebuffer(&mut self, framebuffer: &Self::Handle) {
    self.inner.destroy_framebuffer(framebuffer);
    self.after(format_args!("destroy_framebuffer({:?})", framebuffer));
  }

  unsafe fn clear(&mut self, mask: ClearMask) {
    self.inner.clear(mask);
    self.after(format_args!("clear({:?})", mask));
  }

  unsafe fn read_pixels_u8(&mut self, x: i32, y: i32, width: u32, height: u32, dst: &mut [u8]) {
    self.inner.read_pixels_u8(x, y, width, height, dst);
    self.after(format_args!(
      "read_pixels_u8({}, {}, {}, {})",
      x, y, width, height
    ));
  }

  unsafe fn attach_texture_2d(
    &mut self,
    attachment: FramebufferAttachment,
    target: TextureTarget,
    texture: &Self::Handle,
  ) {
    self.inner.attach_texture_2d(attachment, target, texture);
    self.after(format_args!(
      "attach_texture_2d({:?}, {:?}, {:?})",
      attachment, target, texture
    ));
  }

  unsafe fn attach_renderbuffer(
    &mut self,
    attachment: FramebufferAttachment,
    renderbuffer: &Self::Handle,
  ) {
    self.inner.attach_renderbuffer(attachment, renderbuffer);
    self.after(format_args!(
      "attach_renderbuffer({:?}, {:?})",
      attachment, renderbuffer
    ));
  }

  unsafe fn framebuffer_status(&mut self) -> Result<(), IncompleteReason> {
    let status = self.inner.framebuffer_status();
    self.after(format_args!("framebuffer_status"));
    status
  }
}

unsafe impl<B> Renderbuffer for Checked<B>
where
  B: Renderbuffer + Device,
{
  unsafe fn new_renderbuffer(&mut self) -> Option<Self::Handle> {
    let handle = self.inner.new_renderbuffer();
    self.after(format_args!("new_renderbuffer"));
    handle
  }

  unsafe fn destroy_renderbuffer(&mut self, renderbuffer: &Self::Handle) {
    self.inner.destroy_renderbuffer(renderbuffer);
    self.after(format_args!("destroy_renderbuffer({:?})", renderbuffer));
  }

  unsafe fn renderbuffer_storage(&mut self, format: RenderbufferFormat, width: u32, height: u32) {
    self.inner.renderbuffer_storage(format, width, height);
    self.after(format_args!(
      "renderbuffer_storage({:?}, {}, {})",
      format, width, height
    ));
  }
}

unsafe impl<B> Device for Checked<B>
where
  B: Device,
{
  unsafe fn check(&mut self) -> Result<(), GraphicsError> {
    self.inner.check()
  }

  unsafe fn flush(&mut self) {
    self.inner.flush();
    self.after(format_args!("flush"));
  }

  unsafe fn finish(&mut self) {
    self.inner.finish();
    self.after(format_args!("finish"));
  }
}
