//! A backend recording every native call instead of issuing it.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use gfxstate::backend::device::Device;
use gfxstate::backend::framebuffer::Framebuffer;
use gfxstate::backend::renderbuffer::Renderbuffer;
use gfxstate::backend::state::State;
use gfxstate::enums::{FramebufferAttachment, RenderbufferFormat, TextureTarget};
use gfxstate::{
  BindTarget, ClearMask, ContextValue, Defaults, FramebufferValue, GraphicsError, IncompleteReason,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
  Context(ContextValue<u32>),
  Framebuffer(FramebufferValue),
  Bind(BindTarget, Option<u32>),
  NewFramebuffer(u32),
  DestroyFramebuffer(u32),
  Clear(ClearMask),
  ReadPixels(i32, i32, u32, u32),
  AttachTexture2D(FramebufferAttachment, TextureTarget, u32),
  AttachRenderbuffer(FramebufferAttachment, u32),
  Status,
  NewRenderbuffer(u32),
  DestroyRenderbuffer(u32),
  RenderbufferStorage(RenderbufferFormat, u32, u32),
  Flush,
  Finish,
}

/// Shared view on what a [`Mock`] did, and knobs to change what it does.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
  calls: Rc<RefCell<Vec<Call>>>,
  errors: Rc<RefCell<VecDeque<GraphicsError>>>,
  status: Rc<RefCell<Option<IncompleteReason>>>,
  exhausted: Rc<RefCell<bool>>,
}

impl Recorder {
  /// Take every call recorded so far.
  pub fn take(&self) -> Vec<Call> {
    self.calls.borrow_mut().drain(..).collect()
  }

  /// Make the next check report an error.
  pub fn push_error(&self, e: GraphicsError) {
    self.errors.borrow_mut().push_back(e);
  }

  /// Make framebuffers incomplete.
  pub fn set_incomplete(&self, reason: IncompleteReason) {
    *self.status.borrow_mut() = Some(reason);
  }

  /// Make object creation fail.
  pub fn exhaust(&self) {
    *self.exhausted.borrow_mut() = true;
  }

  fn record(&self, call: Call) {
    self.calls.borrow_mut().push(call);
  }
}

/// Viewport and scissor box of the mock window.
pub const WINDOW: [i32; 4] = [0, 0, 640, 480];

#[derive(Debug)]
pub struct Mock {
  recorder: Recorder,
  next_handle: u32,
}

pub fn mock() -> (Mock, Recorder) {
  init_logger();

  let recorder = Recorder::default();
  let mock = Mock {
    recorder: recorder.clone(),
    next_handle: 0,
  };

  (mock, recorder)
}

pub fn init_logger() {
  let _ = env_logger::builder().is_test(true).try_init();
}

impl Mock {
  fn new_handle(&mut self) -> Option<u32> {
    if *self.recorder.exhausted.borrow() {
      return None;
    }

    self.next_handle += 1;
    Some(self.next_handle)
  }
}

unsafe impl State for Mock {
  type Handle = u32;

  fn defaults(&self) -> Defaults {
    Defaults::gl().set_viewport(WINDOW).set_scissor(WINDOW)
  }

  unsafe fn apply_context(&mut self, value: &ContextValue<u32>) {
    self.recorder.record(Call::Context(value.clone()));
  }

  unsafe fn apply_framebuffer(&mut self, value: &FramebufferValue) {
    self.recorder.record(Call::Framebuffer(value.clone()));
  }

  unsafe fn bind(&mut self, target: BindTarget, handle: Option<&u32>) {
    self.recorder.record(Call::Bind(target, handle.copied()));
  }
}

unsafe impl Framebuffer for Mock {
  unsafe fn new_framebuffer(&mut self) -> Option<u32> {
    let handle = self.new_handle()?;
    self.recorder.record(Call::NewFramebuffer(handle));
    Some(handle)
  }

  unsafe fn destroy_framebuffer(&mut self, framebuffer: &u32) {
    self.recorder.record(Call::DestroyFramebuffer(*framebuffer));
  }

  unsafe fn clear(&mut self, mask: ClearMask) {
    self.recorder.record(Call::Clear(mask));
  }

  unsafe fn read_pixels_u8(&mut self, x: i32, y: i32, width: u32, height: u32, dst: &mut [u8]) {
    self.recorder.record(Call::ReadPixels(x, y, width, height));

    for byte in &mut dst[..(width * height * 4) as usize] {
      *byte = 0xab;
    }
  }

  unsafe fn attach_texture_2d(
    &mut self,
    attachment: FramebufferAttachment,
    target: TextureTarget,
    texture: &u32,
  ) {
    self
      .recorder
      .record(Call::AttachTexture2D(attachment, target, *texture));
  }

  unsafe fn attach_renderbuffer(&mut self, attachment: FramebufferAttachment, renderbuffer: &u32) {
    self
      .recorder
      .record(Call::AttachRenderbuffer(attachment, *renderbuffer));
  }

  unsafe fn framebuffer_status(&mut self) -> Result<(), IncompleteReason> {
    self.recorder.record(Call::Status);

    match *self.recorder.status.borrow() {
      Some(reason) => Err(reason),
      None => Ok(()),
    }
  }
}

unsafe impl Renderbuffer for Mock {
  unsafe fn new_renderbuffer(&mut self) -> Option<u32> {
    let handle = self.new_handle()?;
    self.recorder.record(Call::NewRenderbuffer(handle));
    Some(handle)
  }

  unsafe fn destroy_renderbuffer(&mut self, renderbuffer: &u32) {
    self.recorder.record(Call::DestroyRenderbuffer(*renderbuffer));
  }

  unsafe fn renderbuffer_storage(&mut self, format: RenderbufferFormat, width: u32, height: u32) {
    self
      .recorder
      .record(Call::RenderbufferStorage(format, width, height));
  }
}

unsafe impl Device for Mock {
  unsafe fn check(&mut self) -> Result<(), GraphicsError> {
    match self.recorder.errors.borrow_mut().pop_front() {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }

  unsafe fn flush(&mut self) {
    self.recorder.record(Call::Flush);
  }

  unsafe fn finish(&mut self) {
    self.recorder.record(Call::Finish);
  }
}
