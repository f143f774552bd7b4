//! Framebuffers and their clear state.
//!
//! Every [`Framebuffer`] carries its own clear values (color, depth and stencil), expressed as a
//! [`FramebufferState`] and loaded with [`Framebuffer::load_state`]. Loading only records the
//! state: it is reconciled the next time the framebuffer is used, right before it gets bound, so
//! that clearing or reading back always sees the right values whatever other framebuffers did in
//! between.

use bitflags::bitflags;
use log::{debug, warn};
use std::cell::{RefCell, RefMut};
use std::error;
use std::fmt;
use std::rc::Rc;

use crate::backend::Backend;
use crate::bind::BindTarget;
use crate::context::{clamp_color, ClearOwner, Shared};
use crate::defaults::Defaults;
use crate::enums::{FramebufferAttachment, TextureTarget};
use crate::reconcile::Reconciler;
use crate::renderbuffer::Renderbuffer;
use crate::state::{Descriptor, Slot, StateSet};

/// Value of a clear state slot.
#[derive(Clone, Debug, PartialEq)]
pub enum FramebufferValue {
  /// Color the color buffer is cleared to, each channel in `[0, 1]`.
  ClearColor([f32; 4]),
  /// Value the depth buffer is cleared to, in `[0, 1]`.
  ClearDepth(f64),
  /// Value the stencil buffer is cleared to.
  ClearStencil(i32),
}

/// Clear state slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FramebufferKey {
  ClearColor,
  ClearDepth,
  ClearStencil,
}

impl Slot for FramebufferValue {
  type Key = FramebufferKey;

  fn key(&self) -> FramebufferKey {
    match *self {
      FramebufferValue::ClearColor(_) => FramebufferKey::ClearColor,
      FramebufferValue::ClearDepth(_) => FramebufferKey::ClearDepth,
      FramebufferValue::ClearStencil(_) => FramebufferKey::ClearStencil,
    }
  }
}

/// Clear state of a [`Framebuffer`].
pub type FramebufferState = StateSet<FramebufferValue>;

bitflags! {
  /// Buffers to clear.
  #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
  pub struct ClearMask: u8 {
    const COLOR = 1;
    const DEPTH = 1 << 1;
    const STENCIL = 1 << 2;
  }
}

/// Framebuffer error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FramebufferError {
  /// The framebuffer is incomplete.
  Incomplete(IncompleteReason),
  /// The backend couldn’t create a framebuffer.
  CannotCreate,
  /// The destination of a pixel readback is too small.
  PixelBufferTooSmall {
    /// Required size, in bytes.
    required: usize,
    /// Actual size, in bytes.
    len: usize,
  },
  /// The rectangle of a pixel readback is too large to be addressed.
  ReadbackTooLarge {
    width: u32,
    height: u32,
  },
}

impl fmt::Display for FramebufferError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      FramebufferError::Incomplete(ref e) => write!(f, "incomplete framebuffer: {}", e),

      FramebufferError::CannotCreate => f.write_str("cannot create framebuffer"),

      FramebufferError::PixelBufferTooSmall { required, len } => write!(
        f,
        "pixel buffer too small: {} bytes required, got {}",
        required, len
      ),

      FramebufferError::ReadbackTooLarge { width, height } => {
        write!(f, "readback too large: {}x{}", width, height)
      }
    }
  }
}

impl error::Error for FramebufferError {}

impl From<IncompleteReason> for FramebufferError {
  fn from(e: IncompleteReason) -> Self {
    FramebufferError::Incomplete(e)
  }
}

/// Reason a framebuffer is incomplete.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IncompleteReason {
  /// Undefined framebuffer.
  Undefined,
  /// An attachment is incomplete.
  IncompleteAttachment,
  /// No image is attached.
  MissingAttachment,
  /// Attached images have different dimensions.
  IncompleteDimensions,
  /// Incomplete draw buffer.
  IncompleteDrawBuffer,
  /// Incomplete read buffer.
  IncompleteReadBuffer,
  /// The combination of attachment formats is not supported.
  Unsupported,
  /// Incomplete multisample configuration.
  IncompleteMultisample,
}

impl fmt::Display for IncompleteReason {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      IncompleteReason::Undefined => f.write_str("undefined"),
      IncompleteReason::IncompleteAttachment => f.write_str("incomplete attachment"),
      IncompleteReason::MissingAttachment => f.write_str("missing attachment"),
      IncompleteReason::IncompleteDimensions => f.write_str("incomplete dimensions"),
      IncompleteReason::IncompleteDrawBuffer => f.write_str("incomplete draw buffer"),
      IncompleteReason::IncompleteReadBuffer => f.write_str("incomplete read buffer"),
      IncompleteReason::Unsupported => f.write_str("unsupported"),
      IncompleteReason::IncompleteMultisample => f.write_str("incomplete multisample"),
    }
  }
}

/// A framebuffer.
///
/// The back buffer, provided by the window system, is the framebuffer without handle. It can’t
/// get attachments, but has clear state like any other framebuffer.
pub struct Framebuffer<B>
where
  B: Backend,
{
  id: u64,
  handle: Option<B::Handle>,
  shared: Rc<RefCell<Shared<B>>>,
  clear: Reconciler<FramebufferValue>,
  loaded: FramebufferState,
  // every clear slot at its default value
  fallback: FramebufferState,
  defaults: Defaults,
}

impl<B> Framebuffer<B>
where
  B: Backend,
{
  pub(crate) fn new(
    shared: Rc<RefCell<Shared<B>>>,
    handle: Option<B::Handle>,
    defaults: &Defaults,
  ) -> Self {
    let id = shared.borrow_mut().next_id();
    let fallback = StateSet::new(vec![
      Descriptor::new(
        FramebufferValue::ClearColor(defaults.clear_color()),
        FramebufferValue::ClearColor(defaults.clear_color()),
      ),
      Descriptor::new(
        FramebufferValue::ClearDepth(defaults.clear_depth()),
        FramebufferValue::ClearDepth(defaults.clear_depth()),
      ),
      Descriptor::new(
        FramebufferValue::ClearStencil(defaults.clear_stencil()),
        FramebufferValue::ClearStencil(defaults.clear_stencil()),
      ),
    ]);

    Framebuffer {
      id,
      handle,
      shared,
      clear: Reconciler::new(),
      loaded: StateSet::empty(),
      fallback,
      defaults: defaults.clone(),
    }
  }

  /// Native handle, `None` for the back buffer.
  pub fn handle(&self) -> Option<&B::Handle> {
    self.handle.as_ref()
  }

  pub fn is_back_buffer(&self) -> bool {
    self.handle.is_none()
  }

  /// Gather descriptors into a clear state.
  pub fn new_state<I>(&self, descriptors: I) -> FramebufferState
  where
    I: IntoIterator<Item = Descriptor<FramebufferValue>>,
  {
    StateSet::new(descriptors)
  }

  /// Record the clear state to use from now on; `None` reverts every clear value to its default.
  ///
  /// Nothing is applied before the framebuffer is next used.
  pub fn load_state(&mut self, state: Option<&FramebufferState>) {
    self.loaded = state.cloned().unwrap_or_default();
  }

  /// Recorded clear state.
  pub fn state(&self) -> &FramebufferState {
    &self.loaded
  }

  pub fn clear_color(&self, color: [f32; 4]) -> Descriptor<FramebufferValue> {
    Descriptor::new(
      FramebufferValue::ClearColor(clamp_color(color, self.defaults.clear_color())),
      FramebufferValue::ClearColor(self.defaults.clear_color()),
    )
  }

  /// Clear depth, clamped to `[0, 1]`; NaN selects the default.
  pub fn clear_depth(&self, depth: f64) -> Descriptor<FramebufferValue> {
    let depth = if depth.is_nan() {
      self.defaults.clear_depth()
    } else {
      depth.clamp(0., 1.)
    };

    Descriptor::new(
      FramebufferValue::ClearDepth(depth),
      FramebufferValue::ClearDepth(self.defaults.clear_depth()),
    )
  }

  pub fn clear_stencil(&self, stencil: i32) -> Descriptor<FramebufferValue> {
    Descriptor::new(
      FramebufferValue::ClearStencil(stencil),
      FramebufferValue::ClearStencil(self.defaults.clear_stencil()),
    )
  }

  /// Reconcile the clear state, then bind the framebuffer.
  fn use_framebuffer(&mut self) -> RefMut<Shared<B>> {
    let mut shared = self.shared.borrow_mut();

    {
      let shared = &mut *shared;
      let resync = match shared.clear_owner {
        ClearOwner::Pristine => false,
        ClearOwner::Unknown => true,
        ClearOwner::Framebuffer(id) => id != self.id,
      };
      let backend = &mut shared.backend;
      let mut sink = |value: &FramebufferValue| unsafe { backend.apply_framebuffer(value) };

      if resync {
        // clear values were changed by someone else; force all of them
        debug!("re-synchronizing clear state of framebuffer {}", self.id);
        self.clear.invalidate();
        self.clear.load(Some(&self.loaded.or(&self.fallback)), &mut sink);
      } else {
        self.clear.load(Some(&self.loaded), &mut sink);
      }

      shared.clear_owner = ClearOwner::Framebuffer(self.id);
    }

    shared.bind(BindTarget::Framebuffer, self.handle.as_ref());
    shared
  }

  /// Clear the buffers selected by `mask` with the recorded clear values.
  pub fn clear(&mut self, mask: ClearMask) {
    let mut shared = self.use_framebuffer();
    unsafe { shared.backend.clear(mask) };
  }

  /// Read a rectangle of RGBA8 pixels.
  ///
  /// `dst` must hold at least `width * height * 4` bytes. `width` and `height` must fit in an
  /// `i32`.
  pub fn read_pixels_u8(
    &mut self,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    dst: &mut [u8],
  ) -> Result<(), FramebufferError> {
    let required =
      readback_size(width, height).ok_or(FramebufferError::ReadbackTooLarge { width, height })?;

    if dst.len() < required {
      return Err(FramebufferError::PixelBufferTooSmall {
        required,
        len: dst.len(),
      });
    }

    let mut shared = self.use_framebuffer();
    unsafe { shared.backend.read_pixels_u8(x, y, width, height, dst) };

    Ok(())
  }

  /// Attach a texture image.
  pub fn texture_2d(
    &mut self,
    attachment: FramebufferAttachment,
    target: TextureTarget,
    texture: &B::Handle,
  ) {
    let mut shared = self.use_framebuffer();
    unsafe { shared.backend.attach_texture_2d(attachment, target, texture) };
  }

  /// Attach a renderbuffer.
  pub fn renderbuffer(&mut self, attachment: FramebufferAttachment, renderbuffer: &Renderbuffer<B>) {
    let mut shared = self.use_framebuffer();
    unsafe {
      shared
        .backend
        .attach_renderbuffer(attachment, renderbuffer.handle())
    };
  }

  /// Check whether the framebuffer is complete.
  pub fn status(&mut self) -> Result<(), FramebufferError> {
    let mut shared = self.use_framebuffer();
    unsafe { shared.backend.framebuffer_status() }.map_err(FramebufferError::from)
  }

  /// Delete the framebuffer.
  ///
  /// The back buffer can’t be deleted; doing so only drops this value.
  pub fn delete(self) {
    if self.is_back_buffer() {
      warn!("the back buffer cannot be deleted");
    }
  }
}

// Size in bytes of an RGBA8 readback; native sizes are signed 32-bit.
fn readback_size(width: u32, height: u32) -> Option<usize> {
  if width > i32::MAX as u32 || height > i32::MAX as u32 {
    return None;
  }

  (width as usize)
    .checked_mul(height as usize)?
    .checked_mul(4)
}

impl<B> Drop for Framebuffer<B>
where
  B: Backend,
{
  fn drop(&mut self) {
    if let Some(ref handle) = self.handle {
      let mut shared = self.shared.borrow_mut();

      debug!("deleting framebuffer {:?}", handle);
      unsafe { shared.backend.destroy_framebuffer(handle) };
      shared.binds.forget(handle);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clear_mask_combines() {
    let mask = ClearMask::COLOR | ClearMask::DEPTH;

    assert!(mask.contains(ClearMask::DEPTH));
    assert!(!mask.contains(ClearMask::STENCIL));
    assert_eq!(ClearMask::all().bits(), 0b111);
  }

  #[test]
  fn error_display() {
    assert_eq!(
      FramebufferError::from(IncompleteReason::MissingAttachment).to_string(),
      "incomplete framebuffer: missing attachment"
    );
    assert_eq!(
      FramebufferError::PixelBufferTooSmall { required: 16, len: 4 }.to_string(),
      "pixel buffer too small: 16 bytes required, got 4"
    );
  }

  #[test]
  fn readback_size_limits() {
    assert_eq!(readback_size(2, 3), Some(24));
    assert_eq!(readback_size(0, u32::MAX), None);
    assert_eq!(readback_size(i32::MAX as u32 + 1, 1), None);
    assert_eq!(readback_size(u32::MAX, u32::MAX), None);
  }
}
