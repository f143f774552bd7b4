//! # Declarative render state for GL-like contexts
//!
//! gfxstate lets you describe the state the GPU must be in, instead of issuing the state-change
//! calls yourself. You gather _descriptors_ (enable blending, set the viewport, clear to red…) into
//! immutable, comparable _state sets_, and ask for them to be loaded. gfxstate then computes the
//! minimal set of native calls required to go from the current state to the new one:
//!
//! - Slots the new state doesn’t mention revert to their default values.
//! - Slots already holding the right value are left alone.
//! - Loading the same state twice in a row doesn’t issue anything the second time.
//!
//! That mechanism is used twice:
//!
//! - The [`Context`] reconciles the global pipeline state (blending, culling, viewport, scissor,
//!   program in use…). See [`Context::load`].
//! - Every [`Framebuffer`] reconciles its clear state (clear color, depth and stencil) right
//!   before it is used to clear, read back or attach images.
//!
//! Object binds go through a cheaper sibling, the [`BindCache`], which skips binding an object
//! that is already bound.
//!
//! # Backends
//!
//! The core doesn’t issue native calls by itself: it decides whether a call is needed and with
//! which value, and forwards it to a backend implementing the [`backend`] traits. Backends live
//! in their own crates:
//!
//! - [gfxstate-gl], for OpenGL 2.x.
//! - [gfxstate-webgl], for WebGL 1.
//!
//! [gfxstate-front] selects the right one for the compilation target.
//!
//! Every backend can be wrapped in [`Checked`](debug::Checked) to look for native errors after
//! every call.
//!
//! # Logging
//!
//! gfxstate logs through the [log] facade. Every applied slot value and every native bind is
//! traced, which can be quite verbose.
//!
//! [gfxstate-gl]: https://crates.io/crates/gfxstate-gl
//! [gfxstate-webgl]: https://crates.io/crates/gfxstate-webgl
//! [gfxstate-front]: https://crates.io/crates/gfxstate-front
//! [log]: https://crates.io/crates/log

pub mod backend;
pub mod bind;
mod cache;
pub mod context;
pub mod debug;
pub mod defaults;
pub mod enum_table;
pub mod enums;
pub mod error;
pub mod framebuffer;
pub mod reconcile;
pub mod renderbuffer;
pub mod state;

pub use crate::bind::{BindCache, BindTarget};
pub use crate::cache::Bind;
pub use crate::context::{
  Context, ContextDescriptor, ContextKey, ContextOpt, ContextState, ContextValue,
};
pub use crate::defaults::Defaults;
pub use crate::enum_table::{EnumTable, EnumTableError};
pub use crate::error::GraphicsError;
pub use crate::framebuffer::{
  ClearMask, Framebuffer, FramebufferError, FramebufferKey, FramebufferState, FramebufferValue,
  IncompleteReason,
};
pub use crate::reconcile::{Apply, Reconciler};
pub use crate::renderbuffer::{Renderbuffer, RenderbufferError};
pub use crate::state::{Descriptor, Slot, StateSet};
