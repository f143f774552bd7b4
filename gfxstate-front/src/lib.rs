//! [gfxstate], but with a backend type picked at compile-time.
//!
//! This crate re-exports _aliases_ to the [gfxstate] types requiring a backend type variable
//! (typically written `B`), selecting the proper backend for the platform you target. Symbols that
//! don’t depend on a backend are re-exported as-is for convenience.
//!
//! If you are writing a library on top of [gfxstate], stick to the [gfxstate] crate and its
//! polymorphic types instead.
//!
//! # How to setup
//!
//! Add `gfxstate-front` as a direct dependency; the default features select a backend for the
//! target you compile for:
//!
//! ```ignore
//! [dependencies]
//! gfxstate-front = "…"
//! ```
//!
//! To restrict the set of backends, disable the default features and list the ones you want:
//!
//! ```ignore
//! [dependencies]
//! gfxstate-front = { version = "…", default-features = false, features = ["gl"] }
//! ```
//!
//! ## List of features
//!
//! - _Default_: `["autoselect"]`, which is `["gl", "webgl"]`.
//! - `"gl"`: OpenGL 2.x implementation, used on native targets.
//! - `"webgl"`: WebGL 1 implementation, used on `wasm32`.
//!
//! [gfxstate]: https://crates.io/crates/gfxstate

pub mod context;
pub mod framebuffer;
pub mod renderbuffer;

// re-export
pub use gfxstate::bind::BindTarget;
pub use gfxstate::debug;
pub use gfxstate::defaults::Defaults;
pub use gfxstate::enums;
pub use gfxstate::error::GraphicsError;
pub use gfxstate::state::{Descriptor, StateSet};

// select the backend type

#[cfg(all(not(target_arch = "wasm32"), feature = "gl"))]
pub type Backend = gfxstate_gl::GL2;

#[cfg(all(target_arch = "wasm32", feature = "webgl"))]
pub type Backend = gfxstate_webgl::WebGL1;
