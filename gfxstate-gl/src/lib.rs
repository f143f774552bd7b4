//! OpenGL backends.
//!
//! This crate exports [OpenGL](https://www.khronos.org/opengl/) backends for
//! [gfxstate](https://crates.io/crates/gfxstate). It can be used via two mechanisms:
//!
//! - Automatically selected for you by [gfxstate-front](https://crates.io/crates/gfxstate-front).
//! - Manually picked, by using the backend type of this crate, [`GL2`].
//!
//! The backend expects an OpenGL context to be current on the thread it’s created on, with its
//! function pointers loaded (see [`GL2::with_loader`]).

pub mod gl2;

pub use gl2::GL2;
