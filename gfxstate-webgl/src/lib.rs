//! WebGL backend for gfxstate.
//!
//! This crate provides a [gfxstate] backend for [WebGL], [`WebGL1`].
//!
//! [gfxstate]: https://crates.io/crates/gfxstate
//! [WebGL]: https://www.khronos.org/webgl

pub mod webgl1;

pub use webgl1::WebGL1;
