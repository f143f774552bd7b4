//! Native errors.

use std::error;
use std::fmt;

/// Error reported by the GPU after the fact.
///
/// Those errors are never reported by the call that caused them: you have to ask for them with
/// [`Context::check`](crate::context::Context::check), or wrap your backend in
/// [`Checked`](crate::debug::Checked).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphicsError {
  /// Not enough memory left to execute a command.
  OutOfMemory,
  /// An enumeration argument is out of range.
  InvalidEnum,
  /// An operation is not allowed in the current state.
  InvalidOperation,
  /// The bound framebuffer is not complete.
  InvalidFramebufferOperation,
  /// A numeric argument is out of range.
  InvalidValue,
  /// Stack overflow.
  StackOverflow,
  /// Stack underflow.
  StackUnderflow,
  /// The context was lost.
  ContextLost,
  /// Unknown native error code.
  Unknown(u32),
}

impl fmt::Display for GraphicsError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      GraphicsError::OutOfMemory => f.write_str("out of memory"),
      GraphicsError::InvalidEnum => f.write_str("invalid enumeration"),
      GraphicsError::InvalidOperation => f.write_str("invalid operation"),
      GraphicsError::InvalidFramebufferOperation => f.write_str("invalid framebuffer operation"),
      GraphicsError::InvalidValue => f.write_str("invalid value"),
      GraphicsError::StackOverflow => f.write_str("stack overflow"),
      GraphicsError::StackUnderflow => f.write_str("stack underflow"),
      GraphicsError::ContextLost => f.write_str("context lost"),
      GraphicsError::Unknown(code) => write!(f, "unknown error (0x{:x})", code),
    }
  }
}

impl error::Error for GraphicsError {}
