//! Device backend.

use crate::error::GraphicsError;

pub unsafe trait Device {
  /// Fetch the oldest error the device recorded, if any.
  unsafe fn check(&mut self) -> Result<(), GraphicsError>;

  /// Force queued commands to execute in finite time.
  unsafe fn flush(&mut self);

  /// Block until every queued command has completed.
  unsafe fn finish(&mut self);
}
