mod common;

use common::{mock, Call};
use gfxstate::debug::{CheckMode, Checked};
use gfxstate::enums::Feature;
use gfxstate::{ClearMask, Context, ContextValue, GraphicsError};

#[test]
fn checked_backend_forwards_calls() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(Checked::new(backend));
  let state = ctx.new_state(vec![ctx.enable(Feature::CullFace)]);

  ctx.load(Some(&state));
  ctx.back_buffer().clear(ClearMask::DEPTH);

  assert_eq!(
    rec.take(),
    vec![
      Call::Context(ContextValue::Capability(Feature::CullFace, true)),
      Call::Clear(ClearMask::DEPTH),
    ]
  );
}

#[test]
#[should_panic(expected = "invalid value")]
fn checked_backend_panics_on_error() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(Checked::new(backend));
  let state = ctx.new_state(vec![ctx.line_width(-1.)]);

  rec.push_error(GraphicsError::InvalidValue);
  ctx.load(Some(&state));
}

#[test]
fn checked_backend_can_only_log() {
  let (backend, rec) = mock();
  let checked = Checked::with_mode(backend, CheckMode::Log);
  assert_eq!(checked.mode(), CheckMode::Log);

  let mut ctx = Context::new(checked);
  let state = ctx.new_state(vec![ctx.line_width(-1.)]);

  rec.push_error(GraphicsError::InvalidValue);
  assert_eq!(ctx.load(Some(&state)), 1);
  assert_eq!(
    rec.take(),
    vec![Call::Context(ContextValue::LineWidth(-1.))]
  );

  // the error was consumed by the decorator
  assert_eq!(ctx.check(), Ok(()));
}

#[test]
fn unchecked_errors_are_reported_by_check() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);

  rec.push_error(GraphicsError::OutOfMemory);
  rec.push_error(GraphicsError::Unknown(0x0506));

  assert_eq!(ctx.check(), Err(GraphicsError::OutOfMemory));
  assert_eq!(ctx.check(), Err(GraphicsError::Unknown(0x0506)));
  assert_eq!(ctx.check(), Ok(()));
  assert_eq!(
    GraphicsError::Unknown(0x0506).to_string(),
    "unknown error (0x506)"
  );
}
