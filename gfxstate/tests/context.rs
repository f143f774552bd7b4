mod common;

use common::{mock, Call, WINDOW};
use gfxstate::enums::{BlendEquation, Facet, Feature, Orientation};
use gfxstate::{BindTarget, Context, ContextOpt, ContextValue, Defaults};

#[test]
fn loading_twice_only_applies_once() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![
    ctx.enable(Feature::Blend),
    ctx.blend_equation(BlendEquation::FuncSubtract),
  ]);

  assert_eq!(ctx.load(Some(&state)), 2);
  assert_eq!(
    rec.take(),
    vec![
      Call::Context(ContextValue::Capability(Feature::Blend, true)),
      Call::Context(ContextValue::BlendEquation(BlendEquation::FuncSubtract)),
    ]
  );

  assert_eq!(ctx.load(Some(&state)), 0);
  assert!(rec.take().is_empty());
}

#[test]
fn loading_nothing_reverts_non_default_slots() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![
    ctx.depth_mask(false),
    ctx.front_face(Orientation::CCW),
    ctx.line_width(3.),
  ]);

  ctx.load(Some(&state));
  // front face was already at its default value
  assert_eq!(rec.take().len(), 3);

  assert_eq!(ctx.load(None), 2);
  assert_eq!(
    rec.take(),
    vec![
      Call::Context(ContextValue::DepthMask(true)),
      Call::Context(ContextValue::LineWidth(1.)),
    ]
  );
}

#[test]
fn only_differences_are_applied() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let first = ctx.new_state(vec![
    ctx.cull_face(Facet::Front),
    ctx.viewport([0, 0, 100, 100]),
  ]);
  let second = ctx.new_state(vec![
    ctx.cull_face(Facet::Front),
    ctx.viewport([0, 0, 200, 200]),
    ctx.scissor([10, 10, 20, 20]),
  ]);

  ctx.load(Some(&first));
  rec.take();

  assert_eq!(ctx.load(Some(&second)), 2);
  assert_eq!(
    rec.take(),
    vec![
      Call::Context(ContextValue::Viewport([0, 0, 200, 200])),
      Call::Context(ContextValue::Scissor([10, 10, 20, 20])),
    ]
  );
}

#[test]
fn unmentioned_slots_revert_to_backend_defaults() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![ctx.viewport([0, 0, 10, 10])]);

  ctx.load(Some(&state));
  rec.take();

  ctx.load(Some(&ctx.new_state(vec![])));
  assert_eq!(rec.take(), vec![Call::Context(ContextValue::Viewport(WINDOW))]);
}

#[test]
fn overridden_defaults() {
  let (backend, rec) = mock();
  let defaults = Defaults::gl().set_feature(Feature::Dither, false);
  let mut ctx = Context::with_opt(backend, ContextOpt::default().set_defaults(defaults));

  assert!(!ctx.defaults().feature(Feature::Dither));

  let state = ctx.new_state(vec![ctx.enable(Feature::Dither)]);
  ctx.load(Some(&state));
  ctx.load(None);

  assert_eq!(
    rec.take(),
    vec![
      Call::Context(ContextValue::Capability(Feature::Dither, true)),
      Call::Context(ContextValue::Capability(Feature::Dither, false)),
    ]
  );
}

#[test]
fn enabling_and_disabling_share_a_slot() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![
    ctx.enable(Feature::ScissorTest),
    ctx.disable(Feature::ScissorTest),
  ]);

  // the first descriptor shadows the second one
  assert_eq!(ctx.load(Some(&state)), 1);
  assert_eq!(
    rec.take(),
    vec![Call::Context(ContextValue::Capability(
      Feature::ScissorTest,
      true
    ))]
  );

  assert_eq!(ctx.load(None), 1);
  assert_eq!(
    rec.take(),
    vec![Call::Context(ContextValue::Capability(
      Feature::ScissorTest,
      false
    ))]
  );
}

#[test]
fn vertex_attrib_arrays_are_per_index() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![
    ctx.vertex_attrib_array(0, true),
    ctx.vertex_attrib_array(1, true),
  ]);

  ctx.load(Some(&state));
  rec.take();

  let state = ctx.new_state(vec![ctx.vertex_attrib_array(1, true)]);
  ctx.load(Some(&state));

  assert_eq!(
    rec.take(),
    vec![Call::Context(ContextValue::VertexAttribArray(0, false))]
  );
}

#[test]
fn blend_color_is_clamped() {
  let (backend, _) = mock();
  let ctx = Context::new(backend);

  assert_eq!(
    ctx.blend_color([2., -1., 0.5, 1.]).value(),
    &ContextValue::BlendColor([1., 0., 0.5, 1.])
  );
  assert!(ctx.color_mask([true; 4]).is_default());
}

#[test]
fn programs_go_through_the_bind_cache() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![ctx.use_program(Some(&3))]);

  ctx.load(Some(&state));
  assert_eq!(rec.take(), vec![Call::Bind(BindTarget::Program, Some(3))]);

  // already in use
  assert!(!ctx.bind(BindTarget::Program, Some(&3)));

  // someone else takes over the program binding
  assert!(ctx.bind(BindTarget::Program, Some(&4)));
  rec.take();

  ctx.load(Some(&state));
  assert_eq!(rec.take(), vec![Call::Bind(BindTarget::Program, Some(3))]);

  ctx.load(None);
  assert_eq!(rec.take(), vec![Call::Bind(BindTarget::Program, None)]);
}

#[test]
fn direct_program_binds_outlive_states_without_a_program() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);

  assert!(ctx.bind(BindTarget::Program, Some(&5)));
  rec.take();

  assert_eq!(ctx.load(None), 0);
  assert!(rec.take().is_empty());

  // still in use
  assert!(!ctx.bind(BindTarget::Program, Some(&5)));
}

#[test]
fn nan_line_width_stays_idempotent() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let default_width = ctx.defaults().line_width();

  assert!(ctx.line_width(f32::NAN).is_default());

  let state = ctx.new_state(vec![ctx.line_width(f32::NAN)]);
  assert_eq!(ctx.load(Some(&state)), 1);
  assert_eq!(
    rec.take(),
    vec![Call::Context(ContextValue::LineWidth(default_width))]
  );

  // equal, but not the same set
  let state = ctx.new_state(vec![ctx.line_width(f32::NAN)]);
  assert_eq!(ctx.load(Some(&state)), 0);
  assert!(rec.take().is_empty());
}

#[test]
fn binding_the_same_object_twice() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);

  assert!(ctx.bind(BindTarget::ArrayBuffer, Some(&7)));
  assert!(!ctx.bind(BindTarget::ArrayBuffer, Some(&7)));
  assert_eq!(rec.take(), vec![Call::Bind(BindTarget::ArrayBuffer, Some(7))]);

  assert!(ctx.bind(BindTarget::ArrayBuffer, Some(&8)));
  assert!(ctx.bind(BindTarget::ArrayBuffer, Some(&7)));
  assert_eq!(rec.take().len(), 2);
}

#[test]
fn disabled_bind_caching_always_binds() {
  let (backend, rec) = mock();
  let mut ctx = Context::with_opt(backend, ContextOpt::default().set_bind_caching(false));

  assert!(ctx.bind(BindTarget::ElementArrayBuffer, Some(&1)));
  assert!(ctx.bind(BindTarget::ElementArrayBuffer, Some(&1)));
  assert_eq!(
    rec.take(),
    vec![
      Call::Bind(BindTarget::ElementArrayBuffer, Some(1)),
      Call::Bind(BindTarget::ElementArrayBuffer, Some(1)),
    ]
  );
}

#[test]
fn invalidation_reapplies_everything() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);
  let state = ctx.new_state(vec![ctx.depth_mask(true), ctx.enable(Feature::DepthTest)]);

  ctx.load(Some(&state));
  ctx.bind(BindTarget::Renderbuffer, Some(&2));
  rec.take();

  ctx.invalidate();

  assert_eq!(ctx.load(Some(&state)), 2);
  assert!(ctx.bind(BindTarget::Renderbuffer, Some(&2)));
  assert_eq!(
    rec.take(),
    vec![
      Call::Context(ContextValue::DepthMask(true)),
      Call::Context(ContextValue::Capability(Feature::DepthTest, true)),
      Call::Bind(BindTarget::Renderbuffer, Some(2)),
    ]
  );
}

#[test]
fn flush_and_finish() {
  let (backend, rec) = mock();
  let mut ctx = Context::new(backend);

  ctx.flush();
  ctx.finish();

  assert_eq!(rec.take(), vec![Call::Flush, Call::Finish]);
  assert_eq!(ctx.check(), Ok(()));
}
