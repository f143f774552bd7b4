//! Default value table.
//!
//! Reconciliation reverts every slot a state set doesn’t mention to its default value. Those
//! defaults are not hardcoded in the core: a backend supplies them (typically starting from
//! [`Defaults::gl`] and patching what it can query from the live context, such as the initial
//! viewport), and users may override them with [`ContextOpt`](crate::context::ContextOpt).

use crate::enums::{BlendEquation, Facet, Feature, Orientation};

/// Startup value of every reconciled slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Defaults {
  blend_color: [f32; 4],
  blend_equation: BlendEquation,
  depth_mask: bool,
  viewport: [i32; 4],
  scissor: [i32; 4],
  line_width: f32,
  color_mask: [bool; 4],
  cull_face: Facet,
  front_face: Orientation,
  features: [bool; Feature::COUNT],
  vertex_attrib_array: bool,
  clear_color: [f32; 4],
  clear_depth: f64,
  clear_stencil: i32,
}

impl Default for Defaults {
  fn default() -> Self {
    Self::gl()
  }
}

impl Defaults {
  /// The documented OpenGL defaults.
  ///
  /// - `blend_color`: `[0, 0, 0, 0]`.
  /// - `blend_equation`: [`BlendEquation::FuncAdd`].
  /// - `depth_mask`: `true`.
  /// - `viewport` and `scissor`: `[0, 0, 0, 0]`; the real values are the size of the window the
  ///   context was first attached to, so backends should override them.
  /// - `line_width`: `1`.
  /// - `color_mask`: `[true, true, true, true]`.
  /// - `cull_face`: [`Facet::Back`].
  /// - `front_face`: [`Orientation::CCW`].
  /// - features: all disabled but [`Feature::Dither`].
  /// - vertex attribute arrays: disabled.
  /// - `clear_color`: `[0, 0, 0, 0]`.
  /// - `clear_depth`: `1`.
  /// - `clear_stencil`: `0`.
  pub fn gl() -> Self {
    let mut features = [false; Feature::COUNT];
    features[Feature::Dither as usize] = true;

    Defaults {
      blend_color: [0., 0., 0., 0.],
      blend_equation: BlendEquation::FuncAdd,
      depth_mask: true,
      viewport: [0, 0, 0, 0],
      scissor: [0, 0, 0, 0],
      line_width: 1.,
      color_mask: [true, true, true, true],
      cull_face: Facet::Back,
      front_face: Orientation::CCW,
      features,
      vertex_attrib_array: false,
      clear_color: [0., 0., 0., 0.],
      clear_depth: 1.,
      clear_stencil: 0,
    }
  }

  #[inline]
  pub fn set_blend_color(self, blend_color: [f32; 4]) -> Self {
    Defaults {
      blend_color,
      ..self
    }
  }

  #[inline]
  pub fn blend_color(&self) -> [f32; 4] {
    self.blend_color
  }

  #[inline]
  pub fn set_blend_equation(self, blend_equation: BlendEquation) -> Self {
    Defaults {
      blend_equation,
      ..self
    }
  }

  #[inline]
  pub fn blend_equation(&self) -> BlendEquation {
    self.blend_equation
  }

  #[inline]
  pub fn set_depth_mask(self, depth_mask: bool) -> Self {
    Defaults { depth_mask, ..self }
  }

  #[inline]
  pub fn depth_mask(&self) -> bool {
    self.depth_mask
  }

  /// Set the default viewport, as `[x, y, width, height]`.
  #[inline]
  pub fn set_viewport(self, viewport: [i32; 4]) -> Self {
    Defaults { viewport, ..self }
  }

  #[inline]
  pub fn viewport(&self) -> [i32; 4] {
    self.viewport
  }

  /// Set the default scissor box, as `[x, y, width, height]`.
  #[inline]
  pub fn set_scissor(self, scissor: [i32; 4]) -> Self {
    Defaults { scissor, ..self }
  }

  #[inline]
  pub fn scissor(&self) -> [i32; 4] {
    self.scissor
  }

  #[inline]
  pub fn set_line_width(self, line_width: f32) -> Self {
    Defaults { line_width, ..self }
  }

  #[inline]
  pub fn line_width(&self) -> f32 {
    self.line_width
  }

  #[inline]
  pub fn set_color_mask(self, color_mask: [bool; 4]) -> Self {
    Defaults { color_mask, ..self }
  }

  #[inline]
  pub fn color_mask(&self) -> [bool; 4] {
    self.color_mask
  }

  #[inline]
  pub fn set_cull_face(self, cull_face: Facet) -> Self {
    Defaults { cull_face, ..self }
  }

  #[inline]
  pub fn cull_face(&self) -> Facet {
    self.cull_face
  }

  #[inline]
  pub fn set_front_face(self, front_face: Orientation) -> Self {
    Defaults { front_face, ..self }
  }

  #[inline]
  pub fn front_face(&self) -> Orientation {
    self.front_face
  }

  /// Set whether a feature is enabled at startup.
  #[inline]
  pub fn set_feature(mut self, feature: Feature, enabled: bool) -> Self {
    self.features[feature as usize] = enabled;
    self
  }

  /// Whether a feature is enabled at startup.
  #[inline]
  pub fn feature(&self, feature: Feature) -> bool {
    self.features[feature as usize]
  }

  #[inline]
  pub fn set_vertex_attrib_array(self, vertex_attrib_array: bool) -> Self {
    Defaults {
      vertex_attrib_array,
      ..self
    }
  }

  /// Whether vertex attribute arrays are enabled at startup. This holds for every index.
  #[inline]
  pub fn vertex_attrib_array(&self) -> bool {
    self.vertex_attrib_array
  }

  #[inline]
  pub fn set_clear_color(self, clear_color: [f32; 4]) -> Self {
    Defaults {
      clear_color,
      ..self
    }
  }

  #[inline]
  pub fn clear_color(&self) -> [f32; 4] {
    self.clear_color
  }

  #[inline]
  pub fn set_clear_depth(self, clear_depth: f64) -> Self {
    Defaults {
      clear_depth,
      ..self
    }
  }

  #[inline]
  pub fn clear_depth(&self) -> f64 {
    self.clear_depth
  }

  #[inline]
  pub fn set_clear_stencil(self, clear_stencil: i32) -> Self {
    Defaults {
      clear_stencil,
      ..self
    }
  }

  #[inline]
  pub fn clear_stencil(&self) -> i32 {
    self.clear_stencil
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_dither_is_enabled_by_default() {
    let defaults = Defaults::gl();

    for &feature in Feature::ALL {
      assert_eq!(defaults.feature(feature), feature == Feature::Dither);
    }
  }

  #[test]
  fn setters_only_touch_their_field() {
    let defaults = Defaults::gl()
      .set_viewport([0, 0, 800, 600])
      .set_feature(Feature::Dither, false);

    assert_eq!(defaults.viewport(), [0, 0, 800, 600]);
    assert_eq!(defaults.scissor(), [0, 0, 0, 0]);
    assert!(!defaults.feature(Feature::Dither));
    assert_eq!(defaults.clear_depth(), 1.);
  }
}
