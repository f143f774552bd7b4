//! Abstract enumerations.
//!
//! Those types name GPU-side concepts (features, facets, attachment points…) independently of any
//! backend. Backends translate them into their own native codes through an
//! [`EnumTable`](crate::enum_table::EnumTable), which is validated for completeness when the
//! backend is created.

macro_rules! abstract_enum {
  (
    $(#[$meta:meta])*
    $name:ident {
      $( $(#[$variant_meta:meta])* $variant:ident ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum $name {
      $( $(#[$variant_meta])* $variant ),+
    }

    impl $name {
      /// Every variant, in declaration order.
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      /// Number of variants.
      pub const COUNT: usize = Self::ALL.len();
    }
  };
}

abstract_enum! {
  /// A capability that can be enabled or disabled.
  Feature {
    /// Blend computed fragment colors with the values already in the color buffer.
    Blend,
    /// Test fragments against the depth buffer.
    DepthTest,
    /// Cull polygons according to their facing.
    CullFace,
    /// Offset the depth values of polygon fragments.
    PolygonOffsetFill,
    /// Discard fragments outside of the scissor box.
    ScissorTest,
    /// Test fragments against the stencil buffer.
    StencilTest,
    /// Dither color components before writing them. The only feature enabled by default.
    Dither,
  }
}

abstract_enum! {
  /// Blend equation mode.
  BlendEquation {
    /// `src * srcK + dst * dstK`
    FuncAdd,
    /// `src * srcK - dst * dstK`
    FuncSubtract,
    /// `dst * dstK - src * srcK`
    FuncReverseSubtract,
  }
}

abstract_enum! {
  /// Polygon facet, used to select which polygons are candidates for culling.
  Facet {
    /// Front-facing polygons.
    Front,
    /// Back-facing polygons.
    Back,
    /// Both front and back-facing polygons.
    FrontAndBack,
  }
}

abstract_enum! {
  /// Winding order of front-facing polygons.
  Orientation {
    /// Counter-clockwise winding.
    CCW,
    /// Clockwise winding.
    CW,
  }
}

abstract_enum! {
  /// Framebuffer attachment point.
  FramebufferAttachment {
    /// First color attachment.
    ColorAttachment0,
    /// Depth attachment.
    DepthAttachment,
    /// Stencil attachment.
    StencilAttachment,
    /// Combined depth and stencil attachment.
    DepthStencilAttachment,
  }
}

abstract_enum! {
  /// Texture image target, used when attaching a texture image to a framebuffer.
  TextureTarget {
    /// A 2D texture.
    Texture2D,
    /// Positive X face of a cube map.
    CubeMapPositiveX,
    /// Negative X face of a cube map.
    CubeMapNegativeX,
    /// Positive Y face of a cube map.
    CubeMapPositiveY,
    /// Negative Y face of a cube map.
    CubeMapNegativeY,
    /// Positive Z face of a cube map.
    CubeMapPositiveZ,
    /// Negative Z face of a cube map.
    CubeMapNegativeZ,
  }
}

abstract_enum! {
  /// Renderbuffer storage format.
  RenderbufferFormat {
    /// 4 bits per channel RGBA.
    RGBA4,
    /// 5 bits red, 6 bits green, 5 bits blue.
    RGB565,
    /// 5 bits per RGB channel, 1 bit alpha.
    RGB5A1,
    /// 16-bit depth.
    DepthComponent16,
  }
}

const FEATURE: usize = 0;
const BLEND_EQUATION: usize = FEATURE + Feature::COUNT;
const FACET: usize = BLEND_EQUATION + BlendEquation::COUNT;
const ORIENTATION: usize = FACET + Facet::COUNT;
const ATTACHMENT: usize = ORIENTATION + Orientation::COUNT;
const TEXTURE_TARGET: usize = ATTACHMENT + FramebufferAttachment::COUNT;
const RENDERBUFFER_FORMAT: usize = TEXTURE_TARGET + TextureTarget::COUNT;

/// Any abstract enumeration a backend must be able to translate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Enum {
  Feature(Feature),
  BlendEquation(BlendEquation),
  Facet(Facet),
  Orientation(Orientation),
  FramebufferAttachment(FramebufferAttachment),
  TextureTarget(TextureTarget),
  RenderbufferFormat(RenderbufferFormat),
}

impl Enum {
  /// Number of abstract enumerations, all families included.
  pub const COUNT: usize = RENDERBUFFER_FORMAT + RenderbufferFormat::COUNT;

  /// Flat index of the enumeration, in `0..Enum::COUNT`.
  ///
  /// Families are laid out one after the other, so that indices range consecutively and can be
  /// used to address a flat lookup table.
  pub fn index(self) -> usize {
    match self {
      Enum::Feature(x) => FEATURE + x as usize,
      Enum::BlendEquation(x) => BLEND_EQUATION + x as usize,
      Enum::Facet(x) => FACET + x as usize,
      Enum::Orientation(x) => ORIENTATION + x as usize,
      Enum::FramebufferAttachment(x) => ATTACHMENT + x as usize,
      Enum::TextureTarget(x) => TEXTURE_TARGET + x as usize,
      Enum::RenderbufferFormat(x) => RENDERBUFFER_FORMAT + x as usize,
    }
  }

  /// Iterate over every abstract enumeration, in index order.
  pub fn all() -> impl Iterator<Item = Enum> {
    Feature::ALL
      .iter()
      .copied()
      .map(Enum::Feature)
      .chain(BlendEquation::ALL.iter().copied().map(Enum::BlendEquation))
      .chain(Facet::ALL.iter().copied().map(Enum::Facet))
      .chain(Orientation::ALL.iter().copied().map(Enum::Orientation))
      .chain(
        FramebufferAttachment::ALL
          .iter()
          .copied()
          .map(Enum::FramebufferAttachment),
      )
      .chain(TextureTarget::ALL.iter().copied().map(Enum::TextureTarget))
      .chain(
        RenderbufferFormat::ALL
          .iter()
          .copied()
          .map(Enum::RenderbufferFormat),
      )
  }
}

macro_rules! impl_from_enum {
  ($($family:ident),*) => {
    $(
      impl From<$family> for Enum {
        fn from(x: $family) -> Self {
          Enum::$family(x)
        }
      }
    )*
  }
}

impl_from_enum!(
  Feature,
  BlendEquation,
  Facet,
  Orientation,
  FramebufferAttachment,
  TextureTarget,
  RenderbufferFormat
);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn indices_are_consecutive() {
    for (i, e) in Enum::all().enumerate() {
      assert_eq!(e.index(), i, "{:?}", e);
    }

    assert_eq!(Enum::all().count(), Enum::COUNT);
  }

  #[test]
  fn family_offsets() {
    assert_eq!(Enum::from(Feature::Blend).index(), 0);
    assert_eq!(Enum::from(BlendEquation::FuncAdd).index(), Feature::COUNT);
    assert_eq!(
      Enum::from(RenderbufferFormat::DepthComponent16).index(),
      Enum::COUNT - 1
    );
  }
}
