//! OpenGL enumerations.

use gfxstate::enums::{
  BlendEquation, Facet, Feature, FramebufferAttachment, Orientation, RenderbufferFormat,
  TextureTarget,
};
use gfxstate::{EnumTable, EnumTableError};
use gl::types::*;

pub(crate) fn enum_table() -> Result<EnumTable<GLenum>, EnumTableError> {
  EnumTable::builder()
    .put(Feature::Blend, gl::BLEND)
    .put(Feature::DepthTest, gl::DEPTH_TEST)
    .put(Feature::CullFace, gl::CULL_FACE)
    .put(Feature::PolygonOffsetFill, gl::POLYGON_OFFSET_FILL)
    .put(Feature::ScissorTest, gl::SCISSOR_TEST)
    .put(Feature::StencilTest, gl::STENCIL_TEST)
    .put(Feature::Dither, gl::DITHER)
    .put(BlendEquation::FuncAdd, gl::FUNC_ADD)
    .put(BlendEquation::FuncSubtract, gl::FUNC_SUBTRACT)
    .put(BlendEquation::FuncReverseSubtract, gl::FUNC_REVERSE_SUBTRACT)
    .put(Facet::Front, gl::FRONT)
    .put(Facet::Back, gl::BACK)
    .put(Facet::FrontAndBack, gl::FRONT_AND_BACK)
    .put(Orientation::CCW, gl::CCW)
    .put(Orientation::CW, gl::CW)
    .put(FramebufferAttachment::ColorAttachment0, gl::COLOR_ATTACHMENT0)
    .put(FramebufferAttachment::DepthAttachment, gl::DEPTH_ATTACHMENT)
    .put(FramebufferAttachment::StencilAttachment, gl::STENCIL_ATTACHMENT)
    .put(
      FramebufferAttachment::DepthStencilAttachment,
      gl::DEPTH_STENCIL_ATTACHMENT,
    )
    .put(TextureTarget::Texture2D, gl::TEXTURE_2D)
    .put(TextureTarget::CubeMapPositiveX, gl::TEXTURE_CUBE_MAP_POSITIVE_X)
    .put(TextureTarget::CubeMapNegativeX, gl::TEXTURE_CUBE_MAP_NEGATIVE_X)
    .put(TextureTarget::CubeMapPositiveY, gl::TEXTURE_CUBE_MAP_POSITIVE_Y)
    .put(TextureTarget::CubeMapNegativeY, gl::TEXTURE_CUBE_MAP_NEGATIVE_Y)
    .put(TextureTarget::CubeMapPositiveZ, gl::TEXTURE_CUBE_MAP_POSITIVE_Z)
    .put(TextureTarget::CubeMapNegativeZ, gl::TEXTURE_CUBE_MAP_NEGATIVE_Z)
    .put(RenderbufferFormat::RGBA4, gl::RGBA4)
    .put(RenderbufferFormat::RGB565, gl::RGB565)
    .put(RenderbufferFormat::RGB5A1, gl::RGB5_A1)
    .put(RenderbufferFormat::DepthComponent16, gl::DEPTH_COMPONENT16)
    .build()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn enum_table_is_complete() {
    let table = enum_table().unwrap();

    assert_eq!(table.get(Feature::DepthTest), gl::DEPTH_TEST);
    assert_eq!(table.get(Orientation::CW), gl::CW);
    assert_eq!(table.get(RenderbufferFormat::RGB5A1), gl::RGB5_A1);
  }
}
