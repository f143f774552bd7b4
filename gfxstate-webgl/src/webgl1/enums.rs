//! WebGL enumerations.

use gfxstate::enums::{
  BlendEquation, Facet, Feature, FramebufferAttachment, Orientation, RenderbufferFormat,
  TextureTarget,
};
use gfxstate::{EnumTable, EnumTableError};
use web_sys::WebGlRenderingContext as Gl;

pub(crate) fn enum_table() -> Result<EnumTable<u32>, EnumTableError> {
  EnumTable::builder()
    .put(Feature::Blend, Gl::BLEND)
    .put(Feature::DepthTest, Gl::DEPTH_TEST)
    .put(Feature::CullFace, Gl::CULL_FACE)
    .put(Feature::PolygonOffsetFill, Gl::POLYGON_OFFSET_FILL)
    .put(Feature::ScissorTest, Gl::SCISSOR_TEST)
    .put(Feature::StencilTest, Gl::STENCIL_TEST)
    .put(Feature::Dither, Gl::DITHER)
    .put(BlendEquation::FuncAdd, Gl::FUNC_ADD)
    .put(BlendEquation::FuncSubtract, Gl::FUNC_SUBTRACT)
    .put(BlendEquation::FuncReverseSubtract, Gl::FUNC_REVERSE_SUBTRACT)
    .put(Facet::Front, Gl::FRONT)
    .put(Facet::Back, Gl::BACK)
    .put(Facet::FrontAndBack, Gl::FRONT_AND_BACK)
    .put(Orientation::CCW, Gl::CCW)
    .put(Orientation::CW, Gl::CW)
    .put(FramebufferAttachment::ColorAttachment0, Gl::COLOR_ATTACHMENT0)
    .put(FramebufferAttachment::DepthAttachment, Gl::DEPTH_ATTACHMENT)
    .put(FramebufferAttachment::StencilAttachment, Gl::STENCIL_ATTACHMENT)
    .put(
      FramebufferAttachment::DepthStencilAttachment,
      Gl::DEPTH_STENCIL_ATTACHMENT,
    )
    .put(TextureTarget::Texture2D, Gl::TEXTURE_2D)
    .put(TextureTarget::CubeMapPositiveX, Gl::TEXTURE_CUBE_MAP_POSITIVE_X)
    .put(TextureTarget::CubeMapNegativeX, Gl::TEXTURE_CUBE_MAP_NEGATIVE_X)
    .put(TextureTarget::CubeMapPositiveY, Gl::TEXTURE_CUBE_MAP_POSITIVE_Y)
    .put(TextureTarget::CubeMapNegativeY, Gl::TEXTURE_CUBE_MAP_NEGATIVE_Y)
    .put(TextureTarget::CubeMapPositiveZ, Gl::TEXTURE_CUBE_MAP_POSITIVE_Z)
    .put(TextureTarget::CubeMapNegativeZ, Gl::TEXTURE_CUBE_MAP_NEGATIVE_Z)
    .put(RenderbufferFormat::RGBA4, Gl::RGBA4)
    .put(RenderbufferFormat::RGB565, Gl::RGB565)
    .put(RenderbufferFormat::RGB5A1, Gl::RGB5_A1)
    .put(RenderbufferFormat::DepthComponent16, Gl::DEPTH_COMPONENT16)
    .build()
}
