mod bitmap_glyphs;
pub mod fonts;
pub mod png_codec_image;
pub mod text_overlay_image;
