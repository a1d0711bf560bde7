use crate::{
    foundation::error::{StrataError, StrataResult},
    foundation::math::unpremultiply,
    render::surface::Surface,
};

/// A presented image handed to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Frame {
    pub fn from_surface(surface: &Surface) -> Self {
        Self {
            width: surface.width(),
            height: surface.height(),
            data: surface.data().to_vec(),
        }
    }

    /// Straight-alpha image, ready for PNG encoding.
    pub fn to_rgba_image(&self) -> StrataResult<image::RgbaImage> {
        let data = self
            .data
            .chunks_exact(4)
            .flat_map(|px| unpremultiply([px[0], px[1], px[2], px[3]]))
            .collect();
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| StrataError::render("frame buffer size mismatch"))
    }

    pub fn save_png(&self, path: &std::path::Path) -> StrataResult<()> {
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| StrataError::render(format!("write png '{}': {e}", path.display())))
    }
}
