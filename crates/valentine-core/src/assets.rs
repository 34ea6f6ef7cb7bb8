use crate::error::AssetError;
use crate::font::Font;
use crate::scene::Texture;

/// Everything the scene builder needs from the network.
#[derive(Clone, Debug)]
pub struct Assets {
    pub font: Font,
    pub matcap: Texture,
}

impl Assets {
    /// Decodes raw fetched bytes: a typeface JSON document and a matcap image.
    pub fn from_bytes(font_json: &[u8], matcap_image: &[u8]) -> Result<Self, AssetError> {
        let font = Font::from_slice(font_json)?;
        let matcap = Texture::from_image_bytes(matcap_image)?;
        log::info!(
            "[assets] font '{}' ({} glyphs), matcap {}x{}",
            font.family_name,
            font.glyph_count(),
            matcap.width,
            matcap.height
        );
        Ok(Self { font, matcap })
    }
}
