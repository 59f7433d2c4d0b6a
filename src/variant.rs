use image::{DynamicImage, ImageBuffer, Pixel, Primitive};

use crate::error::LogoError;

/// Complement every colour sample against its type's maximum, alpha untouched.
pub fn invert(img: &DynamicImage) -> DynamicImage {
    let mut inverted = img.clone();
    inverted.invert();
    inverted
}

/// Set every colour sample to its type's minimum, alpha untouched.
///
/// The range comes from the buffer's own sample type, so 16-bit and float
/// images stay in their mode. Modes without an alpha channel end up as a
/// filled black image of the same size.
pub fn blacken(img: &DynamicImage) -> Result<DynamicImage, LogoError> {
    macro_rules! blacken_all {
        ($($kind:ident),+ $(,)?) => {
            match img {
                $(DynamicImage::$kind(buf) => DynamicImage::$kind(blacken_buffer(buf)),)+
                other => return Err(LogoError::UnsupportedColor(other.color())),
            }
        };
    }

    let out = blacken_all!(
        ImageLuma8,
        ImageLumaA8,
        ImageRgb8,
        ImageRgba8,
        ImageLuma16,
        ImageLumaA16,
        ImageRgb16,
        ImageRgba16,
        ImageRgb32F,
        ImageRgba32F,
    );
    Ok(out)
}

fn blacken_buffer<P: Pixel>(
    buf: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut out = buf.clone();
    for px in out.pixels_mut() {
        px.apply_with_alpha(|_| <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE, |a| a);
    }
    out
}
