use fast_image_resize::{
    images::{Image, ImageRef},
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer,
};
use image::RgbaImage;

use std::{num::NonZeroU32, ops::Deref};

/// Resample an RGBA frame to the given dimensions with a Lanczos3 convolution.
///
/// Shrinking keeps the dominant structure of the frame and enlarging interpolates
/// smoothly instead of repeating pixels. A frame that already has the requested
/// dimensions is returned as an unmodified copy.
#[must_use]
pub fn resize_img_rgba(
    frame: &RgbaImage,
    new_width: NonZeroU32,
    new_height: NonZeroU32,
) -> RgbaImage {
    let (new_width, new_height) = (new_width.get(), new_height.get());
    if frame.dimensions() == (new_width, new_height) {
        return frame.clone();
    }

    let src_ref = ImageRef::new(
        frame.width(),
        frame.height(),
        frame.deref(),
        PixelType::U8x4,
    )
    .expect("an RgbaImage buffer always holds width * height * 4 bytes");

    let mut dst_image = Image::new(new_width, new_height, PixelType::U8x4);

    let options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));

    let mut resizer = Resizer::new();
    resizer
        .resize(&src_ref, &mut dst_image, &options)
        .expect("source and destination are both U8x4");

    let ret = RgbaImage::from_raw(new_width, new_height, dst_image.into_vec())
        .expect("destination buffer was allocated with the requested dimensions");

    ret
}

#[cfg(test)]
mod test {
    use std::num::NonZeroU32;

    use image::{Rgba, RgbaImage};

    use super::resize_img_rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn nz(val: u32) -> NonZeroU32 {
        NonZeroU32::new(val).unwrap()
    }

    #[test]
    fn test_output_has_requested_dimensions() {
        let frame = RgbaImage::from_pixel(37, 81, WHITE);

        let shrunk = resize_img_rgba(&frame, nz(10), nz(10));
        assert_eq!(shrunk.dimensions(), (10, 10));

        let grown = resize_img_rgba(&shrunk, nz(100), nz(64));
        assert_eq!(grown.dimensions(), (100, 64));
    }

    #[test]
    fn test_flat_frame_stays_flat() {
        let frame = RgbaImage::from_pixel(100, 100, WHITE);
        let shrunk = resize_img_rgba(&frame, nz(10), nz(10));
        let round_trip = resize_img_rgba(&shrunk, nz(100), nz(100));

        //fixed point rounding in the convolution may shave a step off full white.
        assert!(round_trip
            .pixels()
            .all(|Rgba([r, g, b, _a])| *r >= 250 && *g >= 250 && *b >= 250));
    }

    #[test]
    fn test_same_size_is_a_copy() {
        let mut frame = RgbaImage::from_pixel(20, 20, WHITE);
        frame.put_pixel(3, 4, Rgba([0, 0, 0, 255]));
        frame.put_pixel(19, 0, Rgba([12, 200, 37, 255]));

        let resized = resize_img_rgba(&frame, nz(20), nz(20));
        assert_eq!(resized, frame);
    }

    #[test]
    fn test_shrinking_keeps_large_dark_region_darker_than_background() {
        let mut frame = RgbaImage::from_pixel(100, 100, WHITE);
        for x in 40..50 {
            for y in 40..50 {
                frame.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }

        let shrunk = resize_img_rgba(&frame, nz(10), nz(10));
        let Rgba([centre, ..]) = *shrunk.get_pixel(4, 4);
        let Rgba([corner, ..]) = *shrunk.get_pixel(0, 0);

        assert!(centre < 128);
        assert!(corner >= 250);
    }
}
