// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content bounding-box detection.
//
// A pixel is background when it is fully transparent (images with an alpha
// channel) or exactly matches the top-left pixel (images without one).

use image::{DynamicImage, ImageBuffer, Pixel, Primitive};
use trimwerk_core::BoundingBox;

/// Compute the smallest rectangle enclosing every non-background pixel.
///
/// Returns `None` when the whole image is background: entirely transparent,
/// or a single uniform colour for images without alpha.
///
/// Detection runs on the native sample type, so 16-bit and float images are
/// judged on their full-precision alpha rather than a rounded 8-bit copy.
pub fn content_bounds(image: &DynamicImage) -> Option<BoundingBox> {
    match image {
        DynamicImage::ImageLumaA8(buf) => bounds_by_alpha(buf),
        DynamicImage::ImageRgba8(buf) => bounds_by_alpha(buf),
        DynamicImage::ImageLumaA16(buf) => bounds_by_alpha(buf),
        DynamicImage::ImageRgba16(buf) => bounds_by_alpha(buf),
        DynamicImage::ImageRgba32F(buf) => bounds_by_alpha(buf),
        DynamicImage::ImageLuma8(buf) => bounds_by_border(buf),
        DynamicImage::ImageRgb8(buf) => bounds_by_border(buf),
        DynamicImage::ImageLuma16(buf) => bounds_by_border(buf),
        DynamicImage::ImageRgb16(buf) => bounds_by_border(buf),
        DynamicImage::ImageRgb32F(buf) => bounds_by_border(buf),
        other if other.color().has_alpha() => bounds_by_alpha(&other.to_rgba32f()),
        other => bounds_by_border(&other.to_rgb32f()),
    }
}

/// Background = alpha at the sample type's minimum (fully transparent).
fn bounds_by_alpha<P: Pixel>(buf: &ImageBuffer<P, Vec<P::Subpixel>>) -> Option<BoundingBox> {
    let alpha = usize::from(P::CHANNEL_COUNT) - 1;
    let transparent = <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE;
    scan(buf, |pixel| pixel.channels()[alpha] <= transparent)
}

/// Background = exact match with the top-left pixel.
fn bounds_by_border<P: Pixel>(buf: &ImageBuffer<P, Vec<P::Subpixel>>) -> Option<BoundingBox> {
    let background = *buf.get_pixel_checked(0, 0)?;
    scan(buf, |pixel| pixel.channels() == background.channels())
}

/// Single row-major pass tracking the extremes of non-background pixels.
fn scan<P, F>(buf: &ImageBuffer<P, Vec<P::Subpixel>>, is_background: F) -> Option<BoundingBox>
where
    P: Pixel,
    F: Fn(&P) -> bool,
{
    if buf.width() == 0 || buf.height() == 0 {
        return None;
    }

    // (left, top, right, bottom), right/bottom exclusive.
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (y, row) in (0u32..).zip(buf.rows()) {
        let mut first = None;
        let mut last = 0;
        for (x, pixel) in (0u32..).zip(row) {
            if !is_background(pixel) {
                first.get_or_insert(x);
                last = x;
            }
        }

        if let Some(first) = first {
            bounds = Some(match bounds {
                None => (first, y, last + 1, y + 1),
                Some((left, top, right, _)) => (left.min(first), top, right.max(last + 1), y + 1),
            });
        }
    }

    bounds.map(|(left, top, right, bottom)| BoundingBox::new(left, top, right, bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    fn is_background(image: &RgbaImage, x: u32, y: u32) -> bool {
        image.get_pixel(x, y)[3] == 0
    }

    /// 100x100 transparent canvas with an opaque red 20x30 block at (40, 50).
    fn red_block_canvas() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 0]));
        for y in 50..80 {
            for x in 40..60 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        img
    }

    #[test]
    fn finds_opaque_block_on_transparent_canvas() {
        let img = DynamicImage::ImageRgba8(red_block_canvas());
        let bbox = content_bounds(&img).expect("block should be found");
        assert_eq!(bbox, BoundingBox::new(40, 50, 60, 80));
        assert_eq!(bbox.width(), 20);
        assert_eq!(bbox.height(), 30);
    }

    #[test]
    fn fully_transparent_has_no_bbox() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 0])));
        assert_eq!(content_bounds(&img), None);
    }

    /// Colour channels of a transparent pixel don't make it content.
    #[test]
    fn transparent_colour_is_still_background() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 0]));
        img.put_pixel(3, 4, Rgba([12, 34, 56, 0]));
        img.put_pixel(7, 2, Rgba([0, 0, 0, 1]));
        let bbox = content_bounds(&DynamicImage::ImageRgba8(img));
        assert_eq!(bbox, Some(BoundingBox::new(7, 2, 8, 3)));
    }

    #[test]
    fn uniform_opaque_rgb_has_no_bbox() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 20, Rgb([200, 10, 10])));
        assert_eq!(content_bounds(&img), None);
    }

    #[test]
    fn rgb_trims_to_border_colour() {
        let mut img = RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]));
        img.put_pixel(5, 30, Rgb([0, 0, 0]));
        img.put_pixel(35, 8, Rgb([254, 255, 255]));
        let bbox = content_bounds(&DynamicImage::ImageRgb8(img));
        assert_eq!(bbox, Some(BoundingBox::new(5, 8, 36, 31)));
    }

    /// A black border on a grayscale image is background just like white.
    #[test]
    fn luma_with_black_border() {
        let mut img = image::GrayImage::from_pixel(16, 16, Luma([0u8]));
        img.put_pixel(8, 8, Luma([255u8]));
        let bbox = content_bounds(&DynamicImage::ImageLuma8(img));
        assert_eq!(bbox, Some(BoundingBox::new(8, 8, 9, 9)));
    }

    #[test]
    fn sixteen_bit_alpha_keeps_precision() {
        let mut img: ImageBuffer<Rgba<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(8, 8, Rgba([0, 0, 0, 0]));
        // Alpha of 1/65535 would round to zero in an 8-bit copy.
        img.put_pixel(2, 6, Rgba([0, 0, 0, 1]));
        let bbox = content_bounds(&DynamicImage::ImageRgba16(img));
        assert_eq!(bbox, Some(BoundingBox::new(2, 6, 3, 7)));
    }

    #[test]
    fn luma_alpha_uses_alpha_channel() {
        let mut img: ImageBuffer<LumaA<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(12, 12, LumaA([255, 0]));
        img.put_pixel(0, 11, LumaA([255, 128]));
        let bbox = content_bounds(&DynamicImage::ImageLumaA8(img));
        assert_eq!(bbox, Some(BoundingBox::new(0, 11, 1, 12)));
    }

    #[test]
    fn content_touching_every_edge_is_full() {
        let mut img = RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 0]));
        img.put_pixel(0, 2, Rgba([1, 1, 1, 255]));
        img.put_pixel(4, 2, Rgba([1, 1, 1, 255]));
        img.put_pixel(2, 0, Rgba([1, 1, 1, 255]));
        img.put_pixel(2, 4, Rgba([1, 1, 1, 255]));
        let bbox = content_bounds(&DynamicImage::ImageRgba8(img)).expect("content present");
        assert!(bbox.is_full((5, 5).into()));
    }

    /// Everything outside the box is background and every edge of the box
    /// touches content.
    #[test]
    fn bbox_is_tight_on_scattered_content() {
        let mut img = RgbaImage::from_pixel(64, 48, Rgba([0, 0, 0, 0]));
        for &(x, y) in &[(10, 20), (33, 5), (50, 40), (12, 30), (41, 22)] {
            img.put_pixel(x, y, Rgba([0, 128, 255, 200]));
        }
        let bbox = content_bounds(&DynamicImage::ImageRgba8(img.clone())).expect("content present");
        assert_eq!(bbox, BoundingBox::new(10, 5, 51, 41));

        for y in 0..img.height() {
            for x in 0..img.width() {
                if !bbox.contains(x, y) {
                    assert!(is_background(&img, x, y), "content outside bbox at ({x}, {y})");
                }
            }
        }

        let left = (bbox.top..bbox.bottom).any(|y| !is_background(&img, bbox.left, y));
        let right = (bbox.top..bbox.bottom).any(|y| !is_background(&img, bbox.right - 1, y));
        let top = (bbox.left..bbox.right).any(|x| !is_background(&img, x, bbox.top));
        let bottom = (bbox.left..bbox.right).any(|x| !is_background(&img, x, bbox.bottom - 1));
        assert!(left && right && top && bottom);
    }
}
