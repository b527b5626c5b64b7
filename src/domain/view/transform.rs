// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/view/transform.rs
//
// Display-time transform: rotate, then scale.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use super::state::{Rotation, ViewState};
use crate::domain::document::Bitmap;

/// Compute the bitmap shown on screen for `page` under `view`.
///
/// Rotation is counter-clockwise and expands the canvas, so quarter turns
/// swap width and height. Scaling truncates to whole pixels and never goes
/// below 1x1.
#[must_use]
pub fn render(page: &Bitmap, view: &ViewState) -> DynamicImage {
    let rotated = rotate(page, view.rotation);
    scale(&rotated, view.zoom)
}

fn rotate(page: &Bitmap, rotation: Rotation) -> DynamicImage {
    match rotation {
        Rotation::None => page.clone(),
        Rotation::Rotate90 => page.rotate270(),
        Rotation::Rotate180 => page.rotate180(),
        Rotation::Rotate270 => page.rotate90(),
    }
}

fn scale(image: &DynamicImage, zoom: f32) -> DynamicImage {
    let (w, h) = image.dimensions();
    let (new_w, new_h) = scaled_size(w, h, zoom);
    if (new_w, new_h) == (w, h) {
        return image.clone();
    }
    image.resize_exact(new_w, new_h, FilterType::Triangle)
}

fn scaled_size(width: u32, height: u32, zoom: f32) -> (u32, u32) {
    let w = (width as f32 * zoom) as u32;
    let h = (height as f32 * zoom) as u32;
    (w.max(1), h.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn page(w: u32, h: u32) -> Bitmap {
        DynamicImage::new_rgb8(w, h)
    }

    fn view(rotation: Rotation, zoom: f32) -> ViewState {
        ViewState {
            page_index: 0,
            rotation,
            zoom,
        }
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        let out = render(&page(40, 100), &view(Rotation::Rotate90, 1.0));
        assert_eq!(out.dimensions(), (100, 40));

        let out = render(&page(40, 100), &view(Rotation::Rotate180, 1.0));
        assert_eq!(out.dimensions(), (40, 100));
    }

    #[test]
    fn zoom_scales_after_rotation() {
        let out = render(&page(40, 100), &view(Rotation::Rotate270, 0.5));
        assert_eq!(out.dimensions(), (50, 20));
    }

    #[test]
    fn scaling_truncates_and_keeps_one_pixel() {
        let out = render(&page(3, 1), &view(Rotation::None, 0.5));
        assert_eq!(out.dimensions(), (1, 1));

        let out = render(&page(15, 15), &view(Rotation::None, 1.5));
        assert_eq!(out.dimensions(), (22, 22));
    }

    #[test]
    fn rotation_is_counter_clockwise() {
        // Mark the top-right corner; a counter-clockwise quarter turn moves it
        // to the top-left.
        let mut img = RgbImage::new(4, 2);
        img.put_pixel(3, 0, Rgb([255, 0, 0]));
        let out = render(&DynamicImage::ImageRgb8(img), &view(Rotation::Rotate90, 1.0));

        assert_eq!(out.to_rgb8().get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn render_is_deterministic() {
        let mut img = RgbImage::new(9, 7);
        img.put_pixel(2, 5, Rgb([10, 200, 30]));
        let src = DynamicImage::ImageRgb8(img);
        let v = view(Rotation::Rotate90, 1.3);

        assert_eq!(render(&src, &v).as_bytes(), render(&src, &v).as_bytes());
    }
}
