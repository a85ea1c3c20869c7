// src/renderer.rs
use eframe::egui::{self, Color32, ColorImage, Rect, TextureHandle, TextureOptions};

use crate::picture::Picture;

/// Paints a [`Picture`] onto the canvas.
///
/// The picture is uploaded as a texture with nearest-neighbor sampling, so
/// each cell becomes a crisp square. The upload is skipped while the picture
/// shares its pixel buffer with the last one shown.
pub struct Renderer {
    ctx: egui::Context,
    texture: Option<(Picture, TextureHandle)>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .finish()
    }
}

impl Renderer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            texture: None,
        }
    }

    /// On-screen size of `picture` at `cell_scale` pixels per cell
    pub fn canvas_size(picture: &Picture, cell_scale: f32) -> egui::Vec2 {
        egui::vec2(
            picture.width() as f32 * cell_scale,
            picture.height() as f32 * cell_scale,
        )
    }

    /// Draw `picture` stretched over `rect`
    pub fn render(&mut self, painter: &egui::Painter, rect: Rect, picture: &Picture) {
        let stale = self
            .texture
            .as_ref()
            .is_none_or(|(shown, _)| !shown.same_buffer(picture));

        if stale {
            let image = color_image(picture);
            match &mut self.texture {
                Some((shown, handle)) if handle.size() == image.size => {
                    handle.set(image, TextureOptions::NEAREST);
                    *shown = picture.clone();
                }
                _ => {
                    let handle = self.ctx.load_texture("picture", image, TextureOptions::NEAREST);
                    self.texture = Some((picture.clone(), handle));
                }
            }
        }

        if let Some((_, handle)) = &self.texture {
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(handle.id(), rect, uv, Color32::WHITE);
        }
    }
}

/// Convert a picture to an egui image, one pixel per cell
pub fn color_image(picture: &Picture) -> ColorImage {
    let rgb: Vec<u8> = picture
        .pixels()
        .iter()
        .flat_map(|color| color.to_array())
        .collect();
    ColorImage::from_rgb([picture.width(), picture.height()], &rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::picture::Edit;

    #[test]
    fn test_color_image_matches_picture() {
        let picture = Picture::empty(3, 2, Color::WHITE)
            .unwrap()
            .draw(&[Edit::new(2, 1, Color::rgb(10, 20, 30))]);
        let image = color_image(&picture);

        assert_eq!(image.size, [3, 2]);
        assert_eq!(image.pixels[0], Color32::WHITE);
        assert_eq!(image.pixels[5], Color32::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_render_reuses_texture_for_same_picture() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new(&ctx);
        let picture = Picture::empty(4, 4, Color::BLACK).unwrap();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), Renderer::canvas_size(&picture, 10.0));
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        renderer.render(&painter, rect, &picture);
        let first = renderer.texture.as_ref().map(|(_, handle)| handle.id());
        renderer.render(&painter, rect, &picture.clone());
        let second = renderer.texture.as_ref().map(|(_, handle)| handle.id());

        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
