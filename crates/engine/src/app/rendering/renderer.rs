use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::content::{AssetKind, DecodedImage, ImageAsset};
use crate::world::{FrameStepper, Viewport};

use super::world_to_screen_px;

const CLEAR_COLOR: [u8; 4] = [20, 22, 28, 255];
const LOADING_CLEAR_COLOR: [u8; 4] = [12, 12, 16, 255];

pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
    map_image: Option<DecodedImage>,
    sprite_image: Option<DecodedImage>,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
            map_image: None,
            sprite_image: None,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    /// Keeps the decoded images the renderer draws. The collision source is
    /// never drawn.
    pub fn set_asset(&mut self, kind: AssetKind, asset: ImageAsset) {
        match kind {
            AssetKind::Map => self.map_image = asset.into_decoded(),
            AssetKind::Sprite => self.sprite_image = asset.into_decoded(),
            AssetKind::Collision => {}
        }
    }

    pub fn render_frame(&mut self, stepper: &FrameStepper) -> Result<(), Error> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }

        let viewport = self.viewport;
        let frame = self.pixels.frame_mut();
        let (Some(map), Some(sprite), true) =
            (&self.map_image, &self.sprite_image, stepper.is_ready())
        else {
            fill(frame, LOADING_CLEAR_COLOR);
            return self.pixels.render();
        };

        fill(frame, CLEAR_COLOR);
        let zoom = stepper.zoom();
        let camera = stepper.camera();
        let map_origin = world_to_screen_px(Default::default(), camera, zoom);
        draw_image_scaled(frame, viewport, map, map_origin, zoom);
        let actor_origin = world_to_screen_px(stepper.actor().position, camera, zoom);
        draw_image_scaled(frame, viewport, sprite, actor_origin, zoom);

        self.pixels.render()
    }
}

fn fill(frame: &mut [u8], color: [u8; 4]) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&color);
    }
}

fn normalized_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

fn scaled_dimensions(image: &DecodedImage, scale: f32) -> (u32, u32) {
    let width = (image.width as f32 * scale).round().max(1.0) as u32;
    let height = (image.height as f32 * scale).round().max(1.0) as u32;
    (width, height)
}

/// Nearest-neighbour blit with its top-left corner at `origin`. Fully
/// transparent texels are skipped; the destination is clipped to the frame.
fn draw_image_scaled(
    frame: &mut [u8],
    viewport: Viewport,
    image: &DecodedImage,
    origin: (i32, i32),
    scale: f32,
) {
    if image.width == 0 || image.height == 0 || viewport.width == 0 || viewport.height == 0 {
        return;
    }
    if image.rgba.len() < image.expected_rgba_len() {
        return;
    }
    let frame_width = viewport.width as usize;
    if frame.len() < frame_width * viewport.height as usize * 4 {
        return;
    }

    let scale = normalized_scale(scale);
    let inv_scale = scale.recip();
    let (scaled_w, scaled_h) = scaled_dimensions(image, scale);
    let (left, top) = origin;
    let right = left.saturating_add(scaled_w as i32);
    let bottom = top.saturating_add(scaled_h as i32);

    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = right.min(viewport.width as i32);
    let draw_bottom = bottom.min(viewport.height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let image_width = image.width as usize;
    for out_y in draw_top..draw_bottom {
        let src_y = (((out_y - top) as f32) * inv_scale).floor() as u32;
        let src_row_offset = src_y.min(image.height - 1) as usize * image_width * 4;
        let dst_row_offset = out_y as usize * frame_width * 4;

        for out_x in draw_left..draw_right {
            let src_x = (((out_x - left) as f32) * inv_scale).floor() as u32;
            let src_offset = src_row_offset + src_x.min(image.width - 1) as usize * 4;
            let alpha = image.rgba[src_offset + 3];
            if alpha == 0 {
                continue;
            }
            let dst_offset = dst_row_offset + out_x as usize * 4;
            frame[dst_offset..dst_offset + 3]
                .copy_from_slice(&image.rgba[src_offset..src_offset + 3]);
            frame[dst_offset + 3] = alpha;
        }
    }
}
