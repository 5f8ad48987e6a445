//! Offline rendering of snapshot sequences to an animated GIF.
//!
//! Every `frequency`-th snapshot becomes one frame: bodies are drawn as
//! filled discs on a black square canvas, with universe coordinates
//! mapped by `canvas_width / universe.width` and the drawn radius
//! multiplied by the scenario's scaling factor so astronomical bodies
//! stay visible at canvas scale.

use std::fs::File;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};

use crate::simulation::states::Universe;

/// Rasterize every `frequency`-th snapshot into a frame.
pub fn animate_system(
    time_points: &[Universe],
    canvas_width: u32,
    frequency: usize,
    scaling_factor: f64,
) -> Vec<RgbaImage> {
    time_points
        .iter()
        .step_by(frequency.max(1))
        .map(|u| draw_universe(u, canvas_width, scaling_factor))
        .collect()
}

/// Draw one snapshot onto a fresh canvas.
fn draw_universe(universe: &Universe, canvas_width: u32, scaling_factor: f64) -> RgbaImage {
    let mut canvas =
        RgbaImage::from_pixel(canvas_width, canvas_width, Rgba([0, 0, 0, 255]));
    let scale = canvas_width as f64 / universe.width;

    for b in &universe.bodies {
        let cx = b.x.x * scale;
        // Image rows grow downward; universe y grows upward.
        let cy = (universe.width - b.x.y) * scale;
        let r = (b.radius * scaling_factor * scale).max(1.0);
        let pixel = Rgba([b.color.red, b.color.green, b.color.blue, 255]);
        draw_disc(&mut canvas, cx, cy, r, pixel);
    }
    canvas
}

/// Fill the disc of radius `r` around `(cx, cy)`, clipped to the canvas.
fn draw_disc(canvas: &mut RgbaImage, cx: f64, cy: f64, r: f64, pixel: Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    let x_min = (cx - r).floor().max(0.0) as i64;
    let x_max = (cx + r).ceil().min(w as f64 - 1.0) as i64;
    let y_min = (cy - r).floor().max(0.0) as i64;
    let y_max = (cy + r).ceil().min(h as f64 - 1.0) as i64;

    for py in y_min..=y_max {
        for px in x_min..=x_max {
            let dx = px as f64 - cx;
            let dy = py as f64 - cy;
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(px as u32, py as u32, pixel);
            }
        }
    }
}

/// Encode the frames as a looping GIF at `path`.
pub fn images_to_gif(frames: Vec<RgbaImage>, path: impl AsRef<Path>) -> image::ImageResult<()> {
    let file = File::create(path)?;
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite)?;

    for image in frames {
        let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(20, 1));
        encoder.encode_frame(frame)?;
    }
    Ok(())
}
