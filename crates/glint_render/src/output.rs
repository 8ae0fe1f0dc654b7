//! Image encoders: plain-text P3 and PNG.
//!
//! Both share one channel encoding: gamma correction (square root), a clamp
//! to [0, 0.999], then integer scaling by 256 into [0, 255].

use crate::{Color, Framebuffer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Gamma-correct and quantize one linear channel to [0, 255].
#[inline]
fn encode_channel(value: f64) -> u8 {
    let gamma = if value > 0.0 { value.sqrt() } else { 0.0 };
    (256.0 * gamma.clamp(0.0, 0.999)) as u8
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn encode_rgb(color: Color) -> [u8; 3] {
    [
        encode_channel(color.x),
        encode_channel(color.y),
        encode_channel(color.z),
    ]
}

/// Write the framebuffer as a plain P3 pixel matrix.
///
/// Header `P3`, then `<width> <height>`, then the maximum channel value
/// `255`, then one `r g b` line per pixel, top row to bottom, left to right.
pub fn write_ppm<W: Write>(frame: &Framebuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", frame.width, frame.height)?;
    writeln!(writer, "255")?;

    for color in &frame.pixels {
        let [r, g, b] = encode_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save the framebuffer as a P3 file.
pub fn save_ppm(frame: &Framebuffer, path: &Path) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(frame, &mut writer)?;
    writer.flush()
}

/// Save the framebuffer as a PNG through the `image` crate.
pub fn save_png(frame: &Framebuffer, path: &Path) -> Result<(), image::ImageError> {
    let mut img = image::RgbImage::new(frame.width as u32, frame.height as u32);

    for (i, color) in frame.pixels.iter().enumerate() {
        let x = (i % frame.width) as u32;
        let y = (i / frame.width) as u32;
        img.put_pixel(x, y, image::Rgb(encode_rgb(*color)));
    }

    img.save(path)
}
