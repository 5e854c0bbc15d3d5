use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use radiometry::color::Color;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("cannot access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed PPM: {message}")]
    Format { message: String },
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ImageError + '_ {
    move |source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// A fixed-size grid of colors, stored row by row starting from the top row.
///
/// Pixels are addressed with `y = 0` at the bottom, as the camera numbers them.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width as usize * height as usize],
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixels in storage order: top row first, left to right.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((self.height - 1 - y) as usize * self.width as usize + x as usize)
    }

    /// Writes are silently dropped outside the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Encodes the canvas as a plain-text (`P3`) PPM: header, then one `r g b` line per pixel.
    pub fn to_ppm(&self) -> String {
        let mut text = format!(
            "P3\n# rendered by cornell-rt\n{} {}\n255\n",
            self.width, self.height
        );
        for color in self.pixels.iter() {
            let [r, g, b] = color.to_u8();
            text.push_str(&format!("{} {} {}\n", r, g, b));
        }
        text
    }

    /// Decodes a plain-text PPM with any whitespace layout. Lines starting with `#` are comments.
    #[allow(dead_code)]
    pub fn from_ppm(text: &str) -> Result<Self, ImageError> {
        let format_error = |message: String| ImageError::Format { message };
        let mut values = text
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(|line| line.split_whitespace());

        match values.next() {
            Some("P3") => {}
            other => return Err(format_error(format!("expected P3 magic, got {:?}", other))),
        }
        let mut header = [0u32; 3];
        for field in header.iter_mut() {
            let value = values
                .next()
                .ok_or_else(|| format_error("truncated header".to_owned()))?;
            *field = value
                .parse()
                .map_err(|_| format_error(format!("bad header value '{}'", value)))?;
        }
        let [width, height, max_value] = header;
        if max_value != 255 {
            return Err(format_error(format!("unsupported max value {}", max_value)));
        }

        let channels = values
            .map(|v| {
                v.parse::<u8>()
                    .map_err(|_| format_error(format!("bad channel value '{}'", v)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let expected = width as usize * height as usize * 3;
        if channels.len() != expected {
            return Err(format_error(format!(
                "expected {} channel values, found {}",
                expected,
                channels.len()
            )));
        }
        let pixels = channels
            .chunks_exact(3)
            .map(|rgb| Color::rgb(rgb[0], rgb[1], rgb[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn write_ppm(&self, path: &Path) -> Result<(), ImageError> {
        let file = File::create(path).map_err(io_error(path))?;
        let mut w = BufWriter::new(file);
        w.write_all(self.to_ppm().as_bytes())
            .and_then(|_| w.flush())
            .map_err(io_error(path))
    }

    #[allow(dead_code)]
    pub fn read_ppm(path: &Path) -> Result<Self, ImageError> {
        let text = std::fs::read_to_string(path).map_err(io_error(path))?;
        Self::from_ppm(&text)
    }

    pub fn write_png(&self, path: &Path) -> Result<(), ImageError> {
        let file = File::create(path).map_err(io_error(path))?;
        let w = BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::RGB);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;

        let data = self
            .pixels
            .iter()
            .flat_map(|c| c.to_u8())
            .collect::<Vec<u8>>();
        writer.write_image_data(&data)?;
        Ok(())
    }

    /// Writes a PNG if the file extension is `png`, and a PPM otherwise.
    pub fn write(&self, path: &Path) -> Result<(), ImageError> {
        let is_png = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            self.write_png(path)
        } else {
            self.write_ppm(path)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_are_addressed_bottom_up() {
        let mut canvas = Canvas::new(3, 2);
        canvas.set_pixel(0, 0, Color::white());
        canvas.set_pixel(2, 1, Color::rgb(255, 0, 0));
        // Top row comes first in storage.
        assert_eq!(canvas.pixels()[3], Color::white());
        assert_eq!(canvas.pixels()[2], Color::rgb(255, 0, 0));
        assert_eq!(canvas.pixel(0, 0), Some(Color::white()));
        assert_eq!(canvas.pixel(3, 0), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn wide_canvases_index_past_u32() {
        // 70000 * 70000 overflows u32; only the last row is touched.
        let mut canvas = Canvas {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(canvas.index(69_999, 0), Some(70_000 * 70_000 - 1));
        assert_eq!(canvas.index(5, 69_999), Some(5));
        assert_eq!(canvas.index(70_000, 0), None);

        canvas = Canvas::new(70_000, 1);
        canvas.set_pixel(69_999, 0, Color::white());
        assert_eq!(canvas.pixel(69_999, 0), Some(Color::white()));
        assert_eq!(canvas.pixels().len(), 70_000);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut canvas = Canvas::new(2, 2);
        let before = canvas.clone();
        canvas.set_pixel(2, 0, Color::white());
        canvas.set_pixel(0, 7, Color::white());
        assert_eq!(canvas, before);
    }

    #[test]
    fn ppm_layout() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set_pixel(0, 0, Color::new(1.0, 0.5, 0.0));
        canvas.set_pixel(1, 0, Color::new(2.0, -1.0, 0.2));
        let text = canvas.to_ppm();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "P3");
        assert!(lines[1].starts_with('#'));
        assert_eq!(&lines[2..], &["2 1", "255", "255 128 0", "255 0 51"]);
    }

    #[test]
    fn ppm_text_reads_back() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(0, 1, Color::rgb(10, 20, 30));
        canvas.set_pixel(1, 0, Color::rgb(200, 100, 0));
        let decoded = Canvas::from_ppm(&canvas.to_ppm()).unwrap();
        assert_eq!(decoded.pixel(0, 1), Some(Color::rgb(10, 20, 30)));
        assert_eq!(decoded.pixel(1, 0), Some(Color::rgb(200, 100, 0)));
        assert_eq!(decoded.pixel(1, 1), Some(Color::black()));
    }

    #[test]
    fn malformed_ppm_is_rejected() {
        assert!(matches!(Canvas::from_ppm("P6\n1 1\n255\n0 0 0"), Err(ImageError::Format { .. })));
        assert!(matches!(Canvas::from_ppm("P3\n2 1\n255\n0 0 0\n"), Err(ImageError::Format { .. })));
        assert!(matches!(Canvas::from_ppm("P3\n1 1\n255\n0 0 300\n"), Err(ImageError::Format { .. })));
        assert!(matches!(Canvas::from_ppm("P3\n1 1\n65535\n0 0 0\n"), Err(ImageError::Format { .. })));
        assert!(Canvas::from_ppm("P3 1 1 255 1 2 3").is_ok());
    }

    #[test]
    fn files_are_written_by_extension() {
        let dir = std::env::temp_dir().join(format!("cornell-rt-image-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut canvas = Canvas::new(4, 3);
        canvas.set_pixel(1, 2, Color::rgb(9, 8, 7));

        let ppm = dir.join("out.ppm");
        canvas.write(&ppm).unwrap();
        assert_eq!(Canvas::read_ppm(&ppm).unwrap(), canvas);

        let png = dir.join("out.PNG");
        canvas.write(&png).unwrap();
        let bytes = std::fs::read(&png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        assert!(matches!(
            Canvas::read_ppm(&dir.join("missing.ppm")),
            Err(ImageError::Io { .. })
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
