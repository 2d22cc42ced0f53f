use std::path::Path;

use crate::error::Result;

/// An RGB color. Channels are not clamped; values above `1.0` are left for the presentation
/// layer to clip.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// A buffer of color data in row-major order, with `(0,0)` being the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<Color>,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0., 0., 0.)
    }

    pub fn is_black(&self) -> bool {
        self.r == 0. && self.g == 0. && self.b == 0.
    }

    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    pub fn to_u8(&self) -> [u8; 3] {
        let convert = |x: f32| (x * 255.0).min(255.0).max(0.0) as u8;
        [convert(self.r), convert(self.g), convert(self.b)]
    }

    /// Convert the [`Color`] to grayscale.
    pub fn to_grayscale(&self) -> f32 {
        0.3 * self.r + 0.59 * self.g + 0.11 * self.b
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Color;
    fn mul(self, rhs: f32) -> Self::Output {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl std::ops::Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Add for Color {
    type Output = Color;
    fn add(mut self, rhs: Color) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl std::iter::Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Self {
        iter.fold(Color::black(), |acc, c| acc + c)
    }
}

impl Canvas {
    /// Construct a new [`Canvas`] filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            buffer: vec![Color::black(); size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (self.width as usize) * y + x
    }

    /// Mutate a color in the [`Canvas`].
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Color {
        let ix = self.index(x, y);
        &mut self.buffer[ix]
    }

    /// Fetch a color in the [`Canvas`].
    pub fn get(&self, x: usize, y: usize) -> &Color {
        let ix = self.index(x, y);
        &self.buffer[ix]
    }

    /// All pixels, row-major, starting at the top-left.
    pub fn pixels(&self) -> &[Color] {
        &self.buffer
    }

    /// Mutable access to bands of `rows` full rows each, top to bottom. The last band may be
    /// shorter.
    pub(crate) fn bands_mut(&mut self, rows: usize) -> std::slice::ChunksMut<'_, Color> {
        let len = (self.width as usize * rows).max(1);
        self.buffer.chunks_mut(len)
    }

    /// Return an iterator to the rows of the image, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.buffer.chunks((self.width as usize).max(1))
    }

    /// Return raw image RGB8 data for the image.
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.buffer.len() * 3);

        for color in &self.buffer {
            data.extend_from_slice(&color.to_u8())
        }

        data
    }

    /// Write the [`Canvas`] to `path`, with the format chosen from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        image::save_buffer(
            path,
            &self.data(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }

    /// Return an ascii version of the [`Canvas`].
    pub fn to_ascii(&self) -> String {
        let mut buf = String::new();
        let palette = r#"$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\|()1{}[]?-_+~<>i!lI;:,"^`'. "#;
        let bytes = palette.as_bytes();
        let bound = (palette.len() - 1) as f32;

        for row in self.rows() {
            for col in row {
                let g = col.to_grayscale().clamp(0., 1.);
                let index = (g * bound) as usize;
                buf.push(bytes[index] as char);
            }
            buf.push('\n');
        }

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ops() {
        let c = Color::new(0.5, 1., 2.) * 2.;
        assert_eq!(Color::new(1., 2., 4.), c);
        assert_eq!(Color::new(2., 3., 5.), c + Color::white());
        assert_eq!(
            Color::new(1., 1., 1.),
            vec![Color::new(0.5, 0., 1.), Color::new(0.5, 1., 0.)]
                .into_iter()
                .sum()
        );
        assert!(Color::black().is_black());
    }

    #[test]
    fn test_to_u8_clips() {
        assert_eq!([255, 0, 127], Color::new(4., -1., 0.5).to_u8());
    }

    #[test]
    fn test_row_major() {
        let mut canvas = Canvas::new(3, 2);
        *canvas.get_mut(2, 0) = Color::white();
        *canvas.get_mut(0, 1) = Color::new(1., 0., 0.);

        assert_eq!(&Color::white(), &canvas.pixels()[2]);
        assert_eq!(&Color::new(1., 0., 0.), &canvas.pixels()[3]);

        let rows: Vec<_> = canvas.rows().collect();
        assert_eq!(2, rows.len());
        assert_eq!(Color::white(), rows[0][2]);

        let data = canvas.data();
        assert_eq!(3 * 3 * 2, data.len());
        assert_eq!(&[255, 255, 255], &data[6..9]);
    }

    #[test]
    fn test_bands() {
        let mut canvas = Canvas::new(2, 5);
        let bands: Vec<usize> = canvas.bands_mut(2).map(|band| band.len()).collect();
        assert_eq!(vec![4, 4, 2], bands);
    }

    #[test]
    fn test_to_ascii() {
        let mut canvas = Canvas::new(2, 2);
        *canvas.get_mut(1, 1) = Color::new(100., 100., 100.);
        assert_eq!("$$\n$ \n", canvas.to_ascii());
    }
}
