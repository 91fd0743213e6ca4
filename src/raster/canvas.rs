//! Square pixel buffer.

use crate::types::Colour;

/// A square RGBA pixel buffer, stored row-major.
///
/// Starts fully transparent. The rasterizer owns it while painting and hands
/// it out read-only when done.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![Colour::TRANSPARENT; size as usize * size as usize],
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }

    /// Flatten to RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba()).collect()
    }

    /// Flatten to RGB bytes, dropping alpha.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb()).collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(4);
        assert_eq!(canvas.pixels().len(), 16);
        assert!(canvas.pixels().iter().all(|&c| c == Colour::TRANSPARENT));
    }

    #[test]
    fn test_get_bounds() {
        let canvas = Canvas::new(2);
        assert_eq!(canvas.get(1, 1), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(2, 0), None);
        assert_eq!(canvas.get(0, 2), None);
    }

    #[test]
    fn test_byte_layouts() {
        let mut canvas = Canvas::new(1);
        canvas.pixels_mut()[0] = Colour::new(1, 2, 3, 4);
        assert_eq!(canvas.to_rgba_bytes(), vec![1, 2, 3, 4]);
        assert_eq!(canvas.to_rgb_bytes(), vec![1, 2, 3]);
    }
}
