//! Fixed-length pixel buffer
//!
//! The strip length is a const generic, so the buffer is sized once at
//! compile time and can never be resized.

use core::ops::{Index, IndexMut};

use crate::color::{BLACK, Rgb};

/// Ordered sequence of `N` color triples, one per LED
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create an all-black buffer
    pub const fn new() -> Self {
        const { assert!(N > 0, "strip must have at least one pixel") };
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels on the strip
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false, a strip has at least one pixel
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Borrow the raw frame for writing to hardware
    pub const fn as_array(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Rgb> {
        self.pixels.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Rgb> {
        self.pixels.iter_mut()
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Index<usize> for PixelBuffer<N> {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.pixels[index]
    }
}

impl<const N: usize> IndexMut<usize> for PixelBuffer<N> {
    fn index_mut(&mut self, index: usize) -> &mut Rgb {
        &mut self.pixels[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a PixelBuffer<N> {
    type Item = &'a Rgb;
    type IntoIter = core::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black() {
        let buffer = PixelBuffer::<4>::new();
        assert!(buffer.iter().all(|p| *p == BLACK));
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn fill_then_clear() {
        let mut buffer = PixelBuffer::<3>::new();
        buffer.fill(Rgb::new(1, 2, 3));
        assert!(buffer.iter().all(|p| *p == Rgb::new(1, 2, 3)));
        buffer.clear();
        assert_eq!(buffer, PixelBuffer::<3>::default());
    }

    #[test]
    fn index_writes_single_pixel() {
        let mut buffer = PixelBuffer::<3>::new();
        buffer[1] = Rgb::new(9, 9, 9);
        assert_eq!(buffer.as_array(), &[BLACK, Rgb::new(9, 9, 9), BLACK]);
    }
}
