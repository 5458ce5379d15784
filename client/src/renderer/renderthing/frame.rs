pub const PIXEL_BITS: usize = 4;

/// A mutable RGBA8888 view over a `width` by `height` pixel buffer.
pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> RenderFrame<'a> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BITS]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BITS)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BITS]> {
        let range = self.pixel_range(x, y)?;
        self.buffer.get_mut(range)?.try_into().ok()
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: [u8; PIXEL_BITS]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    pub fn fill(&mut self, color: [u8; PIXEL_BITS]) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn pixel_range(&self, x: u32, y: u32) -> Option<std::ops::Range<usize>> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BITS;
        Some(index..index + PIXEL_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_pixel_is_row_major() {
        let mut buffer = vec![0; 3 * 2 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 3,
            height: 2,
            buffer: &mut buffer,
        };

        frame.draw_pixel(1, 1, [1, 2, 3, 4]);

        assert_eq!(&buffer[16..20], &[1, 2, 3, 4]);
        assert!(buffer[..16].iter().all(|byte| *byte == 0));
    }

    #[test]
    fn out_of_range_pixels_are_ignored() {
        let mut buffer = vec![0; 2 * 2 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 2,
            height: 2,
            buffer: &mut buffer,
        };

        frame.draw_pixel(2, 0, [255; 4]);
        frame.draw_pixel(0, 2, [255; 4]);

        assert!(frame.pixel_mut(2, 0).is_none());
        assert!(buffer.iter().all(|byte| *byte == 0));
    }

    #[test]
    fn last_pixel_is_addressable() {
        let mut buffer = vec![0; 2 * 2 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 2,
            height: 2,
            buffer: &mut buffer,
        };

        frame.draw_pixel(1, 1, [9; 4]);

        assert_eq!(&buffer[12..16], &[9; 4]);
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut buffer = vec![0; 4 * 4 * PIXEL_BITS];
        let mut frame = RenderFrame {
            width: 4,
            height: 4,
            buffer: &mut buffer,
        };

        frame.fill([10, 10, 10, 255]);

        assert_eq!(buffer, [10u8, 10, 10, 255].repeat(16));
    }
}
