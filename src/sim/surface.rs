/// MAZECAST Project
/// `File` sim/surface.rs
/// `Description` Pixel surface module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use mazecast::math::Ext2su;

/// 0RGB pixel rectangle view
pub struct Surface<'a> {
    data: &'a mut [u32],
    width: usize,
    height: usize,
    stride: usize,
} // struct Surface

impl<'a> Surface<'a> {
    /// Surface create function
    /// * `data` - pixel data, row-major
    /// * `width` - surface width
    /// * `height` - surface height
    /// * `stride` - pixel count between neighbour row starts
    /// * Returns surface or None if data is too small
    pub fn new(data: &'a mut [u32], width: usize, height: usize, stride: usize) -> Option<Self> {
        if stride < width || (height > 0 && data.len() < stride * (height - 1) + width) {
            return None;
        }

        Some(Self { data, width, height, stride })
    } // fn new

    /// Extent getting function
    pub fn get_extent(&self) -> Ext2su {
        Ext2su {
            width: self.width,
            height: self.height,
        }
    } // fn get_extent

    /// Pixel getting function
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    } // fn get_pixel

    /// Whole surface filling function
    /// * `color` - color to fill with
    pub fn clear(&mut self, color: u32) {
        self.draw_bar(0, 0, self.width, self.height, color);
    } // fn clear

    /// Bar drawing function, bounds are clipped to the surface
    /// * `x0`, `y0` - top-left corner
    /// * `x1`, `y1` - bottom-right corner, exclusive
    /// * `color` - bar color
    pub fn draw_bar(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: u32) {
        let (x1, y1) = (x1.min(self.width), y1.min(self.height));
        if x0 >= x1 {
            return;
        }

        for y in y0..y1 {
            let row = y * self.stride;
            self.data[row + x0..row + x1].fill(color);
        }
    } // fn draw_bar
} // impl Surface

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_data() {
        let mut data = vec![0; 10];
        assert!(Surface::new(&mut data, 4, 3, 4).is_none());
        assert!(Surface::new(&mut data, 4, 3, 3).is_none());
        assert!(Surface::new(&mut data, 2, 3, 4).is_some());
    }

    #[test]
    fn bars_are_clipped() {
        let mut data = vec![0; 4 * 3];
        let mut surface = Surface::new(&mut data, 3, 3, 4).unwrap();
        surface.draw_bar(1, 1, 10, 10, 7);

        assert_eq!(surface.get_pixel(0, 0), Some(0));
        assert_eq!(surface.get_pixel(2, 2), Some(7));
        assert_eq!(surface.get_pixel(3, 0), None);
        // padding column stays untouched
        assert_eq!(data, [0, 0, 0, 0, 0, 7, 7, 0, 0, 7, 7, 0]);
    }
}

// file surface.rs
