use crate::game::{Paint, PixelRect, Point, Surface};

/// In-memory framebuffer the territory draws on.
///
/// Every pixel holds the [`Paint`] last written to it. The terminal renderer
/// samples it to show the game.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Paint>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Paint::Ground; width as usize * height as usize],
        }
    }

    /// The paint at `point`, or `None` outside the canvas
    pub fn pixel(&self, point: Point) -> Option<Paint> {
        if point.x >= self.width || point.y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(point.x, point.y)])
    }

    /// Number of pixels currently holding `paint`
    pub fn count(&self, paint: Paint) -> usize {
        self.pixels.iter().filter(|p| **p == paint).count()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl Surface for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.pixels.fill(Paint::Ground);
    }

    fn fill_rect(&mut self, rect: PixelRect, paint: Paint) {
        // Clip to the canvas
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);

        for y in rect.y..y_end {
            let start = self.index(rect.x.min(x_end), y);
            let end = self.index(x_end, y);
            self.pixels[start..end].fill(paint);
        }
    }
}
