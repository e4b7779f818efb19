use super::cell::PixelRect;

/// The three things the game ever paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    /// Newly placed snake head (blue)
    Head,
    /// Empty territory, also used to erase the tail (lime green)
    #[default]
    Ground,
    /// Food (red)
    Food,
}

/// A 2D pixel surface the territory draws onto
pub trait Surface {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Reset every pixel to the background
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: PixelRect, paint: Paint);
}
