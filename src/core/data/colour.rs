/// RGBA8 colour as written into the output frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Reserved colour for interior and degenerate escape values.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let colour = Colour::rgb(66, 30, 15);

        assert!(colour.is_opaque());
        assert_eq!(colour, Colour { r: 66, g: 30, b: 15, a: 255 });
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Colour::TRANSPARENT, Colour::default());
        assert!(!Colour::TRANSPARENT.is_opaque());
    }
}
