use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

pub const PALETTE_SIZE: usize = 16;

/// Cyclic gradient, dark brown through blue and white to orange.
pub const PALETTE: [Colour; PALETTE_SIZE] = [
    Colour::rgb(66, 30, 15),
    Colour::rgb(25, 7, 26),
    Colour::rgb(9, 1, 47),
    Colour::rgb(4, 4, 73),
    Colour::rgb(0, 7, 100),
    Colour::rgb(12, 44, 138),
    Colour::rgb(24, 82, 177),
    Colour::rgb(57, 125, 209),
    Colour::rgb(134, 181, 229),
    Colour::rgb(211, 236, 248),
    Colour::rgb(241, 233, 191),
    Colour::rgb(248, 201, 95),
    Colour::rgb(255, 170, 0),
    Colour::rgb(204, 128, 0),
    Colour::rgb(153, 87, 0),
    Colour::rgb(106, 52, 3),
];

/// Maps an escape value to its palette entry.
///
/// Interior (`>= max_iterations`), non-positive and non-finite values get
/// [`Colour::TRANSPARENT`]; everything else indexes the palette by
/// `floor(escape_value) mod 16`.
#[must_use]
pub fn map_colour(escape_value: f64, max_iterations: u32) -> Colour {
    if !escape_value.is_finite() || escape_value <= 0.0 || escape_value >= f64::from(max_iterations) {
        return Colour::TRANSPARENT;
    }

    PALETTE[escape_value.floor() as usize % PALETTE_SIZE]
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaletteColourMap {
    max_iterations: u32,
}

impl ColourMap for PaletteColourMap {
    type T = f64;

    fn map(&self, value: f64) -> Colour {
        map_colour(value, self.max_iterations)
    }

    fn display_name(&self) -> &str {
        "Palette"
    }
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_max_are_reserved() {
        assert_eq!(map_colour(0.0, 100), Colour::TRANSPARENT);
        assert_eq!(map_colour(100.0, 100), Colour::TRANSPARENT);
        assert_eq!(map_colour(250.0, 100), Colour::TRANSPARENT);
        assert_eq!(map_colour(-3.5, 100), Colour::TRANSPARENT);
    }

    #[test]
    fn non_finite_values_are_reserved() {
        assert_eq!(map_colour(f64::NAN, 100), Colour::TRANSPARENT);
        assert_eq!(map_colour(f64::INFINITY, 100), Colour::TRANSPARENT);
        assert_eq!(map_colour(f64::NEG_INFINITY, 100), Colour::TRANSPARENT);
    }

    #[test]
    fn fractional_values_floor_into_palette() {
        assert_eq!(map_colour(5.9, 100), PALETTE[5]);
        assert_eq!(map_colour(0.2, 100), PALETTE[0]);
        assert_eq!(map_colour(99.99, 100), PALETTE[99 % PALETTE_SIZE]);
    }

    #[test]
    fn palette_wraps_every_sixteen() {
        assert_eq!(map_colour(16.5, 100), PALETTE[0]);
        assert_eq!(map_colour(37.0, 100), PALETTE[5]);
    }

    #[test]
    fn palette_entries_are_opaque() {
        assert!(PALETTE.iter().all(Colour::is_opaque));
    }

    #[test]
    fn colour_map_delegates_to_map_colour() {
        let colour_map = PaletteColourMap::new(100);

        assert_eq!(colour_map.map(5.9), PALETTE[5]);
        assert_eq!(colour_map.map(100.0), Colour::TRANSPARENT);
        assert_eq!(colour_map.display_name(), "Palette");
    }
}
