//! RGB565 color packing
//!
//! The panel consumes 16-bit colors in RGB565 layout: red in bits 15..11,
//! green in bits 10..5, blue in bits 4..0. Packing keeps the top bits of
//! each 8-bit channel and discards the rest; there is no rounding.

/// A packed RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(u16);

impl Rgb565 {
    /// Pack 8-bit channels into RGB565
    ///
    /// Keeps red 5 bits, green 6 bits, blue 5 bits.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let value = ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3);
        Self(value)
    }

    /// The raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The packed value in wire order (big-endian, high byte first)
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Full black (all channels zero)
pub const BLACK: Rgb565 = Rgb565::new(0x00, 0x00, 0x00);
/// Full white (all channels saturated)
pub const WHITE: Rgb565 = Rgb565::new(0xFF, 0xFF, 0xFF);
/// Pure red
pub const RED: Rgb565 = Rgb565::new(0xFF, 0x00, 0x00);
/// Pure green
pub const GREEN: Rgb565 = Rgb565::new(0x00, 0xFF, 0x00);
/// Pure blue
pub const BLUE: Rgb565 = Rgb565::new(0x00, 0x00, 0xFF);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_pack_to_known_values() {
        assert_eq!(BLACK.raw(), 0x0000);
        assert_eq!(WHITE.raw(), 0xFFFF);
        assert_eq!(RED.raw(), 0xF800);
        assert_eq!(GREEN.raw(), 0x07E0);
        assert_eq!(BLUE.raw(), 0x001F);
    }

    #[test]
    fn test_wire_order_is_big_endian() {
        assert_eq!(RED.to_be_bytes(), [0xF8, 0x00]);
        assert_eq!(GREEN.to_be_bytes(), [0x07, 0xE0]);
        assert_eq!(BLUE.to_be_bytes(), [0x00, 0x1F]);
        assert_eq!(Rgb565::new(0x12, 0x34, 0x56).to_be_bytes(), [0x11, 0xAA]);
    }

    #[test]
    fn test_channels_land_in_their_fields() {
        // Stepped sweep over the full channel space; truncation means the
        // recovered field must equal the top bits of the input channel.
        for r in (0u16..=255).step_by(5) {
            for g in (0u16..=255).step_by(5) {
                for b in (0u16..=255).step_by(5) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let raw = Rgb565::new(r, g, b).raw();
                    assert_eq!((raw >> 11) & 0x1F, (r >> 3) as u16);
                    assert_eq!((raw >> 5) & 0x3F, (g >> 2) as u16);
                    assert_eq!(raw & 0x1F, (b >> 3) as u16);
                }
            }
        }
    }

    #[test]
    fn test_truncation_collapses_low_bits() {
        // Low bits below the kept field do not change the packed value
        assert_eq!(Rgb565::new(0xF8, 0x00, 0x00), Rgb565::new(0xFF, 0x03, 0x07));
        assert_ne!(Rgb565::new(0xF8, 0x00, 0x00), Rgb565::new(0xF0, 0x00, 0x00));
    }
}
