//! SPI bus abstractions
//!
//! Provides a trait for SPI master operations that can be implemented
//! by chip-specific HALs.

/// Write-only SPI bus master
///
/// Display panels with a MISO-less wiring only ever receive data, so the
/// bus capability is reduced to a single outbound transfer. Chip select
/// handling, where the wiring has one, belongs to the implementation and
/// must frame every call as one contiguous transaction.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
