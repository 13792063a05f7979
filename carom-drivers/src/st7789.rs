//! ST7789V TFT Display Driver
//!
//! Driver for 240x240 ST7789V-based TFT panels over write-only SPI.
//! The controller has no MISO line; commands are distinguished from
//! parameter and pixel bytes purely by the DC line level, so every
//! operation here reduces to DC-framed writes on the bus.
//!
//! Rendering works in RGB565 with big-endian pixels on the wire. The
//! driver draws through an address window: CASET/RASET bound a
//! rectangle, RAMWR opens it, and subsequent data bytes fill it
//! row-major. Bounds are never clamped here; callers keep rectangles
//! on the panel.

use carom_core::color::Rgb565;
use carom_core::rect::Rect;
use carom_hal::{OutputPin, SpiBus};
use embedded_hal::delay::DelayNs;

/// ST7789 commands
mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVON: u8 = 0x21;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const COLMOD: u8 = 0x3A;
    pub const PORCTRL: u8 = 0xB2;
    pub const GCTRL: u8 = 0xB7;
    pub const VCOMS: u8 = 0xBB;
    pub const LCMCTRL: u8 = 0xC0;
    pub const VDVVRHEN: u8 = 0xC2;
    pub const VRHS: u8 = 0xC3;
    pub const VDVS: u8 = 0xC4;
    pub const FRCTRL2: u8 = 0xC6;
    pub const PWCTRL1: u8 = 0xD0;
    pub const GMCTRP1: u8 = 0xE0;
    pub const GMCTRN1: u8 = 0xE1;
}

/// Largest single data transfer used by solid fills, in bytes
const FILL_CHUNK: usize = 512;

/// One step of the panel bring-up table
#[derive(Debug, Clone, Copy)]
pub enum InitOp {
    /// Send an opcode with its parameter bytes
    Cmd(u8, &'static [u8]),
    /// Pause for the given milliseconds, no transfer
    Wait(u32),
}

/// Bring-up table for the 240x240 ST7789V panel variant
///
/// Voltage, porch and gamma values are the controller vendor's for this
/// glass; the table is data so the replay loop stays trivial and a
/// failed step aborts bring-up cleanly.
pub const INIT_SEQUENCE: &[InitOp] = &[
    InitOp::Cmd(cmd::SWRESET, &[]),
    InitOp::Wait(150),
    InitOp::Cmd(cmd::MADCTL, &[0x00]),
    InitOp::Cmd(cmd::COLMOD, &[0x55]),
    InitOp::Cmd(cmd::PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    InitOp::Cmd(cmd::LCMCTRL, &[0x2C]),
    InitOp::Cmd(cmd::VDVVRHEN, &[0x01]),
    InitOp::Cmd(cmd::VRHS, &[0x12]),
    InitOp::Cmd(cmd::VDVS, &[0x20]),
    InitOp::Cmd(cmd::PWCTRL1, &[0xA4, 0xA1]),
    InitOp::Cmd(cmd::FRCTRL2, &[0x1F]),
    InitOp::Cmd(cmd::GCTRL, &[0x14]),
    InitOp::Cmd(cmd::VCOMS, &[0x37]),
    InitOp::Cmd(
        cmd::GMCTRP1,
        &[
            0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
        ],
    ),
    InitOp::Cmd(
        cmd::GMCTRN1,
        &[
            0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
        ],
    ),
    InitOp::Cmd(cmd::INVON, &[]),
    InitOp::Wait(10),
    InitOp::Cmd(cmd::SLPOUT, &[]),
    InitOp::Wait(10),
    InitOp::Cmd(cmd::NORON, &[]),
    InitOp::Wait(10),
    InitOp::Cmd(cmd::DISPON, &[]),
    InitOp::Wait(10),
];

/// Errors that can occur with panel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Rendering was requested before bring-up completed
    NotReady,
    /// The underlying SPI transfer failed
    Bus(E),
}

/// ST7789V panel driver
///
/// Generic over the SPI bus and the DC/RST control lines so it can be
/// exercised against mocks on the host.
pub struct St7789<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    /// Staging block for solid fills
    chunk: [u8; FILL_CHUNK],
    /// Set once the bring-up table has replayed without error
    initialized: bool,
}

impl<SPI, DC, RST> St7789<SPI, DC, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new panel driver
    ///
    /// The panel is unusable until [`init`](Self::init) has run;
    /// rendering calls before that return [`Error::NotReady`].
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            chunk: [0; FILL_CHUNK],
            initialized: false,
        }
    }

    /// Whether bring-up has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Pulse the hardware reset line
    ///
    /// Leaves the controller in its post-reset state; follow with
    /// [`init`](Self::init). The long tail wait covers the controller's
    /// wake-up time after the rising edge.
    pub fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) {
        self.rst.set_high();
        delay.delay_ms(10);
        self.rst.set_low();
        delay.delay_ms(10);
        self.rst.set_high();
        delay.delay_ms(120);
    }

    /// Replay the bring-up table and mark the panel ready
    ///
    /// Aborts on the first failed transfer, leaving the panel not ready.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error>> {
        self.run_sequence(INIT_SEQUENCE, delay)?;
        self.initialized = true;
        Ok(())
    }

    /// Fill a rectangle with a solid color
    ///
    /// `x + w` and `y + h` must stay on the panel. Pixel data streams in
    /// bounded chunks so no full-frame buffer is needed.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Rgb565,
    ) -> Result<(), Error<SPI::Error>> {
        if !self.initialized {
            return Err(Error::NotReady);
        }
        if w == 0 || h == 0 {
            return Ok(());
        }

        self.set_window(x, y, x + w - 1, y + h - 1)?;

        let [hi, lo] = color.to_be_bytes();
        for pair in self.chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        // Pixel count times two bytes; chunks stay pixel-aligned since
        // both the total and the chunk size are even.
        let mut remaining = w as usize * h as usize * 2;
        self.dc.set_high();
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.spi.write(&self.chunk[..n]).map_err(Error::Bus)?;
            remaining -= n;
        }
        Ok(())
    }

    /// Write pre-composed pixels into a rectangle as one transfer
    ///
    /// `pixels` holds `area.byte_len()` big-endian RGB565 bytes in
    /// row-major order. `area` must already be clamped onto the panel.
    pub fn blit(&mut self, area: &Rect, pixels: &[u8]) -> Result<(), Error<SPI::Error>> {
        if !self.initialized {
            return Err(Error::NotReady);
        }

        self.set_window(
            area.x0 as u16,
            area.y0 as u16,
            area.x1 as u16,
            area.y1 as u16,
        )?;
        self.dc.set_high();
        self.spi.write(pixels).map_err(Error::Bus)
    }

    /// Send one command: opcode with DC low, parameters with DC high
    ///
    /// Parameter bytes go out as a single contiguous write; commands
    /// without parameters skip the data phase entirely.
    fn send_command(&mut self, opcode: u8, params: &[u8]) -> Result<(), Error<SPI::Error>> {
        self.dc.set_low();
        self.spi.write(&[opcode]).map_err(Error::Bus)?;
        if !params.is_empty() {
            self.dc.set_high();
            self.spi.write(params).map_err(Error::Bus)?;
        }
        Ok(())
    }

    /// Bound the drawing window and open it for pixel data
    ///
    /// Bounds are inclusive and big-endian on the wire. After this, the
    /// next data bytes fill the window row-major.
    fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error<SPI::Error>> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();
        self.send_command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.send_command(cmd::RASET, &[y0h, y0l, y1h, y1l])?;
        self.send_command(cmd::RAMWR, &[])
    }

    fn run_sequence<D: DelayNs>(
        &mut self,
        ops: &[InitOp],
        delay: &mut D,
    ) -> Result<(), Error<SPI::Error>> {
        for op in ops {
            match op {
                InitOp::Cmd(opcode, params) => self.send_command(*opcode, params)?,
                InitOp::Wait(ms) => delay.delay_ms(*ms),
            }
        }
        Ok(())
    }
}
