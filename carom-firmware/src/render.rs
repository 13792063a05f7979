//! Drawing helpers shared by the static pattern and the animation loop

use carom_core::buffer::ScratchBuffer;
use carom_core::motion::Ball;
use carom_core::rect::Rect;
use carom_core::scene::{Scene, BAND_COUNT};
use carom_drivers::st7789::{Error, St7789};
use carom_hal_rp2040::{OutputLine, SpiPort};
use embassy_rp::peripherals::SPI1;

use crate::config;

/// Panel driver as wired on this board
pub type PanelDriver = St7789<SpiPort<'static, SPI1>, OutputLine<'static>, OutputLine<'static>>;

/// Errors the panel driver can raise on this board
pub type PanelError = Error<embassy_rp::spi::Error>;

/// Paint the full three-band backdrop
pub fn draw_backdrop(screen: &mut PanelDriver, scene: &Scene) -> Result<(), PanelError> {
    for i in 0..BAND_COUNT {
        let (y, rows) = scene.band_rows(i);
        screen.fill_rect(0, y, scene.panel().width, rows, scene.band_color(i))?;
    }
    Ok(())
}

/// Render the static demo: backdrop with a centered square on top
pub fn render_static(screen: &mut PanelDriver, scene: &Scene) -> Result<(), PanelError> {
    draw_backdrop(screen, scene)?;
    let panel = scene.panel();
    let side = config::SQUARE_SIDE;
    let x = (panel.width - side) / 2;
    let y = (panel.height - side) / 2;
    screen.fill_rect(x, y, side, side, config::FOREGROUND)
}

/// Paint the backdrop and the first ball patch
pub fn prime(
    screen: &mut PanelDriver,
    scene: &Scene,
    ball: &Ball,
    margin: i32,
    scratch: &mut ScratchBuffer,
) -> Result<(), PanelError> {
    draw_backdrop(screen, scene)?;
    let patch = Rect::around(ball.x, ball.y, ball.radius, margin).clamp_to(scene.panel());
    let len = patch.byte_len();
    scratch.ensure_capacity(len);
    scene.compose(ball, &patch, scratch.slice_mut(len));
    screen.blit(&patch, scratch.slice_mut(len))
}
