//! Animation task
//!
//! Drives the bouncing ball. After priming the screen with the full
//! backdrop, each frame steps the ball, composes the dirty patch
//! covering its old and new positions, and writes that one patch out.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_futures::yield_now;
use embassy_time::{Instant, Timer};

use carom_core::buffer::ScratchBuffer;
use carom_core::fps::FpsCounter;
use carom_core::motion::Ball;
use carom_core::rect::Rect;
use carom_core::scene::Scene;

use crate::channels::STOP;
use crate::config;
use crate::render::{self, PanelDriver};

#[embassy_executor::task]
pub async fn animation_task(mut screen: PanelDriver) {
    info!("Animation task started");

    let demo = config::DEMO;
    let scene = Scene::new(config::PANEL, config::BANDS, config::FOREGROUND);
    let mut ball = Ball::new(
        demo.start_x,
        demo.start_y,
        demo.velocity_x,
        demo.velocity_y,
        demo.radius,
    );
    let mut scratch = ScratchBuffer::new();

    if let Err(e) = render::prime(&mut screen, &scene, &ball, demo.margin, &mut scratch) {
        error!("First frame failed: {}", e);
        return;
    }
    info!("Animation running");

    let mut fps = FpsCounter::new(Instant::now().as_millis());
    let mut prev = Rect::around(ball.x, ball.y, ball.radius, demo.margin);

    loop {
        if STOP.signaled() {
            break;
        }
        if demo.unlimited {
            // Let other tasks run between frames
            yield_now().await;
            if STOP.signaled() {
                break;
            }
        } else {
            match select(Timer::after_millis(demo.frame_delay_ms), STOP.wait()).await {
                Either::First(()) => {}
                Either::Second(()) => break,
            }
        }

        ball.step(&config::PANEL);
        let next = Rect::around(ball.x, ball.y, ball.radius, demo.margin);
        let patch = prev.union(&next).clamp_to(&config::PANEL);
        prev = next;

        let len = patch.byte_len();
        scratch.ensure_capacity(len);
        scene.compose(&ball, &patch, scratch.slice_mut(len));
        if let Err(e) = screen.blit(&patch, scratch.slice_mut(len)) {
            error!("Frame write failed: {}", e);
            break;
        }

        if let Some(rate) = fps.record_frame(Instant::now().as_millis()) {
            info!("{}.{} fps", rate / 10, rate % 10);
        }
    }

    info!("Animation stopped");
}
