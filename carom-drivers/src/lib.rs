//! Hardware driver implementations
//!
//! This crate provides drivers for the hardware the demo runs on, built
//! against the traits defined in carom-hal:
//!
//! - ST7789V TFT panel controller (SPI, DC-line command framing)

#![no_std]
#![deny(unsafe_code)]

pub mod st7789;
