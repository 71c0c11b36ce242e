//! # i2s-duplex
//!
//! A `no_std` driver layer for one full-duplex I2S bus on a microcontroller:
//! a microphone stream comes in on DIN while a speaker stream goes out on
//! DOUT, both sharing the bit clock and word select lines generated by the
//! MCU as bus master.
//!
//! The crate does not talk to registers itself. The vendor driver is reached
//! through the [`driver::I2sDriver`] trait, in the same way codec drivers sit
//! on top of `embedded-hal` buses.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Parameters | [`config`] | `BusParameters`, builder, validation |
//! | Descriptors | [`config::descriptor`] | Pure derivation of timing and pin descriptors |
//! | Driver seam | [`driver`] | `I2sDriver` trait, `BusPort`, error kinds |
//! | Lifecycle | [`controller`] | `DuplexBusController` state machine and transfers |
//! | Host seam | [`component`] | `Component` trait for setup / tick / shutdown |
//! | Reporting | [`diagnostics`] | Human-readable configuration dump |
//! | Buffers | [`frames`] | Frame counts, durations, stereo split/join |
//!
//! ## Quick start
//!
//! ```ignore
//! use i2s_duplex::config::BusParameters;
//! use i2s_duplex::controller::DuplexBusController;
//! use i2s_duplex::driver::BusPort;
//!
//! let params = BusParameters::builder()
//!     .sample_rate_hz(16_000)
//!     .master_clock_line(255) // not connected
//!     .build();
//! params.validate()?;
//!
//! let mut bus = DuplexBusController::new(board_i2s_driver, BusPort::I2S0, params);
//! bus.initialize()?;
//!
//! // In a dedicated audio task; both calls block until the DMA ring
//! // has (or accepts) the data.
//! let mic = bus.read_microphone(160)?;
//! bus.write_speaker(&mic)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `alloc` | yes | `read_microphone()` returning a `Vec<i16>` |
//! | `defmt` | no | `defmt::Format` on public types |
//!
//! ## Audio parameters
//!
//! - **Sample format:** `i16` (signed 16-bit), stereo interleaved `L, R`
//! - **Frame format:** Philips I2S, MCU is master
//! - **DMA buffering:** 8 × 1024 frames ([`constants::DMA_BUF_COUNT`], [`constants::DMA_BUF_LEN`])
//!
//! Logging goes through the [`log`] facade under target `i2s_duplex`.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod constants;
pub mod error;
pub mod config;
pub mod driver;
pub mod controller;
pub mod component;
pub mod diagnostics;
pub mod frames;

pub use component::{Component, SetupPriority};
pub use config::{BitsPerSample, BusParameters, ChannelLayout};
pub use controller::{ControllerState, DuplexBusController};
pub use driver::{BusPort, I2sDriver};
pub use error::{ConfigError, InitError, ReadError, WriteError};

#[cfg(test)]
mod mock;
