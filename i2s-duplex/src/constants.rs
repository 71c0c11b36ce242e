/// Number of DMA buffers the driver allocates per direction.
pub const DMA_BUF_COUNT: u16 = 8;

/// Length of each DMA buffer, in frames.
pub const DMA_BUF_LEN: u16 = 1024;

/// Raw pin value meaning "not connected" for the optional master clock.
pub const PIN_NOT_PRESENT: u8 = 255;

/// Highest GPIO index accepted by [`BusParameters::validate`](crate::config::BusParameters::validate).
pub const MAX_GPIO: u8 = 48;

/// Size of one transferred sample in bytes (`i16`).
pub const SAMPLE_BYTES: usize = core::mem::size_of::<i16>();

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

/// Lowest sample rate accepted by configuration validation.
pub const MIN_SAMPLE_RATE: u32 = 8_000;

/// Highest sample rate accepted by configuration validation.
pub const MAX_SAMPLE_RATE: u32 = 96_000;

/// Default bit clock (BCLK) pin.
pub const DEFAULT_CLOCK_PIN: u8 = 17;

/// Default word select (LRCLK) pin.
pub const DEFAULT_FRAME_SYNC_PIN: u8 = 45;

/// Default master clock (MCLK) pin.
pub const DEFAULT_MASTER_CLOCK_PIN: u8 = 2;

/// Default data input pin (microphone).
pub const DEFAULT_DATA_IN_PIN: u8 = 16;

/// Default data output pin (speaker).
pub const DEFAULT_DATA_OUT_PIN: u8 = 15;
