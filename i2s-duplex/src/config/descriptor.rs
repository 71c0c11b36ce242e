//! Pure derivation of driver descriptors from [`BusParameters`].
//!
//! Both functions are total: any `BusParameters` value yields a descriptor.
//! Out-of-range values are the configuration layer's problem
//! (see [`BusParameters::validate`]), not something detected here.
//!
//! Descriptors are recomputed on every call and never cached.

use super::{BitsPerSample, BusParameters, ChannelLayout};
use crate::constants::{DMA_BUF_COUNT, DMA_BUF_LEN, PIN_NOT_PRESENT};

/// Operating role of the peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusRole {
    /// Generates BCLK/LRCLK and both transmits and receives.
    MasterDuplex,
}

impl BusRole {
    pub const fn is_master(self) -> bool {
        matches!(self, BusRole::MasterDuplex)
    }

    pub const fn transmits(self) -> bool {
        matches!(self, BusRole::MasterDuplex)
    }

    pub const fn receives(self) -> bool {
        matches!(self, BusRole::MasterDuplex)
    }
}

/// Frame format on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameFormat {
    /// Philips I2S: data lags word select by one bit clock.
    Standard,
}

/// DMA ring configuration shared by both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DmaBuffering {
    /// Number of buffers in the ring.
    pub buffer_count: u16,
    /// Frames per buffer.
    pub buffer_len: u16,
}

impl DmaBuffering {
    /// The fixed policy: 8 × 1024 frames.
    pub const FIXED: DmaBuffering = DmaBuffering {
        buffer_count: DMA_BUF_COUNT,
        buffer_len: DMA_BUF_LEN,
    };

    /// Total frames buffered per direction.
    pub const fn total_frames(&self) -> u32 {
        self.buffer_count as u32 * self.buffer_len as u32
    }
}

/// Operating mode and timing handed to the driver at install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingDescriptor {
    pub role: BusRole,
    pub sample_rate_hz: u32,
    pub bits_per_sample: BitsPerSample,
    pub channel_layout: ChannelLayout,
    pub frame_format: FrameFormat,
    pub dma: DmaBuffering,
    /// Send silence instead of stale data when the TX ring underruns.
    pub tx_auto_clear: bool,
    /// Interrupt priority level for the DMA interrupt.
    pub interrupt_level: u8,
    /// Clock the bus from the audio PLL instead of the main PLL.
    pub use_apll: bool,
    /// Fixed MCLK frequency in Hz, 0 to let the driver derive it.
    pub fixed_mclk_hz: u32,
}

/// Binding of one signal role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinAssignment {
    /// Signal routed to this GPIO.
    Gpio(u8),
    /// Signal not routed; the driver leaves the matrix untouched.
    Unused,
}

impl PinAssignment {
    /// Map a raw pin, treating [`PIN_NOT_PRESENT`] as unused.
    pub const fn from_raw(pin: u8) -> Self {
        if pin == PIN_NOT_PRESENT {
            PinAssignment::Unused
        } else {
            PinAssignment::Gpio(pin)
        }
    }

    pub const fn gpio(self) -> Option<u8> {
        match self {
            PinAssignment::Gpio(n) => Some(n),
            PinAssignment::Unused => None,
        }
    }
}

/// Physical-pin-to-signal-role mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDescriptor {
    /// BCLK.
    pub bit_clock: u8,
    /// LRCLK / WS.
    pub word_select: u8,
    /// MCLK.
    pub master_clock: PinAssignment,
    /// DOUT, towards the speaker.
    pub data_out: u8,
    /// DIN, from the microphone.
    pub data_in: u8,
}

/// Build the mode/timing descriptor: full-duplex master, standard I2S
/// framing, fixed DMA buffering, TX auto-clear on underrun.
pub fn build_mode_descriptor(params: &BusParameters) -> TimingDescriptor {
    TimingDescriptor {
        role: BusRole::MasterDuplex,
        sample_rate_hz: params.sample_rate_hz(),
        bits_per_sample: params.bits_per_sample(),
        channel_layout: params.channel_layout(),
        frame_format: FrameFormat::Standard,
        dma: DmaBuffering::FIXED,
        tx_auto_clear: true,
        interrupt_level: 1,
        use_apll: false,
        fixed_mclk_hz: 0,
    }
}

/// Build the pin-role descriptor.
///
/// The master clock maps to [`PinAssignment::Unused`] if and only if its raw
/// value is [`PIN_NOT_PRESENT`]; every other value passes through.
pub fn build_pin_descriptor(params: &BusParameters) -> PinDescriptor {
    PinDescriptor {
        bit_clock: params.clock_line(),
        word_select: params.frame_sync_line(),
        master_clock: PinAssignment::from_raw(params.master_clock_line()),
        data_out: params.data_out_line(),
        data_in: params.data_in_line(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_descriptor_is_full_duplex_master() {
        let params = BusParameters::builder()
            .sample_rate_hz(44_100)
            .channel_layout(ChannelLayout::RightOnly)
            .build();
        let d = build_mode_descriptor(&params);

        assert_eq!(d.role, BusRole::MasterDuplex);
        assert!(d.role.is_master() && d.role.transmits() && d.role.receives());
        assert_eq!(d.sample_rate_hz, 44_100);
        assert_eq!(d.bits_per_sample, BitsPerSample::Bits16);
        assert_eq!(d.channel_layout, ChannelLayout::RightOnly);
        assert_eq!(d.frame_format, FrameFormat::Standard);
        assert!(d.tx_auto_clear);
        assert!(!d.use_apll);
        assert_eq!(d.fixed_mclk_hz, 0);
        assert_eq!(d.interrupt_level, 1);
    }

    #[test]
    fn dma_policy_is_fixed() {
        for hz in [8_000, 16_000, 96_000] {
            let params = BusParameters::builder().sample_rate_hz(hz).build();
            let d = build_mode_descriptor(&params);
            assert_eq!(d.dma.buffer_count, 8);
            assert_eq!(d.dma.buffer_len, 1024);
        }
        assert_eq!(DmaBuffering::FIXED.total_frames(), 8192);
    }

    #[test]
    fn pin_descriptor_maps_lines_directly() {
        let params = BusParameters::builder()
            .clock_line(17)
            .frame_sync_line(45)
            .master_clock_line(2)
            .data_in_line(16)
            .data_out_line(15)
            .build();
        let p = build_pin_descriptor(&params);

        assert_eq!(p.bit_clock, 17);
        assert_eq!(p.word_select, 45);
        assert_eq!(p.master_clock, PinAssignment::Gpio(2));
        assert_eq!(p.data_in, 16);
        assert_eq!(p.data_out, 15);
    }

    #[test]
    fn master_clock_unused_only_for_sentinel() {
        for raw in 0..=u8::MAX {
            let params = BusParameters::builder().master_clock_line(raw).build();
            let mclk = build_pin_descriptor(&params).master_clock;
            if raw == PIN_NOT_PRESENT {
                assert_eq!(mclk, PinAssignment::Unused);
                assert_eq!(mclk.gpio(), None);
            } else {
                assert_eq!(mclk, PinAssignment::Gpio(raw), "raw pin {raw}");
            }
        }
    }

    #[test]
    fn descriptors_are_total_over_invalid_params() {
        // Duplicate and out-of-range pins are not detected here
        let params = BusParameters::builder()
            .sample_rate_hz(1)
            .clock_line(200)
            .data_in_line(200)
            .build();
        assert!(params.validate().is_err());

        let d = build_mode_descriptor(&params);
        let p = build_pin_descriptor(&params);
        assert_eq!(d.sample_rate_hz, 1);
        assert_eq!(p.bit_clock, 200);
        assert_eq!(p.data_in, 200);
    }
}
