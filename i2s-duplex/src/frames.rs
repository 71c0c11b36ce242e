//! Sample buffer helpers keyed on the channel layout.
//!
//! Buffers exchanged with the controller are flat `i16` slices. In
//! [`ChannelLayout::Stereo`] they are interleaved as `L, R, L, R, ...`; in
//! the mono layouts every sample belongs to the one active slot.

use crate::config::ChannelLayout;

/// Number of whole frames in `samples` samples.
pub const fn frame_count(samples: usize, layout: ChannelLayout) -> usize {
    samples / layout.channels()
}

/// Playback time of `samples` samples, in microseconds.
pub fn duration_us(samples: usize, layout: ChannelLayout, sample_rate_hz: u32) -> u64 {
    if sample_rate_hz == 0 {
        return 0;
    }
    frame_count(samples, layout) as u64 * 1_000_000 / sample_rate_hz as u64
}

/// Number of samples covering `ms` milliseconds.
///
/// 10 ms of stereo at 16 kHz is 160 frames, i.e. 320 samples.
pub fn samples_for_duration_ms(ms: u32, layout: ChannelLayout, sample_rate_hz: u32) -> usize {
    let frames = sample_rate_hz as u64 * ms as u64 / 1000;
    frames as usize * layout.channels()
}

/// Split an interleaved stereo buffer into left and right channels.
///
/// Copies as many frames as fit in both outputs and returns that count.
/// A trailing half frame in `src` is ignored.
pub fn split_stereo(src: &[i16], left: &mut [i16], right: &mut [i16]) -> usize {
    let frames = (src.len() / 2).min(left.len()).min(right.len());
    for (i, frame) in src.chunks_exact(2).take(frames).enumerate() {
        left[i] = frame[0];
        right[i] = frame[1];
    }
    frames
}

/// Interleave left and right channels into a stereo buffer.
///
/// Writes as many frames as all three slices allow and returns that count.
pub fn join_stereo(dest: &mut [i16], left: &[i16], right: &[i16]) -> usize {
    let frames = (dest.len() / 2).min(left.len()).min(right.len());
    for (i, frame) in dest.chunks_exact_mut(2).take(frames).enumerate() {
        frame[0] = left[i];
        frame[1] = right[i];
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_counts_per_layout() {
        assert_eq!(frame_count(160, ChannelLayout::Stereo), 80);
        assert_eq!(frame_count(161, ChannelLayout::Stereo), 80);
        assert_eq!(frame_count(160, ChannelLayout::LeftOnly), 160);
        assert_eq!(frame_count(160, ChannelLayout::RightOnly), 160);
    }

    #[test]
    fn durations() {
        // 160 stereo samples = 80 frames = 5 ms at 16 kHz
        assert_eq!(duration_us(160, ChannelLayout::Stereo, 16_000), 5_000);
        assert_eq!(duration_us(160, ChannelLayout::LeftOnly, 16_000), 10_000);
        assert_eq!(duration_us(160, ChannelLayout::Stereo, 0), 0);
    }

    #[test]
    fn samples_for_ten_ms() {
        assert_eq!(samples_for_duration_ms(10, ChannelLayout::Stereo, 16_000), 320);
        assert_eq!(samples_for_duration_ms(10, ChannelLayout::LeftOnly, 16_000), 160);
        assert_eq!(samples_for_duration_ms(1, ChannelLayout::Stereo, 44_100), 88);
    }

    #[test]
    fn split_stereo_basic() {
        let src = [100i16, 500, -200, -600];
        let mut left = [0i16; 2];
        let mut right = [0i16; 2];

        assert_eq!(split_stereo(&src, &mut left, &mut right), 2);
        assert_eq!(left, [100, -200]);
        assert_eq!(right, [500, -600]);
    }

    #[test]
    fn split_stereo_ignores_half_frame_and_short_outputs() {
        let src = [1i16, 2, 3, 4, 5];
        let mut left = [0i16; 1];
        let mut right = [0i16; 4];

        assert_eq!(split_stereo(&src, &mut left, &mut right), 1);
        assert_eq!(left, [1]);
        assert_eq!(right, [2, 0, 0, 0]);
    }

    #[test]
    fn join_stereo_basic() {
        let left = [i16::MIN, 0, 7];
        let right = [i16::MAX, -1, 8];
        let mut dest = [0i16; 6];

        assert_eq!(join_stereo(&mut dest, &left, &right), 3);
        assert_eq!(dest, [i16::MIN, i16::MAX, 0, -1, 7, 8]);
    }

    #[test]
    fn join_stereo_limited_by_dest() {
        let mut dest = [9i16; 3];
        assert_eq!(join_stereo(&mut dest, &[1, 2], &[3, 4]), 1);
        assert_eq!(dest, [1, 3, 9]);
    }

    #[test]
    fn empty_slices() {
        assert_eq!(split_stereo(&[], &mut [], &mut []), 0);
        assert_eq!(join_stereo(&mut [], &[], &[]), 0);
    }
}
