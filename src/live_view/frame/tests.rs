#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::live_view::common::error::ViewerError;
    use crate::live_view::frame::synthetic_source::frame_timestamp;
    use crate::live_view::frame::{
        ChannelCodec, FrameSource, PackedColorCodec, PixelBuffer, PixelFormat, SyntheticFrameSource,
    };

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let result = PixelBuffer::new(0, 10, PixelFormat::Bgra8, Vec::new(), Duration::ZERO);
        assert_eq!(result.unwrap_err(), ViewerError::InvalidDimensions(0, 10));
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        let result = PixelBuffer::new(2, 2, PixelFormat::Bgra8, vec![0u8; 15], Duration::ZERO);
        assert_eq!(
            result.unwrap_err(),
            ViewerError::BufferSizeMismatch { expected: 16, actual: 15 }
        );
    }

    #[test]
    fn test_filled_respects_byte_order() {
        let bgra = PixelBuffer::filled(1, 1, PixelFormat::Bgra8, [10, 20, 30], Duration::ZERO).unwrap();
        assert_eq!(bgra.data(), &[30, 20, 10, 255]);

        let rgba = PixelBuffer::filled(1, 1, PixelFormat::Rgba8, [10, 20, 30], Duration::ZERO).unwrap();
        assert_eq!(rgba.data(), &[10, 20, 30, 255]);
        assert_eq!(rgba.rgb_at(0, 0), Some([10, 20, 30]));
        assert_eq!(rgba.rgb_at(1, 0), None);
    }

    #[test]
    fn test_codec_decodes_planes() {
        let data = vec![
            1, 2, 3, 0, //
            4, 5, 6, 0,
        ];
        let frame = PixelBuffer::new(2, 1, PixelFormat::Bgra8, data, Duration::ZERO).unwrap();

        let (mut r, mut g, mut b) = (vec![0.0; 2], vec![0.0; 2], vec![0.0; 2]);
        PackedColorCodec.decode_into(&frame, [&mut r, &mut g, &mut b]);

        assert_eq!(r, vec![3.0, 6.0]);
        assert_eq!(g, vec![2.0, 5.0]);
        assert_eq!(b, vec![1.0, 4.0]);
    }

    #[test]
    fn test_codec_encode_divides_clamps_and_forces_alpha() {
        let r = [400.0, 1200.0];
        let g = [-8.0, 4.0];
        let b = [2.0, 3.0];

        let frame = PackedColorCodec
            .encode(2, 1, PixelFormat::Rgba8, [&r, &g, &b], 4.0, Duration::from_millis(5))
            .unwrap();

        assert_eq!(frame.rgb_at(0, 0), Some([100, 0, 1]));
        assert_eq!(frame.rgb_at(1, 0), Some([255, 1, 1]));
        assert_eq!(frame.alpha_at(0, 0), Some(255));
        assert_eq!(frame.alpha_at(1, 0), Some(255));
        assert_eq!(frame.timestamp(), Duration::from_millis(5));
    }

    #[test]
    fn test_synthetic_source_is_deterministic_and_stops() {
        let mut a = SyntheticFrameSource::new(8, 4).unwrap().with_seed(7).with_frame_limit(2);
        let mut b = SyntheticFrameSource::new(8, 4).unwrap().with_seed(7).with_frame_limit(2);

        let fa = a.next_frame().unwrap();
        let fb = b.next_frame().unwrap();
        assert_eq!(fa, fb);
        assert_eq!(fa.width(), 8);
        assert_eq!(fa.height(), 4);
        assert!(a.next_frame().is_some());
        assert!(a.next_frame().is_none());
        assert_eq!(a.frames_emitted(), 2);
    }

    #[test]
    fn test_synthetic_timestamps_follow_interval() {
        let mut source = SyntheticFrameSource::new(4, 4)
            .unwrap()
            .with_frame_interval(Duration::from_millis(40), false);

        assert_eq!(source.next_frame().unwrap().timestamp(), Duration::ZERO);
        assert_eq!(source.next_frame().unwrap().timestamp(), Duration::from_millis(40));
        assert_eq!(source.next_frame().unwrap().timestamp(), Duration::from_millis(80));
    }

    #[test]
    fn test_frame_timestamp_saturates() {
        let interval = Duration::from_millis(1);
        let past_u32 = u64::from(u32::MAX) + 10;

        assert_eq!(frame_timestamp(interval, 3), Duration::from_millis(3));
        assert_eq!(frame_timestamp(interval, past_u32), interval * u32::MAX);
        assert_eq!(frame_timestamp(Duration::MAX, 2), Duration::MAX);
    }

    #[test]
    fn test_closure_is_a_frame_source() {
        let mut remaining = 1;
        let mut source = move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            PixelBuffer::filled(1, 1, PixelFormat::Bgra8, [0, 0, 0], Duration::ZERO).ok()
        };
        assert!(source.next_frame().is_some());
        assert!(source.next_frame().is_none());
    }
}
