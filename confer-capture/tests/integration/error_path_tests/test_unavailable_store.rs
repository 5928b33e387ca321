use bytes::BytesMut;
use confer_capture::{FileFrameGenerator, VideoFrameGenerator};
use confer_core::ErrorKind;

use crate::integration::{init_tracing, memory_generator};
use crate::utils::{TEST_FPS, TEST_FRAME_SIZE, TEST_HEIGHT, TEST_WIDTH, frame_pattern, yuv_store};

#[test]
fn test_missing_file_does_not_fail_construction() {
    init_tracing();

    let mut generator = FileFrameGenerator::open(
        "/nonexistent/confer/source.yuv",
        TEST_WIDTH,
        TEST_HEIGHT,
        TEST_FPS,
    );

    assert!(!generator.is_available());
    assert_eq!(generator.store_len(), None);
    assert_eq!(generator.frame_size(), TEST_FRAME_SIZE);

    for _ in 0..2 {
        let err = generator.generate_next_frame().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceUnavailable);
        assert!(err.to_string().contains("/nonexistent/confer/source.yuv"));
    }
}

#[test]
fn test_dropping_unavailable_source_is_harmless() {
    init_tracing();

    let generator = FileFrameGenerator::open("/nonexistent/confer/other.yuv", 2, 2, 1);
    drop(generator);
}

#[test]
fn test_unavailable_source_leaves_caller_buffer_untouched() {
    init_tracing();

    let mut buf = BytesMut::new();
    memory_generator(yuv_store(1, 0))
        .next_frame_into(&mut buf)
        .expect("Frame failed");

    let mut missing = FileFrameGenerator::open(
        "/nonexistent/confer/source.yuv",
        TEST_WIDTH,
        TEST_HEIGHT,
        TEST_FPS,
    );
    let err = missing.next_frame_into(&mut buf).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceUnavailable);
    assert_eq!(buf.as_ref(), frame_pattern(0, TEST_FRAME_SIZE).as_slice());
}
