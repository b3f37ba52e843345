use std::time::Duration;

use microscope_view_rs::live_view::{
    CalibrationEvent, CalibrationPreset, CalibrationState, CalibrationStore, CapturePipeline,
    FrameDisplay, InMemoryCalibrationStore, IntegrationLevel, KnownLength, ScaleBar,
    ScaleBarCalculator, Size, pointer_to_image, SyntheticFrameSource, ViewTransform, ViewerConfig,
};
use microscope_view_rs::logger;

use nalgebra::{Point2, Vector2};
use tracing::{info, warn};

const CAMERA_ID: &str = "synthetic-0";
const FRAME_WIDTH: usize = 640;
const FRAME_HEIGHT: usize = 480;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting microscope view...");

    let config = ViewerConfig::builder()
        .integration_level(IntegrationLevel::X4)
        .zoom_step(1.25)
        .build();
    let pipeline = CapturePipeline::new(config.clone());
    let calculator = ScaleBarCalculator::new(config.scale_bar.clone());

    info!("Integration: {}", pipeline.engine().level());

    let source = SyntheticFrameSource::new(FRAME_WIDTH, FRAME_HEIGHT)?
        .with_frame_interval(Duration::from_millis(33), true)
        .with_frame_limit(90);
    let handle = pipeline.spawn(source);

    let image = Size::from((FRAME_WIDTH, FRAME_HEIGHT));
    let view = Size::new(1280.0, 720.0);
    let mut transform = ViewTransform::new();
    let mut frame_display = FrameDisplay::new();
    let mut store = InMemoryCalibrationStore::new();

    // Calibrate against a 0.1" header pitch spanning 254 image pixels
    let to_image = |p: Point2<f64>, t: &ViewTransform| pointer_to_image(p, t, image, view);
    let fit = ViewTransform::fit_scale(image, view);
    let start = Point2::new(400.0, 360.0);
    let end = start + Vector2::new(254.0 * fit, 0.0);
    let state = CalibrationState::default()
        .on_event(CalibrationEvent::PointerDown(to_image(start, &transform)))
        .on_event(CalibrationEvent::PointerMoved(to_image(end, &transform)))
        .on_event(CalibrationEvent::PointerUp(to_image(end, &transform)))
        .on_event(CalibrationEvent::PromptKnownLength);
    let (_, calibration) = state.commit(
        &KnownLength::Preset(CalibrationPreset::HeaderPitch),
        CAMERA_ID,
        FRAME_WIDTH,
        FRAME_HEIGHT,
        &mut store,
    )?;
    info!("Calibrated: {:.3} µm/px", calibration.microns_per_pixel);

    let cursor = Point2::new(900.0, 250.0);
    let mut ticks = 0u32;
    while !handle.is_finished() {
        std::thread::sleep(Duration::from_millis(50));
        ticks += 1;
        frame_display.refresh(pipeline.latest());

        match ticks {
            10 => frame_display.freeze(),
            20 => frame_display.unfreeze(),
            _ => {}
        }
        if ticks % 5 == 0 {
            transform.zoom_in(config.zoom_step, cursor, image, view);
        }

        match scale_bar_for(&frame_display, &store, &calculator, &transform) {
            Some(bar) => info!(
                zoom = transform.zoom_factor(),
                frozen = frame_display.is_frozen(),
                "Scale bar: {} ({:.0} px)",
                bar.label,
                bar.width_screen_units
            ),
            None => {
                if let Some(frame) = frame_display.displayed() {
                    warn!("No calibration for {}x{}", frame.width(), frame.height());
                }
            }
        }
    }

    let processed = handle.join();
    let stats = pipeline.stats();
    info!(
        "Processed {} frames ({} dropped by display) at {:.3}ms average",
        processed,
        pipeline.latest().dropped_count(),
        stats.average_ms()
    );

    Ok(())
}

/// Scale bar for the displayed frame, if its resolution has a calibration.
fn scale_bar_for<S: CalibrationStore>(
    frame_display: &FrameDisplay,
    store: &S,
    calculator: &ScaleBarCalculator,
    transform: &ViewTransform,
) -> Option<ScaleBar> {
    let frame = frame_display.displayed()?;
    let calibration = store.get(CAMERA_ID, frame.width(), frame.height())?;
    Some(calculator.calculate(calibration.microns_per_pixel, transform.zoom_factor()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use microscope_view_rs::live_view::{Calibration, LatestFrameCell, PixelBuffer, PixelFormat};

    #[test]
    fn test_scale_bar_follows_displayed_frame() {
        let cell = LatestFrameCell::new();
        let mut frame_display = FrameDisplay::new();
        let mut store = InMemoryCalibrationStore::new();
        let calculator = ScaleBarCalculator::default();
        let mut transform = ViewTransform::new();
        let image = Size::from((FRAME_WIDTH, FRAME_HEIGHT));
        let view = Size::new(1280.0, 720.0);

        assert!(scale_bar_for(&frame_display, &store, &calculator, &transform).is_none());

        cell.publish(
            PixelBuffer::filled(FRAME_WIDTH, FRAME_HEIGHT, PixelFormat::Bgra8, [9; 3], Duration::ZERO)
                .unwrap(),
        );
        frame_display.refresh(&cell);
        frame_display.freeze();
        assert!(scale_bar_for(&frame_display, &store, &calculator, &transform).is_none());

        store.put(Calibration::new(CAMERA_ID, FRAME_WIDTH, FRAME_HEIGHT, 10.0).unwrap());
        transform.zoom(2.0, Point2::new(640.0, 360.0), image, view);
        let bar = scale_bar_for(&frame_display, &store, &calculator, &transform).unwrap();

        assert!(frame_display.is_frozen());
        assert_eq!(bar.length_microns, 500.0);
        assert_eq!(bar.label, "500 µm");
    }
}
