use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use parking_lot::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::live_view::common::config::ViewerConfig;
use crate::live_view::common::error::{Result, ViewerError};
use crate::live_view::frame::{FrameSource, PixelBuffer};
use crate::live_view::integration::IntegrationEngine;
use crate::live_view::pipeline::latest_frame::LatestFrameCell;
use crate::live_view::pipeline::timing::{ProcessingStats, Timer};

/// Capture-side half of the viewer: validation, integration and publishing.
///
/// Cheap to clone; clones share the engine, the output cell and the stats.
#[derive(Clone)]
pub struct CapturePipeline {
    config: Arc<ViewerConfig>,
    engine: Arc<IntegrationEngine>,
    latest: Arc<LatestFrameCell>,
    stats: Arc<Mutex<ProcessingStats>>,
}

impl CapturePipeline {
    pub fn new(config: ViewerConfig) -> Self {
        let engine = IntegrationEngine::new(config.integration_level);
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            latest: Arc::new(LatestFrameCell::new()),
            stats: Arc::new(Mutex::new(ProcessingStats::default())),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Shared with the UI for `set_level` and `reset`.
    pub fn engine(&self) -> &Arc<IntegrationEngine> {
        &self.engine
    }

    pub fn latest(&self) -> &Arc<LatestFrameCell> {
        &self.latest
    }

    pub fn stats(&self) -> ProcessingStats {
        self.stats.lock().clone()
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_frame_dimension {
            if width > max || height > max {
                warn!(
                    "Frame dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(ViewerError::FrameTooLarge { width, height, max });
            }
        }

        Ok(())
    }

    /// Runs one frame through validation and integration and publishes the result.
    pub fn process_frame(&self, frame: PixelBuffer) -> Result<()> {
        if let Err(e) = self.validate_dimensions(frame.width(), frame.height()) {
            self.stats.lock().frames_rejected += 1;
            return Err(e);
        }

        let timer = Timer::start("integrate");
        let output = self.engine.process(frame)?;
        let (name, duration) = timer.stop();

        self.stats.lock().record(duration);
        debug!(step = name, ms = duration.as_secs_f64() * 1000.0, "Frame processed");

        self.latest.publish(output);
        Ok(())
    }

    /// Starts the capture thread. It runs until the source disconnects, the
    /// handle is stopped, or integration buffers cannot be allocated.
    #[instrument(skip(self, source))]
    pub fn spawn<S>(&self, mut source: S) -> CaptureHandle
    where
        S: FrameSource + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let pipeline = self.clone();
        let stop_flag = Arc::clone(&stop);

        info!(level = %self.engine.level(), "Starting capture thread");
        let thread = std::thread::spawn(move || {
            while !stop_flag.load(Ordering::Acquire) {
                let Some(frame) = source.next_frame() else {
                    info!("Frame source disconnected");
                    break;
                };

                match pipeline.process_frame(frame) {
                    Ok(()) => {}
                    Err(e @ ViewerError::AllocationFailed { .. }) => {
                        error!("Stopping capture: {}", e);
                        break;
                    }
                    Err(e) => warn!("Skipping frame: {}", e),
                }
            }
            let processed = pipeline.stats().frames_processed;
            info!(processed, "Capture thread finished");
            processed
        });

        CaptureHandle {
            stop,
            thread: Some(thread),
        }
    }
}

/// Owner of a running capture thread. Dropping it stops and joins the thread.
pub struct CaptureHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<u64>>,
}

impl CaptureHandle {
    /// True once the thread has exited on its own or after `stop`.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Signals the thread and waits for it. Returns the number of frames processed.
    pub fn stop(mut self) -> u64 {
        self.stop.store(true, Ordering::Release);
        self.join_thread()
    }

    /// Waits for the source to disconnect. Returns the number of frames processed.
    pub fn join(mut self) -> u64 {
        self.join_thread()
    }

    fn join_thread(&mut self) -> u64 {
        match self.thread.take().map(JoinHandle::join) {
            Some(Ok(processed)) => processed,
            Some(Err(_)) => {
                error!("Capture thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for CaptureHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        self.join_thread();
    }
}
