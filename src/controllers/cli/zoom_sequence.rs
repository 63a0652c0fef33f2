use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::explorer_session::ExplorerSession;
use crate::core::data::screen_size::ScreenSize;

/// Plays a session forward with a fixed timestep and hands every frame to a
/// file presenter. Stands in for the windowed host when no display exists.
pub struct ZoomSequenceController<P: FilePresenterPort> {
    presenter: P,
    session: ExplorerSession,
    screen: ScreenSize,
    frame_seconds: f64,
}

impl<P: FilePresenterPort> ZoomSequenceController<P> {
    pub fn new(presenter: P, session: ExplorerSession, screen: ScreenSize, fps: u32) -> Self {
        let frame_seconds = if fps == 0 { 0.0 } else { 1.0 / f64::from(fps) };

        Self {
            presenter,
            session,
            screen,
            frame_seconds,
        }
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }

    #[must_use]
    pub fn frame_path(&self, output_dir: &Path, frame: u32) -> PathBuf {
        output_dir.join(format!("frame_{:05}.{}", frame, self.presenter.extension()))
    }

    /// Renders `frames` frames into `output_dir`. The first frame shows the
    /// initial view; each later one advances the zoom by one timestep.
    pub fn run(&mut self, frames: u32, output_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
        let mut written = Vec::with_capacity(frames as usize);

        for frame in 0..frames {
            let elapsed = if frame == 0 { 0.0 } else { self.frame_seconds };
            self.session.update(elapsed, None, false);

            let start = Instant::now();
            let buffer = self.session.render_frame(self.screen)?;
            let duration = start.elapsed();

            let path = self.frame_path(output_dir, frame);
            self.presenter.present(&buffer, &path)?;

            info!(
                "frame {} rendered in {:?}: {}",
                frame,
                duration,
                self.session.telemetry()
            );
            written.push(path);
        }

        Ok(written)
    }
}
