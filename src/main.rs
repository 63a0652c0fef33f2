use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use fractal_zoom::{ExplorerConfig, PpmFilePresenter, ScreenSize, ZoomSequenceController};

/// Renders a Mandelbrot or Julia zoom as a numbered sequence of PPM frames.
#[derive(Parser, Debug, Clone)]
#[command(name = "fractal_zoom", version, about = "Escape-time fractal zoom renderer")]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u32,

    /// Simulated frames per second; each frame advances the zoom by 1/fps seconds.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[arg(long, default_value_t = 200)]
    max_iterations: u32,

    /// Zoom growth per second, in [0, 0.5].
    #[arg(long, default_value_t = 0.01)]
    zoom_rate: f64,

    #[arg(long, default_value_t = 0.42884, allow_hyphen_values = true)]
    center_x: f64,

    #[arg(long, default_value_t = -0.231345, allow_hyphen_values = true)]
    center_y: f64,

    /// Render the Julia set for the center instead of the Mandelbrot set.
    #[arg(long, default_value_t = false)]
    julia: bool,

    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

impl Args {
    fn explorer_config(&self) -> ExplorerConfig {
        let mut config = ExplorerConfig {
            zoom_rate: self.zoom_rate,
            max_iterations: self.max_iterations,
            start_with_julia: self.julia,
            ..ExplorerConfig::default()
        };
        config.center.real = self.center_x;
        config.center.imag = self.center_y;
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let session = args.explorer_config().build_session()?;
    let screen = ScreenSize::new(args.width, args.height)?;
    std::fs::create_dir_all(&args.output_dir)?;

    let mut controller =
        ZoomSequenceController::new(PpmFilePresenter::new(), session, screen, args.fps);
    let written = controller.run(args.frames, &args.output_dir)?;

    info!(
        "wrote {} frames to {}",
        written.len(),
        args.output_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_default_config() {
        let args = Args::parse_from(["fractal_zoom"]);

        assert_eq!(args.explorer_config(), ExplorerConfig::default());
        assert_eq!(args.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_negative_center_and_julia() {
        let args = Args::parse_from([
            "fractal_zoom",
            "--center-x",
            "-0.8",
            "--center-y",
            "0.156",
            "--julia",
        ]);
        let config = args.explorer_config();

        assert_eq!(config.center.real, -0.8);
        assert_eq!(config.center.imag, 0.156);
        assert!(config.start_with_julia);
    }

    #[test]
    fn test_out_of_range_zoom_rate_is_rejected() {
        let args = Args::parse_from(["fractal_zoom", "--zoom-rate", "0.9"]);

        assert!(args.explorer_config().build_session().is_err());
    }
}
