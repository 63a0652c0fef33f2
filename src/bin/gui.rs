fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let session = fractal_zoom::ExplorerConfig::default().build_session()?;
    fractal_zoom::run_gui(session)
}
