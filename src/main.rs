use std::{fs::File, sync::Mutex};

use studyflow::{log_info, util::log::log_dir, App, StudyConfig};

/// Route `tracing` output to `<log dir>/trace.log`; the terminal belongs to
/// the UI. Tracing stays off if the file cannot be created.
fn init_tracing() {
    let dir = log_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    if let Ok(file) = File::create(dir.join("trace.log")) {
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    init_tracing();
    color_eyre::install()?;
    let config = StudyConfig::load()?;
    log_info!("Starting StudyFlow with a {}s focus timer", config.timer.duration_seconds);

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal).await;
    ratatui::restore();
    result
}
