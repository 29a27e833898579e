pub mod console;
pub mod engine;
pub mod moves;
pub mod players;

pub type Score = u32;

/// Sets up logging into logs/. Call before anything else in main.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_thread_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_location_level(log::LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(
        log::LevelFilter::Info,
        config,
        std::fs::File::create("logs/rpsls.log").expect("create log file"),
    )
    .expect("initialize logger");
}
