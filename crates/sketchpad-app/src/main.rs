//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Sketchpad");

    let config = match sketchpad_app::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sketchpad_app::run(config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
