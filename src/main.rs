#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    sizetip::logging::init();
    log::info!("sizetip v{}", env!("CARGO_PKG_VERSION"));

    #[cfg(target_os = "windows")]
    std::process::exit(windows_main::run());

    #[cfg(not(target_os = "windows"))]
    {
        log::error!("{}", sizetip::Error::Unsupported);
        std::process::exit(1);
    }
}
