#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use btc_dashboard::{Cli, build_engine, run_app, ui::UI_CONFIG, ui::config::UI_TEXT};

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use eframe::NativeOptions;
    use eframe::egui::ViewportBuilder;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for the HTTP client. Fetch threads borrow its handle.
    let rt = Runtime::new()?;
    let engine = build_engine(&args, rt.handle().clone())?;
    log::info!(
        "Dashboard backend: {} (initial selection {})",
        args.api_url,
        engine.state().selection
    );

    // D. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default().with_min_inner_size(UI_CONFIG.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, engine))),
    )
    .map_err(|e| anyhow::anyhow!("Window failed: {e}"))
}
