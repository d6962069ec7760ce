use eframe::NativeOptions;
use figures::app::FiguresApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = FiguresApp::default();
    let native_options = NativeOptions::default();
    let result = eframe::run_native(
        "Трёхмерные сцены",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    );

    if let Err(error) = &result {
        log::error!("не удалось запустить приложение: {error}");
    }
    result
}
