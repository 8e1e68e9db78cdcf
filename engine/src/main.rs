// Engine main entry point
use anyhow::anyhow;
use engine::config::settings::SearchSettings;
use engine::patterns::search::SearchParams;
use engine::services::pattern_service::PatternService;
use engine::services::report;
use shared::models::TimeFrame;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting pattern engine...");

    // Optional settings file path as the first argument; defaults otherwise.
    let settings = match std::env::args().nth(1) {
        Some(path) => SearchSettings::load_from_file(&path)?,
        None => SearchSettings::default(),
    };
    let timeframe = TimeFrame::parse(&settings.timeframe)
        .ok_or_else(|| anyhow!("Unknown timeframe '{}'", settings.timeframe))?;

    let mut service = PatternService::new();
    service.load_csv(&settings.csv_path, &settings.symbol, timeframe)?;

    let params = SearchParams {
        window: settings.window,
        forward: settings.forward,
        top_n: settings.top_n,
    };
    let outcome = service.find_patterns(&settings.symbol, timeframe, &params)?;

    print!("{}", report::render(&outcome, settings.window));
    Ok(())
}
