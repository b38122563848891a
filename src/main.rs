use suspense_recipe::config::FetchConfig;
use suspense_recipe::lifecycle::{setup_tracing, Renderer};
use suspense_recipe::views::App;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = FetchConfig::from_env().map_err(|e| e.to_string())?;
    info!(url = %config.url, delay = ?config.delay, "Starting suspense demo");

    let mut renderer = Renderer::new(App::from_config(&config));

    let span = tracing::info_span!("render");
    let frames = match renderer.run().instrument(span).await {
        Ok(frames) => frames,
        Err(e) => {
            error!(error = %e, "Render failed");
            return Err(e.to_string());
        }
    };

    for (pass, frame) in frames.iter().enumerate() {
        println!("[frame {}] {}", pass + 1, frame.node);
    }

    info!(frames = frames.len(), "Application completed successfully");
    Ok(())
}
