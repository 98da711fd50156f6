use std::path::PathBuf;

use anyhow::Context;
use vitrine::{content::PortfolioContent, hero::HeroConfig, VitrineApp};

const MODEL_VAR: &str = "VITRINE_MODEL";
const CONTENT_VAR: &str = "VITRINE_CONTENT";

fn load_content() -> anyhow::Result<PortfolioContent> {
    match std::env::var_os(CONTENT_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            log::info!("Loading content from {}", path.display());
            PortfolioContent::from_path(&path)
                .with_context(|| format!("reading content file {}", path.display()))
        }
        None => Ok(PortfolioContent::builtin()?),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = HeroConfig::default();
    if let Some(path) = std::env::var_os(MODEL_VAR) {
        config = config.with_model_path(path);
    }
    let content = load_content()?;

    VitrineApp::new(config, content)
        .context("creating the event loop")?
        .run()
        .context("running the showcase")?;
    Ok(())
}
