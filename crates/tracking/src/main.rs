use anyhow::Context;
use automap_core::MapperOptions;
use automap_tracking::{Position, SAMPLE_POSITION};
use serde_json::Value;

fn main() -> anyhow::Result<()> {
    automap_observability::init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read payload from {path}"))?,
        None => {
            tracing::info!("no payload path given; using embedded sample");
            SAMPLE_POSITION.to_string()
        }
    };

    let source: Value = serde_json::from_str(&raw).context("payload is not valid JSON")?;

    let mapper = automap_tracking::bootstrap(MapperOptions::from_env());
    let position: Position = mapper
        .map_value(&source)
        .context("failed to map payload to a position")?;

    tracing::info!(
        id = ?position.id,
        event_id = ?position.event_id,
        tracker_id = ?position.tracker.as_ref().and_then(|t| t.id),
        "payload mapped"
    );

    println!("{}", serde_json::to_string_pretty(&position)?);
    Ok(())
}
