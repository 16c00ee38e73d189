mod capture;
mod config;

use capture::CaptureLine;
use config::{ClientVersion, ReplayConfig};
use rewind_data::MappingData;
use rewind_protocol_core::{ProtocolPipeline, ProtocolTranslator};
use rewind_protocol_v1_21_2to1_21::Protocol1_21_2To1_21;
use rewind_protocol_v1_21to1_20_5::Protocol1_21To1_20_5;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let capture_path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: rewind-replay <capture file>"))?;

    let config = ReplayConfig::load(Path::new("config/rewind.toml"))?;
    info!("Config loaded: client_version={:?}", config.client_version);

    let mappings = Arc::new(match &config.mappings_file {
        Some(path) => MappingData::load(path)?,
        None => MappingData::default(),
    });

    let mut pipeline = ProtocolPipeline::new(translators(&config, mappings));
    info!(
        "Translating protocol {:?} to {:?}",
        pipeline.server_protocol(),
        pipeline.client_protocol()
    );

    let packets = capture::parse(&std::fs::read_to_string(&capture_path)?)?;
    let mut dropped = 0;
    for packet in &packets {
        let routed = pipeline.process(
            packet.state,
            packet.direction,
            packet.id,
            packet.payload.clone(),
        );
        dropped += routed.dropped;
        for out in routed.to_client.iter().chain(&routed.to_server) {
            println!(
                "{}",
                CaptureLine {
                    state: packet.state,
                    packet: out,
                }
            );
        }
    }

    info!("Replayed {} packets, {} dropped", packets.len(), dropped);
    Ok(())
}

/// Translator chain from the 1.21.2 server down to the configured client version.
fn translators(
    config: &ReplayConfig,
    mappings: Arc<MappingData>,
) -> Vec<Arc<dyn ProtocolTranslator>> {
    let mut translators: Vec<Arc<dyn ProtocolTranslator>> = vec![Arc::new(
        Protocol1_21_2To1_21::new(mappings.clone(), &config.translator),
    )];
    if config.client_version == ClientVersion::V1_20_5 {
        translators.push(Arc::new(Protocol1_21To1_20_5::new(mappings)));
    }
    translators
}
