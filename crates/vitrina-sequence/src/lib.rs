pub mod config;
mod sequence;

pub use config::SequenceConfig;
pub use sequence::SequenceGenerator;

/// Inicializa `tracing` para los binarios del crate.
///
/// El filtro se lee de `VITRINA_LOG`; por defecto `info`.
pub fn init_tracing() -> anyhow::Result<()> {
  let filter = tracing_subscriber::EnvFilter::try_from_env("VITRINA_LOG")
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .try_init()
    .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

  Ok(())
}
