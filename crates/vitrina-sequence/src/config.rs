use serde::{Deserialize, Serialize};
use vitrina_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};

/// Sección `[sequence]` de vitrina.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SequenceConfig {
  /// Primer id que entrega el generador.
  #[serde(default = "default_initial_value")]
  pub initial_value: i32,

  /// Cuántos ids se reservan de golpe cada vez que se agota el bloque.
  #[serde(default = "default_allocation_size")]
  pub allocation_size: i32,
}

fn default_initial_value() -> i32 {
  1
}

fn default_allocation_size() -> i32 {
  50
}

impl Default for SequenceConfig {
  fn default() -> Self {
    SequenceConfig {
      initial_value: default_initial_value(),
      allocation_size: default_allocation_size(),
    }
  }
}

impl SequenceConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("sequence")?;
    CONFIG_BACKEND.save_section("sequence", &cfg)?;
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default("sequence")
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("sequence", self)
  }
}
