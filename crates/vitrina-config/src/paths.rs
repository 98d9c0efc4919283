use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios donde Vitrina guarda su configuración.
///
/// Con `VITRINA_BASE_DIR` definido todo cuelga de esa carpeta (modo
/// portable); si no, se usan los directorios estándar de la plataforma.
#[derive(Debug, Clone)]
pub struct VitrinaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl VitrinaPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var("VITRINA_BASE_DIR") {
      return Self::from_base(env_base);
    }

    let proj_dirs = ProjectDirs::from("com", "vitrina", "vitrina").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  /// Layout portable: `<base>/config`.
  pub fn from_base(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base_dir = base.as_ref().to_path_buf();
    let config_dir = base_dir.join("config");
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir, config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("vitrina.toml")
  }
}
