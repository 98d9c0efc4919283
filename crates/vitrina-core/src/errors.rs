// crates/vitrina-core/src/errors.rs
use thiserror::Error;

/// Error del núcleo de Vitrina.
///
/// Las entidades sólo producen [`CoreError::InvalidArgument`]; el resto de
/// variantes las generan los adapters que implementan los ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("sequence error: {0}")]
  Sequence(String),
}
