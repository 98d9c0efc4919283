use std::{fmt, str::FromStr};

use thiserror::Error;

/// Operaciones del runtime de persistencia que pueden propagarse por una
/// asociación.
///
/// Vitrina no persiste nada: esto es sólo la declaración que un runtime
/// externo debe respetar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cascade {
  Persist,
  Merge,
  Remove,
  Refresh,
  /// Todas las anteriores.
  All,
}

impl fmt::Display for Cascade {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = match self {
      Cascade::Persist => "persist",
      Cascade::Merge => "merge",
      Cascade::Remove => "remove",
      Cascade::Refresh => "refresh",
      Cascade::All => "all",
    };
    write!(f, "{}", text)
  }
}

/// Error producido cuando una cadena no puede convertirse en [`Cascade`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cascade: {input}")]
pub struct CascadeParseError {
  pub input: String,
}

impl FromStr for Cascade {
  type Err = CascadeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let cascade = match s.trim().to_lowercase().as_str() {
      "persist" => Cascade::Persist,
      "merge" => Cascade::Merge,
      "remove" => Cascade::Remove,
      "refresh" => Cascade::Refresh,
      "all" => Cascade::All,
      _ => return Err(CascadeParseError { input: s.to_string() }),
    };

    Ok(cascade)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
  ManyToOne,
  OneToOne,
}

/// Descripción estática de una asociación entre entidades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Association {
  /// Campo de la entidad origen que guarda la referencia.
  pub field: &'static str,
  /// Nombre de la entidad destino.
  pub target: &'static str,
  pub cardinality: Cardinality,
  pub cascade: &'static [Cascade],
}

impl Association {
  /// Indica si `op` debe propagarse desde el origen hacia el destino.
  pub fn cascades(&self, op: Cascade) -> bool {
    self.cascade.iter().any(|c| *c == Cascade::All || *c == op)
  }
}
