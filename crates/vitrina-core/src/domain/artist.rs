use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Autor de uno o varios [`Item`](crate::domain::Item).
///
/// La relación es unidireccional: el item apunta al artista, pero el
/// artista no sabe nada de sus items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre con el que se muestra.
  pub name: String,
}

impl Artist {
  pub fn new(name: impl Into<String>) -> Self {
    Artist { id: ArtistId::new(), name: name.into() }
  }
}
