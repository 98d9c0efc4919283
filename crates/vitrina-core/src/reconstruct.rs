//! Camino de reconstrucción para código de confianza.
//!
//! Un runtime externo (almacenamiento, deserialización, fixtures de test)
//! necesita rellenar un [`Item`] campo a campo sin pasar por los setters
//! validados, y a veces en varios pasos antes de que el item sea válido.
//! Ese es el único uso previsto de este módulo; el código de aplicación
//! debe usar [`Item::new`] y los setters.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{Artist, Item, ItemId};
use crate::errors::CoreError;
use crate::ports::IdGenerator;

/// Campos en bruto de un [`Item`].
///
/// `ItemParts::default()` equivale al constructor sin argumentos: id sin
/// asignar, sin título y sin artista.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemParts {
  pub id: ItemId,
  pub title: Option<String>,
  pub artist: Option<Arc<Artist>>,
}

impl Item {
  /// Construye un item a partir de sus campos sin validar nada.
  pub fn from_parts(parts: ItemParts) -> Self {
    tracing::trace!(id = %parts.id, has_title = parts.title.is_some(), "reconstructing item");
    Item { id: parts.id, title: parts.title, artist: parts.artist }
  }

  pub fn into_parts(self) -> ItemParts {
    ItemParts { id: self.id, title: self.title, artist: self.artist }
  }
}

impl From<ItemParts> for Item {
  fn from(parts: ItemParts) -> Self {
    Item::from_parts(parts)
  }
}

/// Asigna a `item` el siguiente id de `generator`.
///
/// Un item que ya tiene id no se renumera: devuelve
/// [`CoreError::InvalidArgument`] y no consume ningún valor del generador.
pub fn assign_id<G>(item: &mut Item, generator: &G) -> Result<ItemId, CoreError>
where
  G: IdGenerator + ?Sized,
{
  if item.id.is_assigned() {
    return Err(CoreError::InvalidArgument(format!("{item} already has an identifier")));
  }

  let id = generator.next_id()?;
  item.id = id;
  tracing::trace!(%id, "identifier assigned");
  Ok(id)
}
