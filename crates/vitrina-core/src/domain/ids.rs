use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtistId(Uuid);

impl ArtistId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    ArtistId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    ArtistId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for ArtistId {
  fn from(u: Uuid) -> Self {
    ArtistId(u)
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// Identificador numérico de un [`Item`](crate::domain::Item).
///
/// Nunca lo elige la entidad: lo asigna un generador externo
/// ([`IdGenerator`](crate::ports::IdGenerator)). Mientras no se haya
/// asignado vale [`ItemId::UNASSIGNED`] (cero).
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(i32);

impl ItemId {
  pub const UNASSIGNED: ItemId = ItemId(0);

  pub fn from_raw(raw: i32) -> Self {
    ItemId(raw)
  }

  pub fn get(&self) -> i32 {
    self.0
  }

  pub fn is_assigned(&self) -> bool {
    self.0 != 0
  }
}

impl From<i32> for ItemId {
  fn from(raw: i32) -> Self {
    ItemId(raw)
  }
}

impl From<ItemId> for i32 {
  fn from(id: ItemId) -> Self {
    id.0
  }
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
