use crate::domain::ItemId;
use crate::errors::CoreError;

/// Port del generador de identificadores de items.
///
/// Los ids devueltos deben ser positivos y no repetirse nunca dentro del
/// mismo generador. Puede compartirse entre hilos.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> Result<ItemId, CoreError>;
}
