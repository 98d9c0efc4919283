use std::sync::Mutex;

use vitrina_core::CoreError;
use vitrina_core::domain::ItemId;
use vitrina_core::ports::IdGenerator;

use crate::config::SequenceConfig;

#[derive(Debug)]
struct State {
  /// Próximo id a entregar.
  next: i64,
  /// Primer id fuera del bloque reservado actualmente.
  ceiling: i64,
}

/// Generador de ids en memoria que reserva bloques de `allocation_size`.
///
/// Los ids son positivos y estrictamente crecientes. Al pasar de
/// `i32::MAX` el generador se agota y devuelve [`CoreError::Sequence`]
/// en lugar de dar la vuelta.
#[derive(Debug)]
pub struct SequenceGenerator {
  allocation_size: i64,
  state: Mutex<State>,
}

impl SequenceGenerator {
  pub fn new(config: &SequenceConfig) -> Result<Self, CoreError> {
    if config.initial_value < 1 {
      return Err(CoreError::Sequence(format!(
        "initial_value must be positive, got {}",
        config.initial_value
      )));
    }
    if config.allocation_size < 1 {
      return Err(CoreError::Sequence(format!(
        "allocation_size must be positive, got {}",
        config.allocation_size
      )));
    }

    let start = i64::from(config.initial_value);
    Ok(Self {
      allocation_size: i64::from(config.allocation_size),
      state: Mutex::new(State { next: start, ceiling: start }),
    })
  }

  /// Último id reservado (no necesariamente entregado todavía).
  pub fn reserved_up_to(&self) -> Result<i64, CoreError> {
    let state = self.lock()?;
    Ok(state.ceiling - 1)
  }

  fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, CoreError> {
    self.state.lock().map_err(|_| CoreError::Sequence("sequence lock poisoned".to_string()))
  }
}

impl IdGenerator for SequenceGenerator {
  fn next_id(&self) -> Result<ItemId, CoreError> {
    let mut state = self.lock()?;

    if state.next > i64::from(i32::MAX) {
      tracing::warn!(next = state.next, "item sequence exhausted");
      return Err(CoreError::Sequence("item identifier sequence exhausted".to_string()));
    }

    if state.next >= state.ceiling {
      state.ceiling = (state.next + self.allocation_size).min(i64::from(i32::MAX) + 1);
      tracing::debug!(from = state.next, to = state.ceiling - 1, "reserved id block");
    }

    let id = state.next as i32;
    state.next += 1;
    Ok(ItemId::from_raw(id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;
  use std::sync::Arc;
  use std::thread;

  fn generator(initial_value: i32, allocation_size: i32) -> SequenceGenerator {
    SequenceGenerator::new(&SequenceConfig { initial_value, allocation_size }).unwrap()
  }

  #[test]
  fn hands_out_increasing_ids_from_the_initial_value() {
    let seq = generator(10, 3);

    let ids: Vec<i32> = (0..5).map(|_| seq.next_id().unwrap().get()).collect();

    assert_eq!(ids, vec![10, 11, 12, 13, 14]);
  }

  #[test]
  fn reserves_whole_blocks() {
    let seq = generator(1, 50);
    assert_eq!(seq.reserved_up_to().unwrap(), 0);

    seq.next_id().unwrap();
    assert_eq!(seq.reserved_up_to().unwrap(), 50);

    for _ in 0..50 {
      seq.next_id().unwrap();
    }
    assert_eq!(seq.reserved_up_to().unwrap(), 100);
  }

  #[test]
  fn rejects_non_positive_settings() {
    let bad_start = SequenceGenerator::new(&SequenceConfig { initial_value: 0, allocation_size: 5 });
    let bad_block = SequenceGenerator::new(&SequenceConfig { initial_value: 1, allocation_size: 0 });

    assert!(matches!(bad_start, Err(CoreError::Sequence(_))));
    assert!(matches!(bad_block, Err(CoreError::Sequence(_))));
  }

  #[test]
  fn stops_at_i32_max_instead_of_wrapping() {
    let seq = generator(i32::MAX - 1, 50);

    assert_eq!(seq.next_id().unwrap().get(), i32::MAX - 1);
    assert_eq!(seq.next_id().unwrap().get(), i32::MAX);
    assert!(matches!(seq.next_id(), Err(CoreError::Sequence(_))));
    assert!(matches!(seq.next_id(), Err(CoreError::Sequence(_))));
  }

  #[test]
  fn concurrent_callers_never_share_an_id() {
    let seq = Arc::new(generator(1, 7));

    let handles: Vec<_> = (0..4)
      .map(|_| {
        let seq = Arc::clone(&seq);
        thread::spawn(move || (0..250).map(|_| seq.next_id().unwrap().get()).collect::<Vec<_>>())
      })
      .collect();

    let mut seen = HashSet::new();
    for handle in handles {
      for id in handle.join().unwrap() {
        assert!(seen.insert(id), "duplicate id {id}");
      }
    }
    assert_eq!(seen.len(), 1000);
  }
}
