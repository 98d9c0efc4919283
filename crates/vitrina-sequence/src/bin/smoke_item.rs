use std::sync::Arc;

use vitrina_core::domain::{Artist, Item};
use vitrina_core::reconstruct;
use vitrina_sequence::{SequenceConfig, SequenceGenerator};

fn main() -> anyhow::Result<()> {
  vitrina_sequence::init_tracing()?;

  // usa VITRINA_BASE_DIR si no quieres tocar la config del sistema
  let config = SequenceConfig::load()?;
  let ids = SequenceGenerator::new(&config)?;

  let mut item = Item::new("Starry Night");
  reconstruct::assign_id(&mut item, &ids)?;
  tracing::info!(%item, "created");

  if let Err(e) = item.set_artist(None) {
    tracing::info!(error = %e, "rejected missing artist");
  }

  let van_gogh = Arc::new(Artist::new("Vincent van Gogh"));
  item.set_artist(Arc::clone(&van_gogh))?;
  tracing::info!(artist = %van_gogh.name, artist_id = %van_gogh.id, "artist linked");

  if let Err(e) = item.set_title(Some("")) {
    tracing::info!(error = %e, title = ?item.title(), "rejected empty title");
  }

  let cascade = Item::ARTIST_ASSOCIATION.cascade;
  println!("{item} -> {} (cascade {:?})", van_gogh.name, cascade);

  Ok(())
}
