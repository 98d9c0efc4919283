use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::artist::Artist;
use crate::domain::association::{Association, Cardinality, Cascade};
use crate::domain::ids::ItemId;
use crate::errors::CoreError;
use crate::reconstruct::ItemParts;

/// Una obra del catálogo (cuadro, disco, libro...) creada por un [`Artist`].
///
/// El estado sólo cambia a través de setters que validan la entrada; si la
/// validación falla el valor anterior se conserva. El identificador no tiene
/// setter: lo asigna un proceso externo mediante
/// [`reconstruct::assign_id`](crate::reconstruct::assign_id).
///
/// Para reconstruir un item campo a campo (por ejemplo, al leerlo de un
/// almacenamiento) existe [`Item::from_parts`], que no valida nada.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ItemParts")]
pub struct Item {
  pub(crate) id: ItemId,
  pub(crate) title: Option<String>,
  pub(crate) artist: Option<Arc<Artist>>,
}

impl Item {
  /// Relación `artist`: muchos items por artista, con persist en cascada.
  pub const ARTIST_ASSOCIATION: Association = Association {
    field: "artist",
    target: "Artist",
    cardinality: Cardinality::ManyToOne,
    cascade: &[Cascade::Persist],
  };

  /// Crea un item con título y sin artista ni identificador.
  ///
  /// El título se guarda tal cual, sin pasar por la validación de
  /// [`Item::set_title`]; un título vacío es aceptado aquí.
  pub fn new(title: impl Into<String>) -> Self {
    Item { id: ItemId::UNASSIGNED, title: Some(title.into()), artist: None }
  }

  pub fn id(&self) -> ItemId {
    self.id
  }

  pub fn title(&self) -> Option<&str> {
    self.title.as_deref()
  }

  /// Reemplaza el título.
  ///
  /// Falla con [`CoreError::InvalidArgument`] si `title` es `None` o queda
  /// vacío tras recortar espacios. El valor guardado es el original, sin
  /// recortar.
  pub fn set_title(&mut self, title: Option<&str>) -> Result<(), CoreError> {
    match title {
      Some(t) if !t.trim().is_empty() => {
        self.title = Some(t.to_owned());
        Ok(())
      }
      _ => Err(CoreError::InvalidArgument("null or empty title not allowed".to_string())),
    }
  }

  pub fn artist(&self) -> Option<&Arc<Artist>> {
    self.artist.as_ref()
  }

  /// Reemplaza el artista. `None` se rechaza con
  /// [`CoreError::InvalidArgument`].
  pub fn set_artist(&mut self, artist: impl Into<Option<Arc<Artist>>>) -> Result<(), CoreError> {
    let Some(artist) = artist.into() else {
      return Err(CoreError::InvalidArgument(format!("null Artist for {self}")));
    };

    self.artist = Some(artist);
    Ok(())
  }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.title {
      Some(title) => write!(f, "Item[id={}, title={}]", self.id, title),
      None => write!(f, "Item[id={}, title=<unset>]", self.id),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn starry_night() -> Item {
    Item::new("Starry Night")
  }

  #[test]
  fn new_keeps_title_and_leaves_the_rest_unset() {
    let item = starry_night();

    assert_eq!(item.title(), Some("Starry Night"));
    assert_eq!(item.id(), ItemId::UNASSIGNED);
    assert!(item.artist().is_none());
  }

  #[test]
  fn new_does_not_validate_the_title() {
    assert_eq!(Item::new("").title(), Some(""));
    assert_eq!(Item::new("   ").title(), Some("   "));
  }

  #[test]
  fn set_title_stores_the_value_untrimmed() {
    let mut item = starry_night();

    item.set_title(Some("  Sunflowers ")).unwrap();

    assert_eq!(item.title(), Some("  Sunflowers "));
  }

  #[test]
  fn set_title_rejects_missing_and_blank_values() {
    let mut item = starry_night();

    for bad in [None, Some(""), Some("   "), Some("\t\n")] {
      let err = item.set_title(bad).unwrap_err();
      assert_eq!(err, CoreError::InvalidArgument("null or empty title not allowed".into()));
      assert_eq!(item.title(), Some("Starry Night"));
    }
  }

  #[test]
  fn set_artist_keeps_the_same_reference() {
    let mut item = starry_night();
    let van_gogh = Arc::new(Artist::new("Vincent van Gogh"));

    item.set_artist(Arc::clone(&van_gogh)).unwrap();

    assert!(Arc::ptr_eq(item.artist().unwrap(), &van_gogh));
  }

  #[test]
  fn set_artist_rejects_none_and_mentions_the_item() {
    let mut item = starry_night();
    let van_gogh = Arc::new(Artist::new("Vincent van Gogh"));
    item.set_artist(Arc::clone(&van_gogh)).unwrap();

    let err = item.set_artist(None).unwrap_err();

    match err {
      CoreError::InvalidArgument(msg) => {
        assert_eq!(msg, "null Artist for Item[id=0, title=Starry Night]");
      }
      other => panic!("unexpected error: {other:?}"),
    }
    assert!(Arc::ptr_eq(item.artist().unwrap(), &van_gogh));
  }

  #[test]
  fn artist_association_cascades_only_persist() {
    let assoc = Item::ARTIST_ASSOCIATION;

    assert_eq!(assoc.cardinality, Cardinality::ManyToOne);
    assert!(assoc.cascades(Cascade::Persist));
    assert!(!assoc.cascades(Cascade::Remove));
    assert!(!assoc.cascades(Cascade::Merge));
  }

  #[test]
  fn display_handles_unset_title() {
    let item = Item::from_parts(ItemParts::default());
    assert_eq!(item.to_string(), "Item[id=0, title=<unset>]");
  }
}
