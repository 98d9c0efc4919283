pub mod artist;
pub mod association;
pub mod ids;
pub mod item;

pub use artist::Artist;
pub use association::{Association, Cardinality, Cascade};
pub use ids::{ArtistId, ItemId};
pub use item::Item;
