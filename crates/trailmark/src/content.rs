mod front_matter;
mod item;
mod page;
mod repository;
mod taxonomy;

pub use front_matter::*;
pub use item::*;
pub use page::*;
pub use repository::*;
pub use taxonomy::*;
