//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;
mod record;

pub use cleaner::CatalogCleaner;
pub use loader::CatalogLoader;
pub use record::TitleRecord;
