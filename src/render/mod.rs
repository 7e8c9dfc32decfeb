pub mod table;

pub use table::TableRenderer;
