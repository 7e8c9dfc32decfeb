pub mod app;
pub mod args;
pub mod loader;
pub mod query;
pub mod settings;

pub use app::run;
pub use args::Args;
pub use loader::PolicyLoader;
pub use query::Query;
pub use settings::{DisplaySettings, SettingsFile};
