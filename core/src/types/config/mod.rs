mod app;

pub use app::{
    AppConfig, AppConfigError, DatasetConfig, DisplayConfig, Language, SearchSettings,
};
