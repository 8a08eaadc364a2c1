/// Plain-text fleet configuration and revision-set files
pub mod config_store;

pub use config_store::{ConfigStore, ConfigStoreError};
