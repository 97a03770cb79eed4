//! # Relist Utilities
//!
//! Helpers shared by the engine and the command-line front end: field
//! specification parsing, label derivation, lookup response parsing, path
//! construction, and configuration file handling.

pub mod config_store;
pub mod field_spec;
pub mod http;
pub mod path_processing;
pub mod text_processing;

pub use config_store::{ConfigError, default_config_path, load_config, load_config_from_path, save_config_to_path};
pub use field_spec::FieldSpec;
pub use path_processing::expand_tilde;
pub use text_processing::{card_title, humanize_label, redact_sensitive, strip_relationship_suffix};
