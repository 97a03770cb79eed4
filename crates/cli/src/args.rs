use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use relist_types::{ListConfig, RenderShape};
use relist_util::{default_config_path, expand_tilde, load_config_from_path};
use tracing::debug;

/// Show the records related to a parent record.
#[derive(Parser, Debug)]
#[command(name = "relist", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch related records and print the list
    Show(ShowArgs),
    /// Print the destination of the "see more" action
    Navigate(ListArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Show every fetched row instead of the first `--limit`
    #[arg(long)]
    pub all: bool,

    /// Start with the list body collapsed (requires a collapsible list)
    #[arg(long)]
    pub collapsed: bool,

    /// Read records from a JSON file instead of calling the lookup service
    #[arg(long, value_name = "PATH")]
    pub records_file: Option<PathBuf>,

    /// Print the render surface as JSON
    #[arg(long)]
    pub json: bool,
}

/// List configuration. Flags override values read from the config file.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Config file (JSON or YAML); defaults to $RELIST_CONFIG_PATH or the user config dir
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    #[arg(long)]
    pub record_id: Option<String>,

    /// API name of the child record type
    #[arg(long)]
    pub child_object: Option<String>,

    /// Lookup field on the child pointing at the parent
    #[arg(long)]
    pub lookup_field: Option<String>,

    /// Child relationship name, used for the title and navigation
    #[arg(long)]
    pub relationship: Option<String>,

    /// Comma-separated fields; the first one is the link/title
    #[arg(long)]
    pub fields: Option<String>,

    /// Rows shown before "View All"
    #[arg(long)]
    pub limit: Option<usize>,

    /// table or card
    #[arg(long)]
    pub shape: Option<RenderShape>,

    #[arg(long)]
    pub collapsible: bool,

    /// Flag document-identifier fields as images (card shape)
    #[arg(long)]
    pub image_aware: bool,

    /// Field holding a document identifier
    #[arg(long)]
    pub image_field: Option<String>,

    #[arg(long)]
    pub view_all_page: Option<String>,

    #[arg(long)]
    pub view_all_component: Option<String>,

    /// Parent object type for the related-list URL
    #[arg(long)]
    pub parent_object: Option<String>,

    /// Object type of the hosting record page
    #[arg(long)]
    pub object: Option<String>,

    /// URL namespace for the related-list URL
    #[arg(long)]
    pub namespace: Option<String>,
}

impl ListArgs {
    /// Load the config file and apply flag overrides.
    pub fn resolve_config(&self) -> Result<ListConfig> {
        let path = self
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(default_config_path);
        debug!(path = %path.display(), "resolving list config");
        let mut config =
            load_config_from_path(&path).with_context(|| format!("failed to load config from {}", path.display()))?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut ListConfig) {
        fn set(target: &mut Option<String>, value: &Option<String>) {
            if let Some(value) = value {
                *target = Some(value.clone());
            }
        }

        set(&mut config.record_id, &self.record_id);
        set(&mut config.child_object_api_name, &self.child_object);
        set(&mut config.lookup_field_api_name, &self.lookup_field);
        set(&mut config.child_relationship_name, &self.relationship);
        set(&mut config.fields_list, &self.fields);
        set(&mut config.image_field, &self.image_field);
        if let Some(limit) = self.limit {
            config.record_limit = limit;
        }
        if let Some(shape) = self.shape {
            config.shape = shape;
        }
        config.collapsible |= self.collapsible;
        config.image_aware |= self.image_aware;

        let nav = &mut config.navigation;
        set(&mut nav.view_all_page, &self.view_all_page);
        set(&mut nav.view_all_component, &self.view_all_component);
        set(&mut nav.parent_object_api_name, &self.parent_object);
        set(&mut nav.object_api_name, &self.object);
        set(&mut nav.namespace, &self.namespace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_flags() {
        let cli = Cli::try_parse_from([
            "relist",
            "show",
            "--record-id",
            "001A",
            "--fields",
            "Name,ProductCode",
            "--shape",
            "card",
            "--limit",
            "3",
            "--all",
            "--json",
        ])
        .expect("parse");

        let Command::Show(show) = cli.command else {
            panic!("expected show");
        };
        assert!(show.all);
        assert!(show.json);
        assert_eq!(show.list.shape, Some(RenderShape::Card));
        assert_eq!(show.list.limit, Some(3));
    }

    #[test]
    fn rejects_unknown_shape() {
        assert!(Cli::try_parse_from(["relist", "show", "--shape", "grid"]).is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let mut config = ListConfig {
            record_id: Some("from-file".into()),
            child_object_api_name: Some("Product2".into()),
            collapsible: true,
            ..ListConfig::default()
        };
        let args = ListArgs {
            record_id: Some("from-flag".into()),
            limit: Some(5),
            parent_object: Some("Account".into()),
            ..ListArgs::default()
        };

        args.apply_overrides(&mut config);
        assert_eq!(config.record_id.as_deref(), Some("from-flag"));
        assert_eq!(config.child_object_api_name.as_deref(), Some("Product2"));
        assert_eq!(config.record_limit, 5);
        assert!(config.collapsible);
        assert_eq!(config.navigation.parent_object_api_name.as_deref(), Some("Account"));
    }

    #[test]
    fn resolve_config_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, r#"{"fieldsList": "Name", "recordLimit": 4}"#).unwrap();

        let args = ListArgs {
            config: Some(path.display().to_string()),
            ..ListArgs::default()
        };
        let config = args.resolve_config().expect("config");
        assert_eq!(config.fields_list.as_deref(), Some("Name"));
        assert_eq!(config.record_limit, 4);
    }
}
