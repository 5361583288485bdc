//! List command handler

use crate::cli::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::handlers::utils::{asset_provider, SharedProvider};
use crate::output::OutputWriter;
use resource_schema::{AssetProvider, ResourceName, SchemaDocumentLoader};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// One row of `list --long`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn describe(provider: &SharedProvider, name: String) -> ListEntry {
    let loaded = ResourceName::new(name.as_str())
        .and_then(|resource| SchemaDocumentLoader::new(resource, Arc::clone(provider)).load_document());

    match loaded {
        Ok(document) => ListEntry {
            name,
            type_name: document.type_name().map(str::to_string),
            error: None,
        },
        Err(e) => ListEntry {
            name,
            type_name: None,
            error: Some(e.to_string()),
        },
    }
}

/// Handle the list command
#[instrument(skip(config, output))]
pub async fn handle_list(args: ListArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let provider = asset_provider(config)?;
    let names = provider.names()?;

    if names.is_empty() {
        output.warning("No schema assets found in the bundle")?;
    }

    if !args.long {
        return match output.format() {
            OutputFormat::Human => {
                for name in &names {
                    output.writeln(name)?;
                }
                Ok(())
            }
            _ => output.data(&names),
        };
    }

    let entries: Vec<ListEntry> = names.into_iter().map(|n| describe(&provider, n)).collect();

    match output.format() {
        OutputFormat::Human => {
            let rows = entries
                .iter()
                .map(|e| {
                    let detail = match (&e.type_name, &e.error) {
                        (_, Some(error)) => format!("error: {}", error),
                        (Some(type_name), None) => type_name.clone(),
                        (None, None) => "-".to_string(),
                    };
                    vec![e.name.clone(), detail]
                })
                .collect();
            output.table(&["Asset", "Type"], rows)
        }
        _ => output.data(&entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use tempfile::TempDir;

    async fn list(long: bool, format: OutputFormat, config: &Config) -> String {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(format, false, false, Box::new(buffer.clone()));
        handle_list(ListArgs { long }, config, &mut output).await.unwrap();
        buffer.contents()
    }

    #[tokio::test]
    async fn test_list_bundled_names() {
        let text = list(false, OutputFormat::Human, &Config::default()).await;
        assert_eq!(text, "example-storage-bucket.json\nmy-resource-type.json\n");
    }

    #[tokio::test]
    async fn test_list_long_reports_broken_assets() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("ok.json"), r#"{"typeName":"A::B::C"}"#).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        let config = Config {
            assets_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let text = list(true, OutputFormat::Json, &config).await;
        let entries: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(entries[0]["name"], "broken.json");
        assert!(entries[0]["error"].as_str().unwrap().starts_with("Malformed schema"));
        assert_eq!(entries[1], serde_json::json!({"name": "ok.json", "type_name": "A::B::C"}));
    }
}
