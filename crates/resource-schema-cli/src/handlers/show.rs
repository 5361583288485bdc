//! Show command handler

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{asset_provider, resolve_name};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use resource_schema::SchemaDocumentLoader;
use tracing::{debug, instrument};

/// Handle the show command
#[instrument(skip(config, output), fields(name = %args.name))]
pub async fn handle_show(args: ShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("show_command", &args.name);

    if let Some(pointer) = &args.pointer {
        if !pointer.is_empty() && !pointer.starts_with('/') {
            return Err(Error::invalid_args(format!(
                "JSON Pointer '{}' must be empty or start with '/'",
                pointer
            )));
        }
    }

    let name = resolve_name(&args.name, args.type_name)?;
    let loader = SchemaDocumentLoader::new(name, asset_provider(config)?);
    let document = loader.load_document()?;
    debug!(asset = %loader.resource_name(), "Schema loaded");

    match &args.pointer {
        Some(pointer) => {
            let node = document
                .pointer(pointer)
                .ok_or_else(|| Error::PointerNotFound {
                    name: loader.resource_name().to_string(),
                    pointer: pointer.clone(),
                })?;
            output.node(node)
        }
        None => output.document(loader.resource_name(), &document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::test_support::SharedBuffer;

    async fn show(args: ShowArgs, format: OutputFormat) -> (Result<()>, String) {
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(format, false, false, Box::new(buffer.clone()));
        let result = handle_show(args, &Config::default(), &mut output).await;
        (result, buffer.contents())
    }

    fn args(name: &str, type_name: bool, pointer: Option<&str>) -> ShowArgs {
        ShowArgs {
            name: name.to_string(),
            type_name,
            pointer: pointer.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_show_document_as_json() {
        let (result, text) = show(args("my-resource-type.json", false, None), OutputFormat::Json).await;
        result.unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["typeName"], "My::Resource::Type");
        assert_eq!(value["properties"]["Id"]["type"], "string");
    }

    #[tokio::test]
    async fn test_show_pointer_by_type_name() {
        let (result, text) = show(
            args("My::Resource::Type", true, Some("/properties/Id/type")),
            OutputFormat::Human,
        )
        .await;
        result.unwrap();
        assert_eq!(text, "\"string\"\n");
    }

    #[tokio::test]
    async fn test_show_human_summary() {
        let (result, text) = show(args("my-resource-type.json", false, None), OutputFormat::Human).await;
        result.unwrap();

        assert!(text.contains("Schema: my-resource-type.json"));
        assert!(text.contains("Type: My::Resource::Type"));
        assert!(text.contains("array<Tag>"));
        assert!(text.lines().any(|l| l.contains("Id") && l.contains("read-only")));
        assert!(text.lines().any(|l| l.contains("Name") && l.contains("required")));
    }

    #[tokio::test]
    async fn test_show_failures() {
        let (result, _) = show(args("missing.json", false, None), OutputFormat::Json).await;
        assert_eq!(result.unwrap_err().exit_code(), 3);

        let (result, _) = show(
            args("my-resource-type.json", false, Some("/properties/Nope")),
            OutputFormat::Json,
        )
        .await;
        assert!(matches!(result, Err(Error::PointerNotFound { .. })));

        let (result, _) = show(
            args("my-resource-type.json", false, Some("properties")),
            OutputFormat::Json,
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidArgs(_))));
    }
}
