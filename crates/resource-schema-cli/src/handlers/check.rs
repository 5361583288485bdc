//! Check command handler and report types

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{asset_provider, resolve_name, SharedProvider};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use indicatif::ProgressBar;
use resource_schema::{
    AssetProvider, LoaderError, LoaderResult, ResourceName, SchemaDocument, SchemaDocumentLoader,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Outcome of loading every requested schema
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckOutcome>,
}

/// Outcome of loading one schema
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(flatten)]
    pub status: CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    Ok,
    Failed {
        kind: &'static str,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        column: Option<usize>,
    },
}

impl CheckOutcome {
    fn from_result(name: &str, result: std::result::Result<SchemaDocument, LoaderError>) -> Self {
        match result {
            Ok(document) => Self {
                name: name.to_string(),
                type_name: document.type_name().map(str::to_string),
                status: CheckStatus::Ok,
            },
            Err(e) => {
                let position = e.position();
                Self {
                    name: name.to_string(),
                    type_name: None,
                    status: CheckStatus::Failed {
                        kind: error_kind(&e),
                        error: e.to_string(),
                        line: position.map(|(line, _)| line),
                        column: position.map(|(_, column)| column),
                    },
                }
            }
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }
}

fn error_kind(error: &LoaderError) -> &'static str {
    match error {
        LoaderError::ResourceNotFound { .. } => "resource_not_found",
        LoaderError::ResourceUnreadable { .. } => "resource_unreadable",
        LoaderError::MalformedSchema { .. } => "malformed_schema",
        LoaderError::InvalidResourceName { .. } => "invalid_resource_name",
    }
}

/// Load every schema on its own blocking task
///
/// Loads share nothing but the provider, so they run side by side; the
/// report keeps the order of `names`. A name that failed validation is
/// reported as a failed outcome without touching the provider.
pub async fn run_checks(
    provider: SharedProvider,
    names: Vec<LoaderResult<ResourceName>>,
    progress: Option<&ProgressBar>,
) -> Result<CheckReport> {
    let handles: Vec<_> = names
        .into_iter()
        .map(|name| {
            let provider = Arc::clone(&provider);
            tokio::task::spawn_blocking(move || match name {
                Ok(name) => {
                    let loader = SchemaDocumentLoader::new(name, provider);
                    CheckOutcome::from_result(loader.resource_name().as_str(), loader.load_document())
                }
                Err(e) => {
                    let name = e.resource_name().to_string();
                    CheckOutcome::from_result(&name, Err(e))
                }
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|e| Error::other(format!("Schema check task failed: {}", e)))?;
        if let Some(pb) = progress {
            pb.inc(1);
        }
        results.push(outcome);
    }

    Ok(CheckReport { results })
}

/// Handle the check command
#[instrument(skip(config, output), fields(names = args.names.len()))]
pub async fn handle_check(args: CheckArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::new("check_command");
    let provider = asset_provider(config)?;

    let names: Vec<LoaderResult<ResourceName>> = if args.names.is_empty() {
        if args.type_name {
            return Err(Error::invalid_args("--type-name needs at least one NAME"));
        }
        provider.names()?.into_iter().map(ResourceName::new).collect()
    } else {
        args.names
            .iter()
            .map(|name| resolve_name(name, args.type_name).map(Ok))
            .collect::<Result<Vec<_>>>()?
    };

    if names.is_empty() {
        output.warning("No schema assets found in the bundle")?;
        return Ok(());
    }

    info!(count = names.len(), "Checking schemas");
    let progress = output.progress_bar(names.len() as u64, "Checking schemas");
    let report = run_checks(provider, names, progress.as_ref()).await?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        passed = report.passed(),
        failed = report.failed(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Schema check finished"
    );
    output.check_report(&report)?;

    if report.failed() > 0 {
        warn!(failed = report.failed(), total = report.total(), "Schema check failed");
        return Err(Error::CheckFailed {
            failed: report.failed(),
            total: report.total(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_schema::{DirectoryAssets, EmbeddedAssets};
    use tempfile::TempDir;

    fn bundle() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("good.json"), r#"{"typeName":"A::B::C"}"#).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{\n  \"typeName\": \n").unwrap();
        dir
    }

    fn names(list: &[&str]) -> Vec<LoaderResult<ResourceName>> {
        list.iter().map(|n| ResourceName::new(*n)).collect()
    }

    #[tokio::test]
    async fn test_report_keeps_order_and_classifies() {
        let dir = bundle();
        let provider: SharedProvider = Arc::new(DirectoryAssets::new(dir.path()));

        let report = run_checks(provider, names(&["good.json", "bad.json", "missing.json"]), None)
            .await
            .unwrap();

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);

        assert_eq!(report.results[0].name, "good.json");
        assert_eq!(report.results[0].type_name.as_deref(), Some("A::B::C"));
        assert!(matches!(
            report.results[1].status,
            CheckStatus::Failed { kind: "malformed_schema", line: Some(_), .. }
        ));
        assert!(matches!(
            report.results[2].status,
            CheckStatus::Failed { kind: "resource_not_found", line: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_invalid_name_is_one_failed_outcome() {
        let dir = bundle();
        let provider: SharedProvider = Arc::new(DirectoryAssets::new(dir.path()));

        let report = run_checks(provider, names(&["good.json", "bad\\name.json"]), None)
            .await
            .unwrap();

        assert_eq!(report.total(), 2);
        assert!(report.results[0].is_ok());
        assert_eq!(report.results[1].name, "bad\\name.json");
        assert!(matches!(
            report.results[1].status,
            CheckStatus::Failed { kind: "invalid_resource_name", .. }
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_check_reports_unusable_bundle_entries() {
        use crate::cli::OutputFormat;
        use crate::output::test_support::SharedBuffer;

        let dir = bundle();
        std::fs::write(dir.path().join("back\\slash.json"), "{}").unwrap();
        let config = Config {
            assets_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let buffer = SharedBuffer::default();
        let mut output =
            OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(buffer.clone()));

        let args = CheckArgs {
            names: Vec::new(),
            type_name: false,
        };
        let result = handle_check(args, &config, &mut output).await;
        assert!(matches!(result, Err(Error::CheckFailed { failed: 2, total: 3 })));

        let report: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let kinds: Vec<&str> = report["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["kind"].as_str().unwrap_or("ok"))
            .collect();
        assert_eq!(kinds, ["invalid_resource_name", "malformed_schema", "ok"]);
    }

    #[tokio::test]
    async fn test_bundled_schemas_pass() {
        let provider: SharedProvider = Arc::new(EmbeddedAssets::bundled());
        let all = provider.names().unwrap();
        let report = run_checks(
            provider,
            all.iter().map(|n| ResourceName::new(n.as_str())).collect(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(report.failed(), 0);
        assert_eq!(report.total(), all.len());
    }

    #[test]
    fn test_report_serialization() {
        let report = CheckReport {
            results: vec![
                CheckOutcome {
                    name: "a.json".to_string(),
                    type_name: Some("A::B::C".to_string()),
                    status: CheckStatus::Ok,
                },
                CheckOutcome::from_result(
                    "b.json",
                    Err(LoaderError::malformed("b.json", 2, 5, "EOF while parsing")),
                ),
            ],
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "results": [
                    {"name": "a.json", "type_name": "A::B::C", "status": "ok"},
                    {
                        "name": "b.json",
                        "status": "failed",
                        "kind": "malformed_schema",
                        "error": "Malformed schema 'b.json' at line 2, column 5: EOF while parsing",
                        "line": 2,
                        "column": 5
                    }
                ]
            })
        );
    }
}
