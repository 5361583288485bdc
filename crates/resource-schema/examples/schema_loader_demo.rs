//! Schema Loader Demonstration
//!
//! Loads the bundled schemas, queries a few nodes, and shows how the
//! loader reports missing and malformed assets.
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use resource_schema::{
    AssetProvider, Configuration, DirectoryAssets, EmbeddedAssets, LoaderResult, ResourceName,
    SchemaDocumentLoader,
};
use std::fs;
use tempfile::TempDir;

fn main() -> LoaderResult<()> {
    println!("Schema Loader Demonstration");
    println!("===========================\n");

    demo_bundled_schemas()?;
    demo_configuration()?;
    demo_directory_bundle()?;
    demo_error_handling()?;

    println!("\nAll demonstrations completed successfully!");
    Ok(())
}

fn demo_bundled_schemas() -> LoaderResult<()> {
    println!("Bundled schemas:");
    let assets = EmbeddedAssets::bundled();

    for name in assets.names()? {
        let loader = SchemaDocumentLoader::new(ResourceName::new(name)?, assets);
        let doc = loader.load_document()?;
        let properties: Vec<&str> = doc.properties().collect();
        println!(
            "  {} -> {} ({})",
            loader.resource_name(),
            doc.type_name().unwrap_or("<untyped>"),
            properties.join(", ")
        );
    }
    println!();
    Ok(())
}

fn demo_configuration() -> LoaderResult<()> {
    println!("Configuration bound to a resource type:");
    let config = Configuration::for_type_name("My::Resource::Type")?;
    let doc = config.resource_schema_json_object()?;

    println!("  asset: {}", config.resource_name());
    println!(
        "  /properties/Id/type = {}",
        doc.pointer("/properties/Id/type").cloned().unwrap_or_default()
    );
    println!();
    Ok(())
}

fn demo_directory_bundle() -> LoaderResult<()> {
    println!("Unpacked bundle on disk:");
    let temp_dir = TempDir::new().map_err(|e| resource_schema::LoaderError::unreadable("<tempdir>", e))?;
    fs::write(
        temp_dir.path().join("demo-widget.json"),
        r#"{"typeName":"Demo::Widget::Thing","properties":{"Size":{"type":"integer"}}}"#,
    )
    .map_err(|e| resource_schema::LoaderError::unreadable("demo-widget.json", e))?;

    let loader = SchemaDocumentLoader::new(
        ResourceName::new("demo-widget.json")?,
        DirectoryAssets::new(temp_dir.path()),
    );
    let doc = loader.load_document()?;
    println!("  {}", doc.to_json_string().unwrap_or_default());
    println!();
    Ok(())
}

fn demo_error_handling() -> LoaderResult<()> {
    println!("Error handling:");

    let missing = SchemaDocumentLoader::bundled(ResourceName::new("missing.json")?);
    if let Err(e) = missing.load_document() {
        println!("  {}", e);
    }

    let broken = EmbeddedAssets::from_static(&[("broken.json", br#"{"a": }"#)]);
    let malformed = SchemaDocumentLoader::new(ResourceName::new("broken.json")?, broken);
    if let Err(e) = malformed.load_document() {
        println!("  {}", e);
    }

    if let Err(e) = ResourceName::new("../outside.json") {
        println!("  {}", e);
    }

    Ok(())
}
