//! Generate command - Writes project artifacts.

use std::fs;
use std::path::Path;

use crate::cli::args::{GenerateArgs, GenerateComponent};
use crate::errors::{AppError, AppResult};
use crate::types::SchemaArtifact;

/// Execute the generate command
pub async fn execute(args: GenerateArgs) -> AppResult<()> {
    match args.component {
        GenerateComponent::Schema { output, force } => {
            tracing::info!("Generating schema placeholder: {}", output.display());
            generate_schema(&output, force)?;
            println!("Created: {}", output.display());
            println!("Replace it with the output of your schema introspection tool.");
        }
    }

    Ok(())
}

/// Write the placeholder schema artifact to `path`.
///
/// An existing file is only replaced when it is itself a placeholder, unless
/// `force` is set.
pub fn generate_schema(path: &Path, force: bool) -> AppResult<()> {
    if !force && path.exists() {
        let existing = fs::read_to_string(path)?;
        let is_placeholder = SchemaArtifact::from_json(&existing)
            .map(|artifact| artifact.is_placeholder())
            .unwrap_or(false);
        if !is_placeholder {
            return Err(AppError::validation(format!(
                "{} already holds a generated schema; pass --force to overwrite it",
                path.display()
            )));
        }
    }

    let content = SchemaArtifact::placeholder().to_json_pretty()?;
    write_file(path, &content)
}

/// Write content to file, creating parent directories
fn write_file(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, format!("{content}\n"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "travel-tour-web-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_placeholder_creating_directories() {
        let dir = scratch_dir("write");
        let path = dir.join("schema").join("database.json");

        generate_schema(&path, false).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(SchemaArtifact::from_json(&written).unwrap().is_placeholder());

        // regenerating over a placeholder is allowed
        generate_schema(&path, false).unwrap();
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_refuses_to_overwrite_generated_schema() {
        let dir = scratch_dir("refuse");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("database.json");
        fs::write(&path, "// generated by introspection\n").unwrap();

        let err = generate_schema(&path, false).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        generate_schema(&path, true).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(SchemaArtifact::from_json(&written).is_ok());
        fs::remove_dir_all(&dir).unwrap();
    }
}
