//! Subcommand bodies. Each writes its report to `out` so callers choose the sink.

use std::io::Write;
use std::path::Path;

use arbor_tree::{BuildOptions, BuildOutcome, build_with};
use tracing::info;

use crate::error::CliResult;
use crate::render;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Arena as JSON: every node with its parent and children
    Json,
    /// Flattened records in pre-order, YAML or JSON by output extension
    Records,
}

fn load_and_build(records_path: &Path, options: &BuildOptions) -> CliResult<BuildOutcome> {
    let records = arbor_records::load(records_path)?;
    info!(path = %records_path.display(), records = records.len(), "building tree");
    Ok(build_with(&records, options)?)
}

pub fn validate(records_path: &Path, options: &BuildOptions, out: &mut impl Write) -> CliResult<()> {
    writeln!(out, "Validating records: {}", records_path.display())?;
    match load_and_build(records_path, options)? {
        BuildOutcome::Empty => writeln!(out, "✓ Empty record set (no tree)")?,
        BuildOutcome::Tree(tree) => writeln!(out, "✓ {} records form a valid tree", tree.len())?,
    }
    Ok(())
}

pub fn show(
    records_path: &Path,
    max_depth: Option<usize>,
    options: &BuildOptions,
    out: &mut impl Write,
) -> CliResult<()> {
    match load_and_build(records_path, options)? {
        BuildOutcome::Empty => writeln!(out, "Empty record set (no tree)")?,
        BuildOutcome::Tree(tree) => out.write_all(render::outline(&tree, max_depth).as_bytes())?,
    }
    Ok(())
}

/// Export to `output` when given, otherwise to `out`.
pub fn export(
    records_path: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    options: &BuildOptions,
    out: &mut impl Write,
) -> CliResult<()> {
    let outcome = load_and_build(records_path, options)?;

    match (format, output) {
        (ExportFormat::Json, Some(path)) => std::fs::write(path, render::tree_json(&outcome)?)?,
        (ExportFormat::Json, None) => writeln!(out, "{}", render::tree_json(&outcome)?)?,
        (ExportFormat::Records, output) => {
            let records = outcome
                .tree()
                .map(|tree| tree.to_records())
                .unwrap_or_default();
            match output {
                Some(path) => arbor_records::save(path, &records)?,
                None => out.write_all(arbor_records::to_yaml_string(&records)?.as_bytes())?,
            }
        }
    }

    if let Some(path) = output {
        writeln!(out, "✓ Exported to {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use arbor_core::Record;
    use arbor_tree::BuildError;
    use std::path::PathBuf;

    fn write_records(name: &str, records: &[Record]) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        arbor_records::save(&path, records).unwrap();
        path
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new(0, 0),
            Record::new(2, 0),
            Record::new(1, 0),
            Record::new(3, 1),
        ]
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> (CliResult<()>, String) {
        let mut out = Vec::new();
        let result = f(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn validate_accepts_tree() {
        let path = write_records("arbor_cli_validate_ok.yaml", &sample());
        let (result, out) = run(|out| validate(&path, &BuildOptions::default(), out));
        result.unwrap();
        assert!(out.contains("✓ 4 records form a valid tree"));
    }

    #[test]
    fn validate_reports_empty_set() {
        let path = write_records("arbor_cli_validate_empty.json", &[]);
        let (result, out) = run(|out| validate(&path, &BuildOptions::default(), out));
        result.unwrap();
        assert!(out.contains("✓ Empty record set (no tree)"));
    }

    #[test]
    fn validate_fails_on_invalid_tree() {
        let path = write_records(
            "arbor_cli_validate_dup.json",
            &[Record::new(0, 0), Record::new(1, 0), Record::new(1, 0)],
        );
        let (result, out) = run(|out| validate(&path, &BuildOptions::sequential(), out));
        // main returns this error, which makes the process exit non-zero
        assert!(matches!(
            result,
            Err(CliError::Build(BuildError::DuplicateId { id: 1 }))
        ));
        assert!(!out.contains('✓'));
    }

    #[test]
    fn validate_fails_on_misspelled_key() {
        let path = std::env::temp_dir().join("arbor_cli_validate_typo.json");
        std::fs::write(&path, r#"{"recods": [{"id": 0, "parent": 0}]}"#).unwrap();
        let (result, _) = run(|out| validate(&path, &BuildOptions::default(), out));
        assert!(matches!(result, Err(CliError::Records(_))));
    }

    #[test]
    fn show_prints_outline() {
        let path = write_records("arbor_cli_show.yaml", &sample());
        let (result, out) = run(|out| show(&path, Some(1), &BuildOptions::default(), out));
        result.unwrap();
        assert_eq!(out, "0\n  1\n  2\n");
    }

    #[test]
    fn export_records_to_stdout_is_yaml() {
        let path = write_records("arbor_cli_export_records.json", &sample());
        let (result, out) = run(|out| {
            export(&path, ExportFormat::Records, None, &BuildOptions::default(), out)
        });
        result.unwrap();
        assert_eq!(
            arbor_records::parse_yaml(&out).unwrap(),
            vec![
                Record::new(0, 0),
                Record::new(1, 0),
                Record::new(3, 1),
                Record::new(2, 0),
            ]
        );
        assert!(out.starts_with("records:"));
    }

    #[test]
    fn export_records_to_file_follows_extension() {
        let path = write_records("arbor_cli_export_src.yaml", &sample());
        let target = std::env::temp_dir().join("arbor_cli_export_out.json");
        let (result, out) = run(|out| {
            export(
                &path,
                ExportFormat::Records,
                Some(&target),
                &BuildOptions::default(),
                out,
            )
        });
        result.unwrap();
        assert!(out.contains("✓ Exported to"));

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.trim_start().starts_with('{'));
        assert_eq!(arbor_records::parse_json(&content).unwrap().len(), 4);
    }

    #[test]
    fn export_json_of_empty_set_has_no_nodes() {
        let path = write_records("arbor_cli_export_empty.yaml", &[]);
        let (result, out) =
            run(|out| export(&path, ExportFormat::Json, None, &BuildOptions::default(), out));
        result.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json, serde_json::json!({ "nodes": [] }));
    }

    #[test]
    fn export_json_to_file() {
        let path = write_records("arbor_cli_export_tree_src.json", &sample());
        let target = std::env::temp_dir().join("arbor_cli_export_tree.json");
        let (result, _) = run(|out| {
            export(
                &path,
                ExportFormat::Json,
                Some(&target),
                &BuildOptions::parallel(),
                out,
            )
        });
        result.unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
        assert_eq!(json["nodes"][0]["children"], serde_json::json!([1, 2]));
    }
}
