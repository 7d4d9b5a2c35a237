//! File-to-file generation pipeline.
//!
//! The transformation core is pure and line-local; this module is the I/O
//! collaborator around it. It reads the registration source, feeds the
//! transformer one line at a time, reassembles the outputs in input order and
//! writes the result.

use std::fs;
use std::path::Path;

use crate::config::GenConfig;
use crate::transform::LineTransformer;

/// Counters reported back to the caller after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenSummary {
    /// Input lines processed.
    pub lines: usize,
    /// Registration statements converted into table entries.
    pub records: usize,
}

/// Transform an in-memory source listing.
///
/// Lines are split on `\n`, transformed independently and rejoined with `\n`
/// in input order.
pub fn transform_source(source: &str, config: &GenConfig) -> Result<(String, GenSummary), String> {
    let transformer = LineTransformer::new(config)?;

    let mut blocks = Vec::new();
    let mut records = 0usize;

    for line in source.split('\n') {
        match transformer.recognize(line) {
            Some(reg) => {
                tracing::debug!(group = %reg.group, symbol = %reg.symbol, "registration statement");
                blocks.push(transformer.render_record(&reg));
                records += 1;
            }
            None => blocks.push(line.trim().to_string()),
        }
    }

    let summary = GenSummary {
        lines: blocks.len(),
        records,
    };
    Ok((blocks.join("\n"), summary))
}

/// Generate the metric-table listing for a registration source file.
///
/// # Arguments
///
/// * `input` - Path to the registration source listing
/// * `output` - Destination path; parent directories are created if needed
/// * `config` - Generation configuration
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &GenConfig,
) -> Result<GenSummary, String> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(format!("Input file does not exist: {}", input.display()));
    }

    let source = fs::read_to_string(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let (rendered, summary) = transform_source(&source, config)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    fs::write(output, rendered)
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        lines = summary.lines,
        records = summary.records,
        "metric table generated"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_source_preserves_line_order() {
        let source = "type opsMap struct {\n\tfields[\"alive\"]=&m.ops.Alive\n}\n";
        let (rendered, summary) = transform_source(source, &GenConfig::default()).unwrap();

        let expected = "type opsMap struct {\n\
                        m[subsystem + \"alive\"] = metricAttr{\n\t\"alive\",\n\t\"alive\",\n\t\"jcmd VM.native_memory metric Alive\",\n}\n\
                        }\n";
        assert_eq!(rendered, expected);
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.records, 1);
    }

    #[test]
    fn test_transform_source_empty_input() {
        let (rendered, summary) = transform_source("", &GenConfig::default()).unwrap();
        assert_eq!(rendered, "");
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.records, 0);
    }

    #[test]
    fn test_custom_subsystem_var() {
        let config = GenConfig {
            subsystem_var: "jvmSubsystem".to_string(),
            ..GenConfig::default()
        };
        let (rendered, _) =
            transform_source("fields[\"alive\"]=&m.ops.Alive", &config).unwrap();
        assert!(rendered.starts_with("m[jvmSubsystem + \"alive\"]"));
    }
}
