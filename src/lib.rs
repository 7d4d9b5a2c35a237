//! # metricgen: registration-statement to metric-table code generation
//!
//! metricgen converts a source listing of field-registration statements
//! (`fields["<group>"]=&m.ops<Symbol>`) into the declarative `metricAttr`
//! table used by the jcmd native-memory exporter, deriving per entry a
//! normalized metric name and a human-readable help label.
//!
//! ## Features
//!
//! - **Line-local transformation**: every line is classified and transformed
//!   independently; anything that is not a registration statement passes
//!   through trimmed
//! - **Derivation rules**: character-scan casing into `snake_case` names and
//!   spaced help labels, with the fixed "GC" acronym repair applied to both
//! - **Configurable output shape**: the table-entry layout is a placeholder
//!   template, overridable from a YAML config along with the subsystem
//!   variable and help banner
//!
//! ## Example
//!
//! ```
//! use metricgen::{GenConfig, LineTransformer};
//!
//! let transformer = LineTransformer::new(&GenConfig::default()).unwrap();
//!
//! let record = transformer.transform(r#"fields["gc_pause"]=&m.ops.GCPauseCount"#);
//! assert!(record.contains(r#""gc_pause_count""#));
//! assert!(record.contains("jcmd VM.native_memory metric GC Pause Count"));
//! ```

pub mod config;
pub mod pipeline;
pub mod template;
pub mod transform;

// Re-export key types
pub use config::GenConfig;
pub use pipeline::{generate, transform_source, GenSummary};
pub use template::{RecordTemplate, DEFAULT_RECORD_TEMPLATE};
pub use transform::{derive_metric_help, derive_metric_name, LineTransformer, Registration};
