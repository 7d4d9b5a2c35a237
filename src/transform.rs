//! Per-line recognition and transformation core.
//!
//! Each input line is classified as either a field-registration statement
//! (`fields["<group>"]=&m.ops<Symbol>`) or opaque text. A registration
//! statement becomes a metric-table entry declaration with a derived metric
//! name and help label; every other line passes through trimmed. Lines are
//! independent of each other, so the transformation carries no cross-line
//! state and cannot fail.

use crate::config::GenConfig;
use crate::template::RecordTemplate;
use regex::Regex;

/// Pattern recognizing a field-registration statement.
///
/// Group 1 captures the regex-group key, group 2 the referenced symbol with
/// trailing whitespace excluded. The `.` separator after the `&m.ops` literal
/// belongs to the recognized shape, not to the symbol.
const REGISTRATION_PATTERN: &str = r#"^\s*fields\["([^"]+)"\]=&m\.ops\.?(.+?)\s*$"#;

/// A recognized registration statement.
///
/// `group` is the regex group name the old code bound the field to; `symbol`
/// is the raw member expression that followed `&m.ops`. The symbol may itself
/// contain a sub-expression (field access, concatenation) and is treated as
/// opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub group: String,
    pub symbol: String,
}

/// Transforms one line of registration source at a time.
///
/// # Example
///
/// ```
/// use metricgen::{GenConfig, LineTransformer};
///
/// let transformer = LineTransformer::new(&GenConfig::default()).unwrap();
/// let record = transformer.transform(r#"fields["alive"]=&m.ops.Alive"#);
/// assert!(record.contains(r#"subsystem + "alive""#));
///
/// // Non-registration text passes through trimmed.
/// assert_eq!(transformer.transform("  // comment  "), "// comment");
/// ```
pub struct LineTransformer {
    pattern: Regex,
    template: RecordTemplate,
    subsystem_var: String,
    banner: String,
}

impl LineTransformer {
    /// Build a transformer from a generation config.
    pub fn new(config: &GenConfig) -> Result<Self, String> {
        let pattern = Regex::new(REGISTRATION_PATTERN)
            .map_err(|e| format!("Invalid registration pattern: {}", e))?;

        Ok(Self {
            pattern,
            template: RecordTemplate::new(&config.record_template),
            subsystem_var: config.subsystem_var.clone(),
            banner: config.banner.clone(),
        })
    }

    /// Test a line against the registration pattern.
    ///
    /// Returns `None` for all non-registration text (comments, braces, blank
    /// lines). Classification is binary; there are no partial matches.
    pub fn recognize(&self, line: &str) -> Option<Registration> {
        self.pattern.captures(line).map(|caps| Registration {
            group: caps[1].to_string(),
            symbol: caps[2].to_string(),
        })
    }

    /// Transform one line.
    ///
    /// Registration statements become a multi-line table-entry record; every
    /// other line is returned trimmed, content unchanged. Total over all
    /// inputs: no input can make this fail.
    pub fn transform(&self, line: &str) -> String {
        match self.recognize(line) {
            Some(reg) => self.render_record(&reg),
            None => line.trim().to_string(),
        }
    }

    /// Render the table-entry record for a recognized registration.
    pub fn render_record(&self, reg: &Registration) -> String {
        let name = derive_metric_name(&reg.symbol);
        let help = derive_metric_help(&self.banner, &reg.symbol);
        self.template
            .render(&self.subsystem_var, &reg.group, &name, &help)
    }
}

/// Derive the normalized metric name from a symbol.
///
/// Every uppercase letter is emitted as an underscore followed by its
/// lowercase form; everything else is lowercased in place. The result is
/// trimmed, the split "GC" acronym is repaired (`g_c_` -> `gc_`, applied once
/// over the whole string after the scan), and leading underscores are
/// collapsed. Only "GC" is repaired; other consecutive-uppercase runs stay
/// split into singleton tokens.
pub fn derive_metric_name(symbol: &str) -> String {
    let mut out = String::with_capacity(symbol.len() + 4);

    for c in symbol.chars() {
        if c.is_uppercase() {
            out.push('_');
        }
        for lc in c.to_lowercase() {
            out.push(lc);
        }
    }

    let corrected = out.trim().replace("g_c_", "gc_");
    corrected.trim_start_matches('_').to_string()
}

/// Derive the human-readable help label from a symbol.
///
/// The banner is emitted first, then the symbol with a single space inserted
/// before each uppercase letter, case preserved. The split "GC" acronym is
/// repaired after the scan (`"G C "` -> `"GC "`).
pub fn derive_metric_help(banner: &str, symbol: &str) -> String {
    let mut out = String::with_capacity(banner.len() + symbol.len() + 8);
    out.push_str(banner);

    for c in symbol.chars() {
        if c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }

    out.trim().replace("G C ", "GC ")
}
