//! Record template rendering.
//!
//! The exact textual layout of an emitted table entry is a formatting
//! contract: downstream consumers of the generated file expect the historical
//! shape bit-for-bit. The layout is therefore carried as a placeholder string
//! template rather than hard-coded formatting logic, so it can be overridden
//! from config without touching the derivation rules.

/// Historical table-entry layout.
///
/// `{prefix}` is the subsystem variable name, `{group}` the source regex
/// group, `{name}` the derived metric name, `{help}` the derived help label.
pub const DEFAULT_RECORD_TEMPLATE: &str =
    "m[{prefix} + \"{name}\"] = metricAttr{\n\t\"{group}\",\n\t\"{name}\",\n\t\"{help}\",\n}";

/// A table-entry template with `{prefix}`/`{group}`/`{name}`/`{help}`
/// placeholders.
///
/// Rendering is a single pass over the template text; a `{` that does not
/// open a known placeholder is emitted verbatim, which is what keeps the
/// struct-literal braces of the default layout intact.
#[derive(Debug, Clone)]
pub struct RecordTemplate {
    template: String,
}

impl RecordTemplate {
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Render one table entry.
    pub fn render(&self, prefix: &str, group: &str, name: &str, help: &str) -> String {
        let mut out = String::with_capacity(self.template.len() + name.len() * 2 + help.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            let (value, placeholder) = if tail.starts_with("{prefix}") {
                (Some(prefix), "{prefix}")
            } else if tail.starts_with("{group}") {
                (Some(group), "{group}")
            } else if tail.starts_with("{name}") {
                (Some(name), "{name}")
            } else if tail.starts_with("{help}") {
                (Some(help), "{help}")
            } else {
                (None, "{")
            };

            match value {
                Some(v) => out.push_str(v),
                None => out.push('{'),
            }
            rest = &tail[placeholder.len()..];
        }

        out.push_str(rest);
        out
    }
}

impl Default for RecordTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_is_historical_shape() {
        let rendered = RecordTemplate::default().render(
            "subsystem",
            "alive",
            "alive",
            "jcmd VM.native_memory metric Alive",
        );
        assert_eq!(
            rendered,
            "m[subsystem + \"alive\"] = metricAttr{\n\t\"alive\",\n\t\"alive\",\n\t\"jcmd VM.native_memory metric Alive\",\n}"
        );
    }

    #[test]
    fn test_unknown_braces_pass_through() {
        let template = RecordTemplate::new("{name} = attr{ {unknown} }");
        assert_eq!(
            template.render("p", "g", "total", "h"),
            "total = attr{ {unknown} }"
        );
    }

    #[test]
    fn test_custom_template() {
        let template = RecordTemplate::new("{prefix}.{name} // {group}: {help}");
        assert_eq!(
            template.render("sys", "gc_pause", "gc_pause_count", "GC Pause Count"),
            "sys.gc_pause_count // gc_pause: GC Pause Count"
        );
    }
}
