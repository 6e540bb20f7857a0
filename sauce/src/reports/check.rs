//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Effective settings of a valid sauce.toml.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Setting name and rendered value, in display order.
    pub settings: Vec<(String, String)>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section("Settings");
        for (key, value) in &self.settings {
            out.key_value_indented(key, value);
        }
    }
}
