//! Check operation - configuration validation.

use xosauce_config::SauceToml;

use crate::reports::CheckReport;

/// Describe the effective settings of an already validated sauce.toml.
pub fn check(sauce_toml: &SauceToml) -> CheckReport {
    let config = sauce_toml.config();
    let list = |items: &[String]| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(" ")
        }
    };

    let mut generator = vec![config.generator.program.clone(), "<DATA_SOURCE>".to_string()];
    generator.push(format!("-o <OUT>/{}", config.generator.subdir));
    generator.extend(config.generator.args.iter().cloned());

    let formatter = if config.formatter.enabled {
        format!("{} {} <FILES>", config.formatter.program, list(&config.formatter.args))
    } else {
        "disabled".to_string()
    };

    CheckReport {
        config_path: sauce_toml.path().to_path_buf(),
        settings: vec![
            ("generator".to_string(), generator.join(" ")),
            ("formatter".to_string(), formatter),
            (
                "editable files".to_string(),
                format!("<name>{}", config.output.editable_suffix),
            ),
            (
                "generated files".to_string(),
                format!("<name>{}", config.output.generated_suffix),
            ),
            ("excluded".to_string(), list(&config.extract.exclude)),
            ("marker types".to_string(), list(&config.extract.marker_types)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_lists_effective_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sauce.toml");
        std::fs::write(
            &path,
            "[formatter]\nenabled = false\n\n[extract]\nexclude = [\"xo_db\", \"schema_migrations\"]\n",
        )
        .unwrap();

        let report = check(&SauceToml::open(&path).unwrap());
        let get = |key: &str| {
            report
                .settings
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };

        assert_eq!(get("generator"), "xo <DATA_SOURCE> -o <OUT>/xo");
        assert_eq!(get("formatter"), "disabled");
        assert_eq!(get("generated files"), "<name>.generated.go");
        assert_eq!(get("excluded"), "xo_db schema_migrations");
        assert_eq!(get("marker types"), "XODB");
    }
}
