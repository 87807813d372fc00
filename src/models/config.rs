use rgb_dither::{Algorithm, ParseAlgorithmError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ditherlab.yaml";

/// Application configuration loaded from ditherlab.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Hex palette file, one `RRGGBB` entry per line
    #[serde(default)]
    pub palette: Option<PathBuf>,

    /// Name of an embedded palette (used when `palette` is not set)
    #[serde(default)]
    pub builtin_palette: Option<String>,

    /// Algorithm selected when a session starts
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Directory that rendered frames are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Recompress written PNGs with oxipng
    #[serde(default)]
    pub optimize_png: bool,
}

fn default_algorithm() -> String {
    Algorithm::Normal.name().to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults on any error
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        algorithm = %config.algorithm,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Locate and load configuration.
    ///
    /// Order: explicit path, then `DITHERLAB_CONFIG`, then `ditherlab.yaml`
    /// in the working directory if it exists. Without any of these the
    /// defaults are used silently.
    pub fn discover(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        if let Ok(path) = std::env::var("DITHERLAB_CONFIG") {
            return Self::load_from_path(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from_path(local);
        }
        tracing::debug!("No config file, using defaults");
        Self::default()
    }

    /// The configured start algorithm
    pub fn start_algorithm(&self) -> Result<Algorithm, ParseAlgorithmError> {
        self.algorithm.parse()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: None,
            builtin_palette: None,
            algorithm: default_algorithm(),
            output_dir: default_output_dir(),
            optimize_png: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.start_algorithm().unwrap(), Algorithm::Normal);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
palette: palettes/sepia.hex
builtin_palette: gameboy
algorithm: palette floyd-steinberg
output_dir: frames
optimize_png: true
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.palette, Some(PathBuf::from("palettes/sepia.hex")));
        assert_eq!(config.builtin_palette.as_deref(), Some("gameboy"));
        assert_eq!(config.output_dir, PathBuf::from("frames"));
        assert!(config.optimize_png);
        assert_eq!(
            config.start_algorithm().unwrap(),
            Algorithm::PaletteFloydSteinberg
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(AppConfig::from_yaml_str("colour: red").is_err());
    }

    #[test]
    fn test_bad_algorithm_reported_on_use() {
        let config = AppConfig::from_yaml_str("algorithm: sierra").unwrap();
        assert!(config.start_algorithm().is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = AppConfig::load_from_path(Path::new("/nonexistent/ditherlab.yaml"));
        assert_eq!(config, AppConfig::default());
    }
}
