use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub indicators: IndicatorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Synthetic series configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_days")]
    pub days: u32,

    /// Fixed seed for reproducible series; a fresh one is drawn per run when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Indicator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,
}

/// Presentation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_window")]
    pub window: usize,

    #[serde(default = "default_symbol")]
    pub default_symbol: String,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_days() -> u32 {
    crate::generator::DEFAULT_DAYS
}
fn default_rsi_period() -> usize {
    crate::indicators::DEFAULT_RSI_PERIOD
}
fn default_window() -> usize {
    60
}
fn default_symbol() -> String {
    "AAPL".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            seed: None,
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            default_symbol: default_symbol(),
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

const FILE_LAYERS: [&str; 2] = ["config/default", "config/local"];
const ENV_PREFIX: &str = "PULSE";
const ENV_SEPARATOR: &str = "__";

impl AppConfig {
    /// Load configuration from file + environment overrides.
    ///
    /// Each file and each `PULSE__*` variable is its own layer: a layer that
    /// fails to parse or deserialize is skipped with a warning and the rest
    /// still apply.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut cfg = config::Config::default();
        for name in FILE_LAYERS {
            let file = config::File::with_name(name)
                .required(false)
                .format(config::FileFormat::Toml);
            cfg = merge_layer(cfg, name, file);
        }
        cfg = merge_env(cfg, std::env::vars());

        Ok(cfg.try_deserialize()?)
    }
}

/// Stack `source` on top of `base`, or keep `base` if the result is unusable.
fn merge_layer<S>(base: config::Config, name: &str, source: S) -> config::Config
where
    S: config::Source + Send + Sync + 'static,
{
    let merged = config::Config::builder()
        .add_source(base.clone())
        .add_source(source)
        .build()
        .and_then(|cfg| cfg.clone().try_deserialize::<AppConfig>().map(|_| cfg));

    match merged {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Skipping config layer {}: {}", name, e);
            base
        }
    }
}

/// Apply `PULSE__SECTION__KEY` variables one at a time.
fn merge_env<I>(mut cfg: config::Config, vars: I) -> config::Config
where
    I: IntoIterator<Item = (String, String)>,
{
    let prefix = format!("{ENV_PREFIX}{ENV_SEPARATOR}");
    for (key, value) in vars.into_iter().filter(|(k, _)| k.starts_with(&prefix)) {
        let source = config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .source(Some(std::iter::once((key.clone(), value)).collect()));
        cfg = merge_layer(cfg, &key, source);
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.generator.days, 90);
        assert_eq!(cfg.generator.seed, None);
        assert_eq!(cfg.indicators.rsi_period, 14);
        assert_eq!(cfg.display.window, 60);
        assert_eq!(cfg.display.default_symbol, "AAPL");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[generator]\nseed = 7\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.generator.seed, Some(7));
        assert_eq!(cfg.generator.days, 90);
        assert_eq!(cfg.display.window, 60);
    }

    fn toml(text: &str) -> impl config::Source + Send + Sync + 'static {
        config::File::from_str(text, config::FileFormat::Toml)
    }

    #[test]
    fn test_bad_layers_do_not_erase_valid_ones() {
        let cfg = merge_layer(
            config::Config::default(),
            "default",
            toml("[generator]\ndays = 45\n\n[display]\nwindow = 30\n"),
        );
        // unclosed table header
        let cfg = merge_layer(cfg, "local", toml("[generator\ndays = 30\n"));
        let cfg = merge_env(
            cfg,
            vec![
                ("PULSE__GENERATOR__DAYS".to_string(), "abc".to_string()),
                ("PULSE__DISPLAY__WINDOW".to_string(), "5".to_string()),
                ("PULSE__GENERATOR__SEED".to_string(), "7".to_string()),
                ("PULSE_SEED".to_string(), "99".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ],
        );

        let app: AppConfig = cfg.try_deserialize().unwrap();
        assert_eq!(app.generator.days, 45);
        assert_eq!(app.generator.seed, Some(7));
        assert_eq!(app.display.window, 5);
        assert_eq!(app.display.default_symbol, "AAPL");
        assert_eq!(app.indicators.rsi_period, 14);
    }

    #[test]
    fn test_bad_type_in_file_skips_only_that_file() {
        let cfg = merge_layer(
            config::Config::default(),
            "default",
            toml("[indicators]\nrsi_period = 21\n"),
        );
        let cfg = merge_layer(cfg, "local", toml("[display]\nwindow = \"wide\"\n"));

        let app: AppConfig = cfg.try_deserialize().unwrap();
        assert_eq!(app.indicators.rsi_period, 21);
        assert_eq!(app.display.window, 60);
    }

    #[test]
    fn test_empty_layers_give_defaults() {
        let cfg = merge_env(config::Config::default(), Vec::new());
        let app: AppConfig = cfg.try_deserialize().unwrap();
        assert_eq!(app.generator.days, 90);
        assert_eq!(app.display.window, 60);
    }
}
