use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::{DEFAULT_DOCS_BASE_URL, FormatVersion, MarkerScale};

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
    pub ui: UiConfig,
    pub render: RenderSection,
    pub info: MarkerScale,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiConfig {
    pub color: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderSection {
    pub verbose: bool,
    pub format_version: FormatVersion,
    pub docs_base_url: String,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            ui: UiConfig { color: true },
            render: RenderSection {
                verbose: false,
                format_version: FormatVersion::V1,
                docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            },
            info: MarkerScale::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    ui: Option<RawUiConfig>,
    render: Option<RawRenderConfig>,
    info: Option<RawInfoConfig>,
}

#[derive(Debug, Deserialize)]
struct RawUiConfig {
    color: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawRenderConfig {
    verbose: Option<bool>,
    format_version: Option<FormatVersion>,
    docs_base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInfoConfig {
    glyph: Option<String>,
    max_repeat: Option<usize>,
}

pub fn default_config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/scanprint/config.toml")
}

pub fn load(config_path: Option<&Path>, home_dir: Option<&Path>) -> Result<EffectiveConfig> {
    let mut cfg = EffectiveConfig::default();

    let path = config_path
        .map(ToOwned::to_owned)
        .or_else(|| home_dir.map(default_config_path));

    if let Some(path) = path {
        if path.exists() {
            let s = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            let raw: RawConfig = toml::from_str(&s)
                .with_context(|| format!("failed to parse config file (TOML): {}", path.display()))?;
            apply_raw_config(&mut cfg, raw);
            cfg.config_path = Some(path.display().to_string());
        } else if config_path.is_some() {
            return Err(anyhow::anyhow!(
                "config file not found: {}",
                path.display()
            ));
        }
    }

    apply_env_overrides(&mut cfg)?;
    validate(&cfg)?;

    Ok(cfg)
}

fn apply_raw_config(cfg: &mut EffectiveConfig, raw: RawConfig) {
    if let Some(ui) = raw.ui {
        if let Some(color) = ui.color {
            cfg.ui.color = color;
        }
    }

    if let Some(render) = raw.render {
        if let Some(verbose) = render.verbose {
            cfg.render.verbose = verbose;
        }
        if let Some(format_version) = render.format_version {
            cfg.render.format_version = format_version;
        }
        if let Some(docs_base_url) = render.docs_base_url {
            cfg.render.docs_base_url = docs_base_url;
        }
    }

    if let Some(info) = raw.info {
        if let Some(glyph) = info.glyph {
            cfg.info.glyph = glyph;
        }
        if let Some(max_repeat) = info.max_repeat {
            cfg.info.max_repeat = max_repeat;
        }
    }
}

fn apply_env_overrides(cfg: &mut EffectiveConfig) -> Result<()> {
    if let Ok(v) = std::env::var("SCANPRINT_UI_COLOR") {
        cfg.ui.color = parse_bool(&v).with_context(|| "SCANPRINT_UI_COLOR")?;
    }
    if let Ok(v) = std::env::var("SCANPRINT_VERBOSE") {
        cfg.render.verbose = parse_bool(&v).with_context(|| "SCANPRINT_VERBOSE")?;
    }
    if let Ok(v) = std::env::var("SCANPRINT_FORMAT_VERSION") {
        cfg.render.format_version = v
            .parse::<FormatVersion>()
            .map_err(anyhow::Error::msg)
            .with_context(|| "SCANPRINT_FORMAT_VERSION")?;
    }
    if let Ok(v) = std::env::var("SCANPRINT_DOCS_BASE_URL") {
        let v = v.trim();
        if !v.is_empty() {
            cfg.render.docs_base_url = v.to_string();
        }
    }
    if let Ok(v) = std::env::var("SCANPRINT_INFO_GLYPH") {
        cfg.info.glyph = v.trim().to_string();
    }
    if let Ok(v) = std::env::var("SCANPRINT_INFO_MAX_REPEAT") {
        cfg.info.max_repeat = v
            .trim()
            .parse::<usize>()
            .with_context(|| "SCANPRINT_INFO_MAX_REPEAT")?;
    }

    Ok(())
}

fn validate(cfg: &EffectiveConfig) -> Result<()> {
    if cfg.info.glyph.is_empty() {
        return Err(anyhow::anyhow!("info.glyph must not be empty"));
    }
    if cfg.render.docs_base_url.trim().is_empty() {
        return Err(anyhow::anyhow!("render.docs_base_url must not be empty"));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Result<bool> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!(
            "invalid boolean: {s} (expected true|false|1|0|yes|no|on|off)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_overrides_defaults_field_by_field() {
        let raw: RawConfig = toml::from_str(
            r#"
[render]
format_version = "v2"

[info]
glyph = "+"
"#,
        )
        .expect("parse toml");

        let mut cfg = EffectiveConfig::default();
        apply_raw_config(&mut cfg, raw);
        assert_eq!(cfg.render.format_version, FormatVersion::V2);
        assert!(!cfg.render.verbose);
        assert_eq!(cfg.info.glyph, "+");
        assert_eq!(cfg.info.max_repeat, 3);
        assert!(cfg.ui.color);
    }

    #[test]
    fn unknown_format_version_is_rejected() {
        let err = toml::from_str::<RawConfig>("[render]\nformat_version = \"v9\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn empty_glyph_fails_validation() {
        let mut cfg = EffectiveConfig::default();
        cfg.info.glyph = String::new();
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert!(parse_bool(" Yes ").expect("yes"));
        assert!(!parse_bool("off").expect("off"));
        assert!(parse_bool("maybe").is_err());
    }
}
