use config::ConfigError;
use serde::Deserialize;

use crate::{
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

/// Runtime configuration.
///
/// The embedded `.config/config.json5` supplies every default; a user file in
/// the config directory overrides individual keys. No user file is fine.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub mouse: Option<bool>,
    #[serde(default)]
    pub open_links: Option<bool>,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        Self::layered(builder, default_config)
    }

    /// Deserializes the user sources in `builder` and fills the rest from `defaults`.
    fn layered(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        defaults: Config,
    ) -> Result<Self, ConfigError> {
        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(defaults);
        Ok(cfg)
    }

    /// The configuration shipped inside the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fills everything the user left out from `defaults`.
    pub fn merge_defaults(&mut self, defaults: Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles.entry(style_key.clone()).or_insert(*style);
        }
        self.mouse = self.mouse.or(defaults.mouse);
        self.open_links = self.open_links.or(defaults.open_links);
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse.unwrap_or(true)
    }

    /// Off unless configured, so a bare `Config::default()` never launches a browser.
    pub fn open_links_enabled(&self) -> bool {
        self.open_links.unwrap_or(false)
    }
}
