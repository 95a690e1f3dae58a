// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use nivasa_app::TypeFilter;
use nivasa_handoff::sanitize_phone;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "nivasa";

/// WhatsApp business number of the listing agency; overridable per
/// deployment via [contact].phone.
const DEFAULT_PHONE: &str = "+919347749926";
const DEFAULT_START_FILTER: &str = "all";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            contact: Contact::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            phone: Some(DEFAULT_PHONE.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_filter: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_filter: Some(DEFAULT_START_FILTER.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("NIVASA_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set NIVASA_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [contact] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(phone) = &self.contact.phone
            && sanitize_phone(phone).is_empty()
        {
            bail!(
                "contact.phone in {} must contain digits, got {phone:?}",
                path.display()
            );
        }

        if let Some(start_filter) = &self.ui.start_filter
            && TypeFilter::parse(start_filter).is_none()
        {
            bail!(
                "ui.start_filter in {} must be one of: all, rent, sale; got {start_filter:?}",
                path.display()
            );
        }

        Ok(())
    }

    pub fn phone(&self) -> &str {
        self.contact.phone.as_deref().unwrap_or(DEFAULT_PHONE)
    }

    pub fn start_filter(&self) -> TypeFilter {
        self.ui
            .start_filter
            .as_deref()
            .and_then(TypeFilter::parse)
            .unwrap_or(TypeFilter::All)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# nivasa config\n# Place this file at: {}\n\nversion = 1\n\n[contact]\n# WhatsApp number used for every enquiry link.\nphone = \"{}\"\n\n[ui]\n# Filter active at startup: all, rent, or sale.\nstart_filter = \"{}\"\n",
            path.display(),
            DEFAULT_PHONE,
            DEFAULT_START_FILTER,
        )
    }
}
