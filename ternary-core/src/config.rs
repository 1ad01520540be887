//! Configuration management for `ternary-core`.
//!
//! This module defines the heatmap configuration, handles YAML
//! deserialization, and provides utilities for loading, merging and
//! validating configs. Every field is optional in a file; a user file is
//! merged over the embedded defaults and then resolved into concrete
//! [`HeatmapSettings`].
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::colormap::Colormap;
use crate::errors::TernaryError;
use crate::field::FieldSpec;
use crate::heatmap::{HeatmapOptions, HeatmapStyle};

pub use crate::simplex::MAX_SCALE;

/// Heatmap configuration as written in YAML. Unset keys fall through to the
/// defaults during [`merge_config`].
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HeatmapConfig {
    /// Number of lattice steps along each side of the simplex.
    pub scale: Option<usize>,
    /// Whether lattice points on the boundary are evaluated.
    pub boundary: Option<bool>,
    pub style: Option<HeatmapStyle>,
    pub cmap: Option<Colormap>,
    /// Fixed lower color limit (default: smallest value).
    pub vmin: Option<f64>,
    /// Fixed upper color limit (default: largest value).
    pub vmax: Option<f64>,
    /// Format colorbar ticks in scientific notation.
    pub scientific: Option<bool>,
    pub colorbar: Option<bool>,
    /// The function to plot.
    pub field: Option<FieldSpec>,
}

/// Fully resolved heatmap settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSettings {
    pub scale: usize,
    pub boundary: bool,
    pub style: HeatmapStyle,
    pub cmap: Colormap,
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub scientific: bool,
    pub colorbar: bool,
    pub field: FieldSpec,
}

impl HeatmapSettings {
    /// Rendering options for [`crate::heatmap::heatmap_cells`].
    pub fn options(&self) -> HeatmapOptions {
        HeatmapOptions {
            style: self.style,
            cmap: self.cmap,
            vmin: self.vmin,
            vmax: self.vmax,
        }
    }
}

impl HeatmapConfig {
    /// Loads a heatmap configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading heatmap config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: HeatmapConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        debug!("Loaded heatmap config from {}: {:?}", path.display(), config);

        Ok(config)
    }

    /// Loads the default configuration embedded in the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default heatmap config from embedded string...");
        let default_yaml = include_str!("../config/default_heatmap.yaml");
        let config: HeatmapConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default heatmap config")?;
        Ok(config)
    }

    /// Checks the values that are set, collecting every problem found.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(scale) = self.scale {
            if scale == 0 {
                errors.push("`scale` must be at least 1.".to_string());
            } else if scale > MAX_SCALE {
                errors.push(format!("`scale` ({}) exceeds maximum allowed ({}).", scale, MAX_SCALE));
            }
        }

        if let (Some(vmin), Some(vmax)) = (self.vmin, self.vmax) {
            if vmin > vmax {
                errors.push(format!("`vmin` ({}) is greater than `vmax` ({}).", vmin, vmax));
            }
        }

        if let Some(FieldSpec::Dirichlet { alphas }) = &self.field {
            if alphas.is_empty() {
                errors.push("Dirichlet field needs at least one alpha.".to_string());
            }
            for (index, alpha) in alphas.iter().enumerate() {
                if !(*alpha > 0.0) {
                    errors.push(format!("Dirichlet alpha {} must be positive, got {}.", index, alpha));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Heatmap config validation failed:\n{}", errors.join("\n")))
        }
    }

    /// Fills anything still unset with built-in values and validates.
    pub fn resolve(&self) -> Result<HeatmapSettings, TernaryError> {
        self.validate()
            .map_err(|e| TernaryError::InvalidConfig(e.to_string()))?;

        Ok(HeatmapSettings {
            scale: self.scale.unwrap_or(60),
            boundary: self.boundary.unwrap_or(true),
            style: self.style.unwrap_or_default(),
            cmap: self.cmap.unwrap_or_default(),
            vmin: self.vmin,
            vmax: self.vmax,
            scientific: self.scientific.unwrap_or(false),
            colorbar: self.colorbar.unwrap_or(true),
            field: self.field.clone().unwrap_or_default(),
        })
    }
}

/// Merges a user configuration over the defaults. Every key the user sets
/// wins; everything else keeps its default.
pub fn merge_config(default_config: HeatmapConfig, user_config: Option<HeatmapConfig>) -> HeatmapConfig {
    let Some(user) = user_config else {
        debug!("No user heatmap config provided; using defaults.");
        return default_config;
    };

    debug!("Merging user heatmap config over defaults.");
    HeatmapConfig {
        scale: user.scale.or(default_config.scale),
        boundary: user.boundary.or(default_config.boundary),
        style: user.style.or(default_config.style),
        cmap: user.cmap.or(default_config.cmap),
        vmin: user.vmin.or(default_config.vmin),
        vmax: user.vmax.or(default_config.vmax),
        scientific: user.scientific.or(default_config.scientific),
        colorbar: user.colorbar.or(default_config.colorbar),
        field: user.field.or(default_config.field),
    }
}
