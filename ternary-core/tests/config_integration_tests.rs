// ternary-core/tests/config_integration_tests.rs
use anyhow::Result;
use tempfile::NamedTempFile;
use std::io::Write;

use ternary_core::config::{self, HeatmapConfig};
use ternary_core::{Colormap, FieldSpec, HeatmapStyle, TernaryError};

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_config(
        r#"
scale: 30
boundary: false
style: hexagonal
cmap: hot
field:
  kind: dirichlet
  alphas: [4, 8, 13]
"#,
    )?;
    let config = HeatmapConfig::load_from_file(file.path())?;
    assert_eq!(config.scale, Some(30));
    assert_eq!(config.boundary, Some(false));
    assert_eq!(config.style, Some(HeatmapStyle::Hexagonal));
    assert_eq!(config.cmap, Some(Colormap::Hot));
    assert_eq!(config.field, Some(FieldSpec::Dirichlet { alphas: vec![4.0, 8.0, 13.0] }));
    // Keys not in the file stay unset
    assert_eq!(config.vmin, None);
    assert_eq!(config.colorbar, None);
    Ok(())
}

#[test]
fn test_load_from_file_accepts_style_prefix() -> Result<()> {
    let file = write_config("style: Hex\n")?;
    let config = HeatmapConfig::load_from_file(file.path())?;
    assert_eq!(config.style, Some(HeatmapStyle::Hexagonal));
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_colormap() -> Result<()> {
    let file = write_config("cmap: plasma\n")?;
    let err = HeatmapConfig::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("plasma"), "unexpected error: {:#}", err);
    Ok(())
}

#[test]
fn test_load_from_file_rejects_unknown_keys() -> Result<()> {
    let file = write_config("scael: 10\n")?;
    assert!(HeatmapConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_from_file_runs_validation() -> Result<()> {
    let file = write_config("scale: 0\nvmin: 1.0\nvmax: 0.5\n")?;
    let err = HeatmapConfig::load_from_file(file.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Heatmap config validation failed"));
    assert!(message.contains("`scale` must be at least 1."));
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = HeatmapConfig::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_merge_no_user_config() -> Result<()> {
    let default_config = HeatmapConfig::load_default()?;
    let merged = config::merge_config(default_config.clone(), None);
    assert_eq!(merged, default_config);
    Ok(())
}

#[test]
fn test_merge_and_resolve_user_file() -> Result<()> {
    let file = write_config("scale: 12\nvmax: 0.75\nscientific: true\n")?;
    let user = HeatmapConfig::load_from_file(file.path())?;
    let merged = config::merge_config(HeatmapConfig::load_default()?, Some(user));
    let settings = merged.resolve()?;

    assert_eq!(settings.scale, 12);
    assert_eq!(settings.vmax, Some(0.75));
    assert!(settings.scientific);
    // Untouched keys come from the embedded defaults
    assert!(settings.boundary);
    assert_eq!(settings.style, HeatmapStyle::Triangular);
    assert_eq!(settings.field, FieldSpec::Entropy);
    Ok(())
}

#[test]
fn test_resolve_reports_invalid_config() {
    let config = HeatmapConfig { vmin: Some(3.0), vmax: Some(1.0), ..Default::default() };
    assert!(matches!(config.resolve(), Err(TernaryError::InvalidConfig(_))));
}
