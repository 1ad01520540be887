// File: ternary-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for computing heatmaps in one call (no UI).
//!
//! The functions here go from configuration to a finished
//! [`HeatmapReport`]: build the field, evaluate it on the lattice and tile
//! the result into colored cells.

use log::info;

use crate::config::{merge_config, HeatmapConfig, HeatmapSettings};
use crate::errors::TernaryError;
use crate::field::ScalarField;
use crate::heatmap::{heatmapf, HeatmapReport};

/// Computes the report for an already-built field.
pub fn headless_heatmap_with_field(
    field: &dyn ScalarField,
    settings: &HeatmapSettings,
) -> Result<HeatmapReport, TernaryError> {
    let data = heatmapf(field, settings.scale, settings.boundary)?;
    let report = HeatmapReport::build(field.name(), &data, &settings.options());
    info!(
        "Heatmap '{}' ready: {} cells, values in [{}, {}]",
        report.field,
        report.cells.len(),
        report.summary.min,
        report.summary.max
    );
    Ok(report)
}

/// Computes the heatmap described by `settings`.
pub fn headless_heatmap(settings: &HeatmapSettings) -> Result<HeatmapReport, TernaryError> {
    let field = settings.field.build()?;
    headless_heatmap_with_field(field.as_ref(), settings)
}

/// Merges `user_config` over the embedded defaults, then computes the heatmap.
pub fn headless_heatmap_from_config(
    user_config: Option<HeatmapConfig>,
) -> Result<HeatmapReport, TernaryError> {
    let config = merge_config(HeatmapConfig::load_default()?, user_config);
    let settings = config.resolve()?;
    headless_heatmap(&settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldSpec;
    use crate::heatmap::{CellShape, HeatmapStyle};

    #[test]
    fn test_headless_heatmap_entropy() -> Result<(), TernaryError> {
        let config = HeatmapConfig {
            scale: Some(10),
            ..Default::default()
        };
        let report = headless_heatmap_from_config(Some(config))?;

        assert_eq!(report.field, "entropy");
        assert_eq!(report.scale, 10);
        assert_eq!(report.summary.points, 66);
        // ln 3 is only reached at the barycentre, which is not on this lattice
        assert!(report.summary.max < 3.0_f64.ln());
        Ok(())
    }

    #[test]
    fn test_headless_heatmap_dirichlet_hexagonal() -> Result<(), TernaryError> {
        let config = HeatmapConfig {
            scale: Some(12),
            boundary: Some(false),
            style: Some(HeatmapStyle::Hexagonal),
            field: Some(FieldSpec::Dirichlet { alphas: vec![4.0, 8.0, 13.0] }),
            ..Default::default()
        };
        let report = headless_heatmap_from_config(Some(config))?;

        assert_eq!(report.field, "dirichlet");
        assert_eq!(report.cells.len(), 55);
        assert!(report.cells.iter().all(|c| c.shape == CellShape::Hexagon));
        assert!(report.summary.min > 0.0);
        Ok(())
    }

    #[test]
    fn test_headless_heatmap_with_closure() -> Result<(), TernaryError> {
        let settings = HeatmapConfig { scale: Some(3), ..Default::default() }.resolve()?;
        let field = |p: &[f64]| p[0];
        let report = headless_heatmap_with_field(&field, &settings)?;
        assert_eq!(report.field, "custom");
        assert_eq!(report.vmin, 0.0);
        assert_eq!(report.vmax, 1.0);
        Ok(())
    }
}
