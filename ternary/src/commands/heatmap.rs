//! `heatmap`: evaluate a field on the lattice and report colored cells.
//!
//! Settings are layered: embedded defaults, then an optional `--config`
//! file, then command-line flags.

use anyhow::{bail, Context, Result};
use log::debug;

use ternary_core::{
    format_tick, headless_heatmap, merge_config, write_svg_heatmap, FieldSpec, HeatmapConfig, HeatmapReport,
    HeatmapSettings,
};

use crate::cli::{FieldChoice, HeatmapCommand};
use crate::commands::Console;
use crate::ui::table::build_summary_table;

/// The part of the configuration set on the command line.
pub fn overrides_from_args(args: &HeatmapCommand) -> Result<HeatmapConfig> {
    let field = match (args.field, args.alphas.is_empty()) {
        (Some(FieldChoice::Dirichlet), true) => bail!("--field dirichlet requires --alphas"),
        (Some(FieldChoice::Entropy), false) => bail!("--alphas only applies to the dirichlet field"),
        (Some(FieldChoice::Entropy), true) => Some(FieldSpec::Entropy),
        (_, false) => Some(FieldSpec::Dirichlet { alphas: args.alphas.clone() }),
        (None, true) => None,
    };

    Ok(HeatmapConfig {
        scale: args.scale,
        boundary: args.no_boundary.then_some(false),
        style: args.style,
        cmap: args.cmap,
        vmin: args.vmin,
        vmax: args.vmax,
        scientific: args.scientific.then_some(true),
        colorbar: None,
        field,
    })
}

/// Resolves defaults, the config file and flags into concrete settings.
pub fn resolve_settings(args: &HeatmapCommand) -> Result<HeatmapSettings> {
    let file_config = args
        .config
        .as_ref()
        .map(|path| HeatmapConfig::load_from_file(path))
        .transpose()?;
    let merged = merge_config(
        merge_config(HeatmapConfig::load_default()?, file_config),
        Some(overrides_from_args(args)?),
    );
    debug!("Effective heatmap config: {:?}", merged);
    Ok(merged.resolve()?)
}

/// Label/value rows describing a report.
pub fn summary_rows(report: &HeatmapReport, settings: &HeatmapSettings) -> Vec<(&'static str, String)> {
    let fmt = |v: f64| format_tick(v, settings.scientific);
    let mut rows = vec![
        ("field", report.field.clone()),
        ("scale", report.scale.to_string()),
        ("boundary", settings.boundary.to_string()),
        ("style", report.style.to_string()),
        ("cmap", report.cmap.to_string()),
        ("points", report.summary.points.to_string()),
        ("cells", report.cells.len().to_string()),
        ("min", fmt(report.summary.min)),
        ("max", fmt(report.summary.max)),
        ("mean", fmt(report.summary.mean)),
        ("std dev", fmt(report.summary.std_dev)),
        ("vmin", fmt(report.vmin)),
        ("vmax", fmt(report.vmax)),
    ];
    if settings.colorbar {
        let ticks: Vec<String> = report.colorbar_ticks.iter().map(|t| fmt(*t)).collect();
        rows.push(("colorbar", ticks.join(", ")));
    }
    rows
}

pub fn run_heatmap(args: &HeatmapCommand, console: &Console) -> Result<()> {
    let settings = resolve_settings(args)?;
    console.info(&format!(
        "Computing {} heatmap at scale {}...",
        settings.field.name(),
        settings.scale
    ));
    let report = headless_heatmap(&settings)?;

    if let Some(path) = &args.svg {
        write_svg_heatmap(path, &report.cells, report.scale)?;
        console.success(&format!("Wrote {} cells to {}", report.cells.len(), path.display()));
    }

    let rendered = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        let use_color = console.stdout_color && args.output.is_none();
        build_summary_table(&summary_rows(&report, &settings), &console.theme, use_color).to_string()
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            console.success(&format!("Wrote heatmap report to {}", path.display()));
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use ternary_core::{Colormap, HeatmapStyle};

    fn heatmap_args(args: &[&str]) -> HeatmapCommand {
        let mut argv = vec!["ternary", "heatmap"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Heatmap(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test_log::test]
    fn test_flags_become_overrides() {
        let args = heatmap_args(&["--scale", "8", "--style", "h", "--cmap", "gray", "--no-boundary"]);
        let overrides = overrides_from_args(&args).unwrap();
        assert_eq!(overrides.scale, Some(8));
        assert_eq!(overrides.style, Some(HeatmapStyle::Hexagonal));
        assert_eq!(overrides.cmap, Some(Colormap::Gray));
        assert_eq!(overrides.boundary, Some(false));
        assert_eq!(overrides.scientific, None);
        assert_eq!(overrides.field, None);
    }

    #[test_log::test]
    fn test_alphas_imply_dirichlet() {
        let args = heatmap_args(&["--alphas", "1.5,2,3"]);
        let overrides = overrides_from_args(&args).unwrap();
        assert_eq!(overrides.field, Some(FieldSpec::Dirichlet { alphas: vec![1.5, 2.0, 3.0] }));

        let args = heatmap_args(&["--field", "entropy", "--alphas", "1,2,3"]);
        assert!(overrides_from_args(&args).is_err());
    }

    #[test_log::test]
    fn test_resolve_settings_layers_defaults() {
        let settings = resolve_settings(&heatmap_args(&["--scale", "6", "--scientific"])).unwrap();
        assert_eq!(settings.scale, 6);
        assert!(settings.boundary);
        assert!(settings.scientific);
        assert_eq!(settings.field, FieldSpec::Entropy);
    }

    #[test_log::test]
    fn test_summary_rows() {
        let settings = resolve_settings(&heatmap_args(&["--scale", "3"])).unwrap();
        let report = headless_heatmap(&settings).unwrap();
        let rows = summary_rows(&report, &settings);
        assert_eq!(rows[0], ("field", "entropy".to_string()));
        let colorbar = rows.iter().find(|(label, _)| *label == "colorbar").unwrap();
        assert_eq!(colorbar.1.split(", ").count(), 7);
    }
}
