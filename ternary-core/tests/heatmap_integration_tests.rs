// ternary-core/tests/heatmap_integration_tests.rs
use test_log::test;

use ternary_core::{
    heatmap_cells, heatmapf, svg_heatmap, Colormap, DirichletField, HeatmapOptions,
    HeatmapReport, HeatmapStyle, ShannonEntropyField, SimplexIterator, CellShape,
};

#[test]
fn test_entropy_heatmap_is_symmetric() {
    let data = heatmapf(&ShannonEntropyField, 9, true).unwrap();
    // Entropy does not depend on coordinate order
    for ((i, j), value) in data.iter() {
        let k = 9 - i - j;
        let swapped = data.get(j, i).unwrap();
        let rotated = data.get(k, i).unwrap();
        assert!((value - swapped).abs() < 1e-12);
        assert!((value - rotated).abs() < 1e-12);
    }
}

#[test]
fn test_dirichlet_heatmap_vanishes_on_boundary() {
    let field = DirichletField::new(&[4.0, 8.0, 13.0]).unwrap();
    let data = heatmapf(&field, 20, true).unwrap();
    assert_eq!(data.len(), SimplexIterator::point_count(20, true));

    for ((i, j), value) in data.iter() {
        let k = 20 - i - j;
        if i == 0 || j == 0 || k == 0 {
            assert_eq!(value, 0.0, "boundary point ({}, {}, {})", i, j, k);
        } else {
            assert!(value > 0.0, "interior point ({}, {}, {})", i, j, k);
        }
    }
}

#[test]
fn test_dirichlet_heatmap_peaks_near_mode() {
    // Mode of Dir(4, 8, 13) is (3, 7, 12) / 22
    let field = DirichletField::new(&[4.0, 8.0, 13.0]).unwrap();
    let data = heatmapf(&field, 22, false).unwrap();
    let ((i, j), _) = data
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();
    assert_eq!((i, j), (3, 7));
}

#[test]
fn test_all_four_heatmap_variants() {
    let scale = 12;
    for boundary in [true, false] {
        let data = heatmapf(&ShannonEntropyField, scale, boundary).unwrap();
        for style in [HeatmapStyle::Triangular, HeatmapStyle::Hexagonal] {
            let options = HeatmapOptions { style, cmap: Colormap::Jet, ..Default::default() };
            let cells = heatmap_cells(&data, &options);
            assert!(!cells.is_empty());
            match style {
                HeatmapStyle::Hexagonal => assert_eq!(cells.len(), data.len()),
                HeatmapStyle::Triangular => assert!(cells.len() > data.len()),
            }
        }
    }
}

#[test]
fn test_extreme_cells_take_colormap_ends() {
    let data = heatmapf(&ShannonEntropyField, 6, true).unwrap();
    let options = HeatmapOptions { style: HeatmapStyle::Hexagonal, cmap: Colormap::Gray, ..Default::default() };
    let cells = heatmap_cells(&data, &options);

    let corner = cells.iter().find(|c| c.index == (0, 0)).unwrap();
    assert_eq!(corner.color, "#000000");
    let centre = cells.iter().find(|c| c.index == (2, 2)).unwrap();
    assert_eq!(centre.color, "#ffffff");
}

#[test]
fn test_report_serializes_to_json() {
    let data = heatmapf(&ShannonEntropyField, 4, true).unwrap();
    let report = HeatmapReport::build("entropy", &data, &HeatmapOptions::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["field"], "entropy");
    assert_eq!(json["style"], "triangular");
    assert_eq!(json["cmap"], "jet");
    assert_eq!(json["cells"][0]["shape"], "up_triangle");
    assert_eq!(json["colorbar_ticks"].as_array().unwrap().len(), 7);
}

#[test]
fn test_svg_export_of_report() {
    let data = heatmapf(&ShannonEntropyField, 5, false).unwrap();
    let options = HeatmapOptions { style: HeatmapStyle::Hexagonal, ..Default::default() };
    let cells = heatmap_cells(&data, &options);
    assert!(cells.iter().all(|c| c.shape == CellShape::Hexagon));

    let svg = svg_heatmap(&cells, 5);
    assert_eq!(svg.matches("<polygon").count(), cells.len());
}
