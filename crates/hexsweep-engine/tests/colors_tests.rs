use hexsweep_core::WalkFilter;
use hexsweep_engine::colors::*;
use hexsweep_testing::{TestProject, assertions, fixtures};

fn extract(project: &TestProject) -> (ColorIndex, hexsweep_engine::colors::ExtractStats) {
    let mut extractor = ColorExtractor::new(WalkFilter::colors_defaults());
    extractor.scan_tree(project.root());
    let stats = extractor.stats();
    (extractor.into_index(), stats)
}

#[test]
fn test_scan_tree_groups_occurrences_in_traversal_order() {
    let project = TestProject::new()
        .with_file("src/theme.css", fixtures::THEME_CSS)
        .with_file("src/Button.tsx", fixtures::BUTTON_TSX)
        .with_file("README.md", "Brand color is #1a73e8.\n");

    let (index, stats) = extract(&project);
    assert_eq!(stats.files_scanned, 3);
    assert_eq!(stats.files_skipped, 0);

    let primary = index.get("#1a73e8").unwrap();
    let locations: Vec<(String, usize)> = primary
        .iter()
        .map(|occ| (occ.file.clone(), occ.line_no))
        .collect();
    let readme = project.root().join("README.md").display().to_string();
    let theme = project.root().join("src/theme.css").display().to_string();
    assert_eq!(
        locations,
        vec![(readme, 1), (theme.clone(), 2), (theme.clone(), 7), (theme, 8)]
    );
    assert_eq!(primary[1].line, "  --primary: #1A73E8;");

    assert_eq!(index.get("#fff").unwrap().len(), 1);
    assert_eq!(index.get("#ff000080").unwrap()[0].line_no, 1);
    assert_eq!(index.len(), 3);
}

#[test]
fn test_excluded_directory_and_ranked_csv() {
    let project = TestProject::new()
        .with_file("node_modules/ui/theme.css", "a { color: #123; background: #456; }")
        .with_file(
            "styles/site.css",
            "a { color: #ABCDEF; }\nb { color: #abcdef; }\nc { color: #00ff00; }\n",
        );

    let (index, _) = extract(&project);
    let paths = write_reports(&index, project.workdir()).unwrap();

    let (header, rows) = assertions::read_csv(&paths.csv).unwrap();
    assert_eq!(header, CSV_HEADER.to_vec());
    assert_eq!(rows.len(), 2);
    assertions::assert_counts_descending(&rows).unwrap();

    assert_eq!(rows[0][0], "#abcdef");
    assert_eq!(rows[0][1], "2");
    assert_eq!(rows[0][3], "1");
    assert_eq!(rows[1][0], "#00ff00");
    assert!(rows.iter().all(|row| !row[2].contains("node_modules")));
}

#[test]
fn test_json_report_schema() {
    let project = TestProject::new().with_file("src/theme.css", fixtures::THEME_CSS);

    let (index, _) = extract(&project);
    let paths = write_reports(&index, project.workdir()).unwrap();
    assert_eq!(paths.dir, project.workdir().join(OUTPUT_DIR_NAME));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.json).unwrap()).unwrap();
    assertions::assert_color_keys_normalized(&json).unwrap();

    let first = &json["#1a73e8"][0];
    assert_eq!(
        first["file"],
        project.root().join("src/theme.css").display().to_string()
    );
    assert_eq!(first["line_no"], 2);
    assert_eq!(first["line"], "  --primary: #1A73E8;");
}

#[test]
fn test_undecodable_file_is_omitted_entirely() {
    let project = TestProject::new()
        .with_bytes("legacy.css", fixtures::LATIN1_CSS)
        .with_file("modern.css", "color: #def;\n");

    let (index, stats) = extract(&project);
    assert_eq!(stats.files_scanned, 1);
    assert_eq!(stats.files_skipped, 1);
    assert!(index.get("#abc").is_none());
    assert_eq!(index.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_leaves_no_trace() {
    let project = TestProject::new()
        .with_file("ok.css", "color: #def;\n")
        .with_unreadable("broken.css");

    let (index, stats) = extract(&project);
    assert_eq!(stats.files_skipped, 1);

    let paths = write_reports(&index, project.workdir()).unwrap();
    let json = std::fs::read_to_string(&paths.json).unwrap();
    assert!(!json.contains("broken.css"));

    let (_, rows) = assertions::read_csv(&paths.csv).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_extension_match_ignores_case() {
    let project = TestProject::new()
        .with_file("Theme.SCSS", "$c: #fafafa;")
        .with_file("image.png", "#000000");

    let (index, _) = extract(&project);
    assert!(index.get("#fafafa").is_some());
    assert!(index.get("#000000").is_none());
}
