use std::fs;
use std::path::Path;
use year_in_books::commands::{
    execute_infographic, execute_list, execute_stats, InfographicArgs, ListArgs, StatsArgs,
};
use year_in_books::output::read_report;

const CATALOG: &str = r#"
reader = "Jane Reader"

[books.dune]
title = "Dune"
author = "Frank Herbert"
finished = 2021-01-05
pages = 612
genres = ["science fiction", "classic"]
media = "paper"
grade = "A"

[books.relic]
title = "Relic"
author = ["Douglas Preston", "Lincoln Child"]
finished = 2021-07-14
media = "audio"
grade = "B+"
"#;

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("books.toml");
    fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn test_execute_infographic_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out/year.svg");

    let args = InfographicArgs {
        catalog: write_catalog(dir.path()),
        output: output.clone(),
        print_summary: false,
        ..Default::default()
    };

    execute_infographic(args).unwrap();

    let svg = fs::read_to_string(output).unwrap();
    assert!(svg.contains("Year in Books 2021"));
    assert!(svg.contains("Jane Reader"));
    assert!(svg.contains("Frank Herbert"));
}

#[test]
fn test_execute_list_writes_latex() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("books.tex");

    let args = ListArgs {
        catalog: write_catalog(dir.path()),
        output: output.clone(),
        print_summary: false,
        ..Default::default()
    };

    execute_list(args).unwrap();

    let tex = fs::read_to_string(output).unwrap();
    assert!(tex.contains(r"\title{Books read in 2021}"));
    assert!(tex.contains(r"\item \textit{Relic} by Douglas Preston, Lincoln Child"));
}

#[test]
fn test_execute_stats_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.json");

    let args = StatsArgs {
        catalog: write_catalog(dir.path()),
        output: output.clone(),
        print_summary: false,
        ..Default::default()
    };

    execute_stats(args).unwrap();

    let report = read_report(&output).unwrap();
    assert_eq!(report.total_books, 2);
    assert_eq!(report.total_pages, 612);
    assert_eq!(report.reporting_year, Some(2021));
    assert_eq!(report.grades[0].label, "A");
}

#[test]
fn test_missing_catalog_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("year.svg");

    let args = InfographicArgs {
        catalog: dir.path().join("missing.toml"),
        output: output.clone(),
        print_summary: false,
        ..Default::default()
    };

    let error = execute_infographic(args).unwrap_err();
    assert!(format!("{:#}", error).contains("Failed to load catalog"));
    assert!(!output.exists());
}

#[test]
fn test_empty_catalog_renders_zero_books() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("empty.toml");
    fs::write(&catalog, "[books]\n").unwrap();
    let svg = dir.path().join("year.svg");
    let tex = dir.path().join("books.tex");

    execute_infographic(InfographicArgs {
        catalog: catalog.clone(),
        output: svg.clone(),
        print_summary: false,
        ..Default::default()
    })
    .unwrap();

    execute_list(ListArgs {
        catalog,
        output: tex.clone(),
        print_summary: false,
        ..Default::default()
    })
    .unwrap();

    assert!(fs::read_to_string(&svg).unwrap().contains(">0</text>"));
    assert!(fs::read_to_string(&tex)
        .unwrap()
        .contains("No books finished yet."));
}
