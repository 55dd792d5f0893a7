//! Integration tests for adlens
//!
//! These tests write temporary report and config files and drive the
//! complete load -> filter -> sort -> preview workflows.

use adlens::config::DashboardConfig;
use adlens::data::{DataError, LoadOptions, find_by_id, load_report};
use adlens::filters::FilterDropdown;
use adlens::preview::Preview;
use adlens::table::{Column, SortDirection, TableView};
use adlens::tags::{DEFAULT_TAG_DEFINITIONS, parse, parse_lenient};
use adlens::ui::ratatui_adapter::{AppState, Mode};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const REPORT: &str = "\
creative_id,creative_name,tags,country,ad_network,os,campaign,ad_group,ipm,ctr,spend,impressions,clicks,cpm,cost_per_click,cost_per_install
cr-0001,Bubble Pop,Concept:UGC;Audio - Type:voiceover,US,Unity,iOS,Launch,A,12.5,0.031,1500.25,120000,3720,12.5,0.4,2.1
cr-0002,Wand Rush,Concept:Gameplay,DE,AppLovin,Android,Launch,B,8,0.02,800,64000,1280,12.5,0.62,3.4
cr-0003,Boot Camp,End card elements - Objects:boots,US,Unity,Android,Retarget,A,,0.045,,,,,,
cr-0004,Rock Slide,,FR,Meta,iOS,Retarget,C,15.2,0.05,2200.5,150000,7500,14.67,0.29,1.8
";

/// Helper function to write a report into a temp dir
fn write_report(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("creatives.csv");
    fs::write(&path, content).unwrap();
    path
}

fn load(path: &Path) -> Vec<adlens::data::Creative> {
    load_report(path, LoadOptions::default()).unwrap().rows
}

fn ids(view: &TableView) -> Vec<&str> {
    view.visible_rows().map(|r| r.creative_id.as_str()).collect()
}

#[test]
fn test_load_report_from_disk() {
    let dir = TempDir::new().unwrap();
    let rows = load(&write_report(&dir, REPORT));

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].spend, Some(1500.25));
    assert_eq!(rows[2].ipm, None);
    assert_eq!(rows[3].tags, None);
}

#[test]
fn test_missing_report_file() {
    let dir = TempDir::new().unwrap();
    let err = load_report(&dir.path().join("nope.csv"), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, DataError::Open { .. }));
}

#[test]
fn test_invalid_rows_skipped_when_configured() {
    let dir = TempDir::new().unwrap();
    let content = format!("{REPORT}cr-0005,Broken,,US,Unity,iOS,X,A,not-a-number,,,,,,,\n");
    let path = write_report(&dir, &content);

    assert!(load_report(&path, LoadOptions::default()).is_err());

    let report = load_report(
        &path,
        LoadOptions {
            skip_invalid_rows: true,
        },
    )
    .unwrap();
    assert_eq!(report.rows.len(), 4);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_dropdown_to_table_flow() {
    let dir = TempDir::new().unwrap();
    let mut view = TableView::new(load(&write_report(&dir, REPORT)));
    let mut dropdown = FilterDropdown::new(parse(DEFAULT_TAG_DEFINITIONS).unwrap());

    dropdown.open();
    dropdown.select_category("Concept").unwrap();
    dropdown.toggle_value("Concept:UGC");
    dropdown.back_to_categories();
    dropdown.select_category("End card elements - Objects").unwrap();
    dropdown.toggle_value("End card elements - Objects:boots");
    let tokens = dropdown.apply().unwrap();

    // Only the last category's picks are committed
    assert_eq!(tokens, ["End card elements - Objects:boots"]);
    view.set_tag_filter(tokens);
    assert_eq!(ids(&view), ["cr-0003"]);

    view.set_tag_filter(dropdown.clear());
    assert_eq!(view.len(), 4);
}

#[test]
fn test_tags_and_search_are_anded() {
    let dir = TempDir::new().unwrap();
    let mut view = TableView::new(load(&write_report(&dir, REPORT)));

    view.set_tag_filter(vec![
        "Concept:UGC".to_string(),
        "End card elements - Objects:boots".to_string(),
    ]);
    assert_eq!(ids(&view), ["cr-0001", "cr-0003"]);

    view.set_query("android");
    assert_eq!(ids(&view), ["cr-0003"]);

    // Tags column is not searched; cr-0003 stays because its blank cells pass
    view.set_query("voiceover");
    assert_eq!(ids(&view), ["cr-0003"]);
}

#[test]
fn test_untagged_rows_hidden_only_while_filtering() {
    let dir = TempDir::new().unwrap();
    let mut view = TableView::new(load(&write_report(&dir, REPORT)));

    view.set_query("fr");
    assert_eq!(ids(&view), ["cr-0003", "cr-0004"]);

    view.set_tag_filter(vec!["Concept:UGC".to_string()]);
    assert!(view.is_empty());
}

#[test]
fn test_blank_cells_never_excluded_by_search() {
    let dir = TempDir::new().unwrap();
    let mut view = TableView::new(load(&write_report(&dir, REPORT)));

    view.set_query("no such text");
    assert_eq!(ids(&view), ["cr-0003"]);

    view.set_query("");
    assert_eq!(view.len(), 4);
}

#[test]
fn test_sort_keeps_absent_values_last() {
    let dir = TempDir::new().unwrap();
    let mut view = TableView::new(load(&write_report(&dir, REPORT)));

    view.sort_by(Column::Spend, SortDirection::Descending);
    assert_eq!(ids(&view), ["cr-0004", "cr-0001", "cr-0002", "cr-0003"]);

    view.sort_by(Column::Spend, SortDirection::Ascending);
    assert_eq!(ids(&view), ["cr-0002", "cr-0001", "cr-0004", "cr-0003"]);

    view.set_sort(None);
    assert_eq!(ids(&view), ["cr-0001", "cr-0002", "cr-0003", "cr-0004"]);
}

#[test]
fn test_preview_by_id_suffix() {
    let dir = TempDir::new().unwrap();
    let rows = load(&write_report(&dir, REPORT));

    let row = find_by_id(&rows, "..0002").unwrap().clone();
    let preview = Preview::expanded(row);
    let fields = preview.fields();
    assert_eq!(fields[1].value, "Wand Rush");
    assert!(fields.iter().any(|f| f.label == "CTR" && f.value == "2.00%"));

    assert!(matches!(
        find_by_id(&rows, "9999"),
        Err(DataError::NotFound(_))
    ));
}

#[test]
fn test_config_drives_dashboard_state() {
    let dir = TempDir::new().unwrap();
    let report = write_report(&dir, REPORT);
    let config_path = dir.path().join("adlens").join("config.toml");

    let mut config = DashboardConfig::load_from(&config_path).unwrap();
    assert!(config_path.exists());
    config
        .set("report_path", &report.display().to_string())
        .unwrap();
    config.set("display_name", "Ada").unwrap();
    config
        .set("tag_definitions", "Concept:UGC;Concept:Gameplay;bogus")
        .unwrap_err();
    config
        .set("tag_definitions", "Concept:UGC;Concept:Gameplay")
        .unwrap();
    config.save_to(&config_path).unwrap();

    let config = DashboardConfig::load_from(&config_path).unwrap();
    let path = config.report_path.clone().unwrap();
    let (options, errors) = parse_lenient(config.tag_definitions());
    assert!(errors.is_empty());

    let mut state = AppState::new(load(&path), options, config.greeting());
    assert_eq!(state.greeting, "Welcome back, Ada");

    state.open_filter();
    assert_eq!(state.mode, Mode::Filter);
    state.menu_enter();
    state.menu_down();
    state.menu_down();
    state.menu_toggle();
    state.apply_filter();

    assert_eq!(state.mode, Mode::Normal);
    assert_eq!(ids(&state.view), ["cr-0002"]);
}
