use mediadupe::duplicates::{DuplicateFinder, FinderConfig, ReportStage};
use mediadupe::output::TextOutput;
use mediadupe::scanner::{ExtensionFilter, ScanError, WalkerConfig};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &[u8]) {
    File::create(path).unwrap().write_all(content).unwrap();
}

#[test]
fn test_scan_empty_directory() {
    let dir = tempdir().unwrap();
    let finder = DuplicateFinder::with_defaults();

    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.reported_groups, 0);
}

#[test]
fn test_scan_identical_media_files() {
    let dir = tempdir().unwrap();
    let content = [7u8; 100];
    write_file(&dir.path().join("a.png"), &content);
    write_file(&dir.path().join("b.png"), &content);

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    let text = TextOutput::new(&groups).to_string().unwrap();
    let expected = format!(
        "0,{}\n0,{}\n",
        dir.path().join("a.png").display(),
        dir.path().join("b.png").display()
    );
    assert_eq!(text, expected);
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.size_candidates, 2);
    assert_eq!(summary.reclaimable_space, 100);
}

#[test]
fn test_scan_distinct_sizes_report_nothing() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.png"), &[1u8; 100]);
    write_file(&dir.path().join("b.jpg"), &[1u8; 200]);

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.size_candidates, 0);
}

#[test]
fn test_scan_excluded_extensions_report_nothing() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), &[3u8; 100]);
    write_file(&dir.path().join("b.txt"), &[3u8; 100]);

    let finder = DuplicateFinder::with_defaults();
    let (groups, summary) = finder.find_duplicates(dir.path()).unwrap();

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
    assert_eq!(summary.uncovered.get(".txt"), Some(&2));
}

#[test]
fn test_scan_nested_directories() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("albums").join("2019");
    fs::create_dir_all(&sub).unwrap();

    write_file(&dir.path().join("cover.jpg"), b"jpeg bytes");
    write_file(&sub.join("copy.jpg"), b"jpeg bytes");

    let finder = DuplicateFinder::with_defaults();
    let (groups, _) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 1);
    assert!(groups[0].contains(&dir.path().join("cover.jpg")));
    assert!(groups[0].contains(&sub.join("copy.jpg")));
}

#[test]
fn test_scan_multiple_groups_are_indexed_in_size_order() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("big1.mp4"), &[9u8; 300]);
    write_file(&dir.path().join("big2.mp4"), &[9u8; 300]);
    write_file(&dir.path().join("small1.mp3"), &[5u8; 10]);
    write_file(&dir.path().join("small2.mp3"), &[5u8; 10]);

    let finder = DuplicateFinder::with_defaults();
    let (groups, _) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].size, 10);
    assert_eq!(groups[1].size, 300);
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempdir().unwrap();
    for name in ["a.gif", "b.gif", "c.gif", "d.png"] {
        write_file(&dir.path().join(name), b"animated");
    }

    let finder = DuplicateFinder::with_defaults();
    let (first, _) = finder.find_duplicates(dir.path()).unwrap();
    let (second, _) = finder.find_duplicates(dir.path()).unwrap();

    assert_eq!(
        TextOutput::new(&first).to_string().unwrap(),
        TextOutput::new(&second).to_string().unwrap()
    );
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].len(), 4);
}

#[test]
fn test_scan_prefix_match_depends_on_report_stage() {
    let dir = tempdir().unwrap();
    let mut a = vec![0u8; 10_000];
    let mut b = vec![0u8; 10_000];
    a[9_000] = 1;
    b[9_000] = 2;
    write_file(&dir.path().join("a.mov"), &a);
    write_file(&dir.path().join("b.mov"), &b);

    let (groups, summary) = DuplicateFinder::with_defaults()
        .find_duplicates(dir.path())
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(summary.prefix_groups, 1);
    assert_eq!(summary.full_groups, 0);
    assert_eq!(summary.unconfirmed_groups, 1);

    let config = FinderConfig::default().with_report_stage(ReportStage::Full);
    let (groups, summary) = DuplicateFinder::new(config)
        .find_duplicates(dir.path())
        .unwrap();
    assert!(groups.is_empty());
    assert_eq!(summary.reported_groups, 0);
}

#[test]
fn test_scan_with_custom_filter() {
    let dir = tempdir().unwrap();
    write_file(&dir.path().join("a.txt"), b"notes");
    write_file(&dir.path().join("b.txt"), b"notes");
    write_file(&dir.path().join("c.png"), b"notes");

    let walker_config = WalkerConfig::default().with_filter(ExtensionFilter::new([".txt"]));
    let config = FinderConfig::default().with_walker_config(walker_config);
    let (groups, summary) = DuplicateFinder::new(config)
        .find_duplicates(dir.path())
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
    assert_eq!(summary.uncovered.get(".png"), Some(&1));
}

#[test]
fn test_scan_nonexistent_root() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing");

    let result = DuplicateFinder::with_defaults().find_duplicates(&missing);
    assert!(matches!(result, Err(ScanError::NotFound(_))));
}

#[test]
fn test_scan_file_root_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.png");
    write_file(&file, b"x");

    let result = DuplicateFinder::with_defaults().find_duplicates(&file);
    assert!(matches!(result, Err(ScanError::NotADirectory(_))));
}
