//! CLI Integration Tests
//!
//! Runs the command against a temporary IIAB layout, with every path
//! given on the command line.

use clap::Parser;
use iiab_item_size::cli::Cli;
use tempfile::TempDir;

/// Menu-defs directory plus the three catalogs
fn layout() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("menu-defs")).unwrap();

    std::fs::write(
        dir.path().join("menu-defs/wikipedia_for_schools.json"),
        r#"{"intended_use": "zim", "zim_name": "wikipedia_for_schools_zim"}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("menu-defs/en-phet.json"),
        r#"{"intended_use": "html", "moddir": "en-phet"}"#,
    )
    .unwrap();

    std::fs::write(
        dir.path().join("kiwix_catalog.json"),
        r#"{"zims": {"x": {"perma_ref": "wikipedia_for_schools_zim", "download_url": "http://mirror/wfs.zim", "size": 500000}}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("oer2go_catalog.json"),
        r#"{"modules": {"en-phet": {"rsync_url": "rsync://mirror/en-phet", "ksize": 0}}}"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("map-catalog.json"), r#"{"base": {}}"#).unwrap();

    dir
}

fn cli(dir: &TempDir, extra: &[&str]) -> Cli {
    let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();

    let mut args = vec![
        "iiab-item-size".to_string(),
        "--menu-defs".to_string(),
        path("menu-defs"),
        "--kiwix-catalog".to_string(),
        path("kiwix_catalog.json"),
        "--oer2go-catalog".to_string(),
        path("oer2go_catalog.json"),
        "--map-catalog".to_string(),
        path("map-catalog.json"),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));

    Cli::try_parse_from(args).unwrap()
}

#[tokio::test]
async fn test_missing_item_succeeds_with_zero_size() {
    let dir = layout();

    let output = cli(&dir, &["nonexistent_item"]).run().await.unwrap();
    assert_eq!(
        output,
        r#"content [SizeResult { name: "nonexistent_item", type: "unknown", size: 0 }]"#
    );

    // Exit status 0: execute returns Ok for a miss
    assert!(cli(&dir, &["nonexistent_item"]).execute().await.is_ok());
}

#[tokio::test]
async fn test_found_item_output_line() {
    let dir = layout();

    let output = cli(&dir, &["wikipedia_for_schools"]).run().await.unwrap();
    assert_eq!(
        output,
        r#"content [SizeResult { name: "wikipedia_for_schools_zim", type: "zim", size: 512001023 }]"#
    );
}

#[tokio::test]
async fn test_json_output_for_several_names() {
    let dir = layout();

    let output = cli(&dir, &["--json", "en-phet", "nonexistent_item"])
        .run()
        .await
        .unwrap();
    assert_eq!(
        output,
        r#"[{"name":"en-phet","type":"module","size":1023},{"name":"nonexistent_item","type":"unknown","size":0}]"#
    );
}

#[tokio::test]
async fn test_missing_catalog_fails() {
    let dir = layout();
    std::fs::remove_file(dir.path().join("kiwix_catalog.json")).unwrap();

    // Non-zero exit: the error propagates out of execute to main
    let result = cli(&dir, &["wikipedia_for_schools"]).execute().await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("zim catalog"), "error: {}", err);
}

#[tokio::test]
async fn test_module_rsync_url_with_header_fallback_is_left_alone() {
    let dir = layout();

    // en-phet has ksize 0 and an rsync URL: never sent to the HTTP client
    let output = cli(&dir, &["--probe-headers", "--json", "en-phet"])
        .run()
        .await
        .unwrap();
    assert_eq!(output, r#"[{"name":"en-phet","type":"module","size":1023}]"#);
}
