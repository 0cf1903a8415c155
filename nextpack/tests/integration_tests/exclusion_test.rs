// tests/integration_tests/exclusion_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use nextpack::{CollectorConfig, collect, render_report};

#[test]
fn test_excluded_directories_never_reported() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(
        temp_dir.path(),
        "packages/ui/node_modules/lib/page.tsx",
        "export {}\n",
    )?;
    create_test_file(temp_dir.path(), "coverage/lcov-report/sorter.js", "var x\n")?;

    let (report, _) = render_report(&CollectorConfig::new(temp_dir.path()))?;

    assert!(!report.contains("node_modules"));
    assert!(!report.contains("public/sw.js"));
    assert!(!report.contains(".next/"));
    assert!(!report.contains("coverage/"));
    assert!(!report.contains("### Archivo: next-env.d.ts"));
    assert!(!report.contains("### Archivo: .eslintrc.js"));
    assert!(report.contains("Total de archivos: 15\n"));
    Ok(())
}

#[test]
fn test_exclusion_is_a_plain_substring_match() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "redistribution/page.tsx", "export {}\n")?;
    create_test_file(temp_dir.path(), "src/prebuild.ts", "export {}\n")?;

    let collection = collect(&CollectorConfig::new(temp_dir.path()))?;

    assert_eq!(collection.stats.total_files, 15);
    assert_eq!(collection.stats.pages, 2);
    Ok(())
}

#[test]
fn test_custom_filters() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "app/globals.css", "body { margin: 0 }\n")?;

    let mut config = CollectorConfig::new(temp_dir.path());
    config.extensions = vec![".css".to_owned()];
    config.exclude_dirs.clear();

    let collection = collect(&config)?;
    let report = render_report(&config)?.0;

    assert_eq!(
        collection.stats.total_files, 7,
        "One stylesheet plus every special file, including the one under .next"
    );
    assert!(report.contains("SECCIÓN: STYLES\n"));
    assert!(report.contains("### Archivo: app/globals.css ###"));
    assert!(report.contains("### Archivo: .next/server/app/page.tsx ###"));
    Ok(())
}
