// tests/integration_tests/classification_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use nextpack::{Category, CollectorConfig, collect};
use tempfile::TempDir;

#[test]
fn test_fixture_classification() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let collection = collect(&CollectorConfig::new(temp_dir.path()))?;
    let stats = &collection.stats;

    assert_eq!(stats.total_files, 15);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.layouts, 1);
    assert_eq!(stats.components, 2);
    assert_eq!(stats.hooks, 1);
    assert_eq!(stats.api_routes, 1, "route.ts counts as app structure");
    assert_eq!(stats.client_components, 2);
    assert_eq!(stats.server_components, 13);

    let names = |category: Category| -> Vec<String> {
        collection
            .bucket(category)
            .iter()
            .map(|entry| entry.relative_str())
            .collect()
    };

    assert_eq!(
        names(Category::AppStructure),
        vec![
            "app/layout.tsx",
            "app/page.tsx",
            "app/dashboard/loading.tsx",
            "app/dashboard/page.tsx",
            "app/api/users/route.ts",
        ]
    );
    assert_eq!(names(Category::Components), vec!["components/Header.tsx", "components/ui/Button.tsx"]);
    assert_eq!(names(Category::Lib), vec!["lib/db.ts", "src/utils/format.ts"]);
    assert_eq!(names(Category::Api), vec!["pages/api/legacy.ts"]);
    assert_eq!(names(Category::Types), vec!["types/index.d.ts"]);
    assert_eq!(names(Category::Config), vec!["middleware.ts", "next.config.js"]);
    assert_eq!(names(Category::Other), vec!["app/providers.tsx"]);
    Ok(())
}

#[test]
fn test_every_file_in_exactly_one_bucket() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let collection = collect(&CollectorConfig::new(temp_dir.path()))?;

    let bucketed: usize = Category::ALL
        .iter()
        .map(|category| collection.bucket(*category).len())
        .sum();
    assert_eq!(u64::try_from(bucketed)?, collection.stats.total_files);
    Ok(())
}

#[test]
fn test_many_pages_are_counted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for index in 0..10 {
        create_test_file(
            temp_dir.path(),
            &format!("app/section{index}/page.tsx"),
            "export default function Page() {}\n",
        )?;
    }

    let collection = collect(&CollectorConfig::new(temp_dir.path()))?;

    assert_eq!(collection.stats.pages, 10);
    assert_eq!(collection.bucket(Category::AppStructure).len(), 10);
    Ok(())
}
