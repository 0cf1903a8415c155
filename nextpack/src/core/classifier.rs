// src/core/classifier.rs
use crate::config::CollectorConfig;
use crate::models::{Category, Counter, FileEntry, RenderMode};
use crate::utils::read_source;
use tracing::debug;

pub const API_ROUTE_FILE: &str = "route.ts";
pub const STYLE_EXTENSIONS: [&str; 3] = [".css", ".scss", ".sass"];
pub const TYPE_DECLARATION_SUFFIX: &str = ".d.ts";
pub const CONFIG_FILES: [&str; 3] = ["next.config.js", "middleware.ts", "tsconfig.json"];

/// What the rules look at: exact basename/extension and the lower-cased
/// relative path for substring checks.
struct Subject<'a> {
    name: &'a str,
    extension: &'a str,
    path: String,
    config: &'a CollectorConfig,
}

type Predicate = fn(&Subject<'_>) -> bool;

/// Checked top to bottom, first match wins. Anything left is `Other`.
const RULES: [(Predicate, Category); 8] = [
    (|s| s.config.is_special_file(s.name), Category::AppStructure),
    (|s| s.path.contains("components"), Category::Components),
    (|s| s.path.contains("hooks") || s.name.starts_with("use"), Category::Hooks),
    (|s| s.path.contains("api") || s.name == API_ROUTE_FILE, Category::Api),
    (|s| s.path.contains("lib") || s.path.contains("utils"), Category::Lib),
    (|s| STYLE_EXTENSIONS.contains(&s.extension), Category::Styles),
    (
        |s| s.name.ends_with(TYPE_DECLARATION_SUFFIX) || s.path.contains("types"),
        Category::Types,
    ),
    (|s| CONFIG_FILES.contains(&s.name), Category::Config),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub counter: Option<Counter>,
}

/// Assigns `entry` to exactly one category.
#[inline]
#[must_use]
pub fn classify(entry: &FileEntry, config: &CollectorConfig) -> Classification {
    let subject = Subject {
        name: &entry.name,
        extension: &entry.extension,
        path: entry.relative_str().to_lowercase(),
        config,
    };

    let category = RULES
        .iter()
        .find(|(matches, _)| matches(&subject))
        .map_or(Category::Other, |(_, category)| *category);

    Classification {
        category,
        counter: counter_for(category, &entry.name),
    }
}

fn counter_for(category: Category, name: &str) -> Option<Counter> {
    match category {
        Category::AppStructure => match name {
            "page.tsx" => Some(Counter::Pages),
            "layout.tsx" => Some(Counter::Layouts),
            _ => None,
        },
        Category::Components => Some(Counter::Components),
        Category::Hooks => Some(Counter::Hooks),
        Category::Api => Some(Counter::ApiRoutes),
        Category::Lib | Category::Styles | Category::Config | Category::Types | Category::Other => {
            None
        }
    }
}

/// Reads the file and detects its render mode. Unreadable files yield `None`
/// and are left out of the client/server tally.
#[inline]
#[must_use]
pub fn detect_render_mode(entry: &FileEntry) -> Option<RenderMode> {
    match read_source(&entry.path) {
        Ok(content) => Some(RenderMode::detect(&content)),
        Err(err) => {
            debug!(path = %entry.path.display(), error = %err, "skipping render mode tally");
            None
        }
    }
}
