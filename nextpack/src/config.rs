// src/config.rs
mod settings;

pub use settings::{FileSettings, SETTINGS_FILE_NAME, load_settings, load_settings_file};

use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "nextjs_codebase.txt";

pub const DEFAULT_EXTENSIONS: [&str; 4] = [".tsx", ".jsx", ".ts", ".js"];

pub const DEFAULT_SPECIAL_FILES: [&str; 5] =
    ["page.tsx", "layout.tsx", "loading.tsx", "error.tsx", "route.ts"];

pub const DEFAULT_EXCLUDE_DIRS: [&str; 8] = [
    "node_modules",
    ".git",
    "dist",
    ".next",
    "build",
    "coverage",
    "public",
    ".github",
];

pub const DEFAULT_EXCLUDE_FILES: [&str; 2] = ["next-env.d.ts", ".eslintrc.js"];

pub const DEFAULT_PREAMBLE: &str = "Instrucciones para el Análisis del Proyecto Next.js 14:

1. Este es un proyecto Next.js 14 que utiliza el App Router
2. Aspectos clave a considerar:
   - Estructura de carpetas app/
   - Server y Client Components
   - Archivos especiales (page, layout, loading, error)
   - API Routes y manejo de datos
   - Patrones de optimización y renderizado
3. La aplicación utiliza:
   - Server Components por defecto
   - TypeScript
   - Estructuras de datos y estado
4. Usa este contexto para responder preguntas sobre la aplicación
";

/// Everything a collection run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub special_files: Vec<String>,
    /// Fragments matched as plain substrings of the relative path.
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
    pub preamble: String,
    /// File name of the report, created directly under `root`.
    pub output: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: to_owned_list(&DEFAULT_EXTENSIONS),
            special_files: to_owned_list(&DEFAULT_SPECIAL_FILES),
            exclude_dirs: to_owned_list(&DEFAULT_EXCLUDE_DIRS),
            exclude_files: to_owned_list(&DEFAULT_EXCLUDE_FILES),
            preamble: DEFAULT_PREAMBLE.to_owned(),
            output: DEFAULT_OUTPUT_FILE.to_owned(),
        }
    }
}

impl CollectorConfig {
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    #[inline]
    #[must_use]
    pub fn is_special_file(&self, name: &str) -> bool {
        self.special_files.iter().any(|special| special == name)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
