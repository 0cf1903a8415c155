// src/models/category.rs
use std::fmt;

/// Report section a collected file belongs to.
///
/// Variants are declared in report order; the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AppStructure,
    Components,
    Lib,
    Hooks,
    Api,
    Styles,
    Config,
    Types,
    Other,
}

impl Category {
    pub const ALL: [Self; 9] = [
        Self::AppStructure,
        Self::Components,
        Self::Lib,
        Self::Hooks,
        Self::Api,
        Self::Styles,
        Self::Config,
        Self::Types,
        Self::Other,
    ];

    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::AppStructure => "app_structure",
            Self::Components => "components",
            Self::Lib => "lib",
            Self::Hooks => "hooks",
            Self::Api => "api",
            Self::Styles => "styles",
            Self::Config => "config",
            Self::Types => "types",
            Self::Other => "other",
        }
    }

    /// Section heading, e.g. `APP STRUCTURE`.
    #[inline]
    #[must_use]
    pub fn label(self) -> String {
        self.key().to_uppercase().replace('_', " ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
