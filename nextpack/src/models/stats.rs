// src/models/stats.rs
use super::RenderMode;

/// Per-category counters bumped by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Pages,
    Layouts,
    Components,
    ApiRoutes,
    Hooks,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_files: u64,
    pub pages: u64,
    pub layouts: u64,
    pub components: u64,
    pub api_routes: u64,
    pub hooks: u64,
    pub server_components: u64,
    pub client_components: u64,
}

impl Stats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_files: 0,
            pages: 0,
            layouts: 0,
            components: 0,
            api_routes: 0,
            hooks: 0,
            server_components: 0,
            client_components: 0,
        }
    }

    #[inline]
    pub fn bump(&mut self, counter: Counter) {
        let slot = match counter {
            Counter::Pages => &mut self.pages,
            Counter::Layouts => &mut self.layouts,
            Counter::Components => &mut self.components,
            Counter::ApiRoutes => &mut self.api_routes,
            Counter::Hooks => &mut self.hooks,
        };
        *slot = slot.saturating_add(1);
    }

    #[inline]
    pub fn record_render_mode(&mut self, mode: RenderMode) {
        match mode {
            RenderMode::Client => {
                self.client_components = self.client_components.saturating_add(1);
            }
            RenderMode::Server => {
                self.server_components = self.server_components.saturating_add(1);
            }
        }
    }

    #[inline]
    pub fn record_file(&mut self) {
        self.total_files = self.total_files.saturating_add(1);
    }

    /// Counters in summary order, paired with their report labels.
    #[inline]
    #[must_use]
    pub const fn summary(&self) -> [(&'static str, u64); 8] {
        [
            ("Total de archivos", self.total_files),
            ("Pages", self.pages),
            ("Layouts", self.layouts),
            ("Components", self.components),
            ("API Routes", self.api_routes),
            ("Hooks", self.hooks),
            ("Server Components", self.server_components),
            ("Client Components", self.client_components),
        ]
    }
}
