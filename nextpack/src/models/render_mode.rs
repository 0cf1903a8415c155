// src/models/render_mode.rs

/// Directive that marks a Client Component. Matched as a plain,
/// case-insensitive substring anywhere in the file.
pub const CLIENT_MARKER: &str = "use client";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Client,
    Server,
}

impl RenderMode {
    #[inline]
    #[must_use]
    pub fn detect(content: &str) -> Self {
        if content.to_lowercase().contains(CLIENT_MARKER) {
            Self::Client
        } else {
            Self::Server
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_client(self) -> bool {
        matches!(self, Self::Client)
    }
}
