//! Application Configuration

use kernel::pagination::DEFAULT_PER_PAGE;

/// Posts application configuration
#[derive(Debug, Clone)]
pub struct PostsConfig {
    /// Page size when the client sends no `per_page`
    pub default_per_page: u32,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}
