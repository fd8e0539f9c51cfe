use std::fmt::Display;

use crate::env::Port;

pub use exercisedb_app::route::api::{API_BASE_PATH, DOCS_PATH};

/// Startup diagnostics, three lines without trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Banner {
    pub port: Port,
}
impl Banner {
    pub fn new(port: Port) -> Self {
        Self { port }
    }

    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}
impl Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.base_url();
        writeln!(f, "🚀 Starting ExerciseDB API server on port {}", self.port)?;
        writeln!(f, "📖 API docs available at: {base}{DOCS_PATH}")?;
        write!(f, "🔗 API base URL: {base}{API_BASE_PATH}")
    }
}
