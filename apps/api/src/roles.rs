#![allow(dead_code)]

//! Role catalog — the static role-to-topics table.
//!
//! Built once at startup and injected through `AppState` as an
//! `Arc<RoleCatalog>`, so tests can substitute fixture catalogs instead of
//! patching a global.

use serde::{Deserialize, Serialize};

/// One selectable role and the interview topics it maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub name: String,
    pub topics: Vec<String>,
}

/// Immutable, read-only after startup. Shared across all sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCatalog {
    roles: Vec<RoleConfig>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<RoleConfig>) -> Self {
        Self { roles }
    }

    /// The built-in table shipped with the service.
    pub fn builtin() -> Self {
        let role = |name: &str, topics: &[&str]| RoleConfig {
            name: name.to_string(),
            topics: topics.iter().map(|t| t.to_string()).collect(),
        };
        Self::new(vec![
            role("Frontend Developer", &["JavaScript", "TypeScript", "React"]),
            role("Backend Developer", &["Python", "Java", "Go"]),
            role("Full-Stack Developer", &["JavaScript", "Python", "SQL"]),
            role("Systems Engineer", &["C++", "Rust", "Go"]),
            role("Data Engineer", &["Python", "SQL", "Spark"]),
            role("Mobile Developer", &["Kotlin", "Swift", "Dart"]),
        ])
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&RoleConfig> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn roles(&self) -> &[RoleConfig] {
        &self.roles
    }
}
