//! Selection registry: the fixed catalogs of frameworks, ORMs and endpoints
//!
//! Each catalog keeps its display order and an identifier index, so a
//! selection-change event carrying an identifier either resolves to exactly
//! one entry or to nothing at all.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{Endpoint, Framework, Orm, Selection};

pub static FRAMEWORKS: [Framework; 6] = [
    Framework {
        name: "Standard Library",
        value: "standard",
        port: 8081,
    },
    Framework {
        name: "Gin",
        value: "gin",
        port: 8082,
    },
    Framework {
        name: "Fiber",
        value: "fiber",
        port: 8083,
    },
    Framework {
        name: "Echo",
        value: "echo",
        port: 8084,
    },
    Framework {
        name: "Chi",
        value: "chi",
        port: 8085,
    },
    Framework {
        name: "Gorilla Mux",
        value: "gorilla",
        port: 8086,
    },
];

pub static ORMS: [Orm; 4] = [
    Orm {
        name: "database/sql",
        value: "sql",
    },
    Orm {
        name: "GORM",
        value: "gorm",
    },
    Orm {
        name: "SQLx",
        value: "sqlx",
    },
    Orm {
        name: "PGX",
        value: "pgx",
    },
];

pub static ENDPOINTS: [Endpoint; 5] = [
    Endpoint {
        name: "Health Check",
        path: "/health",
    },
    Endpoint {
        name: "Simple Test",
        path: "/api/test/simple",
    },
    Endpoint {
        name: "Database Test",
        path: "/api/test/database?limit=10",
    },
    Endpoint {
        name: "JSON Test",
        path: "/api/test/json",
    },
    Endpoint {
        name: "Framework Info",
        path: "/api/info",
    },
];

/// An entry that can be selected by its identity field
pub trait CatalogEntry: Sync + 'static {
    /// Identity used by selection-change events
    fn id(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;
}

impl CatalogEntry for Framework {
    fn id(&self) -> &'static str {
        self.value
    }

    fn label(&self) -> &'static str {
        self.name
    }
}

impl CatalogEntry for Orm {
    fn id(&self) -> &'static str {
        self.value
    }

    fn label(&self) -> &'static str {
        self.name
    }
}

impl CatalogEntry for Endpoint {
    fn id(&self) -> &'static str {
        self.path
    }

    fn label(&self) -> &'static str {
        self.name
    }
}

/// Ordered, non-empty catalog with O(1) identifier lookup
#[derive(Debug)]
pub struct Registry<T: 'static> {
    entries: &'static [T],
    index: HashMap<&'static str, usize>,
}

impl<T: CatalogEntry> Registry<T> {
    /// Build a registry over static data.
    ///
    /// # Panics
    /// If `entries` is empty or contains a duplicate identifier; both are
    /// mistakes in the catalog constants, not runtime conditions.
    pub fn new(entries: &'static [T]) -> Self {
        assert!(!entries.is_empty(), "catalog must not be empty");

        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let previous = index.insert(entry.id(), i);
            assert!(previous.is_none(), "duplicate catalog id: {}", entry.id());
        }

        Self { entries, index }
    }

    /// Resolve an identifier to its entry
    pub fn lookup(&self, id: &str) -> Option<&'static T> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Display position of an identifier
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, index: usize) -> Option<&'static T> {
        self.entries.get(index)
    }

    /// The default entry
    pub fn first(&self) -> &'static T {
        &self.entries[0]
    }

    pub fn entries(&self) -> &'static [T] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifier of the entry `offset` places away from `id`, clamped to
    /// the ends of the catalog. Unknown identifiers start from the top.
    pub fn neighbor(&self, id: &str, offset: isize) -> &'static T {
        let current = self.position(id).unwrap_or(0) as isize;
        let last = self.entries.len() as isize - 1;
        let target = (current + offset).clamp(0, last) as usize;
        &self.entries[target]
    }
}

/// The three catalogs the operator picks from
#[derive(Debug)]
pub struct Catalogs {
    pub frameworks: Registry<Framework>,
    pub orms: Registry<Orm>,
    pub endpoints: Registry<Endpoint>,
}

impl Catalogs {
    fn standard() -> Self {
        Self {
            frameworks: Registry::new(&FRAMEWORKS),
            orms: Registry::new(&ORMS),
            endpoints: Registry::new(&ENDPOINTS),
        }
    }

    /// First entry of each catalog
    pub fn default_selection(&self) -> Selection {
        Selection::new(
            self.frameworks.first(),
            self.orms.first(),
            self.endpoints.first(),
        )
    }
}

/// Process-wide catalogs, built on first use
pub fn catalogs() -> &'static Catalogs {
    static CATALOGS: OnceLock<Catalogs> = OnceLock::new();
    CATALOGS.get_or_init(Catalogs::standard)
}
