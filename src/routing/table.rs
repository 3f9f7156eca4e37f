//! Route table module
//!
//! Ordered prefix table mapping request paths to response templates.
//! Entries are evaluated in declaration order and the first match wins.

use crate::templates::TemplateKind;

/// A single prefix rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path prefix (e.g. "/fetch" matches "/fetch", "/fetch/1", "/fetchXYZ")
    pub prefix: String,
    /// Template served when the prefix matches
    pub template: TemplateKind,
}

impl RouteEntry {
    pub fn new(prefix: impl Into<String>, template: TemplateKind) -> Self {
        Self {
            prefix: prefix.into(),
            template,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(self.prefix.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: TemplateKind,
}

impl RouteTable {
    pub const fn new(entries: Vec<RouteEntry>, fallback: TemplateKind) -> Self {
        Self { entries, fallback }
    }

    /// `/fetch`, `/scrape`, `/execute`, then the default template
    pub fn standard() -> Self {
        Self::new(
            vec![
                RouteEntry::new("/fetch", TemplateKind::Fetch),
                RouteEntry::new("/scrape", TemplateKind::Scrape),
                RouteEntry::new("/execute", TemplateKind::Execute),
            ],
            TemplateKind::Default,
        )
    }

    /// Find the first matching entry for a path
    pub fn match_route(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.matches(path))
    }

    /// Resolve a path to its template, falling back when nothing matches
    pub fn resolve(&self, path: &str) -> TemplateKind {
        self.match_route(path)
            .map_or(self.fallback, |entry| entry.template)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_prefixes() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/fetch"), TemplateKind::Fetch);
        assert_eq!(table.resolve("/fetch/news"), TemplateKind::Fetch);
        assert_eq!(table.resolve("/fetchXYZ"), TemplateKind::Fetch);
        assert_eq!(table.resolve("/scrape"), TemplateKind::Scrape);
        assert_eq!(table.resolve("/scrape/page"), TemplateKind::Scrape);
        assert_eq!(table.resolve("/execute"), TemplateKind::Execute);
        assert_eq!(table.resolve("/executeNow"), TemplateKind::Execute);
    }

    #[test]
    fn test_unmatched_falls_back_to_default() {
        let table = RouteTable::standard();
        for path in ["/", "", "/unknown", "/fetc", "fetch", "/Fetch", "/api/fetch", "*"] {
            assert_eq!(
                table.resolve(path),
                TemplateKind::Default,
                "path {path:?} should hit the default template"
            );
        }
    }

    #[test]
    fn test_match_route_order() {
        // Overlapping prefixes: the first declared entry wins
        let table = RouteTable::new(
            vec![
                RouteEntry::new("/fetch", TemplateKind::Fetch),
                RouteEntry::new("/fetch/scrape", TemplateKind::Scrape),
                RouteEntry::new("/", TemplateKind::Execute),
            ],
            TemplateKind::Default,
        );

        assert_eq!(table.resolve("/fetch/scrape"), TemplateKind::Fetch);
        assert_eq!(table.resolve("/other"), TemplateKind::Execute);
        assert_eq!(table.resolve(""), TemplateKind::Default);

        let entry = table.match_route("/fetch/scrape").unwrap();
        assert_eq!(entry.prefix, "/fetch");
    }

    #[test]
    fn test_standard_table_declaration_order() {
        let table = RouteTable::standard();
        let prefixes: Vec<&str> = table
            .entries()
            .iter()
            .map(|e| e.prefix.as_str())
            .collect();
        assert_eq!(prefixes, ["/fetch", "/scrape", "/execute"]);
    }
}
