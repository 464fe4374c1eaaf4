//! Employer classification: maps free-text company names to risk tiers.
//!
//! The registry is an ordered list of normalized keys. Order matters: both
//! the exact and word-boundary passes return the *first* entry that matches,
//! which keeps results reproducible when a name could match several keys.

mod domain;
mod import;
mod registry;
mod suggest;

pub use domain::{BulkEntry, CategoryMatch, EmployerCategory, ImportStats};
pub use import::ImportError;

use std::sync::RwLock;

use tracing::debug;

const BLANK_NAME_NOTE: &str = "Unable to determine category (defaulting to Category D)";
const NOT_FOUND_NOTE: &str = "Company not found in our database (defaulted to Category D)";

/// Sector keywords that bump an otherwise unknown employer to tier B.
const INDUSTRY_KEYWORDS: &[&str] = &[
    "bank", "insurance", "finance", "invest", "tech", "software", "digital", "info",
];

/// Owns the employer registry and exposes classification, autocomplete
/// suggestions, and bulk import.
///
/// The registry is the only shared mutable state in the crate: lookups take
/// the read lock, imports the write lock, so suggestion queries stay live
/// during an import.
pub struct EmployerDirectory {
    entries: RwLock<Vec<(String, EmployerCategory)>>,
}

impl Default for EmployerDirectory {
    fn default() -> Self {
        Self::with_seed()
    }
}

impl EmployerDirectory {
    /// Directory seeded with the built-in employer table.
    pub fn with_seed() -> Self {
        let entries = registry::SEED_EMPLOYERS
            .iter()
            .map(|(key, category)| ((*key).to_string(), *category))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Empty directory, used by tests and by deployments that import their
    /// own employer book.
    pub fn empty() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify a free-text employer name into a risk tier.
    ///
    /// Never fails: blank or unknown input resolves to category D with an
    /// explanatory note rather than an error, because this runs on every
    /// keystroke of the application form.
    pub fn classify(&self, name: &str) -> CategoryMatch {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return CategoryMatch {
                category: EmployerCategory::D,
                description: BLANK_NAME_NOTE.to_string(),
            };
        }

        let entries = self.entries.read().expect("registry lock poisoned");

        for (key, category) in entries.iter() {
            if normalized == *key {
                return CategoryMatch::tier(*category);
            }
        }

        // Word-boundary pass. Intentionally permissive: a key token matching
        // anywhere inside an input token counts (so "ey" matches "Deloittey").
        // First registry entry wins, not the most specific one.
        let name_words: Vec<&str> = normalized.split_whitespace().collect();
        for (key, category) in entries.iter() {
            let hit = key
                .split_whitespace()
                .any(|key_word| name_words.iter().any(|name_word| name_word.contains(key_word)));
            if hit {
                return CategoryMatch::tier(*category);
            }
        }

        drop(entries);

        if INDUSTRY_KEYWORDS
            .iter()
            .any(|keyword| normalized.contains(keyword))
        {
            return CategoryMatch::tier(EmployerCategory::B);
        }

        CategoryMatch {
            category: EmployerCategory::D,
            description: NOT_FOUND_NOTE.to_string(),
        }
    }

    /// Autocomplete suggestions for a partial employer name, proper-cased,
    /// best tier first. Inputs shorter than two characters yield nothing.
    pub fn suggest(&self, input: &str, limit: usize) -> Vec<String> {
        let term = input.trim().to_lowercase();
        if term.len() < 2 || limit == 0 {
            return Vec::new();
        }

        let entries = self.entries.read().expect("registry lock poisoned");
        suggest::rank_suggestions(&entries, &term, limit)
    }

    /// Insert entries that are not already present. First write wins: an
    /// existing key keeps its category and the entry counts as skipped.
    pub fn import_bulk(&self, batch: &[BulkEntry]) -> ImportStats {
        let mut stats = ImportStats {
            total: batch.len(),
            ..ImportStats::default()
        };

        let mut entries = self.entries.write().expect("registry lock poisoned");
        for entry in batch {
            let normalized = entry.name.trim().to_lowercase();
            if normalized.is_empty() || entries.iter().any(|(key, _)| *key == normalized) {
                stats.skipped += 1;
                continue;
            }
            entries.push((normalized, entry.category));
            stats.added += 1;
        }

        debug!(
            total = stats.total,
            added = stats.added,
            skipped = stats.skipped,
            "employer bulk import applied"
        );
        stats
    }

    /// Bulk import from tabular CSV data, locating the name and category
    /// columns heuristically. See [`import`] for the header rules.
    pub fn import_csv<R: std::io::Read>(&self, reader: R) -> Result<ImportStats, ImportError> {
        let batch = import::parse_csv(reader)?;
        Ok(self.import_bulk(&batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_defaults_to_d() {
        let directory = EmployerDirectory::with_seed();
        for input in ["", "   ", "\t"] {
            let result = directory.classify(input);
            assert_eq!(result.category, EmployerCategory::D);
            assert!(result.description.contains("Unable to determine"));
        }
    }

    #[test]
    fn exact_match_round_trips_every_seed_key() {
        let directory = EmployerDirectory::with_seed();
        for (key, category) in super::registry::SEED_EMPLOYERS {
            assert_eq!(directory.classify(key).category, *category, "key: {key}");
        }
    }

    #[test]
    fn known_bank_is_top_tier() {
        let directory = EmployerDirectory::with_seed();
        let result = directory.classify("HDFC Bank");
        assert_eq!(result.category, EmployerCategory::A);
        assert_eq!(result.description, EmployerCategory::A.description());
    }

    #[test]
    fn word_boundary_match_is_case_insensitive() {
        let directory = EmployerDirectory::with_seed();
        assert_eq!(
            directory.classify("  INFOSYS Limited ").category,
            EmployerCategory::A
        );
        assert_eq!(
            directory.classify("Cognizant Technology Solutions").category,
            EmployerCategory::B
        );
    }

    #[test]
    fn first_registry_entry_wins_on_ambiguous_names() {
        let directory = EmployerDirectory::empty();
        directory.import_bulk(&[
            BulkEntry {
                name: "alpha".to_string(),
                category: EmployerCategory::A,
            },
            BulkEntry {
                name: "omega".to_string(),
                category: EmployerCategory::C,
            },
        ]);

        // Contains both keys; the earlier insertion decides.
        let result = directory.classify("alpha omega logistics");
        assert_eq!(result.category, EmployerCategory::A);
    }

    #[test]
    fn industry_keyword_falls_back_to_b() {
        let directory = EmployerDirectory::with_seed();
        let result = directory.classify("Random Xyz Solutions Pvt Ltd");
        assert_eq!(result.category, EmployerCategory::D);

        let result = directory.classify("Quuxtech Solutions Pvt Ltd");
        assert_eq!(result.category, EmployerCategory::B);
    }

    #[test]
    fn unknown_name_defaults_to_d_with_note() {
        let directory = EmployerDirectory::with_seed();
        let result = directory.classify("Zzyzx Quarry Llp");
        assert_eq!(result.category, EmployerCategory::D);
        assert!(result.description.contains("not found"));
    }

    #[test]
    fn bulk_import_never_overwrites() {
        let directory = EmployerDirectory::with_seed();
        let before = directory.classify("hdfc bank").category;
        assert_eq!(before, EmployerCategory::A);

        let stats = directory.import_bulk(&[BulkEntry {
            name: "HDFC Bank".to_string(),
            category: EmployerCategory::D,
        }]);

        assert_eq!(stats.total, 1);
        assert_eq!(stats.added, 0);
        assert_eq!(stats.skipped, 1);
        assert_eq!(directory.classify("hdfc bank").category, EmployerCategory::A);
    }

    #[test]
    fn bulk_import_skips_blank_names_and_adds_new_keys() {
        let directory = EmployerDirectory::empty();
        let stats = directory.import_bulk(&[
            BulkEntry {
                name: "  ".to_string(),
                category: EmployerCategory::A,
            },
            BulkEntry {
                name: "Acme Widgets".to_string(),
                category: EmployerCategory::B,
            },
        ]);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(
            directory.classify("acme widgets").category,
            EmployerCategory::B
        );
    }
}
