//! The fixed, ordered list of selectable ring items.
//!
//! Order matters: an entry's index decides its angle on the ring, and the
//! default list is sorted west to east so neighbouring items are neighbouring
//! countries.

use crate::constants::{ICON_URL_PREFIX, ICON_URL_SUFFIX};
use crate::error::CarouselError;
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub identifier: String,
    pub display_name: String,
}

impl CatalogEntry {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }

    /// Text shown on the ring item.
    pub fn label(&self) -> String {
        self.identifier.to_uppercase()
    }

    /// Decorative icon for this entry. Loading it is left to the browser.
    pub fn icon_url(&self) -> String {
        format!("{ICON_URL_PREFIX}{}{ICON_URL_SUFFIX}", self.identifier)
    }
}

const DEFAULT_ENTRIES: [(&str, &str); 15] = [
    ("us", "USA"),
    ("br", "Brazil"),
    ("es", "Spain"),
    ("fr", "France"),
    ("it", "Italy"),
    ("de", "Germany"),
    ("cz", "Czechia"),
    ("sk", "Slovakia"),
    ("pl", "Poland"),
    ("ua", "Ukraine"),
    ("in", "India"),
    ("cn", "China"),
    ("sg", "Singapore"),
    ("id", "Indonesia"),
    ("jp", "Japan"),
];

/// Validated catalog: non-empty, identifiers non-blank and unique.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CarouselError> {
        if entries.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        let mut index = FnvHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if entry.identifier.trim().is_empty() {
                return Err(CarouselError::BlankIdentifier(i));
            }
            if index.insert(entry.identifier.clone(), i).is_some() {
                return Err(CarouselError::DuplicateIdentifier(entry.identifier.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let entries: Vec<CatalogEntry> = DEFAULT_ENTRIES
            .iter()
            .map(|(code, name)| CatalogEntry::new(*code, *name))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.identifier.clone(), i))
            .collect();
        Self { entries, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_runs_west_to_east() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.get(0).map(|e| e.identifier.as_str()), Some("us"));
        assert_eq!(catalog.get(14).map(|e| e.identifier.as_str()), Some("jp"));
        assert_eq!(catalog.position("pl"), Some(8));
    }

    #[test]
    fn default_catalog_passes_validation() {
        let entries = Catalog::default().entries().to_vec();
        assert!(Catalog::new(entries).is_ok());
    }

    #[test]
    fn rejects_duplicates_and_blanks() {
        let dup = vec![CatalogEntry::new("fr", "France"), CatalogEntry::new("fr", "Again")];
        assert_eq!(
            Catalog::new(dup).unwrap_err(),
            CarouselError::DuplicateIdentifier("fr".into())
        );

        let blank = vec![CatalogEntry::new("de", "Germany"), CatalogEntry::new("  ", "?")];
        assert_eq!(Catalog::new(blank).unwrap_err(), CarouselError::BlankIdentifier(1));

        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CarouselError::EmptyCatalog);
    }

    #[test]
    fn label_and_icon_follow_identifier() {
        let entry = CatalogEntry::new("jp", "Japan");
        assert_eq!(entry.label(), "JP");
        assert_eq!(
            entry.icon_url(),
            "https://hatscripts.github.io/circle-flags/flags/jp.svg"
        );
    }
}
