//! Common types used throughout pagemark
//!
//! This module contains the page-list value types returned by every
//! generator and consumed by whatever renders the pagination control.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Page Entry
// ============================================================================

/// A single marker in a page list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEntry {
    /// A concrete, 1-indexed page number
    Page(u32),
    /// Gap toward the first page
    LeftEllipsis,
    /// Gap toward the last page
    RightEllipsis,
}

impl PageEntry {
    /// Page number, if this entry is a concrete page
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(*n),
            _ => None,
        }
    }

    /// Check if this entry is one of the ellipsis markers
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::LeftEllipsis | Self::RightEllipsis)
    }
}

impl From<u32> for PageEntry {
    fn from(page: u32) -> Self {
        Self::Page(page)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::LeftEllipsis | Self::RightEllipsis => f.write_str("…"),
        }
    }
}

// Pages go over the wire as bare numbers, markers as "left" / "right".
impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::LeftEllipsis => serializer.serialize_str("left"),
            Self::RightEllipsis => serializer.serialize_str("right"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Page(u32),
    Marker(String),
}

impl<'de> Deserialize<'de> for PageEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawEntry::deserialize(deserializer)? {
            RawEntry::Page(n) => Ok(Self::Page(n)),
            RawEntry::Marker(s) => match s.as_str() {
                "left" => Ok(Self::LeftEllipsis),
                "right" => Ok(Self::RightEllipsis),
                other => Err(serde::de::Error::custom(format!(
                    "unknown page marker '{other}', expected 'left' or 'right'"
                ))),
            },
        }
    }
}

// ============================================================================
// Page List
// ============================================================================

/// Ordered page markers for one pagination control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageList(Vec<PageEntry>);

impl PageList {
    /// Create an empty page list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty page list with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append a concrete page
    pub fn push_page(&mut self, page: u32) {
        self.0.push(PageEntry::Page(page));
    }

    /// Append an arbitrary entry
    pub fn push(&mut self, entry: PageEntry) {
        self.0.push(entry);
    }

    /// Append a run of concrete pages
    pub fn extend_pages(&mut self, pages: impl IntoIterator<Item = u32>) {
        self.0.extend(pages.into_iter().map(PageEntry::Page));
    }

    /// All entries in display order
    pub fn entries(&self) -> &[PageEntry] {
        &self.0
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, PageEntry> {
        self.0.iter()
    }

    /// Concrete page numbers only, in order
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().filter_map(PageEntry::page)
    }

    /// Number of entries, markers included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the list has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if a left ellipsis is present
    pub fn has_left_ellipsis(&self) -> bool {
        self.0.contains(&PageEntry::LeftEllipsis)
    }

    /// Check if a right ellipsis is present
    pub fn has_right_ellipsis(&self) -> bool {
        self.0.contains(&PageEntry::RightEllipsis)
    }

    /// Consume the list and return the entries
    pub fn into_inner(self) -> Vec<PageEntry> {
        self.0
    }
}

impl From<Vec<PageEntry>> for PageList {
    fn from(entries: Vec<PageEntry>) -> Self {
        Self(entries)
    }
}

impl IntoIterator for PageList {
    type Item = PageEntry;
    type IntoIter = std::vec::IntoIter<PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PageList {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
