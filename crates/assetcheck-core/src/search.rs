//! Roster search filter.

use crate::types::Asset;

/// Substring filter over the roster listing.
///
/// Matches when the needle occurs in the owner name, department, or asset
/// number. Matching is case-sensitive. An empty or whitespace-only query is
/// no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: Option<String>,
}

impl SearchFilter {
    /// Builds a filter from the raw `q` query parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetcheck_core::SearchFilter;
    ///
    /// assert!(SearchFilter::new(Some("  ")).is_empty());
    /// assert_eq!(SearchFilter::new(Some("PC-00")).needle(), Some("PC-00"));
    /// ```
    pub fn new(q: Option<&str>) -> Self {
        let needle = q.filter(|q| !q.trim().is_empty()).map(str::to_string);
        Self { needle }
    }

    /// The substring to look for, `None` when unfiltered.
    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    /// Whether the filter lets every asset through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Whether `asset` passes the filter.
    pub fn matches(&self, asset: &Asset) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                asset.name.contains(needle.as_str())
                    || asset.department.contains(needle.as_str())
                    || asset.asset_no.as_str().contains(needle.as_str())
            }
        }
    }
}
