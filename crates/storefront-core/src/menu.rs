//! # Menu Navigation
//!
//! Bookkeeping behind the menu page: which sections to render, which
//! category chip is highlighted while scrolling, and where a chip click
//! should scroll to.
//!
//! ## Scroll Sync
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  viewport top (scroll_y)                                                │
//! │  ─────────────────────────────────────  + 200 px probe line             │
//! │                                                                         │
//! │  section "coffee"   offset_top 300   ◄── last section whose top is     │
//! │  section "tea"      offset_top 1400      at or above the probe line    │
//! │  section "pastries" offset_top 2300      becomes active                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Offsets are measured by the presentation layer; this module only does
//! the comparisons.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, MenuItem};

/// Distance below the viewport top at which a section counts as reached.
pub const SCROLL_PROBE_OFFSET: i64 = 200;

/// Fixed header height.
pub const HEADER_HEIGHT: i64 = 64;

/// Sticky category bar height on small screens.
pub const MOBILE_NAV_HEIGHT: i64 = 60;

/// Breathing room left above a section after a chip click.
pub const SECTION_PADDING: i64 = 20;

// =============================================================================
// Sections
// =============================================================================

/// A category together with the items rendered under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuSection {
    pub category: Category,
    pub items: Vec<MenuItem>,
}

/// Builds the rendered sections.
///
/// Categories are ordered by `sort_order` (stable for ties). Inactive
/// categories and categories with no items are skipped. Items keep catalog
/// order. Either input may be empty, in which case nothing is rendered.
pub fn menu_sections(categories: &[Category], items: &[MenuItem]) -> Vec<MenuSection> {
    let mut ordered: Vec<&Category> = categories.iter().filter(|c| c.active).collect();
    ordered.sort_by_key(|c| c.sort_order);

    ordered
        .into_iter()
        .filter_map(|category| {
            let section_items: Vec<MenuItem> = items
                .iter()
                .filter(|item| item.category == category.id)
                .cloned()
                .collect();

            if section_items.is_empty() {
                None
            } else {
                Some(MenuSection {
                    category: category.clone(),
                    items: section_items,
                })
            }
        })
        .collect()
}

// =============================================================================
// Category Filter
// =============================================================================

/// Category chip selection in the sub-navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", tag = "kind", content = "id")]
#[ts(export)]
pub enum CategoryFilter {
    /// The "All" chip.
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parses a chip id; `"all"` selects everything.
    pub fn from_id(id: &str) -> Self {
        if id == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(id.to_string())
        }
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => item.category == *id,
        }
    }

    /// Items passing the filter, in catalog order.
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

// =============================================================================
// Active Category Tracker
// =============================================================================

/// Tracks which category chip is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCategory {
    active: Option<String>,
}

impl ActiveCategory {
    pub fn new() -> Self {
        ActiveCategory::default()
    }

    pub fn get(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Selects the first category once categories are known, unless
    /// something is already active.
    pub fn ensure_default(&mut self, categories: &[Category]) {
        if self.active.is_none() {
            self.active = categories.first().map(|c| c.id.clone());
        }
    }

    /// Updates the active category from the scroll position.
    ///
    /// `sections` pairs each rendered section's category id with its top
    /// offset, in render order. The last section whose top is at or above
    /// `scroll_y + SCROLL_PROBE_OFFSET` wins. Nothing changes when no
    /// section qualifies or the list is empty.
    pub fn on_scroll(&mut self, scroll_y: i64, sections: &[(String, i64)]) {
        let probe = scroll_y + SCROLL_PROBE_OFFSET;

        if let Some((id, _)) = sections.iter().rev().find(|(_, top)| *top <= probe) {
            self.active = Some(id.clone());
        }
    }

    /// Handles a chip click: activates the category and returns where the
    /// page should scroll so the section clears the sticky headers.
    pub fn click(&mut self, category_id: &str, section_offset_top: i64) -> i64 {
        self.active = Some(category_id.to_string());
        scroll_target(section_offset_top)
    }
}

/// Scroll position that brings a section just below the sticky headers.
pub fn scroll_target(section_offset_top: i64) -> i64 {
    section_offset_top - (HEADER_HEIGHT + MOBILE_NAV_HEIGHT + SECTION_PADDING)
}

// =============================================================================
// Image Preloading
// =============================================================================

/// Image URLs to warm, active category first.
///
/// Items without an image are skipped. The second group is meant to be
/// fetched after the first one has been requested.
pub fn preload_order(items: &[MenuItem], active_category: Option<&str>) -> (Vec<String>, Vec<String>) {
    let (visible, rest): (Vec<&MenuItem>, Vec<&MenuItem>) = items
        .iter()
        .partition(|item| Some(item.category.as_str()) == active_category);

    (image_urls(&visible), image_urls(&rest))
}

fn image_urls(items: &[&MenuItem]) -> Vec<String> {
    items.iter().filter_map(|item| item.image.clone()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn category(id: &str, sort_order: i32) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            icon: "☕".to_string(),
            sort_order,
            active: true,
        }
    }

    fn item(id: &str, category: &str) -> MenuItem {
        let mut item = MenuItem::new(id, id, category, Money::from_centavos(10000));
        item.image = Some(format!("https://cdn.example/{}.jpg", id));
        item
    }

    fn offsets() -> Vec<(String, i64)> {
        vec![
            ("coffee".to_string(), 300),
            ("tea".to_string(), 1400),
            ("pastries".to_string(), 2300),
        ]
    }

    #[test]
    fn test_sections_sorted_and_empty_skipped() {
        let categories = vec![category("tea", 2), category("coffee", 1), category("merch", 3)];
        let items = vec![item("latte", "coffee"), item("matcha", "tea"), item("mocha", "coffee")];

        let sections = menu_sections(&categories, &items);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category.id, "coffee");
        assert_eq!(sections[0].items.len(), 2);
        assert_eq!(sections[0].items[1].id, "mocha");
        assert_eq!(sections[1].category.id, "tea");
    }

    #[test]
    fn test_sections_tolerate_empty_inputs() {
        assert!(menu_sections(&[], &[]).is_empty());
        assert!(menu_sections(&[category("coffee", 1)], &[]).is_empty());
        assert!(menu_sections(&[], &[item("latte", "coffee")]).is_empty());
    }

    #[test]
    fn test_inactive_category_hidden() {
        let mut hidden = category("seasonal", 0);
        hidden.active = false;
        let sections = menu_sections(&[hidden], &[item("eggnog", "seasonal")]);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_category_filter() {
        let items = vec![item("latte", "coffee"), item("matcha", "tea")];

        assert_eq!(CategoryFilter::from_id("all").apply(&items).len(), 2);

        let tea = CategoryFilter::from_id("tea");
        let filtered = tea.apply(&items);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "matcha");
    }

    #[test]
    fn test_default_is_first_category() {
        let mut active = ActiveCategory::new();
        active.ensure_default(&[]);
        assert_eq!(active.get(), None);

        active.ensure_default(&[category("coffee", 1), category("tea", 2)]);
        assert_eq!(active.get(), Some("coffee"));

        active.ensure_default(&[category("tea", 2)]);
        assert_eq!(active.get(), Some("coffee"));
    }

    #[test]
    fn test_scroll_picks_last_reached_section() {
        let mut active = ActiveCategory::new();

        active.on_scroll(1250, &offsets());
        assert_eq!(active.get(), Some("tea"));

        active.on_scroll(150, &offsets());
        assert_eq!(active.get(), Some("coffee"));

        active.on_scroll(5000, &offsets());
        assert_eq!(active.get(), Some("pastries"));
    }

    #[test]
    fn test_scroll_above_first_section_keeps_current() {
        let mut active = ActiveCategory::new();
        active.ensure_default(&[category("coffee", 1)]);

        active.on_scroll(0, &[("coffee".to_string(), 900)]);
        assert_eq!(active.get(), Some("coffee"));

        active.on_scroll(0, &[]);
        assert_eq!(active.get(), Some("coffee"));
    }

    #[test]
    fn test_click_scrolls_below_headers() {
        let mut active = ActiveCategory::new();
        let target = active.click("tea", 1400);
        assert_eq!(active.get(), Some("tea"));
        assert_eq!(target, 1400 - 144);
    }

    #[test]
    fn test_preload_order() {
        let mut no_image = item("water", "coffee");
        no_image.image = None;
        let items = vec![item("latte", "coffee"), item("matcha", "tea"), no_image];

        let (first, later) = preload_order(&items, Some("tea"));
        assert_eq!(first, vec!["https://cdn.example/matcha.jpg".to_string()]);
        assert_eq!(later, vec!["https://cdn.example/latte.jpg".to_string()]);

        let (first, later) = preload_order(&items, None);
        assert!(first.is_empty());
        assert_eq!(later.len(), 2);
    }
}
