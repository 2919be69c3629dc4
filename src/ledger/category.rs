use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the built-in catch-all category.
pub const FALLBACK_CATEGORY_ID: &str = "other";

const CHART_PALETTE_SIZE: usize = 6;

/// A spending bucket. `icon` and `color` are symbolic keys resolved by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    fn builtin(id: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    pub fn from_draft(draft: NewCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            icon: draft.icon,
            color: draft.color,
        }
    }

    /// Display stand-in for expenses whose category no longer resolves.
    pub fn fallback() -> Self {
        Self::builtin(FALLBACK_CATEGORY_ID, "Other", "MoreHorizontal", "chart-2")
    }

    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// The eight categories seeded on first run and restored by a full reset.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::builtin("food", "Food & Drinks", "UtensilsCrossed", "chart-1"),
        Category::builtin("transport", "Transport", "Car", "chart-2"),
        Category::builtin("shopping", "Shopping", "ShoppingBag", "chart-3"),
        Category::builtin("entertainment", "Entertainment", "Gamepad2", "chart-4"),
        Category::builtin("education", "Education", "BookOpen", "chart-5"),
        Category::builtin("bills", "Bills & Utilities", "Receipt", "chart-6"),
        Category::builtin("health", "Health", "Heart", "chart-1"),
        Category::fallback(),
    ]
}

/// Caller-supplied fields for a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Picks `chart-1`..`chart-6` in rotation from the number of existing categories.
    pub fn with_chart_color(
        name: impl Into<String>,
        icon: impl Into<String>,
        existing: usize,
    ) -> Self {
        let color = format!("chart-{}", (existing % CHART_PALETTE_SIZE) + 1);
        Self::new(name, icon, color)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl CategoryPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon.is_none() && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_stable_ids_and_end_with_fallback() {
        let defaults = default_categories();
        let ids: Vec<&str> = defaults.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "food",
                "transport",
                "shopping",
                "entertainment",
                "education",
                "bills",
                "health",
                "other"
            ]
        );
        assert_eq!(defaults.last(), Some(&Category::fallback()));
    }

    #[test]
    fn chart_color_rotates_through_palette() {
        assert_eq!(NewCategory::with_chart_color("A", "Car", 0).color, "chart-1");
        assert_eq!(NewCategory::with_chart_color("B", "Car", 8).color, "chart-3");
        assert_eq!(NewCategory::with_chart_color("C", "Car", 11).color, "chart-6");
    }

    #[test]
    fn patch_renames_without_touching_icon() {
        let mut category = Category::from_draft(NewCategory::new("Gym", "Heart", "chart-4"));
        let id = category.id.clone();
        category.apply(CategoryPatch::name("Fitness"));
        assert_eq!(category.name, "Fitness");
        assert_eq!(category.icon, "Heart");
        assert_eq!(category.id, id);
    }
}
