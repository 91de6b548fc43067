/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";
