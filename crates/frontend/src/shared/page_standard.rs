//! Standard page categories used by [`crate::shared::page_frame::PageFrame`].

/// Entity list pages (tables, card grids)
pub const PAGE_CAT_LIST: &str = "list";
/// System/administration pages
pub const PAGE_CAT_SYSTEM: &str = "system";
