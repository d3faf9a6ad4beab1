pub mod category_panel;
pub mod material_card;
pub mod scene_preview;
pub mod searchable_select;
pub mod sidebar;
pub mod status_badge;
