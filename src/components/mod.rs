pub mod alias_table;
pub mod basic_layout;
pub mod review_moderation_modal;
pub mod review_table;
pub mod table;
pub mod toast_container;
