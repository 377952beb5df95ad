pub mod confirm_dialog;
pub mod notice_bar;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod stat_card;
