pub mod commit_form;
pub mod commit_menu;
pub mod result_dialog;
pub mod title_bar;

pub use commit_form::render_commit_form;
pub use commit_menu::{render_commit_menu, truncate_with_ellipsis, MenuEntry, RESERVED_COLUMNS};
pub use result_dialog::{render_result_dialog, result_headline};
pub use title_bar::{render_hint, render_title_bar};
