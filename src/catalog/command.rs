pub mod get_shelf_cmd;
pub mod remove_book_cmd;
pub mod save_book_cmd;
