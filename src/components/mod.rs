pub mod footer;
pub mod header;
pub mod results;
pub mod search_panel;
pub mod suggestions;
