pub mod footer;
pub mod header;
pub mod helpers;
pub mod palette_modal;
pub mod preview;
