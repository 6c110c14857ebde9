pub mod dialog;
pub mod modal;
