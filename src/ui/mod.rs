/// Widgets and layout for the main window
pub mod form;
