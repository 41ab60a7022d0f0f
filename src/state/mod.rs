/// State management module
///
/// This module holds everything the shell keeps between events:
/// - Transform parameters and the default preset (params.rs)
/// - The currently selected source file (selection.rs)
/// - Values entered in the form (form.rs)

pub mod params;
pub mod selection;
pub mod form;
