/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The in-memory roster mirroring the server (roster.rs)
/// - Form field routing and modal/pending flags (form.rs)

pub mod data;
pub mod form;
pub mod roster;
