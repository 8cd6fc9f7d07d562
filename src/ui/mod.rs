/// UI building blocks
///
/// - Roster table and static pagination footer (table.rs)
/// - Modal overlay helper (modal.rs)

pub mod modal;
pub mod table;
