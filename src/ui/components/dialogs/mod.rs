//! Dialog components module

mod cloud_info_dialog;
pub mod common;
mod debug_dialog;
mod report_form_dialog;

pub use cloud_info_dialog::CloudInfoDialog;
pub use debug_dialog::DebugDialog;
pub use report_form_dialog::ReportFormDialog;
