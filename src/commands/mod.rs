pub mod base_commands;
pub mod compare_cmd;
pub mod demo_cmd;
pub mod fetch_cmd;
pub mod plot_cmd;
pub mod report_format;
pub mod summarize_cmd;
