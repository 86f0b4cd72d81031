//! CLI interface for Orator

mod composer;
mod styles;
mod ui;


pub use composer::SpeechComposer;
pub use styles::{
    audience_entries, audience_guidance, audience_names, style_entries, style_guidance,
    style_names,
};
pub use ui::{
    confirm, display_banner, display_report, handle_input_with_history, print_help,
    read_multiline_input,
};

// Re-export core types
pub use orator_core::{Error, Result};
