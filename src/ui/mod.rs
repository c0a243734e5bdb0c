mod output;

pub use output::{
    display_final, display_message, display_tool_call, display_tool_data, display_tool_error,
    truncate_preview,
};
