//! Error reporting for the command line
//!
//! Renders an error together with the chain of errors that caused it.

use std::error::Error;

/// Format an error and every `source()` below it, one per line
pub fn format_error(error: &dyn Error) -> String {
    let mut msg = format!("Error: {}", error);

    let mut source = error.source();
    while let Some(cause) = source {
        msg.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }

    msg
}
