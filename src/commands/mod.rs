//! The command processor: tokenizer, handlers, and dispatch boundary.

pub mod dispatch;
pub mod handlers;
pub mod parse;

pub use dispatch::{dispatch, dispatch_with_today, Outcome};
pub use parse::parse_line;
