//! makemkvcon robot-mode output
//!
//! `makemkvcon --robot` prints one record per line. [`tokenizer`] splits the
//! fields, [`message`] types them, and [`parser`] folds them into a
//! [`MakeMkvOutput`](crate::types::MakeMkvOutput).

pub mod codes;
pub mod message;
pub mod parser;
pub mod tokenizer;

pub use codes::Severity;
pub use message::{RobotLine, RobotParseError};
pub use parser::{MAKEMKVCON_TARGET, OutputParser, ProgressHandler, parse_log};
