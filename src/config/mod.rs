pub mod parser;
pub mod scanner;
pub mod source;

pub use parser::{ParseOutcome, ParseWarning, parse_policies};
pub use scanner::scan_policy_block;
pub use source::{ConfigSource, FileSource};
