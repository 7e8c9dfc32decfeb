use std::io::Write;

use crate::config::{ConfigSource, ParseOutcome, ParseWarning, parse_policies, scan_policy_block};
use crate::error::PolicyViewError;

/// Load the policies of one virtual domain from a configuration source
pub struct PolicyLoader;

impl PolicyLoader {
    /// Read, scan and parse the configuration, reporting progress to `out`
    ///
    /// Duplicate ids are reported on standard error; the source is read once
    /// and any read failure aborts the load.
    pub fn load<S, W>(source: &S, vdom: &str, out: &mut W) -> Result<ParseOutcome, PolicyViewError>
    where
        S: ConfigSource + ?Sized,
        W: Write,
    {
        write!(out, "Loading configuration...")?;
        out.flush()?;

        let text = source.read_to_string()?;
        let block = scan_policy_block(&text, vdom);
        let outcome = parse_policies(&block);

        for warning in &outcome.warnings {
            if let ParseWarning::DuplicatePolicy { .. } = warning {
                eprintln!("{warning}");
            }
        }

        writeln!(out, "complete. {} policies loaded.", outcome.policies.len())?;
        Ok(outcome)
    }
}
