use std::fmt;

use crate::policy::{NatKind, Policy, PolicySet};

/// Non-fatal condition found while parsing a policy block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// An `edit <id>` reopened an id that is already loaded
    DuplicatePolicy { id: String },
    /// An `edit` or `set` directive without its argument
    MalformedDirective { line: String },
    /// A `set` directive that does not belong to any policy
    DirectiveOutsidePolicy { line: String },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::DuplicatePolicy { id } => {
                write!(f, "Duplicate policy id entry detected: {id}")
            }
            ParseWarning::MalformedDirective { line } => {
                write!(f, "Skipping malformed directive: {line}")
            }
            ParseWarning::DirectiveOutsidePolicy { line } => {
                write!(f, "Skipping directive outside of a policy: {line}")
            }
        }
    }
}

/// Result of parsing a policy block
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub policies: PolicySet,
    pub warnings: Vec<ParseWarning>,
}

/// Policy options understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyOption {
    SourceInterface,
    DestInterface,
    SourceAddress,
    DestAddress,
    Service,
    Action,
    Nat,
    IpPool,
    IdentityBased,
    Schedule,
    UtmStatus,
    TrafficShaper,
    LogTraffic,
    Status,
    Unrecognized,
}

impl From<&str> for PolicyOption {
    fn from(name: &str) -> Self {
        match name {
            "srcintf" => PolicyOption::SourceInterface,
            "dstintf" => PolicyOption::DestInterface,
            "srcaddr" => PolicyOption::SourceAddress,
            "dstaddr" => PolicyOption::DestAddress,
            "service" => PolicyOption::Service,
            "action" => PolicyOption::Action,
            "nat" => PolicyOption::Nat,
            "ippool" => PolicyOption::IpPool,
            "identity-based" => PolicyOption::IdentityBased,
            "schedule" => PolicyOption::Schedule,
            "utm-status" => PolicyOption::UtmStatus,
            "per-ip-shaper" | "traffic-shaper" => PolicyOption::TrafficShaper,
            "logtraffic" => PolicyOption::LogTraffic,
            "status" => PolicyOption::Status,
            _ => PolicyOption::Unrecognized,
        }
    }
}

impl PolicyOption {
    fn apply(self, policy: &mut Policy, args: &str) {
        match self {
            PolicyOption::SourceInterface => policy.set_source_zone(args),
            PolicyOption::DestInterface => policy.set_dest_zone(args),
            PolicyOption::SourceAddress => {
                args.split_whitespace()
                    .for_each(|addr| policy.add_source_address(addr));
            }
            PolicyOption::DestAddress => {
                args.split_whitespace()
                    .for_each(|addr| policy.add_dest_address(addr));
            }
            PolicyOption::Service => {
                args.split_whitespace()
                    .for_each(|service| policy.add_service(service));
            }
            PolicyOption::Action => policy.set_action(args),
            PolicyOption::Nat => policy.nat = Some(NatKind::Source),
            PolicyOption::IpPool => policy.nat = Some(NatKind::Destination),
            PolicyOption::IdentityBased => policy.require_web_auth(),
            PolicyOption::Schedule => {
                if args != "\"always\"" {
                    policy.has_custom_schedule = true;
                }
            }
            PolicyOption::UtmStatus => {
                if args == "enable" {
                    policy.utm_enabled = true;
                }
            }
            PolicyOption::TrafficShaper => policy.has_traffic_shaping = true,
            PolicyOption::LogTraffic => {
                if args == "all" {
                    policy.log_enabled = true;
                }
            }
            PolicyOption::Status => {
                if args == "disable" {
                    policy.disabled = true;
                }
            }
            PolicyOption::Unrecognized => {}
        }
    }
}

/// Parser state; the open policy lives in the state that owns it
enum ParserState {
    OutsidePolicy,
    InsidePolicy {
        current: Policy,
        /// Open `edit` entries of nested sub-tables (e.g. `config ...` lists)
        nested: usize,
    },
}

/// Split a directive into its keyword and trimmed remainder
fn split_directive(line: &str) -> (&str, Option<&str>) {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) => {
            let rest = rest.trim();
            (head, (!rest.is_empty()).then_some(rest))
        }
        None => (line, None),
    }
}

/// Build the policy set from the lines of a policy block
///
/// Each `edit <id>` opens a policy that is completed by its matching `next`.
/// `set` directives inside nested sub-tables of a policy still apply to the
/// enclosing policy. Unknown options are ignored; malformed or misplaced
/// directives are skipped and reported as warnings.
///
/// # Arguments
/// * `lines` - Trimmed lines produced by [`scan_policy_block`](super::scan_policy_block)
pub fn parse_policies<S: AsRef<str>>(lines: &[S]) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut state = ParserState::OutsidePolicy;

    for line in lines.iter().map(AsRef::as_ref) {
        if line.is_empty() || line == "end" {
            continue;
        }

        if line == "next" {
            state = match state {
                ParserState::InsidePolicy { current, nested } if nested > 0 => {
                    ParserState::InsidePolicy {
                        current,
                        nested: nested - 1,
                    }
                }
                ParserState::InsidePolicy { current, .. } => {
                    log::debug!("Loaded policy {}", current.id());
                    outcome.policies.insert(current);
                    ParserState::OutsidePolicy
                }
                ParserState::OutsidePolicy => ParserState::OutsidePolicy,
            };
            continue;
        }

        let (command, args) = split_directive(line);
        let mut opened = None;
        match (command, args, &mut state) {
            // Every nested edit is paired with a next, with or without an id
            ("edit", _, ParserState::InsidePolicy { nested, .. }) => {
                *nested += 1;
            }
            ("edit" | "set", None, _) => {
                warn(&mut outcome, ParseWarning::MalformedDirective {
                    line: line.to_string(),
                });
            }
            ("edit", Some(id), ParserState::OutsidePolicy) => {
                if outcome.policies.contains(id) {
                    warn(&mut outcome, ParseWarning::DuplicatePolicy { id: id.to_string() });
                }
                match Policy::new(id) {
                    Ok(policy) => opened = Some(policy),
                    Err(err) => log::warn!("Skipping '{}': {}", line, err),
                }
            }
            ("set", Some(args), ParserState::InsidePolicy { current, .. }) => {
                let (option, option_args) = split_directive(args);
                match option_args {
                    Some(option_args) => PolicyOption::from(option).apply(current, option_args),
                    None => warn(&mut outcome, ParseWarning::MalformedDirective {
                        line: line.to_string(),
                    }),
                }
            }
            ("set", Some(_), ParserState::OutsidePolicy) => {
                warn(&mut outcome, ParseWarning::DirectiveOutsidePolicy {
                    line: line.to_string(),
                });
            }
            _ => {}
        }

        if let Some(current) = opened {
            state = ParserState::InsidePolicy { current, nested: 0 };
        }
    }

    if let ParserState::InsidePolicy { current, .. } = state {
        log::warn!("Policy {} is not closed by 'next', discarding", current.id());
    }

    outcome
}

fn warn(outcome: &mut ParseOutcome, warning: ParseWarning) {
    log::warn!("{}", warning);
    outcome.warnings.push(warning);
}
