use crate::error::PolicyViewError;

/// Marker appended to the action of policies that require identity-based authentication
pub const WEB_AUTH_MARKER: char = '~';

/// Which side of the traffic a policy translates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NatKind {
    /// `set nat enable`: source NAT on the egress interface address
    Source,
    /// `set ippool ...`: translation through an address pool
    Destination,
}

impl NatKind {
    /// Single-letter code shown in the NAT column
    pub fn code(self) -> char {
        match self {
            NatKind::Source => 'S',
            NatKind::Destination => 'D',
        }
    }
}

/// One firewall policy (rule) of a virtual domain
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    id: String,
    action: String,
    pub source_zone: String,
    pub dest_zone: String,
    /// Source addresses in configuration order
    pub source_addresses: Vec<String>,
    /// Destination addresses in configuration order
    pub dest_addresses: Vec<String>,
    /// Services in configuration order
    pub services: Vec<String>,
    pub nat: Option<NatKind>,
    pub web_auth_required: bool,
    pub has_traffic_shaping: bool,
    pub log_enabled: bool,
    pub has_custom_schedule: bool,
    /// Antivirus / attack inspection (`utm-status enable`)
    pub utm_enabled: bool,
    pub disabled: bool,
}

impl Policy {
    /// Create an empty policy with the given identifier
    pub fn new(id: impl Into<String>) -> Result<Self, PolicyViewError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PolicyViewError::MissingPolicyId);
        }

        Ok(Self {
            id,
            action: String::new(),
            source_zone: String::new(),
            dest_zone: String::new(),
            source_addresses: Vec::new(),
            dest_addresses: Vec::new(),
            services: Vec::new(),
            nat: None,
            web_auth_required: false,
            has_traffic_shaping: false,
            log_enabled: false,
            has_custom_schedule: false,
            utm_enabled: false,
            disabled: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Action as displayed, e.g. `Accept` or `Accept~` for identity-based policies
    pub fn action(&self) -> String {
        if self.web_auth_required {
            format!("{}{}", self.action, WEB_AUTH_MARKER)
        } else {
            self.action.clone()
        }
    }

    pub fn set_action(&mut self, action: &str) {
        self.action = capitalize(action);
    }

    pub fn set_source_zone(&mut self, zone: &str) {
        self.source_zone = dequote(zone);
    }

    pub fn set_dest_zone(&mut self, zone: &str) {
        self.dest_zone = dequote(zone);
    }

    pub fn add_source_address(&mut self, addr: &str) {
        self.source_addresses.push(dequote(addr));
    }

    pub fn add_dest_address(&mut self, addr: &str) {
        self.dest_addresses.push(dequote(addr));
    }

    pub fn add_service(&mut self, service: &str) {
        self.services.push(dequote(service));
    }

    /// Mark the policy as requiring identity-based authentication
    ///
    /// The marker is derived from the flag when the action is read, so calling
    /// this more than once, or before the action is set, has no further effect.
    pub fn require_web_auth(&mut self) {
        self.web_auth_required = true;
    }
}

/// Remove every double quote from a configuration value
fn dequote(value: &str) -> String {
    value.replace('"', "")
}

/// Uppercase the first character and lowercase the rest
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
