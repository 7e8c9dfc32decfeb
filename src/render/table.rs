use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Color, Style, object::Rows},
};

use crate::{cli::DisplaySettings, policy::Policy};

/// One rendered line of a policy; continuation lines only carry list entries
#[derive(Debug, Default, Tabled)]
struct PolicyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "From")]
    from_zone: String,
    #[tabled(rename = "To")]
    to_zone: String,
    #[tabled(rename = "Src-address")]
    source_address: String,
    #[tabled(rename = "Dst-address")]
    dest_address: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "State")]
    state: String,
    /// Attack inspection, Schedule, Traffic shaping, Log
    #[tabled(rename = "ASTL")]
    flags: String,
    #[tabled(rename = "NAT")]
    nat: String,
}

/// Renders policies as an aligned table
pub struct TableRenderer {
    settings: DisplaySettings,
}

impl TableRenderer {
    pub fn new(settings: DisplaySettings) -> Self {
        Self { settings }
    }

    /// Render the given policies; an empty slice yields the header only
    pub fn render(&self, policies: &[&Policy]) -> String {
        let rows: Vec<PolicyRow> = policies
            .iter()
            .flat_map(|policy| self.policy_rows(policy))
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::blank());
        if self.settings.color {
            table.modify(Rows::first(), Color::BOLD | Color::FG_BLUE);
        }
        table.to_string()
    }

    fn policy_rows(&self, policy: &Policy) -> Vec<PolicyRow> {
        let line_count = policy
            .source_addresses
            .len()
            .max(policy.dest_addresses.len())
            .max(policy.services.len())
            .max(1);

        (0..line_count)
            .map(|index| {
                let mut row = PolicyRow {
                    source_address: self.entry(&policy.source_addresses, index, self.settings.address_width),
                    dest_address: self.entry(&policy.dest_addresses, index, self.settings.address_width),
                    service: self.entry(&policy.services, index, self.settings.service_width),
                    ..Default::default()
                };
                if index == 0 {
                    row.id = policy.id().to_string();
                    row.from_zone = truncate(&policy.source_zone, self.settings.zone_width);
                    row.to_zone = truncate(&policy.dest_zone, self.settings.zone_width);
                    row.action = policy.action();
                    row.state = self.state(policy);
                    row.flags = flags(policy);
                    row.nat = policy.nat.map(|nat| nat.code().to_string()).unwrap_or_default();
                }
                row
            })
            .collect()
    }

    fn entry(&self, values: &[String], index: usize, width: usize) -> String {
        values
            .get(index)
            .map(|value| truncate(value, width))
            .unwrap_or_default()
    }

    fn state(&self, policy: &Policy) -> String {
        match (policy.disabled, self.settings.color) {
            (true, true) => "disabled".red().to_string(),
            (true, false) => "disabled".to_string(),
            (false, true) => "enabled".green().to_string(),
            (false, false) => "enabled".to_string(),
        }
    }
}

fn flags(policy: &Policy) -> String {
    [
        policy.utm_enabled,
        policy.has_custom_schedule,
        policy.has_traffic_shaping,
        policy.log_enabled,
    ]
    .iter()
    .map(|&set| if set { 'X' } else { '-' })
    .collect()
}

fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
