use fgpolicy::{
    cli::DisplaySettings,
    config::{ParseWarning, parse_policies, scan_policy_block},
    policy::NatKind,
    render::TableRenderer,
};

const EXPORT: &str = r#"#config-version=FG100F-6.4.9-FW-build1966-220125:opmode=0:vdom=1:user=admin
config system global
    set hostname "fw-edge-01"
end
config vdom
edit root
next
edit customer
next
end
config global
config system interface
    edit "port1"
        set vdom "root"
    next
end
end
config vdom
edit root
config firewall policy
    edit 1
        set name "lan-out"
        set uuid 4f0e3c1a-55f8-51eb-3c9a-8f7d0e2b7c11
        set srcintf "inside"
        set dstintf "outside"
        set srcaddr "all"
        set dstaddr "all"
        set action accept
        set schedule "always"
        set service "ALL"
        set nat enable
    next
    edit 2
        set srcintf "DMZ"
        set dstintf "Internet"
        set srcaddr "web-01" "web-02"
        set dstaddr "all"
        set action accept
        set schedule "business-hours"
        set service "HTTP" "HTTPS" "DNS"
        set utm-status enable
        set logtraffic all
        set traffic-shaper "shared-1M"
        set ippool enable
    next
    edit 3
        set srcintf "inside"
        set dstintf "outside"
        set srcaddr "guests"
        set dstaddr "all"
        set action accept
        set identity-based enable
        config identity-based-policy
            edit 1
                set schedule "always"
                set groups "staff"
                set service "ALL"
            next
        end
        set status disable
    next
    edit 2
        set srcintf "dmz"
        set dstintf "internet"
        set srcaddr "web-03"
        set dstaddr "all"
        set action deny
        set service "SSH"
    next
end
config firewall policy6
    edit 1
        set srcintf "inside"
        set action accept
    next
end
next
edit customer
config firewall policy
end
next
end
"#;

#[test]
fn root_vdom_loads_distinct_policies() {
    let block = scan_policy_block(EXPORT, "root");
    let outcome = parse_policies(&block);

    let ids: Vec<&str> = outcome.policies.iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(
        outcome.warnings,
        vec![ParseWarning::DuplicatePolicy {
            id: "2".to_string()
        }]
    );
}

#[test]
fn basic_policy_attributes() {
    let outcome = parse_policies(&scan_policy_block(EXPORT, "root"));
    let policy = outcome.policies.get("1").unwrap();

    assert_eq!(policy.source_zone, "inside");
    assert_eq!(policy.dest_zone, "outside");
    assert_eq!(policy.source_addresses, vec!["all"]);
    assert_eq!(policy.dest_addresses, vec!["all"]);
    assert_eq!(policy.services, vec!["ALL"]);
    assert_eq!(policy.action(), "Accept");
    assert_eq!(policy.nat, Some(NatKind::Source));
    assert!(!policy.has_custom_schedule);
    assert!(!policy.disabled);
}

#[test]
fn duplicate_id_keeps_last_definition() {
    let outcome = parse_policies(&scan_policy_block(EXPORT, "root"));
    let policy = outcome.policies.get("2").unwrap();

    assert_eq!(policy.source_addresses, vec!["web-03"]);
    assert_eq!(policy.services, vec!["SSH"]);
    assert_eq!(policy.action(), "Deny");
    assert!(!policy.utm_enabled);
    assert!(policy.nat.is_none());
}

#[test]
fn identity_based_policy_with_nested_table() {
    let outcome = parse_policies(&scan_policy_block(EXPORT, "root"));
    let policy = outcome.policies.get("3").unwrap();

    assert!(policy.web_auth_required);
    assert_eq!(policy.action(), "Accept~");
    assert!(policy.disabled);
    assert_eq!(policy.services, vec!["ALL"]);
}

#[test]
fn zone_pair_query_ignores_case() {
    let outcome = parse_policies(&scan_policy_block(EXPORT, "root"));

    let matches = outcome.policies.by_zone_pair("DMZ", "Internet");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id(), "2");
    assert_eq!(matches[0].source_zone, "dmz");
}

#[test]
fn empty_vdom_policy_block() {
    let block = scan_policy_block(EXPORT, "customer");
    let outcome = parse_policies(&block);

    assert!(block.is_empty());
    assert!(outcome.policies.is_empty());
    assert!(outcome.policies.by_id("1").is_empty());
    assert!(outcome.policies.by_zone_pair("inside", "outside").is_empty());
}

#[test]
fn rendered_table_lists_every_address() {
    let outcome = parse_policies(&scan_policy_block(EXPORT, "root"));
    let renderer = TableRenderer::new(DisplaySettings {
        color: false,
        ..Default::default()
    });

    let output = renderer.render(&outcome.policies.by_zone_pair("inside", "outside"));
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("Accept"));
    assert!(lines[1].trim_end().ends_with('S'));
    assert!(lines[2].contains("Accept~"));
    assert!(lines[2].contains("disabled"));
}
