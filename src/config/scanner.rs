/// Line opening the IPv4 firewall policy table
const POLICY_BLOCK_START: &str = "config firewall policy";
/// Unindented block terminator
const BLOCK_END: &str = "end";
/// Occurrence of `edit <vdom>` that enters the real per-vdom configuration.
/// The first occurrence is the empty declaration inside `config vdom`.
const VDOM_CONFIG_ENTRY: usize = 2;

/// Extract the lines of a virtual domain's firewall policy block
///
/// Markers are matched against the raw line, so indented `end` lines closing
/// nested sub-blocks never terminate the policy block. Collected lines are
/// trimmed; the opening `config firewall policy` and the closing `end` are not
/// part of the result.
///
/// # Arguments
/// * `text` - Full configuration export
/// * `vdom` - Name of the virtual domain to scan
///
/// # Returns
/// The trimmed lines of the policy block, or an empty list when the virtual
/// domain or its policy block is not present.
///
/// # Examples
/// ```
/// use fgpolicy::config::scan_policy_block;
///
/// let text = "edit root\nedit root\nconfig firewall policy\n    edit 1\n    next\nend\n";
/// assert_eq!(scan_policy_block(text, "root"), vec!["edit 1", "next"]);
/// ```
pub fn scan_policy_block(text: &str, vdom: &str) -> Vec<String> {
    let vdom_marker = format!("edit {vdom}");
    let mut vdom_entries = 0usize;
    let mut in_policy = false;
    let mut block = Vec::new();

    for line in text.lines() {
        if line == vdom_marker {
            vdom_entries += 1;
            log::debug!("Found '{}' (occurrence {})", vdom_marker, vdom_entries);
        }

        if in_policy {
            if line == BLOCK_END {
                log::debug!("Policy block of vdom {} ends ({} lines)", vdom, block.len());
                return block;
            }
            block.push(line.trim().to_string());
        } else if line == POLICY_BLOCK_START && vdom_entries == VDOM_CONFIG_ENTRY {
            log::debug!("Entered policy block of vdom {}", vdom);
            in_policy = true;
        }
    }

    if in_policy {
        log::warn!("Policy block of vdom {} is not terminated by 'end'", vdom);
    } else {
        log::debug!("No policy block found for vdom {}", vdom);
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MULTI_VDOM: &str = "\
config vdom
edit root
next
edit dmz
next
end
config global
end
config vdom
edit root
config firewall address
    edit \"all\"
    next
end
config firewall policy
    edit 1
        set srcintf \"port1\"
    next
end
next
edit dmz
config firewall policy
    edit 7
        set srcintf \"dmz\"
        config sub-list
            edit 1
            next
        end
    next
end
next
end
";

    #[test]
    fn collects_trimmed_lines_of_requested_vdom() {
        let block = scan_policy_block(MULTI_VDOM, "root");
        assert_eq!(block, vec!["edit 1", "set srcintf \"port1\"", "next"]);
    }

    #[test]
    fn nested_end_does_not_terminate_block() {
        let block = scan_policy_block(MULTI_VDOM, "dmz");
        assert_eq!(
            block,
            vec![
                "edit 7",
                "set srcintf \"dmz\"",
                "config sub-list",
                "edit 1",
                "next",
                "end",
                "next",
            ]
        );
    }

    #[rstest]
    #[case("guest", "unknown vdom")]
    #[case("roo", "prefix of a vdom name")]
    fn missing_vdom_yields_empty_block(#[case] vdom: &str, #[case] _description: &str) {
        assert!(scan_policy_block(MULTI_VDOM, vdom).is_empty());
    }

    #[test]
    fn policy_block_before_second_entry_is_ignored() {
        let text = "edit root\nconfig firewall policy\nedit 1\nnext\nend\n";
        assert!(scan_policy_block(text, "root").is_empty());
    }

    #[test]
    fn empty_policy_block_yields_no_lines() {
        let text = "edit root\nedit root\nconfig firewall policy\nend\n";
        assert!(scan_policy_block(text, "root").is_empty());
    }

    #[test]
    fn ipv6_policy_block_is_not_collected() {
        let text = "edit root\nedit root\nconfig firewall policy6\nedit 1\nnext\nend\n";
        assert!(scan_policy_block(text, "root").is_empty());
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let text = "edit root\r\nedit root\r\nconfig firewall policy\r\n    edit 3\r\n    next\r\nend\r\n";
        assert_eq!(scan_policy_block(text, "root"), vec!["edit 3", "next"]);
    }

    #[test]
    fn unterminated_block_keeps_collected_lines() {
        let text = "edit root\nedit root\nconfig firewall policy\n    edit 3\n    next\n";
        assert_eq!(scan_policy_block(text, "root"), vec!["edit 3", "next"]);
    }
}
