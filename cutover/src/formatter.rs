//! Configuration-text rendering.
//!
//! The allocation engine does not care what the enable/disable command
//! blocks look like; it talks to a [`ConfigFormatter`] and the worksheet
//! carries whatever text comes back. [`CiscoIosFormatter`] is the stock
//! implementation producing IOS-style access-port blocks. Pure string
//! templating, no decision logic.

/// Renders the command blocks for one host move.
///
/// Implementations must be pure: same inputs, same text.
pub trait ConfigFormatter {
    /// Text that brings the new port up for the moved host.
    fn render_enable(
        &self,
        old_switch: &str,
        old_port: &str,
        new_switch: &str,
        new_port: &str,
        vlan: &str,
        description: &str,
    ) -> String;

    /// Text that shuts the vacated port down.
    fn render_disable(
        &self,
        old_switch: &str,
        old_port: &str,
        new_switch: &str,
        new_port: &str,
        vlan: &str,
        description: &str,
    ) -> String;
}

/// IOS-style access-port configuration blocks.
///
/// # Examples
///
/// ```
/// use cutover::{CiscoIosFormatter, ConfigFormatter};
///
/// let formatter = CiscoIosFormatter;
/// let block = formatter.render_enable(
///     "accsw_11", "Gi1/0/1", "distsw_31", "Gi2/0/4", "1296", "web-host-4",
/// );
/// assert!(block.contains("switchport access vlan 1296"));
/// assert!(block.contains("no shut"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CiscoIosFormatter;

impl ConfigFormatter for CiscoIosFormatter {
    fn render_enable(
        &self,
        old_switch: &str,
        old_port: &str,
        new_switch: &str,
        new_port: &str,
        vlan: &str,
        description: &str,
    ) -> String {
        format!(
            "! Move {old_switch}:{old_port} to {new_switch}:{new_port}\n\
             ! show interface {new_port} status\n\
             ! If status is disabled, proceed with configuration\n\
             conf t\n\
             \x20interface {new_port}\n\
             \x20description {description}\n\
             \x20switchport access vlan {vlan}\n\
             \x20switchport trunk encapsulation dot1q\n\
             \x20switchport mode access\n\
             \x20switchport nonegotiate\n\
             \x20switchport port-security maximum 3\n\
             \x20switchport port-security\n\
             \x20switchport port-security aging time 2\n\
             \x20switchport port-security aging type inactivity\n\
             \x20switchport port-security violation restrict\n\
             \x20srr-queue bandwidth share 1 42 53 4\n\
             \x20srr-queue bandwidth shape 300 0 0 0\n\
             \x20priority-queue out\n\
             \x20spanning-tree portfast\n\
             \x20service-policy input ACCESS-CONDTRUST-PMAP\n\
             \x20no shut\n\
             \x20end\n\
             !\n"
        )
    }

    fn render_disable(
        &self,
        old_switch: &str,
        old_port: &str,
        _new_switch: &str,
        _new_port: &str,
        _vlan: &str,
        _description: &str,
    ) -> String {
        format!(
            "! disable configuration for {old_switch}:{old_port}\n\
             ! show interface {old_port} status\n\
             ! If notconnect and patch has been moved, disable\n\
             conf t\n\
             \x20interface {old_port}\n\
             \x20description disabled\n\
             \x20shutdown\n\
             \x20end\n\
             !\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_block_contents() {
        let block = CiscoIosFormatter.render_enable(
            "accsw_11",
            "Gi1/0/1",
            "distsw_31",
            "Gi2/0/4",
            "1296",
            "web-host-4",
        );
        assert!(block.starts_with("! Move accsw_11:Gi1/0/1 to distsw_31:Gi2/0/4\n"));
        assert!(block.contains(" interface Gi2/0/4\n"));
        assert!(block.contains(" description web-host-4\n"));
        assert!(block.contains(" switchport access vlan 1296\n"));
        assert!(block.contains(" switchport port-security maximum 3\n"));
        assert!(block.contains(" spanning-tree portfast\n"));
        assert!(block.ends_with("!\n"));
    }

    #[test]
    fn test_disable_block_contents() {
        let block = CiscoIosFormatter.render_disable(
            "accsw_11",
            "Gi1/0/1",
            "distsw_31",
            "Gi2/0/4",
            "1296",
            "web-host-4",
        );
        assert!(block.starts_with("! disable configuration for accsw_11:Gi1/0/1\n"));
        assert!(block.contains(" interface Gi1/0/1\n"));
        assert!(block.contains(" shutdown\n"));
        // The disable block only touches the vacated side.
        assert!(!block.contains("distsw_31"));
    }

    #[test]
    fn test_rendering_is_pure() {
        let a = CiscoIosFormatter.render_enable("s1", "p1", "s2", "p2", "10", "host");
        let b = CiscoIosFormatter.render_enable("s1", "p1", "s2", "p2", "10", "host");
        assert_eq!(a, b);
    }
}
