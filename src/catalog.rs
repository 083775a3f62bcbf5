//! Command catalog: the declarative mapping from task and platform family
//! to the exact command sequences pushed to a device.
//!
//! Everything here is a pure function of its inputs so the catalog can be
//! tested without a session, and extended to new platforms without touching
//! the orchestration logic. VLAN numbers and description markers are named
//! constants, never inline literals.

use crate::inventory::PlatformFamily;

/// VLANs allowed on a newly configured trunk port.
pub const TRUNK_ALLOWED_VLANS: &str = "30-39,50";

/// Native VLAN for a newly configured trunk port.
pub const TRUNK_NATIVE_VLAN: &str = "99";

/// Reserved quarantine VLAN assigned to interfaces being shut down.
pub const QUARANTINE_VLAN: &str = "666";

/// Data VLAN on the voice/data branch.
pub const VOICE_DATA_VLAN: &str = "1";

/// Voice VLAN on the voice/data branch (IOS family).
pub const VOICE_VLAN: &str = "2";

/// Allowed VLANs on the non-IOS voice/data trunk rendition.
pub const VOICE_TRUNK_ALLOWED_VLANS: &str = "1,2";

/// Description set on a voice/data port, per family.
pub const VOICE_DESC_IOS: &str = "**USER + PHONE CISCO**";
/// Description for the non-IOS voice/data rendition.
pub const VOICE_DESC_OTHER: &str = "**USER + PHONE ARISTA**";

/// Description marking a quarantined, shut-down interface.
pub const SHUTDOWN_DESC: &str = "**SHUTDOWN**";

/// Command persisting the running configuration to startup.
pub const PERSIST_COMMAND: &str = "copy run start";

/// Full running configuration.
pub const SHOW_RUNNING_CONFIG: &str = "show running-config";

/// Interface status listing, shown as an aid when prompting for an
/// interface identifier.
pub const SHOW_INTERFACE_STATUS: &str = "show interface status";

/// VLAN table.
pub const SHOW_VLAN: &str = "show vlan";

/// Status of one interface.
pub fn show_interface_status(interface: &str) -> String {
    format!("show interface {interface} status")
}

/// Running configuration of one interface. Also used as the verification
/// read-back after every configuration task.
pub fn show_interface_running_config(interface: &str) -> String {
    format!("show running-config interface {interface}")
}

/// Reset preamble shared by every configuration sequence: return the
/// interface to defaults, then enter its configuration context.
fn reset_preamble(interface: &str) -> Vec<String> {
    vec![
        format!("default interface {interface}"),
        format!("interface {interface}"),
    ]
}

/// Trunk port configuration sequence.
pub fn trunk_commands(interface: &str, description: &str) -> Vec<String> {
    let mut cmds = reset_preamble(interface);
    cmds.extend([
        "switchport mode trunk".to_string(),
        format!("switchport trunk allow vlan {TRUNK_ALLOWED_VLANS}"),
        format!("switchport trunk native vlan {TRUNK_NATIVE_VLAN}"),
        format!("description **{description}**"),
        "no shutdown".to_string(),
    ]);
    cmds
}

/// Access port configuration sequence (non-voice path).
pub fn access_commands(interface: &str, vlan: &str, description: &str) -> Vec<String> {
    let mut cmds = reset_preamble(interface);
    cmds.extend([
        "switchport mode access".to_string(),
        format!("switchport access vlan {vlan}"),
        format!("description **{description}**"),
        "spanning-tree portfast".to_string(),
        "no shutdown".to_string(),
    ]);
    cmds
}

/// Voice/data port configuration sequence, branching on platform family.
///
/// On the IOS family the port stays in access mode with a dedicated voice
/// VLAN; other families carry voice and data as a two-VLAN trunk with the
/// data VLAN native. `spanning-tree portfast` and `no shutdown` are always
/// distinct statements.
pub fn voice_commands(family: PlatformFamily, interface: &str) -> Vec<String> {
    let mut cmds = reset_preamble(interface);
    match family {
        PlatformFamily::Ios => cmds.extend([
            "switchport mode access".to_string(),
            format!("switchport access vlan {VOICE_DATA_VLAN}"),
            format!("switchport voice vlan {VOICE_VLAN}"),
            format!("description {VOICE_DESC_IOS}"),
            "spanning-tree portfast".to_string(),
            "no shutdown".to_string(),
        ]),
        PlatformFamily::Other => cmds.extend([
            "switchport mode trunk".to_string(),
            format!("switchport trunk native vlan {VOICE_DATA_VLAN}"),
            format!("switchport trunk allow vlan {VOICE_TRUNK_ALLOWED_VLANS}"),
            format!("description {VOICE_DESC_OTHER}"),
            "spanning-tree portfast".to_string(),
            "no shutdown".to_string(),
        ]),
    }
    cmds
}

/// Default-and-shutdown sequence: quarantine the interface and disable it.
pub fn shutdown_commands(interface: &str) -> Vec<String> {
    let mut cmds = reset_preamble(interface);
    cmds.extend([
        "switchport mode access".to_string(),
        format!("switchport access vlan {QUARANTINE_VLAN}"),
        format!("description {SHUTDOWN_DESC}"),
        "shutdown".to_string(),
    ]);
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunk_commands() {
        let cmds = trunk_commands("Gi0/1", "uplink");
        assert_eq!(
            cmds,
            vec![
                "default interface Gi0/1",
                "interface Gi0/1",
                "switchport mode trunk",
                "switchport trunk allow vlan 30-39,50",
                "switchport trunk native vlan 99",
                "description **uplink**",
                "no shutdown",
            ]
        );
    }

    #[test]
    fn test_access_commands() {
        let cmds = access_commands("Gi0/2", "20", "desk 12");
        assert!(cmds.contains(&"switchport mode access".to_string()));
        assert!(cmds.contains(&"switchport access vlan 20".to_string()));
        assert!(cmds.contains(&"description **desk 12**".to_string()));
        assert!(cmds.contains(&"no shutdown".to_string()));
    }

    #[test]
    fn test_voice_branch_ios() {
        let cmds = voice_commands(PlatformFamily::Ios, "Gi0/3");
        assert!(cmds.contains(&"switchport access vlan 1".to_string()));
        assert!(cmds.contains(&"switchport voice vlan 2".to_string()));
        // portfast and no-shutdown must be two distinct statements
        assert!(cmds.contains(&"spanning-tree portfast".to_string()));
        assert!(cmds.contains(&"no shutdown".to_string()));
        assert!(!cmds.iter().any(|c| c.contains("portfast") && c.contains("shutdown")));
    }

    #[test]
    fn test_voice_branch_other_family() {
        let cmds = voice_commands(PlatformFamily::Other, "Et1");
        assert!(cmds.contains(&"switchport mode trunk".to_string()));
        assert!(cmds.contains(&"switchport trunk native vlan 1".to_string()));
        assert!(cmds.contains(&"switchport trunk allow vlan 1,2".to_string()));
        assert!(cmds.contains(&"spanning-tree portfast".to_string()));
        assert!(cmds.contains(&"no shutdown".to_string()));
    }

    #[test]
    fn test_shutdown_quarantines_and_never_enables() {
        let cmds = shutdown_commands("Gi0/4");
        assert!(cmds.contains(&"switchport access vlan 666".to_string()));
        assert!(cmds.contains(&"description **SHUTDOWN**".to_string()));
        assert!(cmds.contains(&"shutdown".to_string()));
        assert!(!cmds.contains(&"no shutdown".to_string()));
    }

    #[test]
    fn test_reset_preamble_leads_every_sequence() {
        for cmds in [
            trunk_commands("Gi0/1", "d"),
            access_commands("Gi0/1", "10", "d"),
            voice_commands(PlatformFamily::Ios, "Gi0/1"),
            voice_commands(PlatformFamily::Other, "Gi0/1"),
            shutdown_commands("Gi0/1"),
        ] {
            assert_eq!(cmds[0], "default interface Gi0/1");
            assert_eq!(cmds[1], "interface Gi0/1");
        }
    }

    #[test]
    fn test_show_commands() {
        assert_eq!(
            show_interface_status("Gi0/1"),
            "show interface Gi0/1 status"
        );
        assert_eq!(
            show_interface_running_config("Gi0/1"),
            "show running-config interface Gi0/1"
        );
    }
}
