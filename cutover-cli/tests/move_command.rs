//! Integration tests for the `move` and `final` commands.
//!
//! These cover the full planning flow: worksheet contents and ordering,
//! pinned-host handling, determinism across repeat runs, the dry-run
//! mode, and the capacity-exhaustion exit code.

mod common;

use common::TestEnv;
use predicates::prelude::*;

const MARK_FEED: &str = "host,switch,final_switch,port\n\
    web-host-4,accsw_11,distsw_32,Gi1/0/1\n";

/// A plain move pairs both eligible hosts, leaves the printer alone,
/// and reports the counts.
#[test]
fn test_move_writes_runsheet() {
    let env = TestEnv::new();
    env.init_inventory();

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 row(s)"))
        .stdout(predicate::str::contains(
            "0 hosts pinned to their final switch, 0 pinned hosts unmatched, 2 hosts balanced",
        ));

    let sheet = env.runsheet_contents();
    assert!(sheet.starts_with(
        "Description,From Switch,From Interface,Disable Configuration,\
         To Switch,To Interface,vlan,Enable Configuration"
    ));
    assert!(sheet.contains("web-host-4"));
    assert!(sheet.contains("db-host-9"));
    assert!(!sheet.contains("printer"), "vlan 20 is not migration-eligible");
}

/// Free ports are consumed from the end of the sorted queue.
#[test]
fn test_move_consumes_ports_in_reverse_order() {
    let env = TestEnv::new();
    env.write_file(
        "inventory.csv",
        "switch_id,port,status,vlan,description\n\
         A,a1,connected,1296,host-1\n\
         A,a2,connected,1296,host-2\n\
         B,b1,disabled,,\n\
         B,b2,disabled,,\n",
    );
    env.command()
        .arg("init")
        .arg("inventory.csv")
        .assert()
        .success();

    env.command().arg("move").arg("A").arg("B").assert().success();

    // Config cells are quoted multi-line blocks, so match on the move
    // headers they carry.
    let sheet = env.runsheet_contents();
    assert!(sheet.contains("! Move A:a1 to B:b2"), "first host takes the last port");
    assert!(sheet.contains("! Move A:a2 to B:b1"));
}

/// A marked host is pinned to its final switch and the row carries the
/// marker cell.
#[test]
fn test_move_honors_final_marks() {
    let env = TestEnv::new();
    env.init_inventory();
    env.write_file("final.csv", MARK_FEED);

    env.command()
        .arg("mark")
        .arg("final.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 1 ports"));

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 hosts pinned to their final switch",
        ));

    let sheet = env.runsheet_contents();
    assert!(sheet.contains("! Move accsw_11:Gi1/0/1 to distsw_32:"));
    // The marker cell trails the quoted enable-config cell.
    assert!(sheet.contains("\",Final"));
}

/// Planning never touches the persisted store.
#[test]
fn test_move_does_not_persist_store() {
    let env = TestEnv::new();
    env.init_inventory();
    let before = env.store_contents();

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .assert()
        .success();

    assert_eq!(env.store_contents(), before);
}

/// Repeat runs over the same store produce byte-identical worksheets.
#[test]
fn test_move_is_deterministic() {
    let env = TestEnv::new();
    env.init_inventory();

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .assert()
        .success();
    let first = env.runsheet_contents();

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .assert()
        .success();

    assert_eq!(env.runsheet_contents(), first);
}

/// Dry run reports the pairings without writing the worksheet.
#[test]
fn test_move_dry_run() {
    let env = TestEnv::new();
    env.init_inventory();

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("accsw_11:Gi1/0/1"));

    assert!(!env.runsheet_path().exists(), "dry run writes nothing");
}

/// More eligible hosts than free ports fails the run with exit code 1.
#[test]
fn test_move_capacity_exhaustion_exit_code() {
    let env = TestEnv::new();
    env.write_file(
        "inventory.csv",
        "switch_id,port,status,vlan,description\n\
         A,a1,connected,1296,host-1\n\
         A,a2,connected,1296,host-2\n\
         A,a3,connected,1296,host-3\n\
         B,b1,disabled,,\n",
    );
    env.command()
        .arg("init")
        .arg("inventory.csv")
        .assert()
        .success();

    env.command()
        .arg("move")
        .arg("A")
        .arg("B")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exhausted"));
}

/// `--run-dir`/`--run-sheet` relocate the worksheet.
#[test]
fn test_move_runsheet_overrides() {
    let env = TestEnv::new();
    env.init_inventory();

    env.command()
        .arg("move")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .arg("--run-dir")
        .arg("plans")
        .arg("--run-sheet")
        .arg("wave1.csv")
        .assert()
        .success();

    assert!(env.temp_path.join("plans").join("wave1.csv").exists());
    assert!(!env.runsheet_path().exists());
}

/// `final` plans only the pinned hosts; a shortfall is reported, not
/// fatal.
#[test]
fn test_final_plans_only_pinned_hosts() {
    let env = TestEnv::new();
    env.init_inventory();
    env.write_file("final.csv", MARK_FEED);
    env.command().arg("mark").arg("final.csv").assert().success();

    env.command()
        .arg("final")
        .arg("accsw_11")
        .arg("distsw_31,distsw_32")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1 hosts pinned to their final switch, 0 pinned hosts unmatched, 0 hosts balanced",
        ));

    let sheet = env.runsheet_contents();
    assert!(sheet.contains("web-host-4"));
    assert!(!sheet.contains("db-host-9"), "unpinned hosts are left out");
}
