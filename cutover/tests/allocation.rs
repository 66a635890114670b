//! Integration tests for the allocation engine.
//!
//! These exercise the engine-level guarantees: no double allocation,
//! run-to-run determinism, final-pass correctness, already-placed
//! idempotence, and the greedy balancing bound.

use cutover::{
    plan_moves, CiscoIosFormatter, LogLevel, Logger, MoveOptions, PortRecord, PortStore,
    STATUS_DISABLED,
};

fn quiet() -> Logger {
    Logger::new(LogLevel::Quiet)
}

fn free_port(switch: &str, port: &str) -> PortRecord {
    PortRecord::new(switch, port, STATUS_DISABLED, "", "")
}

fn host(switch: &str, port: &str, description: &str) -> PortRecord {
    PortRecord::new(switch, port, "connected", "1296", description)
}

fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

/// The end-to-end scenario: two hosts on `A`, two free ports on `B`,
/// no final hints. Pairings follow the reversed-pop order and both `B`
/// ports end up consumed.
#[test]
fn test_two_host_migration_scenario() {
    let mut store = PortStore::new();
    store.insert(host("A", "a1", "host-1"));
    store.insert(host("A", "a2", "host-2"));
    store.insert(free_port("B", "b1"));
    store.insert(free_port("B", "b2"));

    let options = MoveOptions::new(strings(&["A"]), strings(&["B"]));
    let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap();

    assert_eq!(outcome.final_matched, 0);
    assert_eq!(outcome.balanced, 2);
    assert_eq!(outcome.rows.len(), 2);

    assert_eq!(outcome.rows[0].from_interface, "a1");
    assert_eq!(outcome.rows[0].to_interface, "b2");
    assert_eq!(outcome.rows[1].from_interface, "a2");
    assert_eq!(outcome.rows[1].to_interface, "b1");
}

#[test]
fn test_no_destination_port_allocated_twice() {
    let mut store = PortStore::new();
    for i in 0..6 {
        store.insert(host("src", &format!("p{i}"), "host"));
    }
    let mut pinned = host("src", "p6", "pinned");
    pinned.final_switch = "dst_b".to_string();
    store.insert(pinned);
    for i in 0..4 {
        store.insert(free_port("dst_a", &format!("q{i}")));
        store.insert(free_port("dst_b", &format!("r{i}")));
    }

    let options = MoveOptions::new(strings(&["src"]), strings(&["dst_a", "dst_b"]));
    let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap();

    assert_eq!(outcome.rows.len(), 7);
    let mut destinations: Vec<String> = outcome
        .rows
        .iter()
        .map(|row| format!("{}:{}", row.to_switch, row.to_interface))
        .collect();
    let total = destinations.len();
    destinations.sort();
    destinations.dedup();
    assert_eq!(destinations.len(), total);
}

#[test]
fn test_pinned_host_always_lands_on_its_switch() {
    let mut store = PortStore::new();
    let mut pinned = host("src", "p1", "pinned");
    pinned.final_switch = "dst_b".to_string();
    store.insert(pinned);
    // dst_a has far more free ports; the pin must still win.
    for i in 0..8 {
        store.insert(free_port("dst_a", &format!("q{i}")));
    }
    store.insert(free_port("dst_b", "r0"));

    let options = MoveOptions::new(strings(&["src"]), strings(&["dst_a", "dst_b"]));
    let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap();

    assert_eq!(outcome.final_matched, 1);
    assert_eq!(outcome.rows[0].to_switch, "dst_b");
    assert!(outcome.rows[0].final_placement);
}

#[test]
fn test_already_placed_host_is_never_emitted() {
    let mut store = PortStore::new();
    let mut in_place = host("dst_a", "p1", "settled");
    in_place.final_switch = "dst_a".to_string();
    store.insert(in_place);
    store.insert(free_port("dst_a", "q0"));

    // Its own switch is both source and destination.
    let options = MoveOptions::new(strings(&["dst_a"]), strings(&["dst_a"]));
    let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap();

    assert!(outcome.rows.is_empty());
    assert_eq!(outcome.final_matched, 0);
    assert_eq!(outcome.balanced, 0);
}

#[test]
fn test_repeat_runs_produce_identical_rows() {
    let build = || {
        let mut store = PortStore::new();
        for i in 0..5 {
            store.insert(host("src", &format!("p{i}"), &format!("host-{i}")));
        }
        let mut pinned = host("src", "p9", "pinned");
        pinned.final_switch = "dst_b".to_string();
        store.insert(pinned);
        for i in 0..4 {
            store.insert(free_port("dst_a", &format!("q{i}")));
            store.insert(free_port("dst_b", &format!("r{i}")));
        }
        store
    };
    let options = MoveOptions::new(strings(&["src"]), strings(&["dst_a", "dst_b"]));

    let one = plan_moves(&mut build(), &options, &CiscoIosFormatter, &quiet()).unwrap();
    let two = plan_moves(&mut build(), &options, &CiscoIosFormatter, &quiet()).unwrap();
    assert_eq!(one.rows, two.rows);
}

/// With equal demand spread over equal switches, the greedy max-bucket
/// policy leaves the remaining free counts within one of each other.
#[test]
fn test_balancing_spread_stays_within_one() {
    let mut store = PortStore::new();
    for i in 0..9 {
        store.insert(host("src", &format!("p{i}"), "host"));
    }
    for i in 0..5 {
        store.insert(free_port("dst_a", &format!("q{i}")));
        store.insert(free_port("dst_b", &format!("r{i}")));
        store.insert(free_port("dst_c", &format!("s{i}")));
    }

    let destinations = strings(&["dst_a", "dst_b", "dst_c"]);
    let options = MoveOptions::new(strings(&["src"]), destinations.clone());
    let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap();
    assert_eq!(outcome.balanced, 9);

    let mut used = std::collections::BTreeMap::new();
    for row in &outcome.rows {
        *used.entry(row.to_switch.clone()).or_insert(0usize) += 1;
    }
    let counts: Vec<usize> = destinations
        .iter()
        .map(|d| used.get(d).copied().unwrap_or(0))
        .collect();
    let max = counts.iter().max().copied().unwrap();
    let min = counts.iter().min().copied().unwrap();
    assert!(max - min <= 1, "uneven spread: {counts:?}");
}

#[test]
fn test_capacity_exhaustion_fails_the_run() {
    let mut store = PortStore::new();
    store.insert(host("src", "p0", "host-0"));
    store.insert(host("src", "p1", "host-1"));
    store.insert(host("src", "p2", "host-2"));
    store.insert(free_port("dst_a", "q0"));
    store.insert(free_port("dst_a", "q1"));

    let options = MoveOptions::new(strings(&["src"]), strings(&["dst_a"]));
    let err = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap_err();
    assert!(err.is_capacity_exhausted());
}

#[test]
fn test_final_shortfall_does_not_fail_final_only_run() {
    let mut store = PortStore::new();
    let mut pinned_one = host("src", "p0", "pinned-0");
    pinned_one.final_switch = "dst_a".to_string();
    store.insert(pinned_one);
    let mut pinned_two = host("src", "p1", "pinned-1");
    pinned_two.final_switch = "dst_a".to_string();
    store.insert(pinned_two);
    store.insert(free_port("dst_a", "q0"));

    let options =
        MoveOptions::new(strings(&["src"]), strings(&["dst_a"])).with_final_only(true);
    let outcome = plan_moves(&mut store, &options, &CiscoIosFormatter, &quiet()).unwrap();

    assert_eq!(outcome.final_matched, 1);
    assert_eq!(outcome.final_unmatched, 1);
    assert_eq!(outcome.rows.len(), 1);
}
