//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers running against the temp directory
//! - Canned inventory fixtures

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small inventory: two live hosts and a printer on `accsw_11`, free
/// ports on `distsw_31` and `distsw_32`.
pub const INVENTORY: &str = "switch_id,port,status,vlan,description\n\
    accsw_11,Gi1/0/1,connected,1296,web-host-4\n\
    accsw_11,Gi1/0/2,connected,1297,db-host-9\n\
    accsw_11,Gi1/0/3,notconnect,20,printer\n\
    distsw_31,Gi2/0/1,disabled,,\n\
    distsw_31,Gi2/0/2,disabled,,\n\
    distsw_32,Gi2/0/1,disabled,,\n";

/// Test environment with an isolated working directory.
///
/// Every command runs with the temp directory as its working directory,
/// so the default `switchports/`, `rundir/`, and `updated_switchports/`
/// locations land inside it.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder rooted in the test directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cutover").expect("Failed to find cutover binary");
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Write a file under the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Import the canned inventory.
    pub fn init_inventory(&self) {
        self.write_file("inventory.csv", INVENTORY);
        self.command()
            .arg("init")
            .arg("inventory.csv")
            .assert()
            .success();
    }

    /// Default location of the persisted store.
    pub fn store_path(&self) -> PathBuf {
        self.temp_path.join("switchports").join("switchports.yaml")
    }

    /// Default location of the worksheet.
    pub fn runsheet_path(&self) -> PathBuf {
        self.temp_path.join("rundir").join("runsheet.csv")
    }

    /// Default location of the post-update store.
    pub fn updated_store_path(&self) -> PathBuf {
        self.temp_path
            .join("updated_switchports")
            .join("updated_switchport.yaml")
    }

    /// Read the persisted store document.
    pub fn store_contents(&self) -> String {
        std::fs::read_to_string(self.store_path()).expect("Failed to read store")
    }

    /// Read the worksheet document.
    pub fn runsheet_contents(&self) -> String {
        std::fs::read_to_string(self.runsheet_path()).expect("Failed to read runsheet")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
