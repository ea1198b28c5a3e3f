//! Test configuration helpers pointing the pipeline at a mock API and a temporary output directory

use holiday_export::{ApiConfig, Config, OutputConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::MockServer;

/// Output locations of a test run, removed when dropped
pub struct TestOutputs {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
}

impl TestOutputs {
    /// Create a fresh temporary output directory
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path of the public holidays export
    pub fn public(&self) -> PathBuf {
        self.dir.path().join("data").join("holidays_public.txt")
    }

    /// Path of the school holidays export
    pub fn school(&self) -> PathBuf {
        self.dir.path().join("data").join("holidays_school.txt")
    }

    /// Path of the rendered enumeration
    pub fn enum_file(&self) -> PathBuf {
        self.dir.path().join("country").join("generated.rs")
    }

    /// Root of the output directory
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Read an output file, panicking with the path if it is missing
    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    }
}

/// Configuration whose API is the mock server and whose outputs live in `outputs`
pub fn test_config(server: &MockServer, outputs: &TestOutputs) -> Config {
    Config {
        api: ApiConfig {
            base_url: format!("{}/api/v3", server.uri()),
            ..Default::default()
        },
        output: OutputConfig {
            public_path: outputs.public(),
            school_path: outputs.school(),
            enum_path: outputs.enum_file(),
            template_path: None,
        },
        ..Default::default()
    }
}
