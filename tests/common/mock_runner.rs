//! Recording command runner for testing
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use tx_puller::error::{Error, Result};
use tx_puller::shell::{CommandRunner, ShellCommand};

/// Command runner that records every command instead of running it
///
/// Features:
/// - Call tracking for verification
/// - Canned output per command prefix
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<ShellCommand>>,
    outputs: Mutex<Vec<(String, String)>>,
    fail_prefix: Mutex<Option<String>>,
}

impl MockRunner {
    /// Create a runner where every command succeeds with no output
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `output` for commands starting with `prefix`
    pub fn respond(&self, prefix: &str, output: &str) {
        self.outputs
            .lock()
            .unwrap()
            .push((prefix.to_string(), output.to_string()));
    }

    /// Fail every command starting with `prefix`
    pub fn fail_on(&self, prefix: &str) {
        *self.fail_prefix.lock().unwrap() = Some(prefix.to_string());
    }

    /// Every command run so far
    pub fn calls(&self) -> Vec<ShellCommand> {
        self.calls.lock().unwrap().clone()
    }

    /// Command lines run so far
    pub fn lines(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.line).collect()
    }

    /// Position of the first command starting with `prefix`
    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.lines().iter().position(|l| l.starts_with(prefix))
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, command: &ShellCommand) -> Result<String> {
        self.calls.lock().unwrap().push(command.clone());

        if let Some(prefix) = self.fail_prefix.lock().unwrap().as_ref() {
            if command.line.starts_with(prefix.as_str()) {
                return Err(Error::Command {
                    command: command.line.clone(),
                    detail: "exit code 1".to_string(),
                });
            }
        }

        let outputs = self.outputs.lock().unwrap();
        Ok(outputs
            .iter()
            .find(|(prefix, _)| command.line.starts_with(prefix.as_str()))
            .map(|(_, output)| output.clone())
            .unwrap_or_default())
    }
}
