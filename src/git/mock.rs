use crate::error::{ChangelogError, Result};
use crate::git::{LogSource, RevisionRange};

/// Log source returning canned tags and log output
#[derive(Debug, Clone, Default)]
pub struct MockLogSource {
    tags: Vec<String>,
    lines: Vec<String>,
    failure: Option<String>,
}

impl MockLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Append one raw log line, newest commits first
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Make every `log` call fail with `stderr`
    pub fn fail_with(&mut self, stderr: impl Into<String>) {
        self.failure = Some(stderr.into());
    }
}

impl LogSource for MockLogSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn log(&self, _range: &RevisionRange) -> Result<String> {
        if let Some(stderr) = &self.failure {
            return Err(ChangelogError::LogCommandFailed {
                status: "exit status: 128".to_string(),
                stderr: stderr.clone(),
            });
        }

        let mut output = self.lines.join("\n");
        if !output.is_empty() {
            output.push('\n');
        }
        Ok(output)
    }
}
