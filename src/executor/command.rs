use anyhow::Context as _;
use tokio::process::Command;

use crate::executor::Executor;

#[derive(Clone, Debug)]
pub struct CommandExecutor {
    program: String,
    args: Vec<String>,
}

impl CommandExecutor {
    pub fn new<S, I>(program: S, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Executor for CommandExecutor {
    #[tracing::instrument(skip_all, fields(program = %self.program))]
    async fn execute(&self) -> anyhow::Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .with_context(|| format!("failed to run {}", self.program))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim(),
            )
        }

        let result = String::from_utf8(output.stdout).with_context(|| format!("{} wrote non UTF-8 output", self.program))?;
        Ok(result)
    }
}
