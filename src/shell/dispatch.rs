use crate::error::ShellError;
use crate::input::{sanitize, split, WHITESPACE};

pub(crate) trait LineHandler {
    fn dispatch_line(&mut self, raw: &str) -> Result<(), ShellError>;
}

impl LineHandler for super::Shell {
    /// Takes one raw line through the pipeline: sanitize, tokenize,
    /// execute. Blank lines and pure comments fall through silently.
    fn dispatch_line(&mut self, raw: &str) -> Result<(), ShellError> {
        let command = sanitize(raw);
        if command.is_empty() {
            return Ok(());
        }

        self.context.begin_command();
        self.context.argv = split(command, WHITESPACE);
        if self.context.argv.is_empty() {
            return Ok(());
        }

        self.executor.execute(&mut self.context)?;
        Ok(())
    }
}
