use std::env;
use std::io::{self, Write};

mod dispatch;

use crate::{
    core::{commands::CommandExecutor, context::ShellContext},
    error::ShellError,
    flags::Flags,
    highlight::Styler,
    input::{LineReader, ReadError},
};

use dispatch::LineHandler;

const PROMPT: &str = "$ ";

pub struct Shell {
    pub(crate) reader: LineReader<io::Stdin>,
    pub(crate) line: Vec<u8>,
    pub(crate) context: ShellContext,
    pub(crate) executor: CommandExecutor,
    pub(crate) styler: Styler,
    pub(crate) flags: Flags,
    pub(crate) interactive: bool,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let shell_name = env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        let context = ShellContext::new(shell_name);
        let executor = CommandExecutor::new(&flags);
        let interactive = unsafe { libc::isatty(libc::STDIN_FILENO) } == 1;

        if interactive {
            // Ctrl-C at the prompt gets a fresh line, not a dead shell.
            ctrlc::set_handler(|| {
                println!();
            })?;
        }

        Ok(Shell {
            reader: LineReader::new(io::stdin()),
            line: Vec::new(),
            context,
            executor,
            styler: Styler::new(),
            flags,
            interactive,
        })
    }

    /// The prompt loop. Runs until the input stream ends; returns the last
    /// recorded exit status so the binary can exit with it.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            if self.interactive {
                self.show_prompt()?;
            }

            match self.reader.read_line(&mut self.line) {
                Ok(_) => {
                    let raw = String::from_utf8_lossy(&self.line).into_owned();
                    if let Err(e) = self.dispatch_line(&raw) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", self.styler.error(&e.to_string()));
                        }
                        self.context.set_status(2);
                    }
                }
                Err(ReadError::EndOfInput) => {
                    if self.interactive {
                        println!();
                    }
                    break;
                }
                Err(ReadError::Io(e)) => return Err(ShellError::Io(e)),
            }
        }
        Ok(self.context.last_status())
    }

    fn show_prompt(&self) -> Result<(), ShellError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", self.styler.prompt(PROMPT))?;
        stdout.flush()?;
        Ok(())
    }
}
