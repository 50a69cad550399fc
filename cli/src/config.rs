use crate::commands::CommandLine;

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Strips ANSI colours from everything printed.
    pub no_color: bool,
    /// `1` hides section headers, `2` also hides the derived details.
    pub quiet: u8,
    /// Lowers the default log filter to `debug` so parse failures are traced.
    pub verbose: bool,
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Self {
            no_color: commands.no_color,
            quiet: commands.quiet,
            verbose: commands.verbose,
        }
    }
}
