use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::config::Config;
use crate::terminal::print::PRINT_TARGET;

/// Overrides the default log filter, e.g. `V6ADDR_LOG=v6addr_core=trace`.
pub const LOG_ENV: &str = "V6ADDR_LOG";

pub struct V6Formatter;

impl<S, N> FormatEvent<S, N> for V6Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // plain output lines carry their own styling
        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[+]", |s| s.green().bold()),
                    Level::WARN => ("[*]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                };

            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

pub fn init_logging(cfg: &Config) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(env.as_deref(), cfg.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(V6Formatter)
        .init();
}

/// The user's directives (or the default level), with program output
/// always enabled on top.
fn build_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    match format!("{PRINT_TARGET}=info").parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}
