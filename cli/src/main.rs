mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, show, subnet, teredo};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(&cfg);
    print::initialize(&cfg);

    match commands.command {
        Commands::Show { address } => show::show(&address, &cfg),
        Commands::Subnet { address, other } => subnet::subnet(&address, &other, &cfg),
        Commands::Teredo { address } => teredo::teredo(&address, &cfg),
    }
}
