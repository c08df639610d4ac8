pub mod bzf;
pub mod types;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle BZF files
    Bzf {
        #[command(subcommand)]
        command: bzf::BzfCommands,
    },
    /// Classify file names and extension hashes
    Types {
        #[command(subcommand)]
        command: types::TypesCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Bzf { command } => command.handle(),
            Commands::Types { command } => command.handle(),
        }
    }
}
