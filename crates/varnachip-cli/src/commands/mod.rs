use crate::commands::{decode::DecodeArgs, encode::EncodeArgs, spans::SpansArgs, train::TrainArgs};

pub mod decode;
pub mod encode;
pub mod spans;
pub mod train;

/// Subcommands for varnachip.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a vocabulary from text files.
    Train(TrainArgs),

    /// Encode text lines into token lines.
    Encode(EncodeArgs),

    /// Decode token lines into text.
    Decode(DecodeArgs),

    /// Show the text covered by each token.
    Spans(SpansArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Spans(cmd) => cmd.run(),
        }
    }
}
