use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Read, Write},
    sync::Arc,
};

use varnachip::{UnifiedTokenVocab, vocab::io::load_json_vocab_path};

/// Token type used by the command line tools.
pub type CliToken = u32;

fn squash_standard_io(path: &Option<String>) -> Option<String> {
    match path {
        Some(p) if p == "-" => None,
        Some(p) => Some(p.clone()),
        None => None,
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
        })
    }

    /// Read the whole input as one text.
    pub fn read_to_string(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        self.open_reader()?.read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Vocabulary selection argument group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Path to a JSON vocab file, as written by `train`.
    #[clap(long)]
    pub vocab: String,
}

impl VocabArgs {
    /// Load the selected vocabulary.
    pub fn load_vocab(&self) -> Result<Arc<UnifiedTokenVocab<CliToken>>, Box<dyn std::error::Error>> {
        log::info!("Loading vocab: {}", self.vocab);
        let vocab: UnifiedTokenVocab<CliToken> = load_json_vocab_path(&self.vocab)?;
        log::info!("Vocabulary Size: {}", vocab.len());
        Ok(vocab.into())
    }
}
