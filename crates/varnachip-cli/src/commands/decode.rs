use std::{io::Write, num::ParseIntError};

use varnachip::decoders::{DictionaryDecoder, TokenDecoder};

use crate::{
    LogArgs,
    input_output::{CliToken, InputArgs, OutputArgs, VocabArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    ///
    /// All whitespace separated tokens of the input are decoded as one
    /// sequence, and the bytes written out unchanged; so `encode | decode`
    /// reproduces the input.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = self.vocab.load_vocab()?;
        let decoder = DictionaryDecoder::from_unified_vocab(vocab);

        let tokens = parse_tokens(&self.input.read_to_string()?)?;
        let bytes = decoder.try_decode_to_bytes(&tokens)?;

        let mut writer = self.output.open_writer()?;
        writer.write_all(&bytes)?;
        writer.flush()?;

        Ok(())
    }
}

/// Parse whitespace separated tokens.
pub fn parse_tokens(text: &str) -> Result<Vec<CliToken>, ParseIntError> {
    text.split_whitespace().map(|s| s.parse()).collect()
}

#[cfg(test)]
mod tests {
    use varnachip::encoders::{MergeVocabEncoder, TokenEncoder};

    use super::*;
    use crate::commands::{
        encode::write_tokens,
        testing::{NEWLINE_SAMPLE, newline_test_vocab},
    };

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_tokens("120 257\n121\n").unwrap(), vec![120, 257, 121]);
        assert!(parse_tokens("").unwrap().is_empty());
        assert!(parse_tokens("12 x").is_err());
    }

    #[test]
    fn test_encode_decode_framing() {
        let vocab = newline_test_vocab();
        let encoder = MergeVocabEncoder::<CliToken>::new(vocab.clone());
        let decoder = DictionaryDecoder::from_unified_vocab(vocab);

        let mut buf = Vec::new();
        write_tokens(&mut buf, &encoder.encode(NEWLINE_SAMPLE)).unwrap();

        let tokens = parse_tokens(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(
            decoder.try_decode_to_bytes(&tokens).unwrap(),
            NEWLINE_SAMPLE.as_bytes()
        );
    }
}
