use std::io::Write;

use varnachip::{
    encoders::{MergeVocabEncoder, TokenEncoder},
    rayon::ParallelRayonEncoder,
};

use crate::{
    LogArgs,
    input_output::{CliToken, InputArgs, OutputArgs, VocabArgs},
};

/// Minimum length of the chunk aligned pieces encoded in parallel.
pub const ENCODE_PIECE_LEN: usize = 1 << 16;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    ///
    /// The whole input is encoded as one text, and written as one
    /// line of space separated tokens.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = self.vocab.load_vocab()?;
        let encoder = ParallelRayonEncoder::new(MergeVocabEncoder::<CliToken>::new(vocab));

        let text = self.input.read_to_string()?;
        let tokens = encode_text(&encoder, &text, ENCODE_PIECE_LEN);

        let mut writer = self.output.open_writer()?;
        write_tokens(&mut writer, &tokens)?;
        writer.flush()?;

        Ok(())
    }
}

/// Encode a text as batch of chunk aligned pieces.
///
/// The result is identical to ``encoder.encode(text)``.
pub fn encode_text<E: TokenEncoder<CliToken>>(
    encoder: &E,
    text: &str,
    piece_len: usize,
) -> Vec<CliToken> {
    let pieces = encoder.segmentor().split_aligned(text, piece_len);
    encoder.encode_batch(&pieces).concat()
}

/// Write tokens as one space separated line.
pub fn write_tokens(
    writer: &mut dyn Write,
    tokens: &[CliToken],
) -> std::io::Result<()> {
    for (idx, token) in tokens.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
    }
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{NEWLINE_SAMPLE, newline_test_vocab};

    #[test]
    fn test_encode_text_matches_encoder() {
        let vocab = newline_test_vocab();
        let encoder = ParallelRayonEncoder::new(MergeVocabEncoder::<CliToken>::new(vocab));

        assert_eq!(encode_text(&encoder, "x\n\n\ny", 1), vec![120, 257, 121]);

        let texts = ["", "x\n\n\ny", NEWLINE_SAMPLE, "ಕನ್ನಡ\n\n\nhello   world\n\n\n!!"];
        for text in texts {
            for piece_len in [0, 1, 3, 16, ENCODE_PIECE_LEN] {
                assert_eq!(
                    encode_text(&encoder, text, piece_len),
                    encoder.encode(text),
                    "{text:?} {piece_len}"
                );
            }
        }
    }

    #[test]
    fn test_write_tokens() {
        let mut buf = Vec::new();
        write_tokens(&mut buf, &[120, 257, 121]).unwrap();
        assert_eq!(buf, b"120 257 121\n");

        let mut buf = Vec::new();
        write_tokens(&mut buf, &[]).unwrap();
        assert_eq!(buf, b"\n");
    }
}
