use std::io::Write;

use varnachip::encoders::{MergeVocabEncoder, TokenEncoder, TokenSpan};

use crate::{
    LogArgs,
    input_output::{CliToken, InputArgs, OutputArgs, VocabArgs},
};

/// Output formats for the spans command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SpanFormat {
    /// One ``token<TAB>start<TAB>end<TAB>text`` row per token.
    Tsv,

    /// One JSON array of span objects.
    Json,
}

/// Args for the spans command.
#[derive(clap::Args, Debug)]
pub struct SpansArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "tsv")]
    format: SpanFormat,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl SpansArgs {
    /// Run the spans command.
    ///
    /// The whole input is encoded as one text; ranges are byte offsets into it.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let vocab = self.vocab.load_vocab()?;
        let encoder = MergeVocabEncoder::<CliToken>::new(vocab);

        let text = self.input.read_to_string()?;
        let spans = encoder.encode_with_spans(&text);

        let mut writer = self.output.open_writer()?;
        match self.format {
            SpanFormat::Tsv => write_tsv(&mut writer, &spans)?,
            SpanFormat::Json => write_json(&mut writer, &spans)?,
        }
        writer.flush()?;

        Ok(())
    }
}

fn write_tsv(
    writer: &mut dyn Write,
    spans: &[TokenSpan<CliToken>],
) -> Result<(), Box<dyn std::error::Error>> {
    for span in spans {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            span.token,
            span.range.start,
            span.range.end,
            span.text.escape_debug()
        )?;
    }
    Ok(())
}

fn write_json(
    writer: &mut dyn Write,
    spans: &[TokenSpan<CliToken>],
) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<serde_json::Value> = spans
        .iter()
        .map(|span| {
            serde_json::json!({
                "token": span.token,
                "text": span.text,
                "start": span.range.start,
                "end": span.range.end,
            })
        })
        .collect();
    serde_json::to_writer(&mut *writer, &records)?;
    writeln!(writer)?;
    Ok(())
}
