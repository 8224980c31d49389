use std::{fs, io::Write, time::Duration};

use varnachip::{
    segmentation::SegmentationConfig,
    training::{BinaryPairVocabTrainer, BinaryPairVocabTrainerOptions, DEFAULT_MIN_FREQUENCY, TrainResults},
    vocab::io::{save_merges_text_path, write_json_vocab},
};

use crate::{
    LogArgs,
    input_output::{CliToken, OutputArgs},
};

/// Target scripts for the train command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TargetScript {
    /// Kannada (and the zero width joiners).
    Kannada,

    /// No target script.
    None,
}

impl TargetScript {
    fn segmentation(self) -> SegmentationConfig {
        match self {
            TargetScript::Kannada => SegmentationConfig::kannada(),
            TargetScript::None => SegmentationConfig::latin_only(),
        }
    }
}

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; joined with blank lines.
    #[clap(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocab size.
    #[arg(long, default_value = "5000")]
    vocab_size: usize,

    /// Minimum pair count for a merge.
    #[arg(long, default_value_t = DEFAULT_MIN_FREQUENCY)]
    min_frequency: usize,

    /// Optional ceiling on the number of merges.
    #[arg(long)]
    max_merges: Option<usize>,

    /// Optional ceiling on the merge loop wall time, in seconds.
    #[arg(long)]
    max_seconds: Option<u64>,

    /// Target script for segmentation.
    #[arg(long, value_enum, default_value = "kannada")]
    script: TargetScript,

    /// Optional merges text output path.
    #[arg(long)]
    merges: Option<String>,

    /// Optional training metrics JSON output path.
    #[arg(long)]
    metrics: Option<String>,

    /// JSON vocab output.
    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = BinaryPairVocabTrainerOptions::new(self.script.segmentation(), self.vocab_size)
            .with_min_frequency(self.min_frequency)
            .with_max_merges(self.max_merges)
            .with_max_duration(self.max_seconds.map(Duration::from_secs));

        let mut trainer: BinaryPairVocabTrainer = options.init()?;

        log::info!("Reading files:");
        let mut texts = Vec::with_capacity(self.files.len());
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            texts.push(fs::read_to_string(path)?);
        }
        trainer.update_from_samples([texts.join("\n\n")]);

        log::info!("Training Tokenizer...");
        let TrainResults { vocab, metrics } = trainer.train_with_metrics::<CliToken>()?;

        log::info!("Vocabulary Size: {}", vocab.len());
        log::info!("Stop Reason: {}", metrics.stop_reason);
        log::info!("Compression Ratio: {:.3}", metrics.compression_ratio);

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_json_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        if let Some(path) = &self.merges {
            log::info!("merges: {path}");
            save_merges_text_path(vocab.merge_vocab(), path)?;
        }

        if let Some(path) = &self.metrics {
            log::info!("metrics: {path}");
            fs::write(path, serde_json::to_string_pretty(&metrics)?)?;
        }

        Ok(())
    }
}
