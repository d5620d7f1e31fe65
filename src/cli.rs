use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "pitchme", version, about = "Timed pitch-practice questions in the terminal")]
pub struct Cli {
    /// Question deck (.md list, .yaml, or one question per line) [default: built-in]
    #[arg(long, value_name = "path")]
    pub questions: Option<PathBuf>,

    /// Seconds allowed per question
    #[arg(long, value_name = "secs")]
    pub max_time: Option<f64>,

    /// Countdown tick interval in milliseconds (10-100)
    #[arg(long, value_name = "ms")]
    pub tick_ms: Option<u64>,

    /// Shuffle seed, to replay a previous question order
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,

    /// Config file [default: <config dir>/pitchme/config.yaml]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Print the shuffled questions and exit
    #[arg(long)]
    pub list: bool,
}
