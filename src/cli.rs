use clap::{Parser, Subcommand};

/// MessDataMaker — generates a synthetic college mess operations dataset
/// for attendance and food-waste analysis.
#[derive(Parser, Debug)]
#[command(name = "mess_data_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to an optional generation config JSON file.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the random seed from the config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the range start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,

    /// Override the range end date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the full dataset, write it to CSV, and print a summary.
    Generate {
        /// Output CSV path.
        #[arg(short, long, default_value = "data/raw/college_mess_data.csv")]
        output: String,
    },

    /// Generate the first few days and print the records without writing.
    Preview {
        /// Number of days to generate.
        #[arg(short, long, default_value_t = 7)]
        days: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            output: "data/raw/college_mess_data.csv".to_string(),
        }
    }
}
