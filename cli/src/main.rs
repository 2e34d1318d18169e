//! deckbrief CLI - pitch deck summarization tool

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use deckbrief::{DeckBrief, DeckDocument, JsonFormat};

#[derive(Parser)]
#[command(name = "deckbrief")]
#[command(version)]
#[command(about = "Summarize PDF pitch decks into business briefs", long_about = None)]
struct Cli {
    /// Input PDF file (shorthand for `summarize FILE`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and summarize a pitch deck
    #[command(alias = "sum")]
    Summarize {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit the record as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// With --json, emit compact single-line output
        #[arg(long)]
        compact: bool,

        /// Maximum number of paragraphs to keep
        #[arg(long, default_value_t = deckbrief::summary::DEFAULT_MAX_PARAGRAPHS)]
        max_paragraphs: usize,

        /// Minimum paragraph length in characters
        #[arg(long, default_value_t = deckbrief::summary::DEFAULT_MIN_PARAGRAPH_LEN)]
        min_len: usize,

        /// Skip keyword field tagging
        #[arg(long)]
        no_fields: bool,
    },

    /// Dump the extracted text of a pitch deck
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Dump raw page-delimited text, skipping the cleaning pass
        #[arg(long)]
        raw: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match (cli.command, cli.input) {
        (Some(command), _) => run(command),
        (None, Some(input)) => run(Commands::Summarize {
            input,
            output: None,
            json: false,
            compact: false,
            max_paragraphs: deckbrief::summary::DEFAULT_MAX_PARAGRAPHS,
            min_len: deckbrief::summary::DEFAULT_MIN_PARAGRAPH_LEN,
            no_fields: false,
        }),
        (None, None) => {
            eprintln!("{} no input file; try `deckbrief --help`", "error:".red());
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> deckbrief::Result<()> {
    match command {
        Commands::Summarize {
            input,
            output,
            json,
            compact,
            max_paragraphs,
            min_len,
            no_fields,
        } => {
            let mut brief = DeckBrief::new()
                .with_max_paragraphs(max_paragraphs)
                .with_min_paragraph_len(min_len);
            if no_fields {
                brief = brief.without_field_tagging();
            }

            log::info!("processing {}", input.display());
            let result = brief.process(&input)?;
            let record = result.record();
            eprintln!(
                "{} {} ({} pages, {} chars)",
                "processed".green(),
                input.display(),
                record.pages_processed,
                record.text_extracted_chars
            );
            if record.pages_failed > 0 {
                eprintln!(
                    "{} {} page(s) yielded no text",
                    "warning:".yellow(),
                    record.pages_failed
                );
            }

            let rendered = if json {
                let format = if compact {
                    JsonFormat::Compact
                } else {
                    JsonFormat::Pretty
                };
                result.to_json(format)?
            } else {
                result.report()
            };
            write_output(output, &rendered)
        }

        Commands::Text { input, output, raw } => {
            let text = deckbrief::extract_text(&input)?;
            let rendered = if raw { text } else { deckbrief::clean(&text) };
            write_output(output, &rendered)
        }

        Commands::Info { input } => {
            let doc = DeckDocument::open(&input)?;
            println!("{}: {}", "File".bold(), input.display());
            println!("{}: {}", "PDF version".bold(), doc.version());
            println!("{}: {}", "Pages".bold(), doc.page_count());
            Ok(())
        }
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> deckbrief::Result<()> {
    match output {
        Some(path) => {
            fs::write(&path, content)?;
            eprintln!("{} {}", "saved".green(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
