// Egyptian national ID card reader
// Reads card photos (or already-recognized text) and prints the extracted fields as JSON

use bitaqa::{
    models::{DecodedEgyptianId, OcrResult},
    processing::normalize_digits,
    utils::ReaderConfig,
    IdCardReader,
};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bitaqa", version, about = "Extract and decode Egyptian national ID card data")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tesseract language string, e.g. "ara+eng"
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Run OCR on the image as-is instead of on preprocessed variants
    #[arg(long, global = true)]
    no_preprocess: bool,

    /// Characters of raw OCR text to include in the output
    #[arg(long, global = true)]
    preview_chars: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run OCR on a card photo and extract its fields
    Scan { image: PathBuf },
    /// Extract fields from OCR text in a file ("-" reads stdin)
    Text { input: String },
    /// Decode a national ID number
    Decode { national_id: String },
}

fn load_config(cli: &Cli) -> Result<ReaderConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => ReaderConfig::from_file(path)?,
        None => ReaderConfig::default(),
    };
    if let Some(lang) = &cli.lang {
        config.languages = lang.clone();
    }
    if cli.no_preprocess {
        config.preprocess = false;
    }
    if let Some(preview_chars) = cli.preview_chars {
        config.preview_chars = preview_chars;
    }
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_decoded(decoded: &DecodedEgyptianId, config: &ReaderConfig) -> Result<(), Box<dyn Error>> {
    let today = Local::now().date_naive();
    let age = decoded.age_profile(today, config.elderly_age_threshold);
    print_json(&serde_json::json!({
        "decoded": decoded,
        "age": age,
    }))
}

#[cfg(feature = "tesseract")]
fn scan(image: &Path, config: ReaderConfig) -> Result<OcrResult, Box<dyn Error>> {
    use bitaqa::processing::{PreprocessingRecognizer, TesseractRecognizer};

    let image_data = std::fs::read(image)?;
    let engine = TesseractRecognizer::new(config.languages.clone());
    let result = if config.preprocess {
        IdCardReader::with_config(PreprocessingRecognizer::new(engine), config).extract_data_from_id_card(&image_data)?
    } else {
        IdCardReader::with_config(engine, config).extract_data_from_id_card(&image_data)?
    };
    Ok(result)
}

#[cfg(not(feature = "tesseract"))]
fn scan(_image: &Path, _config: ReaderConfig) -> Result<OcrResult, Box<dyn Error>> {
    Err("image scanning requires building with `--features tesseract`".into())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(&cli)?;

    match &cli.command {
        Command::Scan { image } => {
            let result = scan(image, config)?;
            if result.national_id.is_none() {
                log::info!("No national ID recognized; ask the operator to type it in");
            }
            print_json(&result)
        }
        Command::Text { input } => {
            let mut raw = String::new();
            if input == "-" {
                std::io::stdin().read_to_string(&mut raw)?;
            } else {
                raw = std::fs::read_to_string(input)?;
            }
            let result = IdCardReader::text_only(config).extract_from_text(&raw);
            print_json(&result)
        }
        Command::Decode { national_id } => {
            let normalized = normalize_digits(national_id.trim());
            let decoded = bitaqa::decode_egyptian_id(&normalized);
            print_decoded(&decoded, &config)
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
