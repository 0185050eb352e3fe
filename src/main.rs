//! Tidemark CLI
//!
//! Usage:
//!   tidemark --text "journal entry here"    # Single entry: emotion + topics
//!   tidemark --file entries.json            # Insights over a JSON export
//!   tidemark --interactive                  # Interactive journal mode
//!   tidemark --serve                        # HTTP API server
//!   tidemark --text "entry" --json          # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::Utc;

use tidemark::core::{
    run_server, InsightEngine, KeywordClassifier, LexiconAnnotator, SentimentClassifier,
    Taxonomy,
};
use tidemark::types::{EmotionLabel, EmotionPolarity, JournalEntry};
use tidemark::{MIN_ENTRIES_FOR_TRENDS, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "tidemark",
    version = VERSION,
    about = "Tidemark - journal entries in, topic-emotion insights out",
    long_about = "Tidemark is a journaling backend with a temporal topic-emotion \
                  insight engine.\n\n\
                  It classifies entries into emotion labels, infers the topics each \
                  entry discusses, and reports how the dominant emotion per topic \
                  shifts between the earlier and later half of the journal.\n\n\
                  Modes:\n  \
                  --text         Single entry: emotion + topics\n  \
                  --file         Insights over a JSON entry export\n  \
                  --interactive  Journal mode (prefix lines with 'emotion:' to\n                 \
                  override the classifier)\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Single entry text to evaluate
    #[arg(short, long)]
    text: Option<String>,

    /// JSON file holding an array of journal entries
    #[arg(short, long)]
    file: Option<String>,

    /// Interactive journal mode - read entries from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the extracted topics for every entry
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref path) = args.file {
        run_file(path, &args);
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Build the default engine or die with a configuration error
fn build_engine() -> InsightEngine {
    let annotator = match LexiconAnnotator::new() {
        Ok(annotator) => Arc::new(annotator),
        Err(e) => {
            eprintln!("Annotator configuration error: {}", e);
            std::process::exit(1);
        }
    };
    match InsightEngine::new(Taxonomy::builtin(), EmotionPolarity::default(), annotator) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Engine configuration error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run single entry evaluation
fn run_single(text: &str, args: &Args) {
    let engine = build_engine();
    let classifier = KeywordClassifier::new();

    let emotion = match classifier.classify(text) {
        Ok(emotion) => emotion,
        Err(e) => {
            eprintln!("Classifier error: {}", e);
            std::process::exit(1);
        }
    };
    let topics = match engine.topics_in(text) {
        Ok(topics) => topics,
        Err(e) => {
            eprintln!("Engine error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        #[derive(serde::Serialize)]
        struct SingleOutput<'a> {
            emotion: &'a str,
            topics: &'a [String],
        }
        let out = SingleOutput {
            emotion: emotion.as_str(),
            topics: &topics,
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
    } else {
        print_entry_line(&emotion, &topics, args.no_color);
    }
}

/// Run insights over a JSON entry export
fn run_file(path: &str, args: &Args) {
    let engine = build_engine();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Could not read {}: {}", path, e);
            std::process::exit(1);
        }
    };
    let mut entries: Vec<JournalEntry> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Could not parse {}: {}", path, e);
            std::process::exit(1);
        }
    };
    // The engine expects ascending order; the file may carry any order
    entries.sort_by_key(|entry| entry.timestamp);

    match engine.compute_insight_texts(&entries) {
        Ok(insights) => print_insights(&insights, args),
        Err(e) => {
            eprintln!("Engine error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run interactive journal mode
fn run_interactive(args: &Args) {
    let engine = build_engine();
    let classifier = KeywordClassifier::new();
    let mut entries: Vec<JournalEntry> = Vec::new();

    print_header("Journal Mode", args.no_color);
    println!("Type an entry and press Enter. Prefix with 'emotion:' to override");
    println!("the classifier (e.g. 'joy: coffee with Sarah').");
    println!(
        "Commands: 'insights' ({} entries unlock trends), 'quit'",
        MIN_ENTRIES_FOR_TRENDS
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("[{} entries] > ", entries.len());
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Entries: {}", entries.len());
            break;
        }
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("insights") {
            match engine.compute_insight_texts(&entries) {
                Ok(insights) => print_insights(&insights, args),
                Err(e) => eprintln!("Engine error: {}", e),
            }
            continue;
        }

        // Explicit label prefix beats the classifier
        let (label, text) = parse_emotion_prefix(line);
        let emotion = match label {
            Some(label) => label,
            None => match classifier.classify(text) {
                Ok(emotion) => emotion,
                Err(e) => {
                    eprintln!("Classifier error: {}", e);
                    continue;
                }
            },
        };

        let topics = match engine.topics_in(text) {
            Ok(topics) => topics,
            Err(e) => {
                eprintln!("Engine error: {}", e);
                continue;
            }
        };

        entries.push(JournalEntry::new(text, emotion.clone(), Utc::now()));

        if args.json {
            println!(
                "{}",
                serde_json::to_string(entries.last().unwrap()).unwrap()
            );
        } else if args.verbose {
            print_entry_line(&emotion, &topics, args.no_color);
        } else {
            print_entry_line(&emotion, &[], args.no_color);
        }
    }
}

/// Parse an 'emotion:' prefix from an entry line
fn parse_emotion_prefix(line: &str) -> (Option<EmotionLabel>, &str) {
    if let Some(colon) = line.find(':') {
        let prefix = &line[..colon];
        // A plausible label is one short word
        if !prefix.trim().is_empty()
            && prefix.trim().len() <= 16
            && prefix.trim().chars().all(|c| c.is_alphabetic())
        {
            let text = line[colon + 1..].trim();
            if !text.is_empty() {
                return (Some(EmotionLabel::new(prefix)), text);
            }
        }
    }
    (None, line)
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Tidemark v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Tidemark v{} - {}\x1b[0m", VERSION, mode);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// ANSI color for an emotion by default polarity
fn emotion_color(emotion: &EmotionLabel) -> &'static str {
    let polarity = EmotionPolarity::default();
    if polarity.is_positive(emotion) {
        "\x1b[32m" // Green
    } else if polarity.is_negative(emotion) {
        "\x1b[31m" // Red
    } else {
        "\x1b[90m" // Gray
    }
}

/// Print one classified entry
fn print_entry_line(emotion: &EmotionLabel, topics: &[String], no_color: bool) {
    let color = if no_color { "" } else { emotion_color(emotion) };
    let reset = if no_color { "" } else { "\x1b[0m" };

    if topics.is_empty() {
        println!("{}emotion={}{}", color, emotion, reset);
    } else {
        println!(
            "{}emotion={} | topics: {}{}",
            color,
            emotion,
            topics.join(", "),
            reset
        );
    }
}

/// Print an insight list
fn print_insights(insights: &[String], args: &Args) {
    if args.json {
        println!("{}", serde_json::to_string_pretty(insights).unwrap());
        return;
    }

    if insights.is_empty() {
        println!("No insights yet - keep journaling.");
        return;
    }
    for (i, insight) in insights.iter().enumerate() {
        if args.no_color {
            println!("{}. {}", i + 1, insight);
        } else {
            println!("\x1b[36m{}.\x1b[0m {}", i + 1, insight);
        }
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    print_header("API Server", args.no_color);

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
