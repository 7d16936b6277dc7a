use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use greet_core::persistence::save_snapshot;
use greet_core::{
    DictionaryLoader, GreetingIndex, GreetingMatch, LoaderConfig, MatcherConfig, WordChars,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "greet_engine",
    version,
    about = "Find greeting phrases in text, across languages"
)]
struct Cli {
    /// Directory of `*.json` language files (embedded dictionary if omitted)
    #[arg(long, env = "GREETINGS_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Binary snapshot to load from, or to write after loading the JSON files
    #[arg(long, env = "GREETINGS_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Words shorter than this never trigger a candidate search
    #[arg(long, env = "GREETINGS_MIN_TOKEN_CHARS")]
    min_token_chars: Option<usize>,

    /// Treat any alphanumeric character as a word character at phrase boundaries
    #[arg(long)]
    unicode_words: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Does the text contain a greeting?
    Has { text: String },
    /// Is the text exactly a greeting?
    Is { text: String },
    /// Greetings exactly equal to the text
    Find { text: String },
    /// Greetings starting with the prefix
    Match { prefix: String },
    /// Every greeting contained in the text
    Scan { text: String },
    /// Show a language and its greetings
    Lang { name: String },
    /// Dictionary statistics
    Stats,
    /// Write the loaded dictionary to a binary snapshot
    Snapshot { path: PathBuf },
    /// Interactive prompt (default)
    Repl,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let loader_config = LoaderConfig {
        data_dir: cli.data_dir,
        snapshot: cli.snapshot,
    };
    let mut matcher_config = MatcherConfig::from_env();
    if let Some(n) = cli.min_token_chars {
        matcher_config.min_token_chars = n;
    }
    if cli.unicode_words {
        matcher_config.word_chars = WordChars::Unicode;
    }

    let languages = DictionaryLoader::load(&loader_config)?;
    let index = GreetingIndex::with_config(languages, matcher_config);
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(Command::Repl) {
        Command::Has { text } => return Ok(print_bool(&mut stdout, index.has_greeting(&text))?),
        Command::Is { text } => return Ok(print_bool(&mut stdout, index.is_greeting(&text))?),
        Command::Find { text } => print_matches(&mut stdout, &index.find_greetings(&text))?,
        Command::Match { prefix } => print_matches(&mut stdout, &index.match_greetings(&prefix))?,
        Command::Scan { text } => print_matches(&mut stdout, &index.find_in_text(&text))?,
        Command::Lang { name } => {
            if !print_language(&mut stdout, &index, &name)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Stats => print_stats(&mut stdout, &index)?,
        Command::Snapshot { path } => {
            save_snapshot(index.languages(), &path)?;
            writeln!(stdout, "Snapshot written to '{}'", path.display())?;
        }
        Command::Repl => repl(&index)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn print_bool(stdout: &mut impl Write, value: bool) -> io::Result<ExitCode> {
    writeln!(stdout, "{value}")?;
    Ok(if value { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_matches(stdout: &mut impl Write, matches: &[GreetingMatch<'_>]) -> io::Result<()> {
    for m in matches {
        writeln!(stdout, "{}\t{}", m.phrase(), m.language_name())?;
    }
    Ok(())
}

fn print_language(stdout: &mut impl Write, index: &GreetingIndex, name: &str) -> io::Result<bool> {
    let Some(language) = index.get_language(name) else {
        writeln!(stdout, "No language named '{name}'")?;
        return Ok(false);
    };
    writeln!(stdout, "{} ({} greetings)", language.name, language.greetings.len())?;
    for greeting in &language.greetings {
        if greeting.extra.is_empty() {
            writeln!(stdout, "  {}", greeting.phrase)?;
        } else {
            let extra = serde_json::Value::Object(greeting.extra.clone());
            writeln!(stdout, "  {}  {}", greeting.phrase, extra)?;
        }
    }
    Ok(true)
}

fn print_stats(stdout: &mut impl Write, index: &GreetingIndex) -> io::Result<()> {
    writeln!(stdout, "languages: {}", index.languages().len())?;
    writeln!(stdout, "greetings: {}", index.len())?;
    writeln!(stdout, "trie nodes: {}", index.node_count())?;
    Ok(())
}

fn repl(index: &GreetingIndex) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Greeting detector. Type 'help' for commands, 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");
    print_stats(&mut stdout, index)?;

    let stdin = io::stdin();
    print!("\n> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let input = line?;
        let (cmd, rest) = match input.trim_start().split_once(' ') {
            Some((cmd, rest)) => (cmd, rest),
            None => (input.trim(), ""),
        };

        match cmd {
            "exit" | "quit" => break,
            "" => {}
            "has" => print_verdict(index.has_greeting(rest)),
            "is" => print_verdict(index.is_greeting(rest)),
            "find" => print_styled_matches(&index.find_greetings(rest)),
            "match" => print_styled_matches(&index.match_greetings(rest)),
            "scan" => print_styled_matches(&index.find_in_text(rest)),
            "lang" => {
                print_language(&mut stdout, index, rest.trim())?;
            }
            "stats" => print_stats(&mut stdout, index)?,
            "help" => {
                println!("  has <text>     does the text contain a greeting?");
                println!("  is <text>      is the text exactly a greeting?");
                println!("  find <text>    greetings equal to the text");
                println!("  match <prefix> greetings starting with the prefix");
                println!("  scan <text>    every greeting inside the text");
                println!("  lang <name>    show a language");
                println!("  stats          dictionary statistics");
            }
            other => println!("{} '{}'", "Unknown command".yellow(), other),
        }
        print!("\n> ");
        stdout.flush()?;
    }
    Ok(())
}

fn print_verdict(value: bool) {
    if value {
        println!("{}", "yes".green());
    } else {
        println!("{}", "no".red());
    }
}

fn print_styled_matches(matches: &[GreetingMatch<'_>]) {
    if matches.is_empty() {
        println!("{}", "No greetings found.".dark_grey());
        return;
    }
    for (i, m) in matches.iter().enumerate() {
        println!("  {}: {} ({})", i + 1, m.phrase().bold(), m.language_name());
    }
}
