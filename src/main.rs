use clap::{Arg, ArgAction, Command};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;
use tradutor::{
    DEFAULT_FORWARD_PATH, DEFAULT_REVERSE_PATH, Translation, Translator, TranslatorResult,
    UnitSource, load_dictionary_pair,
};

const EXIT_COMMAND: &str = "exitnow";
const PROMPT: &str = "Enter text to translate: ";

/// How each translation is printed
#[derive(Clone, Copy, Default)]
struct OutputOptions {
    verbose: bool,
    json: bool,
}

fn main() {
    let matches = Command::new("tradutor")
        .version("0.1.0")
        .about("Dictionary-based phrase translator between two languages")
        .arg(
            Arg::new("text")
                .help("Translate this text once and exit instead of starting the prompt")
                .index(1),
        )
        .arg(
            Arg::new("forward")
                .long("forward")
                .short('f')
                .help("Dictionary for the forward direction")
                .default_value(DEFAULT_FORWARD_PATH),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .short('r')
                .help("Dictionary for the reverse direction")
                .default_value(DEFAULT_REVERSE_PATH),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show which dictionary resolved each word")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print each translation as a JSON report")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let forward = matches
        .get_one::<String>("forward")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FORWARD_PATH);
    let reverse = matches
        .get_one::<String>("reverse")
        .map(String::as_str)
        .unwrap_or(DEFAULT_REVERSE_PATH);
    let options = OutputOptions {
        verbose: matches.get_flag("verbose"),
        json: matches.get_flag("json"),
    };

    let translator = match load_translator(Path::new(forward), Path::new(reverse)) {
        Ok(translator) => translator,
        Err(e) => {
            report_error(&mut io::stderr(), &e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let outcome = match matches.get_one::<String>("text") {
        Some(text) => translate_once(&translator, text, options, &mut output),
        None => run_interactive(&translator, options, io::stdin().lock(), &mut output),
    };

    if let Err(e) = outcome {
        report_error(&mut io::stderr(), &e);
        std::process::exit(1);
    }
}

fn load_translator(forward: &Path, reverse: &Path) -> TranslatorResult<Translator> {
    let translator = Translator::new(load_dictionary_pair(forward, reverse)?);
    info!(
        forward = translator.dictionaries().forward.len(),
        reverse = translator.dictionaries().reverse.len(),
        longest_phrase = translator.matcher().max_phrase_words(),
        "dictionaries ready"
    );
    Ok(translator)
}

fn report_error<W: Write>(output: &mut W, error: &dyn Display) {
    // Nothing sensible is left to do if stderr itself fails.
    let _ = writeln!(output, "❌ {}", error);
}

fn translate_once<W: Write>(
    translator: &Translator,
    text: &str,
    options: OutputOptions,
    output: &mut W,
) -> io::Result<()> {
    print_translation(output, &translator.translate_detailed(text.trim()), options)
}

/// Prompt for lines until `exitnow` or end of input
fn run_interactive<R: BufRead, W: Write>(
    translator: &Translator,
    options: OutputOptions,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    print_banner(output)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("end of input");
            writeln!(output)?;
            break;
        }

        let text = line.trim();
        if text.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        print_translation(output, &translator.translate_detailed(text), options)?;
    }

    writeln!(output, "Exiting translator...")?;
    Ok(())
}

fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "========================================")?;
    writeln!(output, "          Tradutor")?;
    writeln!(
        output,
        "Digite em inglês ou em português; a tradução aparecerá na próxima linha."
    )?;
    writeln!(output, "Type '{}' to quit.", EXIT_COMMAND)?;
    writeln!(output, "========================================")
}

fn print_translation<W: Write>(
    output: &mut W,
    translation: &Translation,
    options: OutputOptions,
) -> io::Result<()> {
    if options.json {
        let json = translation.to_json().map_err(io::Error::other)?;
        return writeln!(output, "{}", json);
    }

    writeln!(output, "Translation: {}", translation.result)?;

    if options.verbose {
        for unit in &translation.units {
            let source = match unit.source {
                UnitSource::Dictionary(direction) => format!("{} dictionary", direction),
                UnitSource::PassThrough => "pass-through".to_string(),
            };
            writeln!(
                output,
                "   [{} word{}] {} ({})",
                unit.consumed,
                if unit.consumed == 1 { "" } else { "s" },
                unit.text,
                source
            )?;
        }
    }

    Ok(())
}
