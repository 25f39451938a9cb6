//! # Editor Host
//!
//! Main entry point: opens one document, then runs a script, a benchmark,
//! or simply reports the text and its misspelling count.

use editor_core::Dictionary;
use editord::{
    load_config, load_word_list, read_text, run_all, EditScript, HostConfig, HostResult,
    HostRuntime,
};
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

/// Command-line options; anything set here overrides the config file
#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    script: Option<PathBuf>,
    bench: Option<usize>,
    verbose: bool,
    snapshot: bool,
    document: PathBuf,
}

impl CliArgs {
    fn apply(&self, config: &mut HostConfig) {
        if let Some(path) = &self.dictionary {
            config.dictionary_path = path.clone();
        }
        if let Some(path) = &self.script {
            config.script_path = Some(path.clone());
        }
        if let Some(iterations) = self.bench {
            config.bench_iterations = iterations;
        }
        config.verbose |= self.verbose;
        config.snapshot |= self.snapshot;
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("editord");

    let cli = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &CliArgs) -> HostResult<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };
    cli.apply(&mut config);

    let document = read_text(&cli.document)?;
    let dictionary: Arc<dyn Dictionary> = Arc::new(load_word_list(&config.dictionary_path)?);

    if config.bench_iterations > 0 {
        for report in run_all(&document, Arc::clone(&dictionary), config.bench_iterations)? {
            println!("{}", report);
        }
    }

    let mut runtime = HostRuntime::new(&config, document, dictionary);

    if let Some(path) = &config.script_path {
        let script = EditScript::from_text(&read_text(path)?)?;
        for report in runtime.run_script(script) {
            println!("{}", report.summary());
        }
    } else if config.bench_iterations == 0 {
        println!("{}", runtime.session().get_text());
        println!("misspellings: {}", runtime.session().misspellings());
    }

    if config.verbose {
        for entry in runtime.log().entries() {
            eprintln!("{}", entry.render_line());
        }
    }

    if config.snapshot {
        println!("{}", serde_json::to_string_pretty(&runtime.session().snapshot())?);
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut document = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                cli.config = Some(PathBuf::from(value(args, &mut i, "--config")?));
            }
            "--dictionary" | "-d" => {
                cli.dictionary = Some(PathBuf::from(value(args, &mut i, "--dictionary")?));
            }
            "--script" | "-s" => {
                cli.script = Some(PathBuf::from(value(args, &mut i, "--script")?));
            }
            "--bench" | "-b" => {
                let raw = value(args, &mut i, "--bench")?;
                cli.bench = Some(
                    raw.parse()
                        .map_err(|_| format!("Invalid bench iterations: {}", raw))?,
                );
            }
            "--verbose" | "-v" => {
                cli.verbose = true;
            }
            "--snapshot" => {
                cli.snapshot = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            path => {
                if document.is_some() {
                    return Err(format!("Unexpected argument: {}", path));
                }
                document = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    cli.document = document.ok_or_else(|| "Missing document file".to_string())?;
    Ok(cli)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS] <DOCUMENT>", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      JSON config file");
    eprintln!("  -d, --dictionary <FILE>  Word list (default: spell.words.txt)");
    eprintln!("  -s, --script <FILE>      Edit script to run against the document");
    eprintln!("  -b, --bench <N>          Run every benchmark case N times");
    eprintln!("  -v, --verbose            Print the session log to stderr");
    eprintln!("      --snapshot           Print the final session snapshot as JSON");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script edits.txt notes.txt", program);
    eprintln!("  {} --bench 1000 demofile.txt", program);
}
