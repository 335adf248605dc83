//! acvp-kda CLI — answer KDA HKDF vector sets with the in-process backend
//!
//! Usage:
//!   acvp-kda process [--input <file>] [--output <file>]
//!   acvp-kda inspect <file>

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use acvp_kda::kdf::SUPPORTED_HASHES;
use acvp_kda::wire::parse_vector_set;
use acvp_kda::{process_json, HkdfBackend, TestKind};

enum Command<'a> {
    Process(&'a [String]),
    Inspect(&'a [String]),
    Help,
    Version,
}

impl<'a> Command<'a> {
    fn parse(args: &'a [String]) -> Result<Self, String> {
        let (name, rest) = args.split_first().ok_or("no command given")?;
        match name.as_str() {
            "process" => Ok(Self::Process(rest)),
            "inspect" => Ok(Self::Inspect(rest)),
            "--help" | "-h" | "help" => Ok(Self::Help),
            "--version" | "-V" => Ok(Self::Version),
            other => Err(format!("unknown command '{}'", other)),
        }
    }

    fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Self::Process(rest) => cmd_process(rest),
            Self::Inspect(rest) => cmd_inspect(rest),
            Self::Help => {
                print_usage();
                Ok(())
            }
            Self::Version => {
                println!("acvp-kda {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n", e);
            print_usage();
            return ExitCode::from(2);
        }
    };

    if let Err(e) = command.run() {
        tracing::error!(error = %e, "run failed");
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// `RUST_LOG` picks the filter, `KDA_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let log_format = std::env::var("KDA_LOG_FORMAT").unwrap_or_else(|_| "pretty".into());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "acvp_kda=info".into());
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"acvp-kda — ACVP KDA HKDF vector-set processor

USAGE:
    acvp-kda <COMMAND> [OPTIONS]

COMMANDS:
    process     Answer a vector set (JSON in, JSON out)
    inspect     Show groups and whether each is supported (no HKDF calls)

EXAMPLES:
    # Answer a vector set
    acvp-kda process --input kda-hkdf.json --output kda-hkdf.resp.json

    # Read stdin, write stdout
    acvp-kda process < kda-hkdf.json

    # Inspect
    acvp-kda inspect kda-hkdf.json

ENVIRONMENT:
    RUST_LOG          Log filter (default: acvp_kda=info)
    KDA_LOG_FORMAT    "pretty" (default) or "json"

OPTIONS:
    -h, --help       Print help
    -V, --version    Print version
"#
    );
}

fn cmd_process(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                i += 1;
                input_path = Some(PathBuf::from(args.get(i).ok_or("missing input path")?));
            }
            "--output" | "-o" => {
                i += 1;
                output_path = Some(PathBuf::from(args.get(i).ok_or("missing output path")?));
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let vectors = if let Some(ref path) = input_path {
        fs::read(path)?
    } else {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    };

    let response = process_json(&vectors, &HkdfBackend::new())?;

    if let Some(ref path) = output_path {
        fs::write(path, &response)?;
        tracing::info!(output = %path.display(), bytes = response.len(), "wrote response");
    } else {
        io::stdout().write_all(&response)?;
        io::stdout().write_all(b"\n")?;
    }

    Ok(())
}

fn cmd_inspect(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let input_path = args.first().ok_or("missing file path")?;

    let vectors = fs::read(input_path)?;
    let set = parse_vector_set(&vectors)?;

    println!("KDA Vector Set");
    println!("==============");
    println!("Mode:            {}", set.mode);
    println!("Groups:          {}", set.groups.len());
    println!(
        "Cases:           {}",
        set.groups.iter().map(|g| g.tests.len()).sum::<usize>()
    );

    for group in &set.groups {
        let cfg = &group.config;
        let kind = match TestKind::parse(&group.test_type) {
            Ok(_) => group.test_type.as_str(),
            Err(_) => "unknown",
        };
        let status = match cfg.extract() {
            Ok(params) if SUPPORTED_HASHES.contains(&params.hash_name.as_str()) => "supported",
            Ok(_) => "supported (external backend needed for hash)",
            Err(_) => "unsupported",
        };

        println!();
        println!("Group {}", group.id);
        println!("  Test Type:     {}", kind);
        println!("  KDF:           {} (salt {})", cfg.kdf_type, cfg.salt_method);
        println!("  Pattern:       {}", cfg.fixed_info_pattern);
        println!("  Encoding:      {}", cfg.fixed_info_encoding);
        println!("  HMAC:          {}", cfg.hmac_alg);
        println!("  Output:        {} bits", cfg.output_bits);
        println!("  Cases:         {}", group.tests.len());
        println!("  Status:        {}", status);
    }

    Ok(())
}
