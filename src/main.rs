// Main CLI entry point for BoundaryGuard
// Uses clap for argument parsing

use clap::{Arg, ArgMatches, Command};
use boundaryguard::bridge::specs_for_boundaries;
use boundaryguard::config::{load_specs, OutputFormat, ScanConfig};
use boundaryguard::discovery::scan_directory;
use boundaryguard::error::{Error, Result};
use boundaryguard::generators::{generate_rules, write_harness};
use boundaryguard::reporting::{export_report, render, Report};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Scan flags shared by the root command and the `scan` subcommand
fn scan_args() -> Vec<Arg> {
    vec![
        Arg::new("dir")
            .short('d')
            .long("dir")
            .num_args(1)
            .default_value(".")
            .help("Directory to scan"),
        Arg::new("format")
            .short('f')
            .long("format")
            .num_args(1)
            .default_value("text")
            .help("Output: text, json, markdown or csv"),
        Arg::new("max_files")
            .long("max-files")
            .num_args(1)
            .default_value("0")
            .value_parser(clap::value_parser!(usize))
            .help("File limit (0 = unlimited)"),
        Arg::new("fail")
            .long("fail")
            .action(clap::ArgAction::SetTrue)
            .help("Exit 1 if boundaries are found"),
        Arg::new("export")
            .long("export")
            .num_args(1)
            .help("Also write a timestamped report file into this directory"),
    ]
}

fn cli() -> Command {
    Command::new("boundaryguard")
        .version(clap::crate_version!())
        .about("Finds unvalidated input boundaries and generates validation rules and fuzz harnesses")
        .after_help("EXAMPLES:\n  boundaryguard --dir ./service --format json --fail\n  boundaryguard rules --spec params.json\n  boundaryguard fuzz --from-scan ./service --output boundary_fuzz_test.go")
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .global(true)
            .action(clap::ArgAction::SetTrue)
            .help("Enable debug logging (BOUNDARYGUARD_LOG overrides)"))
        .args(scan_args())
        .subcommand(Command::new("scan")
            .about("Scan a directory for unguarded input boundaries (default)")
            .args(scan_args()))
        .subcommand(Command::new("rules")
            .about("Generate Go validation rules from a JSON parameter spec file")
            .arg(Arg::new("spec")
                .short('s')
                .long("spec")
                .required(true)
                .num_args(1)
                .help("JSON array of parameter specs")))
        .subcommand(Command::new("fuzz")
            .about("Generate a Go fuzz harness")
            .arg(Arg::new("spec")
                .short('s')
                .long("spec")
                .num_args(1)
                .conflicts_with("from_scan")
                .help("JSON array of parameter specs"))
            .arg(Arg::new("from_scan")
                .long("from-scan")
                .num_args(1)
                .help("Scan this directory and fuzz every discovered boundary"))
            .arg(Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .help("Write the harness here instead of stdout")))
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("BOUNDARYGUARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn scan_config(matches: &ArgMatches) -> Result<ScanConfig> {
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    let defaults = ScanConfig::default();
    Ok(ScanConfig {
        root: matches.get_one::<String>("dir").map(PathBuf::from).unwrap_or(defaults.root),
        format,
        max_files: matches.get_one::<usize>("max_files").copied().unwrap_or(defaults.max_files),
        fail_on_findings: matches.get_flag("fail"),
        export_dir: matches.get_one::<String>("export").map(PathBuf::from).or(defaults.export_dir),
    })
}

/// Returns the process exit code
fn run_scan(config: &ScanConfig) -> Result<i32> {
    let (total_files, boundaries) = scan_directory(&config.root, config.max_files);
    let report = Report::new(total_files, boundaries);

    print!("{}", render(&report, config.format)?);

    if let Some(dir) = &config.export_dir {
        let path = export_report(&report, config.format, dir)?;
        eprintln!("Report written to {}", path.display());
    }

    if config.fail_on_findings && !report.is_clean() {
        return Ok(1);
    }
    Ok(0)
}

fn run_rules(spec_path: &Path) -> Result<i32> {
    let specs = load_specs(spec_path)?;
    let rules = generate_rules(&specs);
    for rule in &rules {
        println!("// {} [{}]", rule.param_name, rule.kind);
        println!("{}\n", rule.code);
    }
    tracing::info!(specs = specs.len(), rules = rules.len(), "rules generated");
    Ok(0)
}

fn run_fuzz(matches: &ArgMatches) -> Result<i32> {
    let specs = if let Some(spec) = matches.get_one::<String>("spec") {
        load_specs(Path::new(spec))?
    } else if let Some(dir) = matches.get_one::<String>("from_scan") {
        let (_, boundaries) = scan_directory(Path::new(dir), 0);
        specs_for_boundaries(&boundaries)
    } else {
        return Err(Error::MissingInput("fuzz needs --spec or --from-scan"));
    };

    match matches.get_one::<String>("output") {
        Some(out) => {
            let path = Path::new(out);
            let file = File::create(path).map_err(|e| Error::io(path, e))?;
            let mut writer = BufWriter::new(file);
            write_harness(&mut writer, &specs)
                .and_then(|_| writer.flush())
                .map_err(|e| Error::io(path, e))?;
            eprintln!("Wrote {} fuzz target(s) to {}", specs.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_harness(&mut lock, &specs).map_err(|e| Error::io("<stdout>", e))?;
        }
    }
    Ok(0)
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("rules", sub)) => {
            let spec = sub.get_one::<String>("spec").map(PathBuf::from).unwrap_or_default();
            run_rules(&spec)
        }
        Some(("fuzz", sub)) => run_fuzz(sub),
        Some(("scan", sub)) => scan_config(sub).and_then(|c| run_scan(&c)),
        _ => scan_config(&matches).and_then(|c| run_scan(&c)),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
