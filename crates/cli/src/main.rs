use std::{fs, process};

use clap::Parser;
use hubreach_cli::fmt::FmtOutcome;
use hubreach_cli::report::{analyze, Report};
use hubreach_cli::{App, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Generate(args) => generate(args),
        Command::Analyze(args) => analyze_file(args),
        Command::Sample(args) => sample(args),
        Command::Fmt(args) => fmt_files(args),
    }
}

fn generate(args: &hubreach_cli::GenerateArgs) {
    fs::create_dir_all(&args.output_dir).unwrap_or_else(|e| {
        eprintln!("Failed to create output directory: {e}");
        process::exit(1);
    });

    let networks =
        hubreach_testgen::generator::generate_mult_networks(args.n_net, args.n_airport, args.n_route);

    for network in &networks {
        let path = args.output_dir.join(format!("{}.json", network.get_id()));
        let file = fs::File::create(&path).unwrap_or_else(|e| {
            eprintln!("Failed to create {}: {e}", path.display());
            process::exit(1);
        });
        serde_json::to_writer_pretty(file, network).unwrap_or_else(|e| {
            eprintln!("Failed to write {}: {e}", path.display());
            process::exit(1);
        });
    }

    println!(
        "Generated {} networks to {}",
        networks.len(),
        args.output_dir.display()
    );
}

fn analyze_file(args: &hubreach_cli::AnalyzeArgs) {
    let filename = args.file.display();
    let graph = hubreach_cli::input::load_graph(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load {filename}: {e}");
        process::exit(1);
    });
    let report = analyze(&graph, &args.starts).unwrap_or_else(|e| {
        eprintln!("{filename}: {e}");
        process::exit(1);
    });
    print_report(&report, args.json, args.verbose);
}

fn sample(args: &hubreach_cli::SampleArgs) {
    let graph = hubreach_testgen::sample::airline_network_owned();
    let starts: Vec<String> = hubreach_testgen::sample::AIRLINE_STARTS
        .iter()
        .map(ToString::to_string)
        .collect();
    let report = analyze(&graph, &starts).unwrap_or_else(|e| {
        eprintln!("sample: {e}");
        process::exit(1);
    });
    print_report(&report, args.json, args.verbose);
}

fn print_report(report: &Report, json: bool, verbose: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        print!("{}", report.render(verbose));
    }
}

fn fmt_files(args: &hubreach_cli::FmtArgs) {
    let files = hubreach_cli::fmt::collect_route_files(&args.paths).unwrap_or_else(|e| {
        eprintln!("Failed to read directory: {e}");
        process::exit(1);
    });
    if files.is_empty() {
        eprintln!("No .routes files found");
        process::exit(1);
    }

    let mut any_failed = false;
    for path in &files {
        match hubreach_cli::fmt::fmt_file(path, args.check) {
            Ok(FmtOutcome::Unchanged) => {}
            Ok(FmtOutcome::Rewritten) => println!("formatted {}", path.display()),
            Ok(FmtOutcome::NeedsFormatting) => {
                any_failed = true;
                println!("{}: not formatted", path.display());
            }
            Err(e) => {
                any_failed = true;
                eprintln!("{}: {e}", path.display());
            }
        }
    }

    if any_failed {
        process::exit(1);
    }
}
