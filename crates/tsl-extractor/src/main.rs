//! CA bundle extractor
//!
//! Reads an ETSI Trusted List, either from disk or downloaded from a member
//! state with `@fetch:XX`, and writes the certificates of the services
//! accepted by the filter policy as a PEM bundle.
//!
//! Progress and diagnostics go to stderr so the bundle can be written to
//! stdout.

use clap::Parser;
use tsl_bundle::{export_bundle, ExportReport, FilterPolicy};
use tsl_trust_list::{TrustedList, TrustedListClient, TslSource};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ca-bundle-extractor")]
#[command(version)]
#[command(about = "Export the CA certificates of an ETSI Trusted List as a PEM bundle")]
#[command(long_about = None)]
struct Args {
    /// Trusted List XML file, or @fetch:XX to download a national list
    #[arg(value_name = "tsl-xml-file|@fetch:XX")]
    input: String,

    /// Output PEM file (stdout when omitted)
    #[arg(value_name = "output-certs-file")]
    output: Option<PathBuf>,

    /// JSON filter policy replacing the default qualified eSignature CA rule
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Log discarded and exported services (-vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(report) => {
            eprintln!("[+] {}", report);
            eprintln!();
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<ExportReport, Box<dyn std::error::Error>> {
    let policy = match &args.policy {
        Some(path) => FilterPolicy::from_file(path)?,
        None => FilterPolicy::default(),
    };
    for rule in policy.rules() {
        tracing::debug!("filter rule: {}", rule);
    }

    let list = load_list(&TslSource::parse(&args.input)?)?;
    tracing::debug!(
        providers = list.providers().len(),
        services = list.service_count(),
        "trusted list loaded"
    );

    // The output file is only created once the input has been parsed
    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).map_err(|e| {
            format!("Unable to open output file {}: {}", path.display(), e)
        })?),
        None => Box::new(io::stdout().lock()),
    };
    let mut sink = BufWriter::new(sink);

    Ok(export_bundle(list.services(), &policy, &mut sink)?)
}

fn load_list(source: &TslSource) -> Result<TrustedList, Box<dyn std::error::Error>> {
    match source {
        TslSource::Local(path) => {
            eprintln!("[+] Parsing local XML file: {}", path.display());
            Ok(TrustedList::from_file(path)?)
        }
        TslSource::Remote { country, url } => {
            eprintln!("[+] Downloading remote file from: {}", url);
            let body = download(TrustedListClient::new(url.as_str()))?;
            tracing::debug!(country = %country, bytes = body.len(), "download complete");

            eprintln!("[+] Parsing downloaded data");
            Ok(TrustedList::from_bytes(&body)?)
        }
    }
}

#[tokio::main]
async fn download(client: TrustedListClient) -> tsl_trust_list::Result<Vec<u8>> {
    client.fetch_bytes().await
}
