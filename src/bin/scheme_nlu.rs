

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use scheme_nlu::query::{plan_aggregate, should_visualize};
use scheme_nlu::{NluConfig, QueryProcessor};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn,scheme_nlu=info"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = NluConfig::from_env();
    let mut queries = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--locations" | "-l" => {
                if i + 1 < args.len() {
                    config.locations_csv = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--table" | "-t" => {
                if i + 1 < args.len() {
                    config.table = args[i + 1].clone();
                    i += 1;
                }
            }
            "--no-recognizer" => config.use_recognizer = false,
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => queries.push(other.to_string()),
        }
        i += 1;
    }

    config.validate()?;
    let processor = QueryProcessor::from_config(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if queries.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                report(&processor, &config, &line, &mut out)?;
            }
        }
    } else {
        for query in &queries {
            report(&processor, &config, query, &mut out)?;
        }
    }

    Ok(())
}

fn report(
    processor: &QueryProcessor,
    config: &NluConfig,
    text: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let parsed = processor.parse_query(text);
    let filter = processor.build_location_filter(&parsed.entities);
    let plan = plan_aggregate(&parsed, &filter, &config.table);

    let line = json!({
        "visualize": should_visualize(&parsed),
        "caption": filter.caption(),
        "parsed": parsed,
        "filter": filter,
        "plan": plan,
    });

    writeln!(out, "{}", serde_json::to_string(&line)?)?;
    Ok(())
}

fn print_help() {
    println!("scheme-nlu - parse scheme data questions into intents and location filters");
    println!();
    println!("USAGE:");
    println!("    scheme-nlu [OPTIONS] [QUERY]...");
    println!();
    println!("Reads one query per line from stdin when no QUERY is given.");
    println!();
    println!("OPTIONS:");
    println!("    -l, --locations <CSV>   Location records (State Name / Division Name columns)");
    println!("    -t, --table <NAME>      Table name used in aggregate plans [default: schemes]");
    println!("        --no-recognizer     Disable the heuristic place recognizer");
    println!("    -h, --help              Print this help");
    println!();
    println!("ENVIRONMENT:");
    println!("    NLU_LOCATIONS_CSV, NLU_STATE_COLUMN, NLU_DIVISION_COLUMN, NLU_TABLE,");
    println!("    NLU_USE_RECOGNIZER, RUST_LOG");
}
