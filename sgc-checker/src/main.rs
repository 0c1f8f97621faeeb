use std::io::{self, BufRead};

use clap::Parser;
use sgc_checker_lib::{Dictionaries, GrammarContext};

#[derive(Parser)]
#[command(name = "sgc-checker", about = "Sinhala sentence grammar corrector")]
struct Cli {
    /// Sinhala sentence to correct. If omitted, reads from stdin.
    input: Option<String>,

    /// Output the full response as JSON.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output (implies --json).
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let ctx = GrammarContext::ready(Dictionaries::embedded());

    match cli.input {
        Some(ref text) => process_line(text, &ctx, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                if !line.trim().is_empty() {
                    process_line(&line, &ctx, &cli);
                }
            }
        }
    }
}

fn process_line(line: &str, ctx: &GrammarContext, cli: &Cli) {
    let response = match ctx.correct(line) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if cli.json || cli.pretty {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&response)
        } else {
            serde_json::to_string(&response)
        };
        println!("{}", json.expect("JSON serialization failed"));
    } else {
        println!("{}", sgc_checker_lib::output::to_display(&response));
    }
}
