//! Stack Advisor CLI
//!
//! Run with no arguments for the interactive questionnaire, or:
//!   stack-advisor recommend app-type=web timeline=fast complexity=simple
//!   echo '[{"questionId":"app-type","value":"api"}]' | stack-advisor recommend --json
//!   stack-advisor --serve --port=3100

use anyhow::{bail, Context, Result};
use stack_advisor::{
    config::AppConfig,
    http::{self, AppState},
    questions::{self, Question},
    service, Answer, DecisionEngine, DecisionResult,
};
use std::io::{self, BufRead, Read, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate()?;
    init_tracing(&config.server.log_level);

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--questions" => {
                println!("{}", serde_json::to_string_pretty(&questions::get_questions())?);
                return Ok(());
            }
            "--tree" => {
                let engine = DecisionEngine::new();
                println!("{}", serde_json::to_string_pretty(engine.root())?);
                return Ok(());
            }
            "recommend" => {
                let json_output = args.iter().any(|a| a == "--json");
                let pairs: Vec<&String> = args[2..].iter().filter(|a| !a.starts_with("--")).collect();
                return run_recommend(&pairs, json_output);
            }
            "--serve" => {
                let mut server = config.server.clone();
                if let Some(port) = args
                    .iter()
                    .find_map(|a| a.strip_prefix("--port="))
                {
                    server.port = port.parse().with_context(|| format!("invalid port: {}", port))?;
                    server.validate()?;
                }
                return http::serve(&server.bind_addr(), AppState::new(DecisionEngine::new())).await;
            }
            "--repl" => {}
            other => {
                eprintln!("Unknown command: {}", other);
                print_usage();
                return Ok(());
            }
        }
    }

    run_questionnaire()
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  stack-advisor                     interactive questionnaire");
    eprintln!("  stack-advisor recommend [id=value ...] [--json]");
    eprintln!("                                    (reads a JSON answer list from stdin when no pairs are given)");
    eprintln!("  stack-advisor --questions         print the question catalog");
    eprintln!("  stack-advisor --tree              print the decision tree");
    eprintln!("  stack-advisor --serve [--port=N]  run the HTTP API");
}

/// One-shot recommendation from `id=value` pairs or a JSON list on stdin
fn run_recommend(pairs: &[&String], json_output: bool) -> Result<()> {
    let engine = DecisionEngine::new();

    let outcome = if pairs.is_empty() {
        let mut body = Vec::new();
        io::stdin().read_to_end(&mut body)?;
        service::recommend_json(&engine, &body)
    } else {
        let answers = parse_pairs(pairs)?;
        service::recommend(&engine, &answers)
    };

    match outcome {
        Ok(result) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_report(&result);
            }
        }
        Err(e) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&e.into_degraded())?);
            } else {
                eprintln!("Error: {}", e);
            }
        }
    }

    Ok(())
}

fn parse_pairs(pairs: &[&String]) -> Result<Vec<Answer>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((id, value)) if !id.is_empty() => Ok(Answer::new(id, value)),
            _ => bail!("expected question-id=value, got '{}'", pair),
        })
        .collect()
}

/// Ask every question in catalog order, then print the recommendation
fn run_questionnaire() -> Result<()> {
    let catalog = questions::get_questions();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = Vec::new();

    println!("\nStack Advisor - answer each question (blank line to skip)\n");

    'questions: for (index, question) in catalog.iter().enumerate() {
        print_question(index + 1, catalog.len(), question);

        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break 'questions;
            };
            let line = line?;
            let choice = line.trim();

            if choice.is_empty() {
                break;
            }

            match pick_option(question, choice) {
                Some(value) => {
                    answers.push(Answer::new(&question.id, value));
                    break;
                }
                None => println!("  Pick a number between 1 and {}", question.options.len()),
            }
        }
        println!();
    }

    let engine = DecisionEngine::new();
    match service::recommend(&engine, &answers) {
        Ok(result) => print_report(&result),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}

fn print_question(number: usize, total: usize, question: &Question) {
    println!("[{}/{}] {} - {}", number, total, question.category, question.text);
    if let Some(description) = &question.description {
        println!("      {}", description);
    }
    for (i, option) in question.options.iter().enumerate() {
        match &option.description {
            Some(d) => println!("  {}. {} ({})", i + 1, option.label, d),
            None => println!("  {}. {}", i + 1, option.label),
        }
    }
}

/// Accepts a 1-based option number or the option's value
fn pick_option<'a>(question: &'a Question, choice: &str) -> Option<&'a str> {
    if let Ok(n) = choice.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| question.options.get(i))
            .map(|o| o.value.as_str());
    }
    question.option(choice).map(|o| o.value.as_str())
}

fn print_report(result: &DecisionResult) {
    println!("\n{}\n", result.summary);
    println!("Decision path: {}\n", result.decision_path);

    for (category, rec) in result.technologies.populated() {
        println!("{}", category.as_str().to_uppercase());
        println!("  Primary:      {}", rec.primary.join(", "));
        if !rec.alternatives.is_empty() {
            println!("  Alternatives: {}", rec.alternatives.join(", "));
        }
        println!("  Why:          {}\n", rec.reasoning);
    }

    if !result.considerations.is_empty() {
        println!("Considerations:");
        for note in &result.considerations {
            println!("  - {}", note);
        }
    }
}
