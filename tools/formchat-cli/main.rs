use clap::Parser;
use formchat::prelude::*;
use itertools::Itertools;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Extract a question schema from a saved Google Forms page and walk through it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the saved form page (HTML)
    page_path: String,

    /// Title to use when the form data carries none
    #[arg(short, long)]
    title: Option<String>,

    /// Write the extracted schema to this path as a binary artifact
    #[arg(short, long)]
    save: Option<String>,

    /// Print the schema as JSON instead of a readable listing
    #[arg(long)]
    json: bool,

    /// Answer the form's questions one by one on stdin
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // --- 1. Extraction ---
    let extract_start = Instant::now();
    let html = fs::read_to_string(&cli.page_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read form page '{}': {}",
            &cli.page_path, e
        ))
    });
    let schema = import_html(&html, cli.title.as_deref())
        .unwrap_or_else(|e| exit_with_error(&format!("Extraction failed: {}", e)));
    let extract_duration = extract_start.elapsed();

    // --- 2. Output ---
    if cli.json {
        let json = schema
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Could not render schema: {}", e)));
        println!("{}", json);
    } else {
        println!(
            "Extracted {} question(s) in {:?}\n",
            schema.len(),
            extract_duration
        );
        print!("{}", schema);
    }

    if let Some(path) = &cli.save {
        schema
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Could not save schema: {}", e)));
        println!("  -> Wrote schema artifact to '{}'", path);
    }

    // --- 3. Conversation ---
    if cli.human {
        run_interactive(&schema);
    }
}

/// Asks every question in order and prints the collected answers.
fn run_interactive(schema: &FormSchema) {
    println!("\n--- {} ---", schema.title);
    let mut history: Vec<AnsweredTurn> = Vec::new();

    while let Some(question) = next_question(schema, &history) {
        let prompt = QuestionPrompt::from(question);
        println!("\n[{}] {}", progress(schema, &history), prompt.text);
        if !prompt.options.is_empty() {
            println!("  options: {}", prompt.options.iter().join(" | "));
        }

        let answer = loop {
            let answer = prompt_for_input(&prompt.placeholder, prompt.required);
            if validate_answer(question, Some(answer.as_str())) {
                break answer;
            }
            if question.kind.requires_option_match() && !answer.is_empty() {
                println!("Please pick one of the listed options.");
            } else {
                println!("This question requires an answer.");
            }
        };
        history.push(AnsweredTurn::for_question(question, answer));
    }

    println!("\nAll done! Your answers:");
    for turn in &history {
        println!("  -> {}: {}", turn.question_text, turn.answer);
    }
    println!();
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, required: bool) -> String {
    let mut line = String::new();
    let marker = if required { " *" } else { "" };

    print!("> {}{}: ", prompt_text, marker);
    io::stdout()
        .flush()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to flush stdout: {}", e)));

    let read = io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)));
    if read == 0 {
        exit_with_error("Input closed before the form was completed");
    }
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
