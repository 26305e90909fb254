use std::path::PathBuf;
use std::process;

use clap::Parser;
use quizgen::{save_questions_to_json, Quiz, QuizError};

/// Generate a fill-in-the-blank quiz from a document and take it in the
/// terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Document to generate questions from (.pdf, .txt, .md)
    #[arg(required_unless_present = "saved")]
    input: Option<PathBuf>,

    /// Maximum number of questions to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    num_questions: usize,

    /// Write the generated quiz to a JSON file instead of taking it
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Take a previously exported quiz instead of generating one
    #[arg(long, value_name = "FILE", conflicts_with = "input")]
    saved: Option<PathBuf>,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    if let Err(message) = run(args) {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    let quiz = load_quiz(&args).map_err(|e| e.to_string())?;

    if quiz.is_empty() {
        // Not a fault: the document just did not yield usable material.
        return Err(
            "Could not generate any questions. The document may not contain enough nouns."
                .to_string(),
        );
    }

    if let Some(path) = &args.export {
        save_questions_to_json(path, quiz.mcqs()).map_err(|e| e.to_string())?;
        println!("Wrote {} questions to {}", quiz.mcqs().len(), path.display());
        return Ok(());
    }

    quiz.run().map_err(|e| e.to_string())
}

fn load_quiz(args: &Args) -> Result<Quiz, QuizError> {
    match (&args.saved, &args.input) {
        (Some(saved), _) => Quiz::from_json(saved),
        (None, Some(input)) => Quiz::from_document(input, args.num_questions),
        // clap guarantees one of the two is present.
        (None, None) => unreachable!("clap enforces input or --saved"),
    }
}
