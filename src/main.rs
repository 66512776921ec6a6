use karate_consolidator::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Dispatch the parsed command line
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
