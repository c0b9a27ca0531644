use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use reqline::config::ClientConfig;
use reqline::http::ReqwestClient;
use reqline::reqline::service::resolve;
use reqline::ReqlineService;

#[derive(Parser)]
#[command(name = "reqline-cli")]
#[command(about = "Check, run or send reqline HTTP descriptions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a reqline and print the resolved request (no network)
    Check { reqline: String },
    /// Validate and execute a reqline locally
    Run { reqline: String },
    /// Send a reqline to a running service
    Send {
        reqline: String,
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { reqline } => match resolve(&reqline) {
            Ok(resolved) => print_json(&serde_json::to_value(resolved)?)?,
            Err(e) => fail(&e.to_string()),
        },
        Commands::Run { reqline } => {
            let client = ReqwestClient::new(&ClientConfig::default())?;
            let service = ReqlineService::new(Arc::new(client));
            match service.run(&reqline).await {
                Ok(report) => print_json(&serde_json::to_value(report)?)?,
                Err(e) => fail(&e.to_string()),
            }
        }
        Commands::Send { reqline, url } => {
            let res = reqwest::Client::new()
                .post(&url)
                .json(&json!({ "reqline": reqline }))
                .send()
                .await?;
            let status = res.status();
            let body: Value = res.json().await?;
            print_json(&body)?;
            if !status.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
