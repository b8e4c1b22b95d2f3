use clap::{Parser, Subcommand};
use promptpix::flow::{Status, SubmitOutcome};
use promptpix::ui::{terminal, Screen, LOADING_TEXT};
use promptpix::{Config, GenImgClient, PromptFlow};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "promptctl", about = "CLI for PromptPix image generation", version)]
struct Cli {
    /// Override PROMPTPIX_GENIMG_URL
    #[arg(global = true, long)]
    genimg_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one image from a prompt
    Generate {
        /// Prompt text describing the image
        #[arg(long, value_name = "TEXT")]
        prompt: String,
        /// Output the session state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Read prompts from stdin, one per line, and generate each
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new()?;
    if let Some(url) = cli.genimg_url {
        conf.genimg_url = url;
    }
    let client = GenImgClient::new(conf.genimg_url.clone()).with_timeout(conf.request_timeout);
    let mut flow = PromptFlow::new();

    match cli.command {
        Commands::Generate { prompt, json } => {
            flow.on_text_change(prompt);
            if flow.submit(&client).await == SubmitOutcome::Skipped {
                eprintln!("Prompt must not be empty");
                std::process::exit(2);
            }
            if json {
                let out = json!({
                    "prompt": flow.prompt(),
                    "image": flow.image_reference(),
                    "status": flow.status(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", terminal::render(&Screen::from_flow(&flow)));
            }
            if matches!(flow.status(), Status::Failure(_)) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Interactive => {
            println!("{}", terminal::render(&Screen::from_flow(&flow)));
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                flow.on_text_change(line);
                if flow.can_submit() {
                    println!("{}", LOADING_TEXT);
                }
                match flow.submit(&client).await {
                    SubmitOutcome::Skipped => eprintln!("Enter a prompt to generate an image"),
                    SubmitOutcome::Busy => eprintln!("A request is already running"),
                    SubmitOutcome::Settled => println!("{}", terminal::render(&Screen::from_flow(&flow))),
                }
            }
            Ok(())
        }
    }
}
