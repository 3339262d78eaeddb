// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use wecredit_core::{ChatConfig, ChatFormController, HttpChatBackend};

mod cli;
mod logging;
mod render;
mod session;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), wecredit_core::version());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ask { ref question } => {
            let controller = controller(args.chat_config()?)?;
            let mut stdout = std::io::stdout();
            session::ask(&controller, question.join(" "), &mut stdout).await
        }
        Commands::Chat => {
            let controller = controller(args.chat_config()?)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::chat(&controller, stdin, &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn controller(config: ChatConfig) -> Result<ChatFormController> {
    log::debug!("chat endpoint: {}", config.endpoint);

    let backend = HttpChatBackend::new(&config)?;
    Ok(ChatFormController::new(Arc::new(backend)))
}
