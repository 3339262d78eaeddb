use clap::{Parser, Subcommand};
use wecredit_core::config::{DEFAULT_ENDPOINT, ENDPOINT_ENV, TIMEOUT_ENV};
use wecredit_core::{ChatConfig, ChatError};

/// WeCredit Chat Bot terminal client.
#[derive(Parser)]
#[command(name = "wecredit", version, about)]
pub struct Cli {
    /// Chat endpoint the question is posted to.
    #[arg(long, global = true, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds. 0 or unset waits indefinitely.
    #[arg(long, global = true, env = TIMEOUT_ENV)]
    pub timeout_secs: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a single question and print the answer.
    Ask {
        /// Question text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Interactive chat session. Type /quit or send EOF to leave.
    Chat,
    /// Print the version.
    Version,
}

impl Cli {
    /// Resolve the backend config from the parsed flags.
    pub fn chat_config(&self) -> Result<ChatConfig, ChatError> {
        ChatConfig::from_lookup(|key| match key {
            ENDPOINT_ENV => Some(self.endpoint.clone()),
            TIMEOUT_ENV => self.timeout_secs.clone(),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_joins_question_words() {
        let cli = Cli::try_parse_from(["wecredit", "ask", "what", "is", "my", "limit?"]).unwrap();
        match cli.command {
            Commands::Ask { question } => assert_eq!(question.join(" "), "what is my limit?"),
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn endpoint_flag_is_global() {
        let cli = Cli::try_parse_from([
            "wecredit",
            "chat",
            "--endpoint",
            "http://chat.internal:9000/chat",
            "--timeout-secs",
            "30",
        ])
        .unwrap();
        let config = cli.chat_config().unwrap();
        assert_eq!(config.endpoint.as_str(), "http://chat.internal:9000/chat");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_timeout_flag_disables_timeout() {
        let cli = Cli::try_parse_from(["wecredit", "--timeout-secs", "0", "version"]).unwrap();
        assert_eq!(cli.chat_config().unwrap().timeout, None);
    }

    #[test]
    fn bad_timeout_flag_is_a_config_error() {
        let cli = Cli::try_parse_from(["wecredit", "--timeout-secs", "soon", "version"]).unwrap();
        assert!(matches!(cli.chat_config(), Err(ChatError::Config(_))));
    }
}
