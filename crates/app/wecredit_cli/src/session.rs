//! `ask` and `chat` sessions on top of the form controller.

use std::io::Write;
use std::process::ExitCode;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use wecredit_core::{ChatFormController, FormView, SubmitOutcome};

use crate::Result;
use crate::render;

const QUIT: &str = "/quit";

/// Submit one question and print the settled form.
pub async fn ask(
    controller: &ChatFormController,
    question: String,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let outcome = controller.submit_query(question).await;
    render::settled(out, &FormView::from(&controller.snapshot()))?;

    Ok(match outcome {
        SubmitOutcome::Answered => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

/// Read questions line by line until EOF or `/quit`.
pub async fn chat<R>(controller: &ChatFormController, input: R, out: &mut impl Write) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    render::banner(out, &FormView::from(&controller.snapshot()))?;

    let mut lines = input.lines();
    loop {
        render::prompt(out, &FormView::from(&controller.snapshot()))?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if line.trim() == QUIT {
            break;
        }

        submit_with_progress(controller, line, out).await?;
        render::settled(out, &FormView::from(&controller.snapshot()))?;
    }

    Ok(())
}

/// Submit `line`, printing the busy label once the form goes into loading.
async fn submit_with_progress(
    controller: &ChatFormController,
    line: String,
    out: &mut impl Write,
) -> Result<()> {
    let mut rx = controller.subscribe();
    let submit = controller.submit_query(line);
    tokio::pin!(submit);

    let mut announced = false;
    loop {
        tokio::select! {
            biased;

            Ok(()) = rx.changed(), if !announced => {
                let view = FormView::from(&*rx.borrow_and_update());
                if !view.button_enabled {
                    writeln!(out, "{}", view.button_label)?;
                    out.flush()?;
                    announced = true;
                }
            }
            outcome = &mut submit => {
                log::debug!("submit finished: {outcome:?}");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use wecredit_core::{ChatBackend, ChatError, ChatReply};

    use super::*;

    /// Echoes the question back, or fails when asked to.
    struct EchoBackend;

    #[async_trait]
    impl ChatBackend for EchoBackend {
        async fn send(&self, user_message: &str) -> core::result::Result<ChatReply, ChatError> {
            // Stay pending once, like a real request.
            tokio::task::yield_now().await;
            if user_message == "fail" {
                return Err(ChatError::Config("forced failure".into()));
            }
            Ok(ChatReply {
                response: Some(format!("echo: {user_message}")),
            })
        }
    }

    fn controller() -> ChatFormController {
        ChatFormController::new(Arc::new(EchoBackend))
    }

    #[tokio::test]
    async fn ask_prints_response_and_succeeds() {
        let mut out = Vec::new();
        let code = ask(&controller(), "hello".into(), &mut out).await.unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), "echo: hello\n");
    }

    #[tokio::test]
    async fn ask_with_blank_question_fails_validation() {
        let mut out = Vec::new();
        let code = ask(&controller(), "  ".into(), &mut out).await.unwrap();

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Please enter a question.\n"
        );
    }

    #[tokio::test]
    async fn chat_answers_each_line_until_quit() {
        let input: &[u8] = b"first\n\nfail\n/quit\nnever sent\n";
        let mut out = Vec::new();

        chat(&controller(), input, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("WeCredit Chat Bot\n"));
        assert!(out.contains("Searching...\n"));
        assert!(out.contains("echo: first\n"));
        assert!(out.contains("error: Please enter a question.\n"));
        assert!(out.contains("error: Failed to fetch response.\n"));
        assert!(!out.contains("never sent"));
    }

    #[tokio::test]
    async fn chat_stops_at_eof() {
        let input: &[u8] = b"only\n";
        let mut out = Vec::new();

        chat(&controller(), input, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("echo: only\n"));
        assert!(out.ends_with("[Search] > \n"));
    }
}
