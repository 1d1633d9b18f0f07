use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::network::CallClient;

use super::render::{prompt, render_transcript};

/// Dòng nhập dành riêng để thoát; so khớp chính xác, phân biệt hoa thường.
pub const EXIT_COMMAND: &str = "exit";

/// Terminal front-end: asks for a name once, then submits each entered line
/// and prints the transcript that comes back.
pub struct ChatApp<R, W> {
    client: CallClient,
    input: R,
    output: W,
}

impl<R, W> ChatApp<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: CallClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    /// Runs until `exit` or end of input. Any transport error ends the loop
    /// and is returned to the caller.
    pub async fn run(mut self) -> Result<()> {
        prompt(&mut self.output, "Enter your name: ").await?;
        let Some(name) = self.read_input().await? else {
            return self.finish().await;
        };
        self.output
            .write_all(format!("Welcome, {name}! You can start chatting.\n").as_bytes())
            .await?;

        let history = self.client.fetch().await?;
        if !history.is_empty() {
            render_transcript(&mut self.output, &history).await?;
        }

        loop {
            prompt(&mut self.output, "Enter message (or 'exit' to quit): ").await?;
            let message = match self.read_input().await? {
                Some(message) if message != EXIT_COMMAND => message,
                _ => break,
            };

            let snapshot = self.client.submit(name.as_str(), message).await?;
            render_transcript(&mut self.output, &snapshot).await?;
        }

        self.finish().await
    }

    /// Next input line with surrounding whitespace trimmed, `None` at end of
    /// input. A final line without its newline counts as end of input and is
    /// never submitted.
    async fn read_input(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        self.input.read_line(&mut line).await?;
        if !line.ends_with('\n') {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn finish(mut self) -> Result<()> {
        self.output.write_all(b"Goodbye!\n").await?;
        self.output.flush().await?;
        self.client.close().await
    }
}
