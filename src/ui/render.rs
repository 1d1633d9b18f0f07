use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::common::TranscriptSnapshot;

pub async fn render_transcript<W>(out: &mut W, snapshot: &TranscriptSnapshot) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut text = String::from("\n--- Chat History ---\n");
    for line in &snapshot.lines {
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("------------------\n\n");

    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

pub async fn prompt<W>(out: &mut W, label: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(label.as_bytes()).await?;
    out.flush().await
}
