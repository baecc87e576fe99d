//! Newline-delimited JSON-RPC transport
//!
//! One JSON document per line in each direction; responses are flushed
//! immediately so the peer never waits on a buffered frame. The loop is
//! generic over its endpoints so tests can drive it with in-memory
//! buffers.

use crate::errors::Result;
use crate::protocol::jsonrpc::{error_codes, Request, Response};
use crate::server::{router, Server};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serve requests over the process's stdin/stdout until stdin closes
pub async fn serve_stdio(server: &Server) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    serve_connection(server, stdin, stdout).await
}

/// Serve requests over arbitrary endpoints until the reader is exhausted
pub async fn serve_connection<R, W>(server: &Server, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                tracing::debug!(
                    method = %request.method,
                    notification = request.is_notification(),
                    "received request"
                );
                router::handle_request(server, request)
            }
            Err(e) => {
                tracing::debug!(error = %e, "undecodable frame");
                Some(Response::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Failed to decode request: {e}"),
                ))
            }
        };

        if let Some(response) = response {
            let payload = serde_json::to_string(&response)?;
            tracing::debug!(bytes = payload.len(), "sending response");
            writer.write_all(payload.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    tracing::info!("input stream closed, shutting down");
    Ok(())
}
