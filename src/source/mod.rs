// SPDX-License-Identifier: MPL-2.0
//! Where chunk lists come from: a JSON file on disk or the summarization
//! backend.
//!
//! Both sources produce a [`ResponseData`] and leave validation (empty chunk
//! lists) to the results display.

use crate::domain::ResponseData;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    content: &'a str,
}

/// Decodes a response document.
///
/// A JSON `null` document is treated as an empty response. Anything that is
/// not valid JSON, or not shaped like a response, is an [`Error::Response`].
pub fn parse_response(json: &str) -> Result<ResponseData> {
    let parsed: Option<ResponseData> = serde_json::from_str(json)?;
    Ok(parsed.unwrap_or_default())
}

/// Reads a saved response from disk.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<ResponseData> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let response = parse_response(&contents)?;
    tracing::info!(
        path = %path.display(),
        chunks = response.chunks.len(),
        "loaded results file"
    );
    Ok(response)
}

/// Sends `content` to the summarization endpoint and decodes the answer.
///
/// A non-success status is reported as [`Error::Network`].
pub async fn summarize(endpoint: String, content: String, timeout: Duration) -> Result<ResponseData> {
    let client = Client::builder().timeout(timeout).build()?;

    tracing::info!(%endpoint, chars = content.chars().count(), "summarizing");
    let resp = client
        .post(&endpoint)
        .json(&SummarizeRequest { content: &content })
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Network(format!("HTTP {status}")));
    }

    let body = resp.text().await?;
    parse_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Chunk, ChunkId};
    use crate::test_utils::serve_once;
    use std::io::Write;

    #[test]
    fn parse_reads_chunks() {
        let response = parse_response(
            r#"{"chunks":[{"id":1,"summary":"S1","original_text":"O1"},{"id":"b","summary":"S2","original_text":"O2"}]}"#,
        )
        .expect("valid response");

        assert_eq!(
            response.chunks,
            vec![Chunk::new(1, "O1", "S1"), Chunk::new("b", "O2", "S2")]
        );
    }

    #[test]
    fn null_document_is_empty_response() {
        let response = parse_response("null").expect("null is accepted");
        assert!(!response.has_chunks());
    }

    #[test]
    fn null_chunks_is_empty_response() {
        let response = parse_response(r#"{"chunks": null}"#).expect("null chunks are accepted");
        assert!(!response.has_chunks());
    }

    #[test]
    fn loose_chunk_fields_do_not_reject_the_response() {
        let response = parse_response(
            r#"{"chunks":[{"id":1,"summary":null,"original_text":"O1"},{"id":1.5,"summary":"S2","original_text":"O2"}]}"#,
        )
        .expect("loose fields are accepted");

        assert_eq!(response.chunks.len(), 2);
        assert_eq!(response.chunks[0].summary, "");
        assert_eq!(response.chunks[1].id, ChunkId::Text("1.5".into()));
    }

    #[test]
    fn malformed_json_is_response_error() {
        let err = parse_response("{\"chunks\": [").unwrap_err();
        assert!(matches!(err, Error::Response(_)));
    }

    #[test]
    fn wrong_shape_is_response_error() {
        let err = parse_response("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::Response(_)));
    }

    #[tokio::test]
    async fn load_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"chunks":[{{"id":9,"summary":"S","original_text":"O"}}]}}"#)
            .expect("write");

        let response = load_from_path(file.path()).await.expect("load");
        assert_eq!(response.chunks.len(), 1);
        assert_eq!(response.chunks[0].id, ChunkId::Number(9));
    }

    #[tokio::test]
    async fn load_from_missing_path_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_from_path(dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn summarize_posts_content() {
        let (base, captured) = serve_once(
            200,
            r#"{"chunks":[{"id":1,"summary":"short","original_text":"long text"}]}"#,
        )
        .await;

        let response = summarize(
            format!("{base}/api/text/summarize"),
            "long text".into(),
            Duration::from_secs(5),
        )
        .await
        .expect("summarize");

        assert_eq!(response.chunks[0].summary, "short");
        let request = captured.await.expect("captured");
        assert!(request.request_line.starts_with("POST /api/text/summarize"));
        let sent: serde_json::Value = serde_json::from_str(&request.body).expect("json");
        assert_eq!(sent["content"], "long text");
    }

    #[tokio::test]
    async fn summarize_error_status_is_network_error() {
        let (base, _captured) = serve_once(500, r#"{"error":"boom"}"#).await;

        let err = summarize(base, "text".into(), Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Network(ref msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn summarize_unreachable_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("addr").port()
        };

        let err = summarize(
            format!("http://127.0.0.1:{port}"),
            "text".into(),
            Duration::from_secs(2),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::Network(_)));
    }
}
