use std::time::Duration;

use serde::Serialize;

use crate::catalog::Platform;

const ASSISTANT_TIMEOUT_SECS: u64 = 60;

#[derive(Serialize)]
struct AskBody<'a> {
    prompt: &'a str,
}

/// Free-text question answering backed by an external HTTP service.
///
/// The service receives `{"prompt": "..."}` and answers with a JSON object
/// carrying a `text` (or `answer`) string.
pub struct Assistant {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl Assistant {
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(ASSISTANT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Send a prompt. Any failure, including no endpoint, yields `None`.
    pub async fn ask(&self, prompt: &str) -> Option<String> {
        let endpoint = self.endpoint.as_deref()?;

        let mut request = self.client.post(endpoint).json(&AskBody { prompt });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "assistant request failed");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "assistant returned an error");
            return None;
        }

        let body: serde_json::Value = response.json().await.ok()?;
        body["text"]
            .as_str()
            .or_else(|| body["answer"].as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    }
}

/// Frame a user question with the platform and version being browsed.
pub fn build_prompt(question: &str, platform: Platform, version_label: &str) -> String {
    format!(
        "You are a Minecraft command expert. The player is using {} version {}.\n\
         Answer with commands that are valid for exactly that edition and version, \
         and show each command on its own line.\n\n\
         Question: {}",
        platform.display_name(),
        version_label,
        question.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Drain headers and the JSON body so the client isn't reset mid-write.
    async fn read_request(stream: &mut tokio::net::TcpStream) {
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = match stream.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + length {
                    return;
                }
            }
        }
    }

    async fn reply_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/ask", listener.local_addr().unwrap());
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                read_request(&mut stream).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
            }
        });
        url
    }

    #[test]
    fn test_prompt_carries_context() {
        let prompt = build_prompt("  how do I get a diamond sword? ", Platform::Bedrock, "1.20.0");
        assert!(prompt.contains("Bedrock Edition version 1.20.0"));
        assert!(prompt.ends_with("Question: how do I get a diamond sword?"));
    }

    #[tokio::test]
    async fn test_unconfigured_assistant_returns_none() {
        let assistant = Assistant::new(Some("  ".into()), None);
        assert!(!assistant.is_configured());
        assert!(assistant.ask("hello").await.is_none());
    }

    #[tokio::test]
    async fn test_answer_text_is_returned() {
        let url = reply_once("200 OK", r#"{"text": "/give @p diamond_sword"}"#).await;
        let assistant = Assistant::new(Some(url), Some("secret".into()));
        assert_eq!(assistant.ask("sword").await.as_deref(), Some("/give @p diamond_sword"));
    }

    #[tokio::test]
    async fn test_error_status_is_failure() {
        let url = reply_once("500 Internal Server Error", r#"{"text": "boom"}"#).await;
        let assistant = Assistant::new(Some(url), None);
        assert!(assistant.ask("sword").await.is_none());
    }
}
