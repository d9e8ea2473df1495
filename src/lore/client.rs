//! Blocking HTTP client for the Gemini `generateContent` endpoint.

use super::{chat_prompt, LoreError, LoreRequest, LoreService};
use crate::config::LoreConfig;
use serde::Deserialize;
use serde_json::json;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Pulls the concatenated text of the first candidate out of a response body.
fn extract_text(response: GenerateResponse) -> Result<String, LoreError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Err(LoreError::EmptyResponse);
    }
    Ok(text.to_string())
}

pub struct GeminiClient {
    config: LoreConfig,
    agent: ureq::Agent,
}

impl GeminiClient {
    pub fn new(config: LoreConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { config, agent }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Request URL. Must not carry the API key: ureq error text includes it.
    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    fn generate(&self, prompt: &str) -> Result<String, LoreError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LoreError::NotConfigured)?;
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response: GenerateResponse = self
            .agent
            .post(&self.url())
            .set("Content-Type", "application/json")
            .set(API_KEY_HEADER, api_key)
            .send_json(body)
            .map_err(|e| LoreError::Http(e.to_string()))?
            .into_json()
            .map_err(|e| LoreError::Decode(e.to_string()))?;

        extract_text(response)
    }
}

impl LoreService for GeminiClient {
    fn describe(&self, request: &LoreRequest) -> Result<String, LoreError> {
        self.generate(&request.prompt())
    }

    fn reply(&self, history: &[String]) -> Result<String, LoreError> {
        self.generate(&chat_prompt(history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    fn parse(body: &str) -> GenerateResponse {
        serde_json::from_str(body).expect("valid test json")
    }

    #[test]
    fn test_extract_text_first_candidate() {
        let response = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":" Scales of "},{"text":"moonlight. "}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        );
        assert_eq!(extract_text(response), Ok("Scales of moonlight.".to_string()));
    }

    #[test]
    fn test_extract_text_empty() {
        assert_eq!(extract_text(parse("{}")), Err(LoreError::EmptyResponse));
        assert_eq!(
            extract_text(parse(r#"{"candidates":[{"content":{"parts":[]}}]}"#)),
            Err(LoreError::EmptyResponse)
        );
        assert_eq!(
            extract_text(parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)),
            Err(LoreError::EmptyResponse)
        );
    }

    #[test]
    fn test_unconfigured_client_never_calls_out() {
        let client = GeminiClient::new(LoreConfig::default());
        assert!(!client.is_configured());
        assert_eq!(client.reply(&[]), Err(LoreError::NotConfigured));
    }

    #[test]
    fn test_url_shape() {
        let client = GeminiClient::new(LoreConfig {
            api_key: Some("k".into()),
            model: "m".into(),
            endpoint: "http://host/v1".into(),
            ..Default::default()
        });
        assert_eq!(client.url(), "http://host/v1/models/m:generateContent");
    }

    /// Accepts one request, answers 403, and returns the request head.
    fn forbidding_server() -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let endpoint = format!("http://{}", listener.local_addr().expect("addr"));
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).expect("read");
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(b"HTTP/1.1 403 Forbidden\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .expect("write");
            String::from_utf8_lossy(&head).into_owned()
        });
        (endpoint, handle)
    }

    #[test]
    fn test_api_key_stays_out_of_errors() {
        let (endpoint, server) = forbidding_server();
        let client = GeminiClient::new(LoreConfig {
            api_key: Some("SECRET-KEY-123".into()),
            endpoint,
            timeout: Duration::from_secs(5),
            ..Default::default()
        });

        let err = client.reply(&["You: hi".to_string()]).expect_err("403");
        assert!(matches!(err, LoreError::Http(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{}", err);

        let head = server.join().expect("server thread");
        let request_line = head.lines().next().unwrap_or_default();
        assert!(!request_line.contains("SECRET-KEY-123"));
        assert!(head
            .to_ascii_lowercase()
            .contains("x-goog-api-key: secret-key-123"));
    }
}
