use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::config::ChatConfig;

pub const GREETING: &str =
    "Systems initialized. I am NEXUS AI. Query me regarding Alex's design protocols or availability.";
pub const MISSING_KEY_REPLY: &str = "API Key is missing. Please configure the environment.";
pub const FAILURE_REPLY: &str = "Connection to the neural link failed. Please try again later.";
pub const EMPTY_REPLY: &str = "I'm processing a complex design pattern. Try again in a moment.";

pub const SYSTEM_INSTRUCTION: &str = r#"
You are NEXUS AI, the digital assistant for a world-class product designer named Alex.
Style: Professional, concise, slightly futuristic, and confident.
Goal: Help visitors understand Alex's design philosophy, availability, and skillset.

Key Info about Alex:
- Specializes in UI/UX, Motion Design, and Frontend Engineering.
- Philosophy: "Form follows function, but emotion drives adoption."
- Availability: Currently open for freelance projects starting next month.
- Contact: Suggest they use the contact form below for inquiries.
- Location: Digital nomad, currently based in Tokyo time zone.

Keep responses under 50 words unless asked for a detailed explanation.
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    #[error("no API key configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("response contained no text")]
    EmptyReply,
}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for ChatError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl ChatError {
    /// Text shown in place of a model reply.
    pub fn fallback_reply(&self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_KEY_REPLY,
            Self::EmptyReply => EMPTY_REPLY,
            Self::Transport(_) | Self::Status(_) => FAILURE_REPLY,
        }
    }
}

/// A message ready to go out, with the history that preceded it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub history: Vec<ChatMessage>,
    pub message: String,
}

/// Conversation state owned by the chat widget.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    waiting: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
            waiting: false,
        }
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Records the user's message and returns the request to send. Blank
    /// input, or input while a reply is outstanding, changes nothing.
    pub fn begin(&mut self, input: &str) -> Option<ChatRequest> {
        let text = input.trim();
        if text.is_empty() || self.waiting {
            return None;
        }
        let request = ChatRequest {
            history: self.messages.clone(),
            message: text.to_string(),
        };
        self.messages.push(ChatMessage::user(text));
        self.waiting = true;
        Some(request)
    }

    pub fn finish(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage::model(reply));
        self.waiting = false;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<Role>, text: &str) -> Self {
        Self {
            role,
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    /// The conversation must open with a user turn, so the widget's own
    /// greeting is left out.
    pub fn new(temperature: f32, history: &[ChatMessage], message: &str) -> Self {
        let contents = history
            .iter()
            .skip_while(|m| m.role == Role::Model)
            .map(|m| Content::text(Some(m.role), &m.text))
            .chain(std::iter::once(Content::text(Some(Role::User), message)))
            .collect();
        Self {
            system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
            contents,
            generation_config: GenerationConfig { temperature },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first candidate, or `None` if it has none.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(feature = "ssr")]
static HTTP: std::sync::LazyLock<reqwest::Client> = std::sync::LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_default()
});

/// One round trip to the hosted model. No retries.
#[cfg(feature = "ssr")]
pub async fn generate_reply(
    config: &ChatConfig,
    history: &[ChatMessage],
    message: &str,
) -> Result<String, ChatError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(ChatError::MissingCredential)?;
    let body = GenerateRequest::new(config.temperature, history, message);
    let response = HTTP
        .post(config.generate_url())
        .header("x-goog-api-key", api_key)
        .timeout(config.timeout)
        .json(&body)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::Status(status.as_u16()));
    }
    let parsed = response.json::<GenerateResponse>().await?;
    parsed.text().ok_or(ChatError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_input_sends_nothing() {
        let mut session = ChatSession::default();
        let before = session.messages().to_vec();
        assert_eq!(session.begin(""), None);
        assert_eq!(session.begin("   \n\t"), None);
        assert_eq!(session.messages(), before.as_slice());
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_round_trip_in_session() {
        let mut session = ChatSession::default();
        let request = session.begin("  are you available?  ").unwrap();
        assert_eq!(request.message, "are you available?");
        assert_eq!(request.history, vec![ChatMessage::model(GREETING)]);
        assert!(session.is_waiting());
        // a second send waits for the reply
        assert_eq!(session.begin("hello?"), None);

        session.finish("Yes, from next month.");
        assert!(!session.is_waiting());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].role, Role::Model);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_stalled_service_times_out() {
        use std::time::Duration;

        // accepts the connection but never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = ChatConfig {
            api_key: Some("key".to_string()),
            endpoint: format!("http://{}", listener.local_addr().unwrap()),
            timeout: Duration::from_millis(200),
            ..ChatConfig::default()
        };
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            generate_reply(&config, &[], "hello"),
        )
        .await
        .expect("request should give up on its own");
        let err = result.unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)), "{err:?}");
        assert_eq!(err.fallback_reply(), FAILURE_REPLY);
        drop(listener);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(ChatError::MissingCredential.fallback_reply(), MISSING_KEY_REPLY);
        assert_eq!(ChatError::Status(503).fallback_reply(), FAILURE_REPLY);
        assert_eq!(
            ChatError::Transport("dns".to_string()).fallback_reply(),
            FAILURE_REPLY
        );
        assert_eq!(ChatError::EmptyReply.fallback_reply(), EMPTY_REPLY);
    }

    #[test]
    fn test_request_body() {
        let history = vec![
            ChatMessage::model(GREETING),
            ChatMessage::user("hi"),
            ChatMessage::model("hello"),
        ];
        let body = serde_json::to_value(GenerateRequest::new(0.7, &history, "rates?")).unwrap();
        assert_eq!(
            body["contents"],
            json!([
                {"role": "user", "parts": [{"text": "hi"}]},
                {"role": "model", "parts": [{"text": "hello"}]},
                {"role": "user", "parts": [{"text": "rates?"}]},
            ])
        );
        assert!(body["systemInstruction"]["role"].is_null());
        assert!(body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("NEXUS AI"));
        assert!(body["generationConfig"]["temperature"].as_f64().unwrap() > 0.69);
    }

    #[test]
    fn test_response_text() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Open "}, {"text": "for work."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Open for work."));

        let empty: GenerateResponse = serde_json::from_value(json!({"candidates": []})).unwrap();
        assert_eq!(empty.text(), None);
        let blank: GenerateResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": [{"text": " "}]}}]}))
                .unwrap();
        assert_eq!(blank.text(), None);
    }
}
