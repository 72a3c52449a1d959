use crate::domain::ports::AdvisoryService;
use crate::utils::error::{Result, SwapError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// 系統提示要求 JSON 輸出，但回覆一律當成不透明文字處理
const SYSTEM_PROMPT: &str = "你是一个专业的DeFi助手，请用JSON格式补充以下信息：\
1. 推荐交易平台（dex） 2. 预估滑点 3. 最优路径建议";

/// DeepSeek（OpenAI 相容）chat completions 顧問服務客戶端
pub struct ChatCompletionAdvisor {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl ChatCompletionAdvisor {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl AdvisoryService for ChatCompletionAdvisor {
    async fn analyze(&self, text: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: self.temperature,
        };

        let url = self.completions_url();
        tracing::debug!("Requesting advisory analysis from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Advisory response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SwapError::AdvisoryStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let reply: ChatResponse = response.json().await?;

        // 取第一個 choice 的內容，沒有內容視同上游失敗
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(SwapError::EmptyAdvisoryError)
    }
}
