use crate::core::parser::IntentParser;
use crate::domain::model::{SwapResponse, TransactionPayload};
use crate::domain::ports::AdvisoryService;
use std::sync::Arc;

/// 請求協調器：解析 → 顧問分析 → 組裝回應
///
/// The advisory collaborator is injected once at construction so tests can
/// substitute a double. All failures are translated into the error envelope
/// here; nothing propagates to the transport layer.
pub struct SwapEngine {
    parser: IntentParser,
    advisor: Arc<dyn AdvisoryService>,
}

impl SwapEngine {
    pub fn new(advisor: Arc<dyn AdvisoryService>) -> Self {
        Self {
            parser: IntentParser::new(),
            advisor,
        }
    }

    pub async fn handle(&self, text: &str) -> SwapResponse {
        // 第一步：解析用戶輸入（永不失敗，識別不了就是無意圖）
        let parsed = self.parser.parse(text);
        match &parsed {
            Some(intent) => tracing::info!(
                "Parsed swap intent: {} {} -> {}",
                intent.from_amount,
                intent.from_token,
                intent.to_token
            ),
            None => tracing::debug!("No swap intent recognized in input"),
        }

        // 第二步：調用顧問服務生成補充信息
        match self.advisor.analyze(text).await {
            Ok(ai_analysis) => SwapResponse::Success {
                transaction_payload: parsed.as_ref().map(TransactionPayload::from_intent),
                parsed_parameters: parsed,
                ai_analysis,
            },
            Err(e) => {
                // 顧問失敗時整個請求回報為錯誤，解析結果不保留
                tracing::error!("❌ Advisory call failed: {}", e);
                SwapResponse::Error {
                    message: e.to_string(),
                    error_type: e.kind().to_string(),
                }
            }
        }
    }
}
