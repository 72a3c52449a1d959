use crate::utils::error::Result;
use async_trait::async_trait;

/// 外部顧問服務的出口，回傳不經驗證的補充分析文字
///
/// The reply is treated as an opaque blob even when the upstream prompt asks
/// for JSON; callers must not assume a schema.
#[async_trait]
pub trait AdvisoryService: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<String>;
}
