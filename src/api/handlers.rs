use crate::api::state::AppState;
use crate::domain::model::SwapResponse;
use crate::utils::error::SwapError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::{Deserialize, Serialize};

/// POST /api/swap 的請求本體；text 宣告為 Option 以便明確處理缺少欄位的情況
#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    pub text: Option<String>,
}

/// 缺少輸入時的 400 回應，格式與成功/錯誤信封不同
#[derive(Debug, Serialize)]
pub struct MissingInputResponse {
    pub error: String,
}

/// POST /api/swap - 解析兌換請求並附上顧問分析
///
/// Advisory failures are reported inside the envelope, not as HTTP errors;
/// only a missing `text` field short-circuits before any processing.
pub async fn post_swap(
    State(state): State<AppState>,
    Json(request): Json<SwapRequest>,
) -> Result<Json<SwapResponse>, (StatusCode, Json<MissingInputResponse>)> {
    let Some(text) = request.text else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MissingInputResponse {
                error: SwapError::MissingInputError.to_string(),
            }),
        ));
    };

    Ok(Json(state.engine.handle(&text).await))
}

/// GET /api/swap - 手動測試用的簡易頁面
pub async fn swap_demo_page() -> Html<&'static str> {
    Html(DEMO_PAGE)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now(),
    })
}

const DEMO_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
    <h1>Swap 接口测试页</h1>
    <input id="input" placeholder="输入兑换请求，如：我要把5个ETH换成BNB">
    <button onclick="sendRequest()">测试</button>
    <div id="result"></div>

    <script>
        async function sendRequest() {
            const input = document.getElementById('input').value;
            const resultDiv = document.getElementById('result');

            try {
                const response = await fetch('/api/swap', {
                    method: 'POST',
                    headers: {
                        'Content-Type': 'application/json',
                    },
                    body: JSON.stringify({ text: input })
                });

                const data = await response.json();
                resultDiv.innerHTML = JSON.stringify(data, null, 2);
            } catch (error) {
                resultDiv.innerHTML = '请求失败: ' + error.message;
            }
        }
    </script>
</body>
</html>
"#;
