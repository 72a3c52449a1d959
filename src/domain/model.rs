use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_DEX: &str = "Uniswap V3";

/// 從自由文本解析出的代幣交換意圖
///
/// Invariant: both token fields are non-empty uppercase symbols and the
/// amount is non-negative whenever a value of this type exists. A request
/// that yields no recognizable intent produces `None`, never a partially
/// filled struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapIntent {
    pub from_token: String,
    pub from_amount: f64,
    pub to_token: String,
    /// 原始輸入，保留給審計與除錯
    pub raw_text: String,
}

/// 示意用的交易 payload，不是可簽名或可廣播的交易
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub swap: SwapLeg,
    pub default_dex: String,
    pub allowance_check: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapLeg {
    pub from: String,
    pub amount: f64,
    pub to: String,
}

impl TransactionPayload {
    pub fn from_intent(intent: &SwapIntent) -> Self {
        Self {
            swap: SwapLeg {
                from: intent.from_token.clone(),
                amount: intent.from_amount,
                to: intent.to_token.clone(),
            },
            default_dex: DEFAULT_DEX.to_string(),
            allowance_check: true,
        }
    }
}

/// 請求的最終回應信封
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SwapResponse {
    Success {
        #[serde(serialize_with = "serialize_or_empty")]
        parsed_parameters: Option<SwapIntent>,
        ai_analysis: String,
        #[serde(serialize_with = "serialize_or_empty")]
        transaction_payload: Option<TransactionPayload>,
    },
    Error {
        message: String,
        error_type: String,
    },
}

// 缺席值在線上格式中是空物件 {}，不是 null
fn serialize_or_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_intent() -> SwapIntent {
        SwapIntent {
            from_token: "ETH".to_string(),
            from_amount: 5.0,
            to_token: "BNB".to_string(),
            raw_text: "我想要把5个ETH换成BNB".to_string(),
        }
    }

    #[test]
    fn test_payload_from_intent() {
        let payload = TransactionPayload::from_intent(&sample_intent());
        assert_eq!(payload.swap.from, "ETH");
        assert_eq!(payload.swap.amount, 5.0);
        assert_eq!(payload.swap.to, "BNB");
        assert_eq!(payload.default_dex, "Uniswap V3");
        assert!(payload.allowance_check);
    }

    #[test]
    fn test_success_envelope_serialization() {
        let intent = sample_intent();
        let response = SwapResponse::Success {
            parsed_parameters: Some(intent.clone()),
            ai_analysis: "{\"dex\": \"Uniswap V3\"}".to_string(),
            transaction_payload: Some(TransactionPayload::from_intent(&intent)),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["parsed_parameters"]["from_token"], "ETH");
        assert_eq!(json["transaction_payload"]["swap"]["amount"], 5.0);
        assert_eq!(json["transaction_payload"]["allowance_check"], true);
    }

    #[test]
    fn test_absent_intent_serializes_as_empty_object() {
        let response = SwapResponse::Success {
            parsed_parameters: None,
            ai_analysis: "no trade detected".to_string(),
            transaction_payload: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["parsed_parameters"], serde_json::json!({}));
        assert_eq!(json["transaction_payload"], serde_json::json!({}));
    }

    #[test]
    fn test_error_envelope_serialization() {
        let response = SwapResponse::Error {
            message: "Advisory service returned status 401: unauthorized".to_string(),
            error_type: "AdvisoryStatusError".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error_type"], "AdvisoryStatusError");
        assert!(json.get("parsed_parameters").is_none());
    }
}
