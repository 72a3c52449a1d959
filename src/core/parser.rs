use crate::domain::model::SwapIntent;
use regex::Regex;

/// 模板中三個擷取組的排列方式
///
/// Template C puts the source token before the amount, the reverse of the
/// other phrasings, so each template carries its own capture order.
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    /// captures: (amount, from_token, to_token)
    AmountFirst,
    /// captures: (from_token, amount, to_token)
    TokenFirst,
}

#[derive(Debug)]
struct Template {
    pattern: Regex,
    order: FieldOrder,
}

/// 代幣交換意圖解析器
///
/// Tries an ordered list of phrasing templates against the preprocessed
/// input and stops at the first one that matches anywhere in the string.
/// Unrecognized text is not an error, it is simply no intent.
#[derive(Debug)]
pub struct IntentParser {
    templates: Vec<Template>,
}

impl IntentParser {
    pub fn new() -> Self {
        // 模板順序即優先順序，沒有評分機制
        // 量詞（个/枚）可有可無，不參與擷取
        let templates = vec![
            // 格式：X个A换成B
            Template {
                pattern: Regex::new(r"(\d+\.?\d*)[个枚]?([a-z]+)换成([a-z]+)").unwrap(),
                order: FieldOrder::AmountFirst,
            },
            // 格式：把XA转化为B
            Template {
                pattern: Regex::new(r"把(\d+\.?\d*)[个枚]?([a-z]+)转化为([a-z]+)").unwrap(),
                order: FieldOrder::AmountFirst,
            },
            // 格式：将A中的X兑换成B（兑换为也接受）
            Template {
                pattern: Regex::new(r"将([a-z]+)中的(\d+\.?\d*)兑换[成为]([a-z]+)").unwrap(),
                order: FieldOrder::TokenFirst,
            },
        ];

        Self { templates }
    }

    /// 解析用戶輸入，提取交換參數；無法識別時回傳 None
    pub fn parse(&self, text: &str) -> Option<SwapIntent> {
        let cleaned = preprocess(text);

        for template in &self.templates {
            if let Some(caps) = template.pattern.captures(&cleaned) {
                let (amount, from_token, to_token) = match template.order {
                    FieldOrder::AmountFirst => (&caps[1], &caps[2], &caps[3]),
                    FieldOrder::TokenFirst => (&caps[2], &caps[1], &caps[3]),
                };

                let Ok(from_amount) = amount.parse::<f64>() else {
                    continue;
                };

                return Some(SwapIntent {
                    from_token: from_token.to_uppercase(),
                    from_amount,
                    to_token: to_token.to_uppercase(),
                    raw_text: text.to_string(),
                });
            }
        }

        None
    }
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new()
    }
}

// 預處理：全形逗號轉半形、去除所有空白、轉小寫，順序固定
fn preprocess(text: &str) -> String {
    text.replace('，', ",")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
