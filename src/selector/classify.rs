use crate::expression::id::ExpressionId;

const GREETING_WORDS: &[&str] = &["你好", "嗨", "hello", "hi", "早上好", "晚上好", "很高兴", "你好吗"];
const HAPPY_WORDS: &[&str] = &[
    "谢谢", "太棒了", "太好了", "开心", "高兴", "喜欢", "感谢", "不错", "good", "great", "thanks",
];
const SAD_WORDS: &[&str] = &["难过", "伤心", "抱歉", "对不起", "遗憾", "sad", "sorry", "unfortunately"];
const QUESTION_WORDS: &[&str] = &["为什么", "怎么", "什么", "如何", "?", "吗", "能不能", "是否可以"];

/// Keyword rules, first match wins.
const RULES: &[(&[&str], ExpressionId)] = &[
    (GREETING_WORDS, ExpressionId::Greeting),
    (HAPPY_WORDS, ExpressionId::Happy),
    (SAD_WORDS, ExpressionId::Sad),
    (QUESTION_WORDS, ExpressionId::Thinking),
];

/// Pick an expression for a piece of conversation text.
///
/// Matching is a case-insensitive substring test, so short keywords also fire inside longer
/// words ("hi" in "this"). Text that matches no rule reads as plain speech.
pub fn classify_text(text: &str) -> ExpressionId {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(words, _)| words.iter().any(|w| lower.contains(w)))
        .map_or(ExpressionId::Speaking, |&(_, id)| id)
}

#[cfg(test)]
#[path = "../../tests/unit/selector/classify.rs"]
mod tests;
