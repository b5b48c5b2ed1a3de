use thiserror::Error;

/// 解析コアのエラー
///
/// いずれも実行中のシーケンス解析に対して致命的。リトライはコアでは行わず、
/// 呼び出し側（サービング層）が扱う。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// 有効フレームが1枚もないシーケンス
    #[error("sequence contains no valid frames")]
    EmptySequence,

    /// ランドマーク数が規定と一致しないフレーム（上流の契約違反）
    #[error("invalid landmark frame: expected {expected} landmarks, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    /// 不正な設定値
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
