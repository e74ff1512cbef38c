use thiserror::Error;

/// 時間記録APIとの通信で発生するエラー。
///
/// どの種類でも利用者への通知は同じで、区別はログと終了時のメッセージにのみ現れる。
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストを送信できなかった。
    #[error("Failed to send request to {endpoint}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 成功以外のステータスが返された。
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// レスポンスの形式が想定と異なる。
    #[error("Failed to parse response from {endpoint}")]
    Parse {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
