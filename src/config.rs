use std::env;

/// APIのベースURLを指定する環境変数。
pub const API_URL_ENV: &str = "TIMELOG_API_URL";

/// 指定がない場合に利用するAPIのベースURL。
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// 実行時の設定。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// 設定を読み込む。
    ///
    /// コマンドライン引数、環境変数`TIMELOG_API_URL`、既定値の順に優先する。
    pub fn load(api_url: Option<String>) -> Self {
        resolve(api_url, env::var(API_URL_ENV).ok())
    }
}

fn resolve(from_args: Option<String>, from_env: Option<String>) -> Config {
    let api_url = from_args
        .into_iter()
        .chain(from_env)
        .map(|url| url.trim().to_string())
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Config { api_url }
}
