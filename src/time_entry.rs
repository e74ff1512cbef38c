use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// タイムエントリーの識別子。
///
/// サーバーが払い出す値をそのまま保持し、クライアント側では解釈しない。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntryId)
    }
}

/// `GET /time-entries`で返されるタイムエントリー。
///
/// 時刻はAPIの形式(`YYYY-MM-DD HH:MM:SS`)の文字列のまま保持する。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    pub project_name: String,
    pub task_description: String,
    pub start_time: String,
    pub end_time: String,
}

/// 作成・更新時に送信するリクエストボディ。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EntryPayload {
    pub project_name: String,
    pub task_description: String,
    pub start_time: String,
    pub end_time: String,
}

/// `GET /task-report`で返される1行分のデータ。
///
/// サーバーが付与する`time_spent`は利用せず、所要時間はクライアント側で計算する。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReportSource {
    pub project_name: String,
    pub task_description: String,
    pub start_time: String,
    pub end_time: String,
}

/// 所要時間を付与したレポートの1行。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub project_name: String,
    pub task_description: String,
    pub start_time: String,
    pub end_time: String,
    pub time_spent: String,
}
