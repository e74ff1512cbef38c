use async_trait::async_trait;
use log::{debug, info};
#[cfg(test)]
use mockall::automock;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::time_entry::{EntryId, EntryPayload, ReportSource, TimeEntry};

/// 時間記録APIへのアクセスを抽象化するtrait。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TimeEntryRepository {
    /// 全てのタイムエントリーを取得する。
    async fn list_entries(&self) -> Result<Vec<TimeEntry>, ApiError>;

    /// タイムエントリーを作成する。
    async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ApiError>;

    /// 指定したタイムエントリーを更新する。
    async fn update_entry(&self, id: EntryId, payload: &EntryPayload) -> Result<(), ApiError>;

    /// 指定したタイムエントリーを削除する。
    async fn delete_entry(&self, id: EntryId) -> Result<(), ApiError>;

    /// レポートの元データを取得する。
    async fn task_report(&self) -> Result<Vec<ReportSource>, ApiError>;
}

/// 時間記録APIと通信するためのクライアント。
///
/// タイムアウトは設定しない。
///
/// # Examples
///
/// ```
/// let client = TimeEntryClient::new("http://127.0.0.1:5000");
/// let entries = client.list_entries().await.unwrap();
/// ```
pub struct TimeEntryClient {
    client: Client,
    api_url: String,
}

impl TimeEntryClient {
    /// 新しい`TimeEntryClient`を返す。
    ///
    /// # Arguments
    ///
    /// * `api_url` - APIのベースURL。末尾の`/`は取り除く。
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// リクエストを送信し、成功以外のステータスをエラーにする。
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let status = response.status();
        debug!("{} responded with {}", endpoint, status);
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let endpoint = format!("GET {}", path);
        self.send(self.client.get(self.url(path)), &endpoint)
            .await?
            .json::<T>()
            .await
            .map_err(|source| ApiError::Parse { endpoint, source })
    }
}

#[async_trait]
impl TimeEntryRepository for TimeEntryClient {
    async fn list_entries(&self) -> Result<Vec<TimeEntry>, ApiError> {
        let entries: Vec<TimeEntry> = self.read_json("/time-entries").await?;
        info!("length of time entries: {}", entries.len());

        Ok(entries)
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ApiError> {
        let request = self.client.post(self.url("/time-entry")).json(payload);
        self.send(request, "POST /time-entry").await?;
        info!("Created time entry for project {:?}", payload.project_name);

        Ok(())
    }

    async fn update_entry(&self, id: EntryId, payload: &EntryPayload) -> Result<(), ApiError> {
        let path = format!("/time-entry/{}", id);
        let request = self.client.put(self.url(&path)).json(payload);
        self.send(request, &format!("PUT {}", path)).await?;
        info!("Updated time entry {}", id);

        Ok(())
    }

    async fn delete_entry(&self, id: EntryId) -> Result<(), ApiError> {
        let path = format!("/time-entry/{}", id);
        let request = self.client.delete(self.url(&path));
        self.send(request, &format!("DELETE {}", path)).await?;
        info!("Deleted time entry {}", id);

        Ok(())
    }

    async fn task_report(&self) -> Result<Vec<ReportSource>, ApiError> {
        let rows: Vec<ReportSource> = self.read_json("/task-report").await?;
        info!("length of report rows: {}", rows.len());

        Ok(rows)
    }
}
