use anyhow::{anyhow, Result};
use log::{debug, info, warn};

use crate::api::TimeEntryRepository;
use crate::console::Presenter;
use crate::datetime::calculate_time_spent;
use crate::screen::{EditForm, EntryForm, Screen};
use crate::time_entry::{EntryId, ReportRow};

const FETCH_ENTRIES_FAILED: &str = "Failed to fetch time entries!";
const FETCH_REPORT_FAILED: &str = "Failed to fetch task report!";

/// タイムエントリーの一覧表示、作成、編集、削除とレポート生成を行う。
///
/// 状態はサーバーから取得した値のみで、変更を行った後は必ず一覧を取得し直す。
pub struct EntryManager<R: TimeEntryRepository, P: Presenter> {
    repository: R,
    presenter: P,
    screen: Screen,
}

impl<R: TimeEntryRepository, P: Presenter> EntryManager<R, P> {
    /// 新しい`EntryManager`を返す。
    ///
    /// # Arguments
    ///
    /// * `repository` - 時間記録APIと通信するためのリポジトリ
    /// * `presenter` - 画面を表示するためのpresenter
    pub fn new(repository: R, presenter: P) -> Self {
        Self {
            repository,
            presenter,
            screen: Screen::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// 作成フォームへの入力を受け付ける。
    pub fn entry_form_mut(&mut self) -> &mut EntryForm {
        &mut self.screen.entry_form
    }

    /// 編集フォームへの入力を受け付ける。
    pub fn edit_form_mut(&mut self) -> &mut EditForm {
        &mut self.screen.edit_form
    }

    /// タイムエントリーの一覧を取得して表示する。
    ///
    /// 取得に失敗した場合は通知のみ行い、表示中の一覧はそのまま残す。
    pub async fn list_entries(&mut self) -> Result<()> {
        match self.repository.list_entries().await {
            Ok(entries) => {
                info!("Rendering {} time entries", entries.len());
                self.screen.entries.replace(entries);
                self.presenter.show_entries(&self.screen.entries)
            }
            Err(err) => self.fail(FETCH_ENTRIES_FAILED, anyhow!(err)),
        }
    }

    /// 作成フォームの内容でタイムエントリーを作成する。
    ///
    /// 成功した場合はフォームをクリアして一覧を取得し直す。
    /// 失敗した場合はフォームの内容を残す。
    pub async fn create_entry(&mut self) -> Result<()> {
        let payload = self.screen.entry_form.to_payload();
        if let Err(err) = self.repository.create_entry(&payload).await {
            return self.fail("Failed to add entry!", anyhow!(err));
        }

        self.notify("Time entry added successfully!");
        self.screen.entry_form.reset();
        self.list_entries().await
    }

    /// 一覧から指定したタイムエントリーを探し、編集フォームに読み込んで表示する。
    ///
    /// IDで1件だけ取得するエンドポイントはないため、一覧を取得し直して探す。
    pub async fn begin_edit(&mut self, id: EntryId) -> Result<()> {
        let entries = match self.repository.list_entries().await {
            Ok(entries) => entries,
            Err(err) => return self.fail(FETCH_ENTRIES_FAILED, anyhow!(err)),
        };

        let Some(entry) = entries.iter().find(|entry| entry.id == id) else {
            return self.fail(
                "Entry not found!",
                anyhow!("Time entry {} does not exist", id),
            );
        };

        info!("Editing time entry {}", id);
        self.screen.edit_form = EditForm {
            visible: true,
            entry_id: Some(id),
            fields: EntryForm::from_entry(entry),
        };
        self.presenter.show_edit_form(&self.screen.edit_form)
    }

    /// 編集フォームの内容で指定したタイムエントリーを更新する。
    ///
    /// 更新対象は引数の`id`で、フォームに読み込んだ時のIDとは異なっていてもそのまま送信する。
    /// 失敗した場合は入力した値のままフォームを表示しておく。
    pub async fn submit_edit(&mut self, id: EntryId) -> Result<()> {
        if let Some(loaded) = self.screen.edit_form.entry_id.filter(|loaded| *loaded != id) {
            warn!("Submitting form loaded for time entry {} to time entry {}", loaded, id);
        }
        let payload = self.screen.edit_form.fields.to_payload();
        if let Err(err) = self.repository.update_entry(id, &payload).await {
            return self.fail("Failed to update entry!", anyhow!(err));
        }

        self.notify("Time entry updated successfully!");
        let refreshed = self.list_entries().await;
        self.screen.edit_form.close();
        self.presenter.show_edit_form(&self.screen.edit_form)?;
        refreshed
    }

    /// 編集をやめてフォームを閉じる。サーバーへのリクエストは行わない。
    pub fn cancel_edit(&mut self) -> Result<()> {
        info!("Edit cancelled");
        self.screen.edit_form.close();
        self.presenter.show_edit_form(&self.screen.edit_form)
    }

    /// 指定したタイムエントリーを削除し、一覧を取得し直す。
    pub async fn delete_entry(&mut self, id: EntryId) -> Result<()> {
        if let Err(err) = self.repository.delete_entry(id).await {
            return self.fail("Failed to delete entry!", anyhow!(err));
        }

        self.notify("Time entry deleted successfully!");
        self.list_entries().await
    }

    /// レポートを取得し、行ごとに所要時間を計算して表示する。
    ///
    /// 時刻を解釈できない行がある場合はレポート全体を失敗とし、表示中のレポートは残す。
    pub async fn generate_report(&mut self) -> Result<()> {
        let sources = match self.repository.task_report().await {
            Ok(sources) => sources,
            Err(err) => return self.fail(FETCH_REPORT_FAILED, anyhow!(err)),
        };

        let rows = sources
            .into_iter()
            .map(|source| -> Result<ReportRow> {
                let time_spent = calculate_time_spent(&source.start_time, &source.end_time)?;
                Ok(ReportRow {
                    project_name: source.project_name,
                    task_description: source.task_description,
                    start_time: source.start_time,
                    end_time: source.end_time,
                    time_spent,
                })
            })
            .collect::<Result<Vec<_>>>();
        let rows = match rows {
            Ok(rows) => rows,
            Err(err) => return self.fail("Failed to generate task report!", err),
        };

        info!("Rendering {} report rows", rows.len());
        self.screen.report.replace(rows);
        self.presenter.show_report(&self.screen.report)
    }

    /// 成功をユーザーに通知する。
    ///
    /// 通知に失敗しても一覧の再取得は続ける。
    fn notify(&mut self, message: &str) {
        if let Err(err) = self.presenter.alert(message) {
            warn!("Failed to show alert {:?}: {:#}", message, err);
        } else {
            debug!("Alert shown: {}", message);
        }
    }

    /// 失敗をユーザーに通知し、原因のエラーを返す。
    fn fail(&mut self, message: &'static str, err: anyhow::Error) -> Result<()> {
        warn!("{}: {:#}", message, err);
        self.presenter.alert(message)?;
        Err(err.context(message))
    }
}
