use crate::datetime::{to_datetime_local, to_wire};
use crate::time_entry::{EntryId, EntryPayload, ReportRow, TimeEntry};

/// 入力フォームの値。時刻はdatetime-local形式(`YYYY-MM-DDTHH:MM`)で保持する。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub project_name: String,
    pub task_description: String,
    pub start_time: String,
    pub end_time: String,
}

impl EntryForm {
    /// 既存のタイムエントリーから値を読み込む。
    pub fn from_entry(entry: &TimeEntry) -> Self {
        Self {
            project_name: entry.project_name.clone(),
            task_description: entry.task_description.clone(),
            start_time: to_datetime_local(&entry.start_time),
            end_time: to_datetime_local(&entry.end_time),
        }
    }

    /// 送信用のリクエストボディに変換する。値の検証はサーバーに任せる。
    pub fn to_payload(&self) -> EntryPayload {
        EntryPayload {
            project_name: self.project_name.clone(),
            task_description: self.task_description.clone(),
            start_time: to_wire(&self.start_time),
            end_time: to_wire(&self.end_time),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 編集フォーム。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub visible: bool,
    pub entry_id: Option<EntryId>,
    pub fields: EntryForm,
}

impl EditForm {
    /// 値をクリアして非表示にする。
    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// タイムエントリーの一覧表。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryTable {
    pub visible: bool,
    pub rows: Vec<TimeEntry>,
}

impl EntryTable {
    /// 行を置き換える。空の場合は非表示にする。
    pub fn replace(&mut self, rows: Vec<TimeEntry>) {
        self.visible = !rows.is_empty();
        self.rows = rows;
    }
}

/// レポート表。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportTable {
    pub visible: bool,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn replace(&mut self, rows: Vec<ReportRow>) {
        self.visible = !rows.is_empty();
        self.rows = rows;
    }
}

/// 画面全体の状態。
///
/// サーバーから取得した値は次の取得で全て置き換えられる。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    pub entries: EntryTable,
    pub report: ReportTable,
    pub entry_form: EntryForm,
    pub edit_form: EditForm,
}

#[cfg(test)]
mod tests {
    use super::{EntryForm, EntryTable};
    use crate::time_entry::{EntryId, TimeEntry};

    fn entry() -> TimeEntry {
        TimeEntry {
            id: EntryId(1),
            project_name: "project".to_string(),
            task_description: "task".to_string(),
            start_time: "2024-01-01 09:00:00".to_string(),
            end_time: "2024-01-01 10:30:00".to_string(),
        }
    }

    #[test]
    fn test_entry_form_from_entry() {
        let form = EntryForm::from_entry(&entry());

        assert_eq!(form.start_time, "2024-01-01T09:00:00");
        assert_eq!(form.end_time, "2024-01-01T10:30:00");
    }

    /// 空の値も検証せずにそのまま送信することを確認する。
    #[test]
    fn test_entry_form_to_payload_passes_empty_values() {
        let form = EntryForm {
            project_name: String::new(),
            task_description: "task".to_string(),
            start_time: "2024-01-01T09:00".to_string(),
            end_time: String::new(),
        };

        let payload = form.to_payload();

        assert_eq!(payload.project_name, "");
        assert_eq!(payload.start_time, "2024-01-01 09:00");
        assert_eq!(payload.end_time, "");
    }

    #[test]
    fn test_entry_table_visibility() {
        let mut table = EntryTable::default();

        table.replace(vec![entry()]);
        assert!(table.visible);
        assert_eq!(table.rows.len(), 1);

        table.replace(vec![]);
        assert!(!table.visible);
        assert!(table.rows.is_empty());
    }
}
