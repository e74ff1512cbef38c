use std::io::Write;

use anyhow::{Context, Result};
#[cfg(test)]
use mockall::automock;

use crate::screen::{EditForm, EntryTable, ReportTable};

/// 画面の状態をユーザーに表示するためのtrait。
#[cfg_attr(test, automock)]
pub trait Presenter {
    /// 操作結果をユーザーに通知する。
    fn alert(&mut self, message: &str) -> Result<()>;

    /// タイムエントリーの一覧を表示する。非表示の場合は何も出力しない。
    fn show_entries(&mut self, table: &EntryTable) -> Result<()>;

    /// レポートを表示する。非表示の場合は何も出力しない。
    fn show_report(&mut self, table: &ReportTable) -> Result<()>;

    /// 編集フォームを表示する。
    fn show_edit_form(&mut self, form: &EditForm) -> Result<()>;
}

/// 画面をMarkdownの表形式で出力する。
pub struct ConsoleView<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleView<'a, W> {
    /// 新しい`ConsoleView`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, cells: &[&str]) -> Result<()> {
        let escaped: Vec<String> = cells.iter().map(|cell| cell.replace('|', "\\|")).collect();
        writeln!(self.writer, "| {} |", escaped.join(" | ")).context("Failed to write table row")
    }

    fn write_header(&mut self, columns: &[&str]) -> Result<()> {
        self.write_row(columns)?;
        let separator = vec!["---"; columns.len()];
        self.write_row(&separator)
    }
}

impl<'a, W: Write> Presenter for ConsoleView<'a, W> {
    fn alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "> {}", message)
            .with_context(|| format!("Failed to write alert: {}", message))
    }

    fn show_entries(&mut self, table: &EntryTable) -> Result<()> {
        if !table.visible {
            return Ok(());
        }

        self.write_header(&["ID", "Project", "Task", "Start", "End", "Actions"])?;
        for entry in &table.rows {
            let id = entry.id.to_string();
            let actions = format!("edit {id}, delete {id}", id = id);
            self.write_row(&[
                id.as_str(),
                entry.project_name.as_str(),
                entry.task_description.as_str(),
                entry.start_time.as_str(),
                entry.end_time.as_str(),
                actions.as_str(),
            ])
            .with_context(|| format!("Failed to write time entry: {:?}", entry))?;
        }

        Ok(())
    }

    fn show_report(&mut self, table: &ReportTable) -> Result<()> {
        if !table.visible {
            return Ok(());
        }

        self.write_header(&["Project", "Task", "Start", "End", "Time Spent"])?;
        for row in &table.rows {
            self.write_row(&[
                row.project_name.as_str(),
                row.task_description.as_str(),
                row.start_time.as_str(),
                row.end_time.as_str(),
                row.time_spent.as_str(),
            ])
            .with_context(|| format!("Failed to write report row: {:?}", row))?;
        }

        Ok(())
    }

    fn show_edit_form(&mut self, form: &EditForm) -> Result<()> {
        if !form.visible {
            return Ok(());
        }

        let title = form
            .entry_id
            .map(|id| format!("## Edit time entry {}", id))
            .unwrap_or_else(|| "## Edit time entry".to_string());
        let fields = &form.fields;
        writeln!(
            self.writer,
            "{}\n- project: {}\n- task: {}\n- start: {}\n- end: {}",
            title, fields.project_name, fields.task_description, fields.start_time, fields.end_time
        )
        .context("Failed to write edit form")
    }
}
