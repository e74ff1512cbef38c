use anyhow::Result;
use log::info;

use crate::api::TimeEntryRepository;
use crate::console::Presenter;
use crate::entry_manager::EntryManager;
use crate::time_entry::EntryId;

/// タイムエントリーを作成するためのサブコマンド。
#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    #[clap(short = 'p', long = "project", help = "Project name")]
    project: String,

    #[clap(short = 't', long = "task", help = "Task description")]
    task: String,

    #[clap(
        short = 's',
        long = "start",
        help = "Start time in the format YYYY-MM-DDTHH:MM"
    )]
    start: String,

    #[clap(short = 'e', long = "end", help = "End time in the format YYYY-MM-DDTHH:MM")]
    end: String,
}

/// タイムエントリーを編集するためのサブコマンド。
///
/// 値を1つも指定しない場合は、現在の値を表示して編集を取りやめる。
#[derive(Debug, clap::Args)]
pub struct EditArgs {
    #[clap(help = "ID of the time entry to edit")]
    id: EntryId,

    #[clap(short = 'p', long = "project", help = "New project name")]
    project: Option<String>,

    #[clap(short = 't', long = "task", help = "New task description")]
    task: Option<String>,

    #[clap(
        short = 's',
        long = "start",
        help = "New start time in the format YYYY-MM-DDTHH:MM"
    )]
    start: Option<String>,

    #[clap(
        short = 'e',
        long = "end",
        help = "New end time in the format YYYY-MM-DDTHH:MM"
    )]
    end: Option<String>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.project.is_some() || self.task.is_some() || self.start.is_some() || self.end.is_some()
    }
}

/// タイムエントリーを削除するためのサブコマンド。
#[derive(Debug, clap::Args)]
pub struct DeleteArgs {
    #[clap(help = "ID of the time entry to delete")]
    id: EntryId,
}

/// `create`サブコマンドの処理を行う。
///
/// 引数を作成フォームに入力してから送信する。
pub async fn create_command<R, P>(manager: &mut EntryManager<R, P>, args: CreateArgs) -> Result<()>
where
    R: TimeEntryRepository,
    P: Presenter,
{
    let form = manager.entry_form_mut();
    form.project_name = args.project;
    form.task_description = args.task;
    form.start_time = args.start;
    form.end_time = args.end;

    manager.create_entry().await
}

/// `edit`サブコマンドの処理を行う。
///
/// 編集フォームに現在の値を読み込み、指定された値だけを上書きして送信する。
pub async fn edit_command<R, P>(manager: &mut EntryManager<R, P>, args: EditArgs) -> Result<()>
where
    R: TimeEntryRepository,
    P: Presenter,
{
    manager.begin_edit(args.id).await?;

    if !args.has_changes() {
        info!("No changes given for time entry {}", args.id);
        return manager.cancel_edit();
    }

    let id = args.id;
    let fields = &mut manager.edit_form_mut().fields;
    if let Some(project) = args.project {
        fields.project_name = project;
    }
    if let Some(task) = args.task {
        fields.task_description = task;
    }
    if let Some(start) = args.start {
        fields.start_time = start;
    }
    if let Some(end) = args.end {
        fields.end_time = end;
    }

    manager.submit_edit(id).await
}

/// `delete`サブコマンドの処理を行う。
pub async fn delete_command<R, P>(manager: &mut EntryManager<R, P>, args: DeleteArgs) -> Result<()>
where
    R: TimeEntryRepository,
    P: Presenter,
{
    manager.delete_entry(args.id).await
}
