/*
[INPUT]:  SyncCloudApi handle, command arguments, interactive prompts
[OUTPUT]: Task list printed to stdout, errors as anyhow results
[POS]:    CLI layer - one-shot task commands
[UPDATE]: When adding task commands or changing list output
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password, Select};

use sync_cloud_adapter::{CloudType, SyncCloudApi};
use sync_cloud_console::{
    ActionOutcome, BadgeTone, FormField, Notifications, SubmitOutcome, TaskAction, TaskCard, TaskCreation,
    TaskListView,
};

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "cloud-type", value_name = "oss|tos")]
    pub cloud_type: Option<CloudType>,
    #[arg(long = "access-key")]
    pub access_key: Option<String>,
    /// Prompted without echo when omitted
    #[arg(long = "secret-key")]
    pub secret_key: Option<String>,
    #[arg(long = "bucket-name")]
    pub bucket_name: Option<String>,
    #[arg(long)]
    pub endpoint: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub prefix: Option<String>,
    #[arg(long = "dst-dir")]
    pub dst_dir: Option<String>,
}

impl CreateArgs {
    fn provided(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::Name => self.name.as_ref(),
            FormField::AccessKey => self.access_key.as_ref(),
            FormField::SecretKey => self.secret_key.as_ref(),
            FormField::BucketName => self.bucket_name.as_ref(),
            FormField::Endpoint => self.endpoint.as_ref(),
            FormField::Region => self.region.as_ref(),
            FormField::Prefix => self.prefix.as_ref(),
            FormField::DstDir => self.dst_dir.as_ref(),
        }
    }
}

fn failure(notices: &Notifications, fallback: &str) -> anyhow::Error {
    match notices.latest() {
        Some(notice) => anyhow!("{}", notice.message),
        None => anyhow!("{fallback}"),
    }
}

async fn fetch_list<A>(api: &A, notices: &mut Notifications) -> Result<TaskListView>
where
    A: SyncCloudApi + ?Sized,
{
    let mut list = TaskListView::new();
    if !list.refresh(api, notices).await {
        return Err(failure(notices, "list request failed"));
    }
    Ok(list)
}

pub async fn run_list<A>(api: &A, json: bool) -> Result<()>
where
    A: SyncCloudApi + ?Sized,
{
    let mut notices = Notifications::default();
    let list = fetch_list(api, &mut notices).await?;
    print_list(&list, json)
}

pub async fn run_create<A>(api: &A, args: CreateArgs) -> Result<()>
where
    A: SyncCloudApi + ?Sized,
{
    let theme = ColorfulTheme::default();
    let mut creation = TaskCreation::new();
    creation.open();

    for field in FormField::ALL {
        let value = match args.provided(field) {
            Some(value) => value.clone(),
            None => prompt_field(&theme, field)?,
        };
        creation.set(field, value);
        if field == FormField::Name {
            let cloud_type = match args.cloud_type {
                Some(cloud_type) => cloud_type,
                None => prompt_cloud_type(&theme)?,
            };
            creation.set_cloud_type(cloud_type);
        }
    }

    let mut notices = Notifications::default();
    match creation.submit(api, &mut notices).await {
        SubmitOutcome::Created => {
            println!("{}", style(sync_cloud_console::notify::CREATE_SUCCESS).green());
            let list = fetch_list(api, &mut notices).await?;
            print_list(&list, false)
        }
        SubmitOutcome::Failed => Err(failure(&notices, "create request failed")),
        SubmitOutcome::Ignored => bail!("create request was not sent"),
    }
}

pub async fn run_action<A>(api: &A, id: &str, action: TaskAction) -> Result<()>
where
    A: SyncCloudApi + ?Sized,
{
    let mut notices = Notifications::default();
    let mut list = TaskListView::new();
    let outcome = list.run_action(api, id, action, &mut notices).await;
    report_action(&list, &notices, action, outcome)
}

fn report_action(
    list: &TaskListView,
    notices: &Notifications,
    action: TaskAction,
    outcome: ActionOutcome,
) -> Result<()> {
    match outcome {
        ActionOutcome::Refreshed => {
            println!("{}", style(action.success_message()).green());
            print_list(list, false)
        }
        ActionOutcome::RefreshFailed => {
            println!("{}", style(action.success_message()).green());
            Err(failure(notices, "list request failed"))
        }
        ActionOutcome::Failed => Err(failure(notices, "task command failed")),
        ActionOutcome::Ignored => bail!("{} already in progress", action.label()),
    }
}

pub async fn run_delete<A>(api: &A, id: &str, yes: bool) -> Result<()>
where
    A: SyncCloudApi + ?Sized,
{
    let mut notices = Notifications::default();
    let mut list = fetch_list(api, &mut notices).await?;
    if !list.request_delete(id) {
        bail!("no sync task with id {id}");
    }

    if !yes {
        let name = list
            .pending_delete()
            .map(|task| task.name.clone())
            .unwrap_or_default();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete sync task \"{name}\" ({id})?"))
            .default(false)
            .interact()?;
        if !confirmed {
            list.cancel_delete();
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }
    }

    let command = list
        .confirm_delete()
        .context("delete already in progress")?;
    let outcome = list.send_and_refresh(api, &command, &mut notices).await;
    report_action(&list, &notices, command.action, outcome)
}

fn prompt_field(theme: &ColorfulTheme, field: FormField) -> Result<String> {
    let value = if field.is_secret() {
        Password::with_theme(theme)
            .with_prompt(field.label())
            .allow_empty_password(true)
            .interact()?
    } else {
        Input::<String>::with_theme(theme)
            .with_prompt(field.label())
            .allow_empty(true)
            .interact_text()?
    };
    Ok(value)
}

fn prompt_cloud_type(theme: &ColorfulTheme) -> Result<CloudType> {
    let labels: Vec<&str> = CloudType::ALL.iter().map(|c| c.as_str()).collect();
    let selection = Select::with_theme(theme)
        .with_prompt("Cloud Type")
        .items(&labels)
        .default(0)
        .interact()?;
    CloudType::ALL
        .get(selection)
        .copied()
        .context("invalid cloud type selection")
}

fn print_list(list: &TaskListView, json: bool) -> Result<()> {
    if json {
        let rendered =
            serde_json::to_string_pretty(list.tasks()).context("serialize task list")?;
        println!("{rendered}");
        return Ok(());
    }
    for card in list.cards() {
        println!("{}", render_card(&card));
    }
    Ok(())
}

fn styled_tone(text: &str, tone: BadgeTone) -> String {
    let styled = match tone {
        BadgeTone::Success => style(text).green(),
        BadgeTone::Danger => style(text).red(),
        BadgeTone::Warning => style(text).yellow(),
        BadgeTone::Info => style(text).cyan(),
    };
    styled.to_string()
}

fn render_card(card: &TaskCard) -> String {
    let mut lines = vec![
        format!(
            "#{} {} {}  {}",
            card.id,
            style(&card.name).bold(),
            styled_tone(&format!("[{}]", card.cloud_type), card.cloud_tone()),
            styled_tone(&card.status, card.tone),
        ),
        format!("  Total Size: {}  Files: {}", card.total_size, card.files),
        format!("  Start Time: {}", card.start_time),
    ];
    if let Some(end_time) = &card.end_time {
        lines.push(format!("  End Time: {end_time}"));
    }
    if let Some(error) = &card.error {
        lines.push(format!("  {}", style(error).red()));
    }
    lines.join("\n")
}
