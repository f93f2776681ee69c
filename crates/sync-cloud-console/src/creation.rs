/*
[INPUT]:  Field edits, open/close requests, create responses
[OUTPUT]: Form state for a new sync destination and submit outcomes
[POS]:    Creation flow - modal form state shared by TUI and CLI
[UPDATE]: When form fields or submit behaviour change
*/

use sync_cloud_adapter::{CloudType, SyncCloudApi, SyncTaskConfig};
use tracing::debug;

use crate::notify::{CREATE_SUCCESS, Notifications};

/// Free-text fields of the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    AccessKey,
    SecretKey,
    BucketName,
    Endpoint,
    Region,
    Prefix,
    DstDir,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::AccessKey,
        FormField::SecretKey,
        FormField::BucketName,
        FormField::Endpoint,
        FormField::Region,
        FormField::Prefix,
        FormField::DstDir,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::AccessKey => "Access Key",
            FormField::SecretKey => "Secret Key",
            FormField::BucketName => "Bucket Name",
            FormField::Endpoint => "Endpoint",
            FormField::Region => "Region",
            FormField::Prefix => "Prefix",
            FormField::DstDir => "Dst Dir",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FormField::SecretKey)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the task; the caller should refresh its list
    Created,
    /// Request failed; the form is still open with its values
    Failed,
    /// Nothing was sent: the modal is closed or a submit is in flight
    Ignored,
}

/// State of the "Add Sync Cloud" modal
#[derive(Debug, Default)]
pub struct TaskCreation {
    open: bool,
    form: SyncTaskConfig,
    loading: bool,
    /// The modal was closed while a create was in flight
    abandoned: bool,
}

impl TaskCreation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Explicit close. The entered values are discarded.
    pub fn close(&mut self) {
        if self.loading {
            self.abandoned = true;
        }
        self.open = false;
        self.form = SyncTaskConfig::default();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// A create request is in flight; the submit control is disabled
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &SyncTaskConfig {
        &self.form
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.name,
            FormField::AccessKey => &self.form.access_key,
            FormField::SecretKey => &self.form.secret_key,
            FormField::BucketName => &self.form.bucket_name,
            FormField::Endpoint => &self.form.endpoint,
            FormField::Region => &self.form.region,
            FormField::Prefix => &self.form.prefix,
            FormField::DstDir => &self.form.dst_dir,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.form.name,
            FormField::AccessKey => &mut self.form.access_key,
            FormField::SecretKey => &mut self.form.secret_key,
            FormField::BucketName => &mut self.form.bucket_name,
            FormField::Endpoint => &mut self.form.endpoint,
            FormField::Region => &mut self.form.region,
            FormField::Prefix => &mut self.form.prefix,
            FormField::DstDir => &mut self.form.dst_dir,
        };
        *slot = value.into();
    }

    pub fn cloud_type(&self) -> CloudType {
        self.form.cloud_type
    }

    pub fn set_cloud_type(&mut self, cloud_type: CloudType) {
        self.form.cloud_type = cloud_type;
    }

    /// Marks a submit in flight and returns the payload to send.
    ///
    /// Returns `None` when the modal is closed or a previous submit has not
    /// finished yet.
    pub fn begin_submit(&mut self) -> Option<SyncTaskConfig> {
        if !self.open || self.loading {
            debug!(open = self.open, loading = self.loading, "submit ignored");
            return None;
        }
        self.loading = true;
        Some(self.form.clone())
    }

    pub fn finish_submit(
        &mut self,
        result: sync_cloud_adapter::Result<()>,
        notices: &mut Notifications,
    ) -> SubmitOutcome {
        self.loading = false;
        let abandoned = std::mem::take(&mut self.abandoned);
        match result {
            Ok(()) => {
                notices.success(CREATE_SUCCESS);
                // a form reopened after the submit belongs to the next task
                if !abandoned {
                    self.close();
                }
                SubmitOutcome::Created
            }
            Err(err) => {
                notices.error(err.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// Sends exactly one create request carrying the whole form
    pub async fn submit<A>(&mut self, api: &A, notices: &mut Notifications) -> SubmitOutcome
    where
        A: SyncCloudApi + ?Sized,
    {
        let Some(payload) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };
        let result = api.create_task(&payload).await;
        self.finish_submit(result, notices)
    }
}
