/*
[INPUT]:  TaskCreation form values and modal focus
[OUTPUT]: "Add Sync Cloud" modal description and key handling
[POS]:    TUI UI modal for creating a sync cloud task
[UPDATE]: When form fields change
*/

use crossterm::event::KeyCode;
use sync_cloud_adapter::CloudType;

use sync_cloud_console::{FormField, TaskCreation};

use super::{Field, Modal, ModalAction, handle_modal_key};

const TITLE: &str = "Add Sync Cloud";
const CLOUD_TYPE_INDEX: usize = 1;

/// Focus state of the create modal. Values live in `TaskCreation`.
#[derive(Debug, Default)]
pub(in crate::tui) struct CreateSyncCloudModal {
    focus_index: usize,
}

impl CreateSyncCloudModal {
    pub(in crate::tui) fn reset(&mut self) {
        self.focus_index = 0;
    }

    pub(in crate::tui) fn to_modal(&self, creation: &TaskCreation) -> Modal {
        let mut fields = Vec::with_capacity(FormField::ALL.len() + 3);
        for field in FormField::ALL {
            if fields.len() == CLOUD_TYPE_INDEX {
                fields.push(cloud_type_field(creation.cloud_type()));
            }
            fields.push(Field::TextInput {
                label: field.label().to_string(),
                value: creation.value(field).to_string(),
                masked: field.is_secret(),
            });
        }

        let loading = creation.is_loading();
        fields.push(Field::Button {
            label: String::from(if loading { "Creating..." } else { "Create" }),
            action: ModalAction::Submit,
            enabled: !loading,
        });
        fields.push(Field::Button {
            label: String::from("Cancel"),
            action: ModalAction::Cancel,
            enabled: true,
        });

        Modal {
            title: String::from(TITLE),
            focus_index: self.focus_index,
            fields,
        }
    }

    pub(in crate::tui) fn handle_key(
        &mut self,
        creation: &mut TaskCreation,
        key: KeyCode,
    ) -> ModalAction {
        let mut modal = self.to_modal(creation);
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(creation, &modal);
        action
    }

    fn apply_modal_state(&mut self, creation: &mut TaskCreation, modal: &Modal) {
        self.focus_index = modal.focus_index;
        let mut text_fields = FormField::ALL.iter();
        for field in &modal.fields {
            match field {
                Field::TextInput { value, .. } => {
                    if let Some(form_field) = text_fields.next() {
                        if creation.value(*form_field) != value {
                            creation.set(*form_field, value.clone());
                        }
                    }
                }
                Field::Select { selected, .. } => {
                    if let Some(cloud_type) = CloudType::ALL.get(*selected) {
                        creation.set_cloud_type(*cloud_type);
                    }
                }
                Field::Button { .. } => {}
            }
        }
    }
}

fn cloud_type_field(current: CloudType) -> Field {
    Field::Select {
        label: String::from("Cloud Type"),
        options: CloudType::ALL
            .iter()
            .map(|cloud_type| cloud_type.as_str().to_string())
            .collect(),
        selected: CloudType::ALL
            .iter()
            .position(|cloud_type| *cloud_type == current)
            .unwrap_or_default(),
    }
}
