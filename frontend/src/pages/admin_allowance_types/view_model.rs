use super::repository::AllowanceTypesRepository;
use super::utils::AllowanceTypeFormState;
use crate::api::{AllowanceType, AllowanceTypeInput, ApiClient, ApiError, MessageResponse};
use crate::components::layout::MessageState;
use crate::utils::task::RequestSlot;
use leptos::*;

#[derive(Clone)]
pub struct SaveAllowanceType {
    pub id: Option<u64>,
    pub input: AllowanceTypeInput,
}

#[derive(Clone, Copy)]
pub struct AllowanceTypesViewModel {
    pub types_resource: Resource<u32, Result<Vec<AllowanceType>, ApiError>>,
    pub form: AllowanceTypeFormState,
    pub save_action: Action<SaveAllowanceType, Result<AllowanceType, ApiError>>,
    pub delete_action: Action<u64, Result<MessageResponse, ApiError>>,
    /// Re-reads the type being edited so the form reflects the server copy.
    pub refresh_action: Action<u64, Result<AllowanceType, ApiError>>,
    /// Type awaiting delete confirmation.
    pub delete_target: RwSignal<Option<AllowanceType>>,
    pub message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
}

impl AllowanceTypesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AllowanceTypesRepository::new(api));
        let reload = create_rw_signal(0u32);
        let message = create_rw_signal(MessageState::default());
        let form = AllowanceTypeFormState::default();
        let delete_target = create_rw_signal(None::<AllowanceType>);

        let slot = RequestSlot::scoped();
        let types_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                slot.run(async move { repo.list().await })
            },
        );

        let save_action = create_action(move |save: &SaveAllowanceType| {
            let repo = repository.get_value();
            let save = save.clone();
            async move { repo.save(save.id, save.input).await }
        });

        let delete_action = create_action(move |id: &u64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete(id).await }
        });

        let refresh_action = create_action(move |id: &u64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.get(id).await }
        });

        create_effect(move |_| {
            if let Some(Ok(fresh)) = refresh_action.value().get() {
                form.refresh(&fresh);
            }
        });

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(saved) => {
                        let text = if form.editing.get_untracked().is_some() {
                            "手当タイプを更新しました"
                        } else {
                            "手当タイプを追加しました"
                        };
                        log::debug!("allowance type {} saved", saved.id);
                        message.update(|msg| msg.set_success(text));
                        form.reset();
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => message.update(|msg| msg.set_error(&err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                delete_target.set(None);
                match result {
                    Ok(_) => {
                        message.update(|msg| msg.set_success("手当タイプを削除しました"));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => message.update(|msg| msg.set_error(&err)),
                }
            }
        });

        Self {
            types_resource,
            form,
            save_action,
            delete_action,
            refresh_action,
            delete_target,
            message,
            reload,
        }
    }

    pub fn reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        self.message.update(|msg| msg.clear());
        match self.form.draft().to_input() {
            Ok(input) => self.save_action.dispatch(SaveAllowanceType {
                id: self.form.editing.get_untracked(),
                input,
            }),
            Err(text) => self.message.update(|msg| msg.set_error_message(text)),
        }
    }

    pub fn start_edit(&self, allowance: &AllowanceType) {
        self.message.update(|msg| msg.clear());
        self.form.load(allowance);
        self.refresh_action.dispatch(allowance.id);
    }

    pub fn cancel_edit(&self) {
        self.form.reset();
    }

    pub fn request_delete(&self, allowance: AllowanceType) {
        self.delete_target.set(Some(allowance));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(target) = self.delete_target.get_untracked() {
            self.message.update(|msg| msg.clear());
            self.delete_action.dispatch(target.id);
        }
    }
}

impl Default for AllowanceTypesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
