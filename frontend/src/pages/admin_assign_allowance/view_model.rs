use super::repository::AssignAllowanceRepository;
use super::utils::{kind_of, AssignmentFormState};
use crate::api::{
    AllowanceKind, AllowanceType, ApiClient, ApiError, Employee, EmployeeAllowance,
    EmployeeAllowanceInput, MessageResponse,
};
use crate::components::layout::MessageState;
use crate::utils::{period::YearMonth, task::RequestSlot};
use leptos::*;

#[derive(Clone)]
pub struct SaveGrant {
    pub id: Option<u64>,
    pub input: EmployeeAllowanceInput,
}

#[derive(Clone, Copy)]
pub struct AssignAllowanceViewModel {
    pub employees_resource: Resource<(), Result<Vec<Employee>, ApiError>>,
    pub types_resource: Resource<(), Result<Vec<AllowanceType>, ApiError>>,
    pub grants_resource: Resource<u32, Result<Vec<EmployeeAllowance>, ApiError>>,
    pub form: AssignmentFormState,
    pub save_action: Action<SaveGrant, Result<EmployeeAllowance, ApiError>>,
    /// Loads a grant into the form for editing.
    pub edit_action: Action<u64, Result<EmployeeAllowance, ApiError>>,
    pub delete_action: Action<u64, Result<MessageResponse, ApiError>>,
    pub delete_target: RwSignal<Option<EmployeeAllowance>>,
    pub message: RwSignal<MessageState>,
    default_period: YearMonth,
    reload: RwSignal<u32>,
}

impl AssignAllowanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AssignAllowanceRepository::new(api));
        let default_period = YearMonth::current();
        let form = AssignmentFormState::new(default_period);
        let reload = create_rw_signal(0u32);
        let message = create_rw_signal(MessageState::default());
        let delete_target = create_rw_signal(None::<EmployeeAllowance>);

        let employees_slot = RequestSlot::scoped();
        let employees_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                employees_slot.run(async move { repo.employees().await })
            },
        );

        let types_slot = RequestSlot::scoped();
        let types_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                types_slot.run(async move { repo.allowance_types().await })
            },
        );

        let grants_slot = RequestSlot::scoped();
        let grants_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                grants_slot.run(async move { repo.grants().await })
            },
        );

        let save_action = create_action(move |save: &SaveGrant| {
            let repo = repository.get_value();
            let save = save.clone();
            async move { repo.save(save.id, save.input).await }
        });

        let edit_action = create_action(move |id: &u64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.grant(id).await }
        });

        let delete_action = create_action(move |id: &u64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete(id).await }
        });

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(_) => {
                        let text = if form.editing.get_untracked().is_some() {
                            "手当割り当てを更新しました"
                        } else {
                            "手当割り当てが登録されました"
                        };
                        message.update(|msg| msg.set_success(text));
                        form.reset(default_period);
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => message.update(|msg| msg.set_error(&err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = edit_action.value().get() {
                match result {
                    Ok(grant) => form.load(&grant),
                    Err(err) => message.update(|msg| msg.set_error(&err)),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                delete_target.set(None);
                match result {
                    Ok(_) => {
                        message.update(|msg| msg.set_success("手当割り当てを削除しました"));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => message.update(|msg| msg.set_error(&err)),
                }
            }
        });

        Self {
            employees_resource,
            types_resource,
            grants_resource,
            form,
            save_action,
            edit_action,
            delete_action,
            delete_target,
            message,
            default_period,
            reload,
        }
    }

    /// Kind of the allowance type currently selected in the form.
    pub fn selected_kind(&self) -> Option<AllowanceKind> {
        let selected = self.form.allowance_type_id.get();
        match self.types_resource.get() {
            Some(Ok(types)) => kind_of(&types, selected),
            _ => None,
        }
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        self.message.update(|msg| msg.clear());
        let kind = untrack(|| self.selected_kind());
        match self.form.draft().to_input(kind) {
            Ok(input) => self.save_action.dispatch(SaveGrant {
                id: self.form.editing.get_untracked(),
                input,
            }),
            Err(text) => self.message.update(|msg| msg.set_error_message(text)),
        }
    }

    pub fn start_edit(&self, id: u64) {
        self.message.update(|msg| msg.clear());
        self.edit_action.dispatch(id);
    }

    pub fn cancel_edit(&self) {
        self.form.reset(self.default_period);
    }

    pub fn request_delete(&self, grant: EmployeeAllowance) {
        self.delete_target.set(Some(grant));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(id) = self.delete_target.get_untracked().and_then(|grant| grant.id) {
            self.message.update(|msg| msg.clear());
            self.delete_action.dispatch(id);
        }
    }

    pub fn reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for AssignAllowanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}
