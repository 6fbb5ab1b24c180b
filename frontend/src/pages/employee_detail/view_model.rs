use super::repository::EmployeeDetailRepository;
use super::utils::{
    build_clock_request, build_time_clock_payload, ClockRequestFormState, TimeClockFormState,
};
use crate::api::{
    ApiClient, ApiError, ClockRequest, CreateClockRequest, CreateTimeClock, Employee,
    PayrollResponse, TimeClock, WorkRecord,
};
use crate::components::layout::MessageState;
use crate::utils::{period::YearMonth, task::RequestSlot};
use leptos::*;

#[derive(Clone)]
pub struct ClockRequestSubmission {
    pub clock_id: u64,
    pub payload: CreateClockRequest,
}

/// State of one employee's detail page. Every fetch is keyed on the
/// selected period and an invalidation token, and runs in its own
/// [`RequestSlot`] so a newer query supersedes an older one.
#[derive(Clone, Copy)]
pub struct EmployeeDetailViewModel {
    pub employee_id: u64,
    pub period: RwSignal<YearMonth>,
    pub employee_resource: Resource<(), Result<Employee, ApiError>>,
    pub time_clocks_resource: Resource<(YearMonth, u32), Result<Vec<TimeClock>, ApiError>>,
    pub payroll_resource: Resource<(YearMonth, u32), Result<PayrollResponse, ApiError>>,
    pub work_records_resource: Resource<u32, Result<Vec<WorkRecord>, ApiError>>,
    pub clock_form: TimeClockFormState,
    pub clock_message: RwSignal<MessageState>,
    pub create_clock_action: Action<CreateTimeClock, Result<TimeClock, ApiError>>,
    pub request_target: RwSignal<Option<TimeClock>>,
    pub request_form: ClockRequestFormState,
    pub request_error: RwSignal<Option<String>>,
    pub request_message: RwSignal<MessageState>,
    pub request_action: Action<ClockRequestSubmission, Result<ClockRequest, ApiError>>,
    invalidation: RwSignal<u32>,
}

impl EmployeeDetailViewModel {
    pub fn new(employee_id: u64) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(EmployeeDetailRepository::new(api));

        let period = create_rw_signal(YearMonth::current());
        let invalidation = create_rw_signal(0u32);

        let employee_slot = RequestSlot::scoped();
        let employee_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                employee_slot.run(async move { repo.employee(employee_id).await })
            },
        );

        let clocks_slot = RequestSlot::scoped();
        let time_clocks_resource = create_resource(
            move || (period.get(), invalidation.get()),
            move |(period, _)| {
                let repo = repository.get_value();
                clocks_slot.run(async move { repo.time_clocks(employee_id, period).await })
            },
        );

        let payroll_slot = RequestSlot::scoped();
        let payroll_resource = create_resource(
            move || (period.get(), invalidation.get()),
            move |(period, _)| {
                let repo = repository.get_value();
                payroll_slot.run(async move { repo.payroll(employee_id, period).await })
            },
        );

        let records_slot = RequestSlot::scoped();
        let work_records_resource = create_resource(
            move || invalidation.get(),
            move |_| {
                let repo = repository.get_value();
                records_slot.run(async move { repo.work_records(employee_id).await })
            },
        );

        let clock_form = TimeClockFormState::default();
        let clock_message = create_rw_signal(MessageState::default());
        let create_clock_action = create_action(move |payload: &CreateTimeClock| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create_time_clock(payload).await }
        });

        let request_target = create_rw_signal(None::<TimeClock>);
        let request_form = ClockRequestFormState::default();
        let request_error = create_rw_signal(None::<String>);
        let request_message = create_rw_signal(MessageState::default());
        let request_action = create_action(move |submission: &ClockRequestSubmission| {
            let repo = repository.get_value();
            let submission = submission.clone();
            async move {
                repo.request_correction(submission.clock_id, submission.payload)
                    .await
            }
        });

        create_effect(move |_| {
            if let Some(result) = create_clock_action.value().get() {
                match result {
                    Ok(clock) => {
                        log::debug!("time clock {} created", clock.id);
                        clock_message.update(|msg| msg.set_success("登録に成功しました！"));
                        clock_form.reset();
                        invalidation.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => clock_message
                        .update(|msg| msg.set_error_message(format!("エラー: {}", err.message))),
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = request_action.value().get() {
                match result {
                    Ok(_) => {
                        request_target.set(None);
                        request_error.set(None);
                        request_message.update(|msg| msg.set_success("打刻修正申請を送信しました"));
                    }
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => request_error.set(Some(err.message)),
                }
            }
        });

        Self {
            employee_id,
            period,
            employee_resource,
            time_clocks_resource,
            payroll_resource,
            work_records_resource,
            clock_form,
            clock_message,
            create_clock_action,
            request_target,
            request_form,
            request_error,
            request_message,
            request_action,
            invalidation,
        }
    }

    pub fn set_period(&self, period: YearMonth) {
        self.period.set(period);
    }

    /// Re-fetches the period-dependent data after a mutation.
    pub fn invalidate(&self) {
        self.invalidation.update(|value| *value = value.wrapping_add(1));
    }

    pub fn submit_clock(&self) {
        if self.create_clock_action.pending().get_untracked() {
            return;
        }
        self.clock_message.update(|msg| msg.clear());
        match build_time_clock_payload(self.employee_id, &self.clock_form.draft()) {
            Ok(payload) => self.create_clock_action.dispatch(payload),
            Err(msg) => self
                .clock_message
                .update(|state| state.set_error_message(format!("エラー: {}", msg))),
        }
    }

    pub fn open_request(&self, clock: TimeClock) {
        self.request_form.load(&clock);
        self.request_error.set(None);
        self.request_target.set(Some(clock));
    }

    pub fn close_request(&self) {
        self.request_target.set(None);
        self.request_error.set(None);
    }

    pub fn submit_request(&self) {
        if self.request_action.pending().get_untracked() {
            return;
        }
        let Some(clock) = self.request_target.get_untracked() else {
            return;
        };
        let form = self.request_form;
        match build_clock_request(
            self.employee_id,
            form.kind.get_untracked(),
            &form.time.get_untracked(),
            &form.reason.get_untracked(),
        ) {
            Ok(payload) => self.request_action.dispatch(ClockRequestSubmission {
                clock_id: clock.id,
                payload,
            }),
            Err(msg) => self.request_error.set(Some(msg)),
        }
    }
}
