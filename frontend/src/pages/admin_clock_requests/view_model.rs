use super::repository::ClockRequestsRepository;
use super::utils::{to_filter, Review, ReviewDecision};
use crate::api::{ApiClient, ApiError, ClockRequest, ClockRequestFilter, RequestStatus};
use crate::components::layout::MessageState;
use crate::utils::task::RequestSlot;
use leptos::*;

#[derive(Clone, Copy)]
pub struct ClockRequestsViewModel {
    pub status_filter: RwSignal<Option<RequestStatus>>,
    pub requests_resource: Resource<(ClockRequestFilter, u32), Result<Vec<ClockRequest>, ApiError>>,
    pub review_action: Action<Review, Result<ReviewDecision, ApiError>>,
    pub message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
}

impl ClockRequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(ClockRequestsRepository::new(api));
        let status_filter = create_rw_signal(None::<RequestStatus>);
        let reload = create_rw_signal(0u32);
        let message = create_rw_signal(MessageState::default());

        let slot = RequestSlot::scoped();
        let requests_resource = create_resource(
            move || (to_filter(status_filter.get()), reload.get()),
            move |(filter, _)| {
                let repo = repository.get_value();
                slot.run(async move { repo.list(filter).await })
            },
        );

        let review_action = create_action(move |review: &Review| {
            let repo = repository.get_value();
            let review = *review;
            async move { repo.review(review).await.map(|_| review.decision) }
        });

        create_effect(move |_| {
            if let Some(result) = review_action.value().get() {
                match result {
                    Ok(decision) => {
                        message.update(|msg| msg.set_success(decision.done_message()));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(err) => message.update(|msg| msg.set_error(&err)),
                }
            }
        });

        Self {
            status_filter,
            requests_resource,
            review_action,
            message,
            reload,
        }
    }

    pub fn set_status_filter(&self, status: Option<RequestStatus>) {
        self.status_filter.set(status);
    }

    pub fn reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn review(&self, review: Review) {
        if self.review_action.pending().get_untracked() {
            return;
        }
        self.message.update(|msg| msg.clear());
        self.review_action.dispatch(review);
    }
}

impl Default for ClockRequestsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
