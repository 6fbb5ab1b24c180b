use crate::api::{ClockRequest, ClockRequestFilter, RequestStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn done_message(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "申請を承認しました",
            ReviewDecision::Reject => "申請を却下しました",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub id: u64,
    pub decision: ReviewDecision,
}

/// Select value for a status filter; the empty string means every status.
pub fn status_filter_value(status: Option<RequestStatus>) -> &'static str {
    status.map(RequestStatus::as_str).unwrap_or("")
}

pub fn parse_status_filter(value: &str) -> Option<RequestStatus> {
    RequestStatus::parse(value)
}

pub fn to_filter(status: Option<RequestStatus>) -> ClockRequestFilter {
    ClockRequestFilter {
        employee_id: None,
        status,
    }
}

/// Only pending requests can still be approved or rejected.
pub fn can_review(request: &ClockRequest) -> bool {
    request.status == RequestStatus::Pending
}

pub fn reason_or_dash(reason: &str) -> &str {
    if reason.trim().is_empty() {
        "―"
    } else {
        reason
    }
}
