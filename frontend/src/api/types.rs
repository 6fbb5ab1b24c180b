use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// The request never produced a response.
    Network,
    /// The server answered with a non-2xx status.
    Server,
    /// A 2xx response whose body did not match the expected shape.
    Decode,
    /// The owning view dropped or superseded the request.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: msg.into(),
            status: None,
        }
    }

    pub fn server(status: u16, msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Server,
            message: msg.into(),
            status: Some(status),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Decode,
            message: msg.into(),
            status: None,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            kind: ApiErrorKind::Cancelled,
            message: "request cancelled".to_string(),
            status: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ApiErrorKind::Cancelled
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401))
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

/// Error body shape returned by the backend: `{"error": "..."}` or `{"message": "..."}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|s| !s.is_empty())
            .or(self.message.filter(|s| !s.is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "id")]
    pub account_id: u64,
    #[serde(default)]
    pub company_id: u64,
    #[serde(default)]
    pub is_admin: bool,
    pub email: String,
    #[serde(default)]
    pub company: Option<Company>,
}

impl UserProfile {
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attendances: Vec<Attendance>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time_clocks: Vec<TimeClock>,
    #[serde(default)]
    pub line_linked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: u64,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendance {
    pub check_in: String,
    pub check_out: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockType {
    ClockIn,
    ClockOut,
    BreakBegin,
    BreakEnd,
}

impl ClockType {
    pub const ALL: [ClockType; 4] = [
        ClockType::ClockIn,
        ClockType::ClockOut,
        ClockType::BreakBegin,
        ClockType::BreakEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClockType::ClockIn => "clock_in",
            ClockType::ClockOut => "clock_out",
            ClockType::BreakBegin => "break_begin",
            ClockType::BreakEnd => "break_end",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClockType::ClockIn => "出勤",
            ClockType::ClockOut => "退勤",
            ClockType::BreakBegin => "休憩開始",
            ClockType::BreakEnd => "休憩終了",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeClock {
    pub id: u64,
    pub employee_id: u64,
    #[serde(rename = "type")]
    pub kind: ClockType,
    pub timestamp: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /time_clocks`. Notification fields are left out entirely
/// unless `notify` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTimeClock {
    pub employee_id: u64,
    #[serde(rename = "type")]
    pub kind: ClockType,
    pub timestamp: String,
    pub notify: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_m: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "承認待ち",
            RequestStatus::Approved => "承認済み",
            RequestStatus::Rejected => "却下",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockRequest {
    pub id: u64,
    pub employee_id: u64,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub clock_id: u64,
    #[serde(rename = "type")]
    pub kind: ClockType,
    pub time: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub reviewed_by: Option<u64>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClockRequest {
    pub employee_id: u64,
    #[serde(rename = "type")]
    pub kind: ClockType,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockRequestFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceKind {
    Commission,
    Fixed,
}

impl AllowanceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AllowanceKind::Commission => "commission",
            AllowanceKind::Fixed => "fixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AllowanceKind::Commission => "歩合",
            AllowanceKind::Fixed => "固定",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "commission" => Some(AllowanceKind::Commission),
            "fixed" => Some(AllowanceKind::Fixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceType {
    pub id: u64,
    #[serde(default)]
    pub company_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AllowanceKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub commission_rate: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for creating or updating an allowance type. `commission_rate` is a
/// fraction (0.075 for 7.5%) and only sent for commission types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceTypeInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AllowanceKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAllowance {
    #[serde(default)]
    pub id: Option<u64>,
    pub employee_id: u64,
    pub allowance_type_id: u64,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub commission_rate: Option<f64>,
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub allowance_type_name: Option<String>,
    #[serde(default)]
    pub allowance_type: Option<Value>,
}

impl EmployeeAllowance {
    /// Allowance type name, whether the server sent it flat or nested.
    pub fn type_name(&self) -> Option<String> {
        self.allowance_type_name.clone().or_else(|| match &self.allowance_type {
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Object(map)) => map.get("name").and_then(Value::as_str).map(str::to_string),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAllowanceInput {
    pub employee_id: u64,
    pub allowance_type_id: u64,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResponse {
    #[serde(default)]
    pub employee_name: String,
    #[serde(default)]
    pub gross_salary: f64,
    #[serde(default)]
    pub total_allowance: f64,
    #[serde(default)]
    pub health_insurance: f64,
    #[serde(default)]
    pub pension: f64,
    #[serde(default)]
    pub total_deductions: f64,
    #[serde(default)]
    pub net_salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub id: u64,
    pub employee_id: u64,
    pub date: String,
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub break_minutes: i64,
    #[serde(default)]
    pub work_minutes: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn api_error_display_and_string_conversion_match_message() {
        let error = ApiError::server(500, "boom");
        assert_eq!(format!("{}", error), "boom");
        assert_eq!(error.status, Some(500));
        let raw: String = ApiError::network("offline").into();
        assert_eq!(raw, "offline");
        assert!(ApiError::cancelled().is_cancelled());
        assert!(ApiError::server(401, "unauthorized").is_unauthorized());
    }

    #[wasm_bindgen_test]
    fn error_body_prefers_error_then_message() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "error": "bad", "message": "ignored" })).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("bad"));
        let body: ErrorBody = serde_json::from_value(json!({ "message": "fallback" })).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("fallback"));
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "x" })).unwrap();
        assert!(body.into_message().is_none());
    }

    #[wasm_bindgen_test]
    fn employee_tolerates_null_collections() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "name": "Aoki",
            "created_at": "2024-01-01T00:00:00Z",
            "time_clocks": null
        }))
        .unwrap();
        assert!(employee.time_clocks.is_empty());
        assert!(employee.attendances.is_empty());
        assert!(!employee.line_linked);
    }

    #[wasm_bindgen_test]
    fn create_time_clock_omits_notify_fields_when_unset() {
        let body = CreateTimeClock {
            employee_id: 1,
            kind: ClockType::ClockIn,
            timestamp: "2025-03-01T09:00:00+09:00".into(),
            notify: false,
            notify_at: None,
            delay_h: None,
            delay_m: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "clock_in");
        assert_eq!(value["notify"], false);
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("notify_at"));
        assert!(!obj.contains_key("delay_h"));
        assert!(!obj.contains_key("delay_m"));
    }

    #[wasm_bindgen_test]
    fn user_profile_accepts_id_alias() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 7,
            "email": "admin@example.com",
            "is_admin": true,
            "company": { "id": 3, "name": "Acme" }
        }))
        .unwrap();
        assert_eq!(profile.account_id, 7);
        assert_eq!(profile.company_name(), Some("Acme"));
    }

    #[wasm_bindgen_test]
    fn employee_allowance_type_name_reads_nested_object() {
        let allowance: EmployeeAllowance = serde_json::from_value(json!({
            "id": 1,
            "employee_id": 2,
            "allowance_type_id": 3,
            "amount": 5000,
            "year": 2025,
            "month": 4,
            "allowance_type": { "id": 3, "name": "営業手当" }
        }))
        .unwrap();
        assert_eq!(allowance.type_name().as_deref(), Some("営業手当"));
    }

    #[wasm_bindgen_test]
    fn labels_cover_every_variant() {
        assert_eq!(ClockType::BreakBegin.label(), "休憩開始");
        assert_eq!(ClockType::parse("clock_out"), Some(ClockType::ClockOut));
        assert_eq!(RequestStatus::Rejected.label(), "却下");
        assert_eq!(RequestStatus::parse("pending"), Some(RequestStatus::Pending));
        assert_eq!(AllowanceKind::parse("fixed"), Some(AllowanceKind::Fixed));
        assert_eq!(AllowanceKind::parse("other"), None);
    }
}
