use crate::api::{ClockType, CreateClockRequest, CreateTimeClock, TimeClock, WorkRecord};
use crate::utils::period::YearMonth;
use crate::utils::time::{datetime_local_to_rfc3339, to_datetime_local, year_month_of};
use chrono::NaiveTime;
use leptos::*;

/// How a clock-in notification is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyMode {
    /// Hours and minutes after the stamped time.
    #[default]
    Delay,
    /// A wall-clock time on the stamped day.
    At,
}

impl NotifyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyMode::Delay => "delay",
            NotifyMode::At => "at",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "at" => NotifyMode::At,
            _ => NotifyMode::Delay,
        }
    }
}

/// Raw field values of the time-clock form.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeClockDraft {
    pub kind: ClockType,
    pub timestamp: String,
    pub notify: bool,
    pub mode: NotifyMode,
    pub delay_h: String,
    pub delay_m: String,
    pub notify_at: String,
}

impl Default for TimeClockDraft {
    fn default() -> Self {
        Self {
            kind: ClockType::ClockIn,
            timestamp: String::new(),
            notify: false,
            mode: NotifyMode::Delay,
            delay_h: String::new(),
            delay_m: String::new(),
            notify_at: String::new(),
        }
    }
}

fn parse_delay(raw: &str, max: u32, label: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    match raw.parse::<u32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(format!("{}は0〜{}の数値で入力してください", label, max)),
    }
}

/// Builds the `POST /time_clocks` body. Notification fields are only
/// populated when `notify` is set, and only those of the chosen mode.
pub fn build_time_clock_payload(
    employee_id: u64,
    draft: &TimeClockDraft,
) -> Result<CreateTimeClock, String> {
    let timestamp = datetime_local_to_rfc3339(&draft.timestamp)
        .ok_or_else(|| "打刻日時を入力してください".to_string())?;

    // Reminders are only scheduled for clock-ins.
    let notify = draft.notify && draft.kind == ClockType::ClockIn;
    let mut payload = CreateTimeClock {
        employee_id,
        kind: draft.kind,
        timestamp,
        notify,
        notify_at: None,
        delay_h: None,
        delay_m: None,
    };
    if !notify {
        return Ok(payload);
    }

    match draft.mode {
        NotifyMode::Delay => {
            payload.delay_h = Some(parse_delay(&draft.delay_h, 23, "時間")?);
            payload.delay_m = Some(parse_delay(&draft.delay_m, 59, "分")?);
        }
        NotifyMode::At => {
            let at = NaiveTime::parse_from_str(draft.notify_at.trim(), "%H:%M")
                .map_err(|_| "通知時刻を HH:MM 形式で入力してください".to_string())?;
            payload.notify_at = Some(at.format("%H:%M").to_string());
        }
    }
    Ok(payload)
}

/// Body of a correction request; `time_local` comes from a datetime-local input.
pub fn build_clock_request(
    employee_id: u64,
    kind: ClockType,
    time_local: &str,
    reason: &str,
) -> Result<CreateClockRequest, String> {
    let time = datetime_local_to_rfc3339(time_local)
        .ok_or_else(|| "打刻日時を入力してください".to_string())?;
    Ok(CreateClockRequest {
        employee_id,
        kind,
        time,
        reason: reason.trim().to_string(),
    })
}

pub fn records_in_period(records: &[WorkRecord], period: YearMonth) -> Vec<WorkRecord> {
    records
        .iter()
        .filter(|record| year_month_of(&record.date) == Some((period.year, period.month)))
        .cloned()
        .collect()
}

/// `1234567` becomes `1,234,567 円`. Fractions round to the nearest yen.
pub fn format_yen(amount: f64) -> String {
    let amount = amount.round() as i64;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} 円", sign, grouped)
}

#[derive(Clone, Copy)]
pub struct TimeClockFormState {
    pub kind: RwSignal<ClockType>,
    pub timestamp: RwSignal<String>,
    pub notify: RwSignal<bool>,
    pub mode: RwSignal<NotifyMode>,
    pub delay_h: RwSignal<String>,
    pub delay_m: RwSignal<String>,
    pub notify_at: RwSignal<String>,
}

impl Default for TimeClockFormState {
    fn default() -> Self {
        let draft = TimeClockDraft::default();
        Self {
            kind: create_rw_signal(draft.kind),
            timestamp: create_rw_signal(draft.timestamp),
            notify: create_rw_signal(draft.notify),
            mode: create_rw_signal(draft.mode),
            delay_h: create_rw_signal(draft.delay_h),
            delay_m: create_rw_signal(draft.delay_m),
            notify_at: create_rw_signal(draft.notify_at),
        }
    }
}

impl TimeClockFormState {
    pub fn draft(&self) -> TimeClockDraft {
        TimeClockDraft {
            kind: self.kind.get_untracked(),
            timestamp: self.timestamp.get_untracked(),
            notify: self.notify.get_untracked(),
            mode: self.mode.get_untracked(),
            delay_h: self.delay_h.get_untracked(),
            delay_m: self.delay_m.get_untracked(),
            notify_at: self.notify_at.get_untracked(),
        }
    }

    /// Clears the per-entry fields; type and notification preferences stay.
    pub fn reset(&self) {
        self.timestamp.set(String::new());
    }
}

#[derive(Clone, Copy)]
pub struct ClockRequestFormState {
    pub kind: RwSignal<ClockType>,
    pub time: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl Default for ClockRequestFormState {
    fn default() -> Self {
        Self {
            kind: create_rw_signal(ClockType::ClockIn),
            time: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl ClockRequestFormState {
    /// Pre-fills the form from the clock being corrected.
    pub fn load(&self, clock: &TimeClock) {
        self.kind.set(clock.kind);
        self.time.set(to_datetime_local(&clock.timestamp));
        self.reason.set(String::new());
    }
}
