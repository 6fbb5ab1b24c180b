use crate::api::{AllowanceKind, AllowanceType, EmployeeAllowance, EmployeeAllowanceInput};
use crate::utils::period::YearMonth;
use crate::utils::rate::{fraction_to_percent_input, parse_percent};
use leptos::*;

pub fn kind_of(types: &[AllowanceType], allowance_type_id: Option<u64>) -> Option<AllowanceKind> {
    let id = allowance_type_id?;
    types.iter().find(|t| t.id == id).map(|t| t.kind)
}

/// Parses a `<select>` value; the placeholder option is the empty string.
pub fn parse_id(value: &str) -> Option<u64> {
    value.trim().parse().ok().filter(|id| *id > 0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDraft {
    pub employee_id: Option<u64>,
    pub allowance_type_id: Option<u64>,
    pub amount: String,
    pub commission_percent: String,
    pub year: String,
    pub month: String,
}

impl AssignmentDraft {
    pub fn for_period(period: YearMonth) -> Self {
        Self {
            employee_id: None,
            allowance_type_id: None,
            amount: String::new(),
            commission_percent: String::new(),
            year: period.year.to_string(),
            month: period.month.to_string(),
        }
    }

    pub fn from_grant(grant: &EmployeeAllowance) -> Self {
        Self {
            employee_id: Some(grant.employee_id),
            allowance_type_id: Some(grant.allowance_type_id),
            amount: grant.amount.to_string(),
            commission_percent: grant
                .commission_rate
                .map(fraction_to_percent_input)
                .unwrap_or_default(),
            year: grant.year.to_string(),
            month: grant.month.to_string(),
        }
    }

    /// `kind` is the kind of the selected allowance type. The rate is only
    /// sent for commission types.
    pub fn to_input(&self, kind: Option<AllowanceKind>) -> Result<EmployeeAllowanceInput, String> {
        let employee_id = self
            .employee_id
            .ok_or_else(|| "従業員を選択してください".to_string())?;
        let allowance_type_id = self
            .allowance_type_id
            .ok_or_else(|| "手当タイプを選択してください".to_string())?;
        let amount = self
            .amount
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|amount| *amount >= 0)
            .ok_or_else(|| "金額は0以上の整数で入力してください".to_string())?;
        let commission_rate = if kind == Some(AllowanceKind::Commission) {
            Some(
                parse_percent(&self.commission_percent)
                    .ok_or_else(|| "歩合率は0以上の数値で入力してください".to_string())?,
            )
        } else {
            None
        };
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|year| *year > 0)
            .ok_or_else(|| "年を正しく入力してください".to_string())?;
        let month = self
            .month
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or_else(|| "月は1〜12で入力してください".to_string())?;

        Ok(EmployeeAllowanceInput {
            employee_id,
            allowance_type_id,
            amount,
            commission_rate,
            year,
            month,
        })
    }
}

#[derive(Clone, Copy)]
pub struct AssignmentFormState {
    pub employee_id: RwSignal<Option<u64>>,
    pub allowance_type_id: RwSignal<Option<u64>>,
    pub amount: RwSignal<String>,
    pub commission_percent: RwSignal<String>,
    pub year: RwSignal<String>,
    pub month: RwSignal<String>,
    /// Id of the grant being edited; `None` while assigning a new one.
    pub editing: RwSignal<Option<u64>>,
}

impl AssignmentFormState {
    pub fn new(period: YearMonth) -> Self {
        let draft = AssignmentDraft::for_period(period);
        Self {
            employee_id: create_rw_signal(draft.employee_id),
            allowance_type_id: create_rw_signal(draft.allowance_type_id),
            amount: create_rw_signal(draft.amount),
            commission_percent: create_rw_signal(draft.commission_percent),
            year: create_rw_signal(draft.year),
            month: create_rw_signal(draft.month),
            editing: create_rw_signal(None),
        }
    }

    pub fn draft(&self) -> AssignmentDraft {
        AssignmentDraft {
            employee_id: self.employee_id.get_untracked(),
            allowance_type_id: self.allowance_type_id.get_untracked(),
            amount: self.amount.get_untracked(),
            commission_percent: self.commission_percent.get_untracked(),
            year: self.year.get_untracked(),
            month: self.month.get_untracked(),
        }
    }

    fn apply(&self, draft: AssignmentDraft) {
        self.employee_id.set(draft.employee_id);
        self.allowance_type_id.set(draft.allowance_type_id);
        self.amount.set(draft.amount);
        self.commission_percent.set(draft.commission_percent);
        self.year.set(draft.year);
        self.month.set(draft.month);
    }

    pub fn load(&self, grant: &EmployeeAllowance) {
        self.apply(AssignmentDraft::from_grant(grant));
        self.editing.set(grant.id);
    }

    pub fn reset(&self, period: YearMonth) {
        self.apply(AssignmentDraft::for_period(period));
        self.editing.set(None);
    }
}
