use crate::api::{AllowanceKind, AllowanceType, AllowanceTypeInput};
use crate::utils::rate::{fraction_to_percent_input, parse_percent};
use leptos::*;

/// The commission field only applies to commission allowances.
pub fn shows_commission_field(kind: Option<AllowanceKind>) -> bool {
    kind == Some(AllowanceKind::Commission)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllowanceTypeDraft {
    pub name: String,
    pub kind: Option<AllowanceKind>,
    pub description: String,
    /// Percentage as typed, e.g. `"7.5"`.
    pub commission_percent: String,
}

impl AllowanceTypeDraft {
    pub fn from_type(allowance: &AllowanceType) -> Self {
        let commission_percent = match (allowance.kind, allowance.commission_rate) {
            (AllowanceKind::Commission, Some(rate)) => fraction_to_percent_input(rate),
            _ => String::new(),
        };
        Self {
            name: allowance.name.clone(),
            kind: Some(allowance.kind),
            description: allowance.description.clone(),
            commission_percent,
        }
    }

    pub fn to_input(&self) -> Result<AllowanceTypeInput, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("名前を入力してください".into());
        }
        let kind = self.kind.ok_or_else(|| "タイプを選択してください".to_string())?;
        let commission_rate = if shows_commission_field(Some(kind)) {
            Some(
                parse_percent(&self.commission_percent)
                    .ok_or_else(|| "歩合率は0以上の数値で入力してください".to_string())?,
            )
        } else {
            None
        };
        Ok(AllowanceTypeInput {
            name: name.to_string(),
            kind,
            description: self.description.trim().to_string(),
            commission_rate,
        })
    }
}

#[derive(Clone, Copy)]
pub struct AllowanceTypeFormState {
    pub name: RwSignal<String>,
    pub kind: RwSignal<Option<AllowanceKind>>,
    pub description: RwSignal<String>,
    pub commission_percent: RwSignal<String>,
    /// Id of the type being edited; `None` while adding.
    pub editing: RwSignal<Option<u64>>,
    /// Values last written by `load`, to tell user edits apart.
    loaded: RwSignal<Option<AllowanceTypeDraft>>,
}

impl Default for AllowanceTypeFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            kind: create_rw_signal(None),
            description: create_rw_signal(String::new()),
            commission_percent: create_rw_signal(String::new()),
            editing: create_rw_signal(None),
            loaded: create_rw_signal(None),
        }
    }
}

impl AllowanceTypeFormState {
    pub fn draft(&self) -> AllowanceTypeDraft {
        AllowanceTypeDraft {
            name: self.name.get_untracked(),
            kind: self.kind.get_untracked(),
            description: self.description.get_untracked(),
            commission_percent: self.commission_percent.get_untracked(),
        }
    }

    fn apply(&self, draft: AllowanceTypeDraft) {
        self.name.set(draft.name);
        self.kind.set(draft.kind);
        self.description.set(draft.description);
        self.commission_percent.set(draft.commission_percent);
    }

    pub fn load(&self, allowance: &AllowanceType) {
        let draft = AllowanceTypeDraft::from_type(allowance);
        self.loaded.set(Some(draft.clone()));
        self.apply(draft);
        self.editing.set(Some(allowance.id));
    }

    /// True while the fields still hold what `load` put there.
    pub fn is_untouched(&self) -> bool {
        self.loaded
            .with_untracked(|loaded| loaded.as_ref() == Some(&self.draft()))
    }

    /// Replaces the form with a freshly fetched row, unless the user has
    /// moved on to another row or already started typing.
    pub fn refresh(&self, fresh: &AllowanceType) -> bool {
        if self.editing.get_untracked() != Some(fresh.id) || !self.is_untouched() {
            return false;
        }
        self.load(fresh);
        true
    }

    pub fn reset(&self) {
        self.apply(AllowanceTypeDraft::default());
        self.editing.set(None);
        self.loaded.set(None);
    }
}
