use yew::NodeRef;

use common::model::custom_field::{CustomField, EntityKind, FieldKind};

pub struct SettingsComponent {
    pub investor_fields: Vec<CustomField>,
    pub investment_fields: Vec<CustomField>,
    pub loading: bool,
    pub form: FieldForm,
    pub sheet_ref: NodeRef,
}

/// Raw state of the add-field dialog. Dropdown options are entered as one
/// comma-separated line and split at submit.
#[derive(Clone)]
pub struct FieldForm {
    pub entity_type: EntityKind,
    pub field_name: String,
    pub field_type: FieldKind,
    pub is_required: bool,
    pub options_raw: String,
}

impl Default for FieldForm {
    fn default() -> Self {
        Self {
            entity_type: EntityKind::Investor,
            field_name: String::new(),
            field_type: FieldKind::Text,
            is_required: false,
            options_raw: String::new(),
        }
    }
}

impl SettingsComponent {
    pub fn new() -> Self {
        Self {
            investor_fields: Vec::new(),
            investment_fields: Vec::new(),
            loading: true,
            form: FieldForm::default(),
            sheet_ref: NodeRef::default(),
        }
    }

    pub fn fields_for_mut(&mut self, entity: EntityKind) -> &mut Vec<CustomField> {
        match entity {
            EntityKind::Investor => &mut self.investor_fields,
            EntityKind::Investment => &mut self.investment_fields,
        }
    }
}
