use common::model::custom_field::{CustomField, EntityKind, FieldKind};

pub enum Msg {
    Loaded {
        investor_fields: Vec<CustomField>,
        investment_fields: Vec<CustomField>,
    },
    LoadFailed(String),

    OpenForm,
    CloseForm,
    EntityChanged(EntityKind),
    NameChanged(String),
    KindChanged(FieldKind),
    RequiredToggled(bool),
    OptionsChanged(String),
    Submit,
    Created(CustomField),
    CreateFailed(String),

    Delete {
        id: String,
        entity: EntityKind,
    },
    DeleteSettled {
        id: String,
        entity: EntityKind,
        result: Result<(), String>,
    },
}
