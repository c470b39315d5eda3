use common::model::custom_field::CustomField;
use common::model::investment::Investment;
use common::model::investor::Investor;

#[derive(Clone, Copy)]
pub enum FormField {
    Name,
    Relationship,
    Email,
    Phone,
    Address,
    PanNumber,
    DateOfBirth,
    Occupation,
    PhotoUrl,
}

pub enum Msg {
    Loaded {
        investors: Vec<Investor>,
        investments: Vec<Investment>,
        custom_fields: Vec<CustomField>,
    },
    LoadFailed(String),
    SearchChanged(String),

    OpenCreate,
    OpenEdit(Investor),
    CloseEditor,
    FormChanged(FormField, String),
    CustomValueChanged(String, String),
    Submit,
    Saved {
        investor: Investor,
        updated: bool,
    },
    SaveFailed(String),

    RequestDelete(Investor),
    CancelDelete,
    ConfirmDelete,
    DeleteSettled {
        id: String,
        label: String,
        result: Result<(), String>,
    },
}
