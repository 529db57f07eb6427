use crate::forms::simple::HONEYPOT_FIELD;
use crate::forms::validation::{FieldKind, FieldSpec};

pub const CATEGORIES: [(&str, &str); 4] = [
    ("business", "Business Cards"),
    ("wedding", "Wedding Stationery"),
    ("packaging", "Custom Packaging"),
    ("merchandise", "Merchandise"),
];

pub const SIZES: [(&str, &str); 4] = [
    ("Standard", "Standard"),
    ("A5", "A5"),
    ("A4", "A4"),
    ("Custom", "Custom"),
];

pub const PAPERS: [(&str, &str); 4] = [
    ("Matte", "Matte"),
    ("Gloss", "Gloss"),
    ("Recycled", "Recycled"),
    ("Textured", "Textured"),
];

/// The controls one wizard page owns.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}

pub fn quote_steps() -> Vec<StepSpec> {
    vec![
        StepSpec {
            title: "Category",
            fields: vec![FieldSpec::new("category", FieldKind::Choice)
                .required()
                .with_options(&CATEGORIES)
                .with_required_message("Please select a category")],
        },
        StepSpec {
            title: "Details",
            fields: vec![
                FieldSpec::new("quantity", FieldKind::Number).required(),
                FieldSpec::new("size", FieldKind::Choice).with_options(&SIZES),
                FieldSpec::new("paper", FieldKind::Choice).with_options(&PAPERS),
                FieldSpec::new("deadline", FieldKind::Text),
                FieldSpec::new("details", FieldKind::Text),
            ],
        },
        StepSpec {
            title: "Contact",
            fields: vec![
                FieldSpec::new("name", FieldKind::Text).required(),
                FieldSpec::new("email", FieldKind::Email).required(),
                FieldSpec::new("phone", FieldKind::Text),
                FieldSpec::new("company", FieldKind::Text),
                FieldSpec::new(HONEYPOT_FIELD, FieldKind::Text),
            ],
        },
    ]
}
