use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Message shown in a form's status region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub status: Option<FormStatus>,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.status {
        Some(status) => html! {
            <div ref={props.node_ref.clone()} class={classes!("form-status", status.kind.class())}>
                {status.message.clone()}
            </div>
        },
        None => html! {
            <div ref={props.node_ref.clone()} class="form-status" style="display: none;"></div>
        },
    }
}

/// Inline message under a field.
pub fn error_slot(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! { <span class="error-message" style="display: block;">{message.to_string()}</span> },
        None => html! { <span class="error-message"></span> },
    }
}
