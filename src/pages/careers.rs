use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::dom;
use crate::forms::simple::{SimpleForm, HONEYPOT_FIELD};
use crate::forms::status::{error_slot, FormStatus, StatusBanner};
use crate::forms::validation::{FieldKind, FieldSpec};

const APPLIED_MESSAGE: &str =
    "Thank you for your application! We'll review your resume and get back to you soon.";
const FAILED_MESSAGE: &str = "Failed to submit application. Please try again.";

struct Position {
    title: &'static str,
    kind: &'static str,
    summary: &'static str,
}

static POSITIONS: [Position; 3] = [
    Position {
        title: "Print Production Specialist",
        kind: "Full-time",
        summary: "Run our offset and digital presses and keep every job on spec.",
    },
    Position {
        title: "Graphic Designer",
        kind: "Full-time",
        summary: "Turn client briefs into print-ready artwork across every product line.",
    },
    Position {
        title: "Customer Success Coordinator",
        kind: "Part-time",
        summary: "Guide clients from first quote to final delivery.",
    },
];

pub fn application_form() -> SimpleForm {
    SimpleForm::new(
        "application",
        vec![
            FieldSpec::new("position", FieldKind::Text),
            FieldSpec::new("name", FieldKind::Text).required(),
            FieldSpec::new("email", FieldKind::Email).required(),
            FieldSpec::new("phone", FieldKind::Text),
            FieldSpec::new("coverLetter", FieldKind::Text),
            FieldSpec::new("resume", FieldKind::File).required(),
            FieldSpec::new(HONEYPOT_FIELD, FieldKind::Text),
        ],
    )
}

/// Which position the application modal is open for. Every open starts a new session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationModal {
    position: Option<&'static str>,
    session: u32,
}

pub enum ModalAction {
    Open(&'static str),
    Close,
    /// Delayed close after a successful send; ignored once that session is over.
    CloseSession(u32),
}

impl ApplicationModal {
    pub fn position(&self) -> Option<&'static str> {
        self.position
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    pub fn apply(self, action: ModalAction) -> Self {
        match action {
            ModalAction::Open(title) => Self {
                position: Some(title),
                session: self.session.wrapping_add(1),
            },
            ModalAction::Close => Self { position: None, ..self },
            ModalAction::CloseSession(session) if session == self.session => Self { position: None, ..self },
            ModalAction::CloseSession(_) => self,
        }
    }
}

impl Reducible for ApplicationModal {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: ModalAction) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[function_component(Careers)]
pub fn careers() -> Html {
    let modal = use_reducer(ApplicationModal::default);
    let form = use_state(application_form);
    let status = use_state(|| None::<FormStatus>);
    let submitting = use_state(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    {
        let form = form.clone();
        let status = status.clone();
        let close_timer = close_timer.clone();
        use_effect_with_deps(
            move |&(position, session): &(Option<&'static str>, u32)| {
                if session > 0 {
                    let mut next = application_form();
                    if let Some(title) = position {
                        next.input("position", title);
                    } else {
                        close_timer.borrow_mut().take();
                    }
                    form.set(next);
                    status.set(None);
                    dom::lock_body_scroll(position.is_some());
                }
                || ()
            },
            (modal.position(), modal.session()),
        );
    }

    let close_modal = {
        let modal = modal.dispatcher();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    {
        let close_modal = close_modal.clone();
        let is_open = modal.is_open();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && is_open {
                close_modal.emit(());
            }
        });
    }

    let open_modal = |title: &'static str| {
        let modal = modal.dispatcher();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Open(title)))
    };

    let on_input = {
        let form = form.clone();
        move |field: &'static str, value: String| {
            let mut next = (*form).clone();
            next.input(field, value);
            form.set(next);
        }
    };

    let on_blur = |field: &'static str| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.validate_field(field);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let submitting = submitting.clone();
        let modal_dispatch = modal.dispatcher();
        let session = modal.session();
        let close_timer = close_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_bot() || *submitting {
                return;
            }

            let mut checked = (*form).clone();
            let valid = checked.validate_all();
            let submission = checked.submission();
            form.set(checked);
            if !valid {
                return;
            }

            submitting.set(true);
            let status = status.clone();
            let submitting = submitting.clone();
            let modal_dispatch = modal_dispatch.clone();
            let close_timer = close_timer.clone();
            let transport = config::transport();
            spawn_local(async move {
                match transport.submit(submission).await {
                    Ok(()) => {
                        status.set(Some(FormStatus::success(APPLIED_MESSAGE)));
                        *close_timer.borrow_mut() = Some(Timeout::new(config::APPLICATION_CLOSE_MS, move || {
                            modal_dispatch.dispatch(ModalAction::CloseSession(session));
                        }));
                    }
                    Err(err) => {
                        log::warn!("Application submission failed: {}", err);
                        status.set(Some(FormStatus::error(FAILED_MESSAGE)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_backdrop = {
        let close_modal = close_modal.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                close_modal.emit(());
            }
        })
    };

    let text_input = |field: &'static str, label: &'static str, kind: &'static str| {
        let on_input = on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input(field, input.value());
        });
        html! {
            <div class="form-group">
                <label for={field}>{label}</label>
                <input id={field} name={field} type={kind}
                    class={classes!(form.has_error(field).then_some("error"))}
                    value={form.value(field).to_string()}
                    {oninput} onblur={on_blur(field)} />
                { error_slot(form.error(field)) }
            </div>
        }
    };

    let on_cover_letter = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input("coverLetter", area.value());
        })
    };

    let on_resume = {
        let on_input = on_input.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let name = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| file.name())
                .unwrap_or_default();
            on_input("resume", name);
        })
    };

    let on_honeypot = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input(HONEYPOT_FIELD, input.value());
        })
    };

    html! {
        <div class="careers-page">
            <section class="page-hero">
                <h1>{"Join the Team"}</h1>
                <p>{"We're a small shop that cares about ink, paper, and people."}</p>
            </section>
            <section class="positions">
                { for POSITIONS.iter().map(|position| html! {
                    <div class="position-card">
                        <h3>{position.title}</h3>
                        <span class="position-kind">{position.kind}</span>
                        <p>{position.summary}</p>
                        <button class="btn apply-btn" data-position={position.title} onclick={open_modal(position.title)}>
                            {"Apply Now"}
                        </button>
                    </div>
                }) }
            </section>
            <div id="applicationModal" class={classes!("modal", modal.is_open().then_some("active"))} onclick={on_backdrop}>
                <div class="modal-content">
                    <button id="modalClose" class="modal-close" onclick={close_modal.reform(|_: MouseEvent| ())}>{"×"}</button>
                    <h2>{"Apply for "}<span id="positionName">{modal.position().unwrap_or_default()}</span></h2>
                    <form key={modal.session().to_string()} id="applicationForm" novalidate={true} {onsubmit}>
                        <input type="hidden" id="positionInput" name="position" value={form.value("position").to_string()} />
                        { text_input("name", "Full name", "text") }
                        { text_input("email", "Email", "email") }
                        { text_input("phone", "Phone", "tel") }
                        <div class="form-group">
                            <label for="coverLetter">{"Cover letter"}</label>
                            <textarea id="coverLetter" name="coverLetter"
                                value={form.value("coverLetter").to_string()} oninput={on_cover_letter} />
                        </div>
                        <div class="form-group">
                            <label for="resume">{"Resume"}</label>
                            <input id="resume" name="resume" type="file" accept=".pdf,.doc,.docx"
                                class={classes!(form.has_error("resume").then_some("error"))}
                                onchange={on_resume} />
                            { error_slot(form.error("resume")) }
                        </div>
                        <div class="hp-field" aria-hidden="true">
                            <input type="text" name="website" tabindex="-1" autocomplete="off"
                                value={form.value(HONEYPOT_FIELD).to_string()} oninput={on_honeypot} />
                        </div>
                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            { if *submitting { "Submitting..." } else { "Submit Application" } }
                        </button>
                    </form>
                    <StatusBanner status={(*status).clone()} />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resume_is_required_with_its_own_message() {
        let mut form = application_form();
        form.input("position", "Graphic Designer");
        form.input("name", "Ada");
        form.input("email", "ada@example.com");
        assert!(!form.validate_all());
        assert_eq!(form.error("resume"), Some("Please upload your resume"));

        form.input("resume", "cv.pdf");
        assert!(form.validate_all());
        let sent = form.submission();
        assert_eq!(sent.fields.get("position").map(String::as_str), Some("Graphic Designer"));
    }

    #[test]
    fn reopening_starts_a_fresh_session() {
        let first = ApplicationModal::default().apply(ModalAction::Open("Graphic Designer"));
        let closed = first.apply(ModalAction::Close);
        assert!(!closed.is_open());

        let again = closed.apply(ModalAction::Open("Graphic Designer"));
        assert!(again.is_open());
        assert_ne!(again.session(), first.session());
    }

    #[test]
    fn delayed_close_only_hits_its_own_session() {
        let applied = ApplicationModal::default().apply(ModalAction::Open("Graphic Designer"));
        let pending = applied.session();

        let same = applied.apply(ModalAction::CloseSession(pending));
        assert!(!same.is_open());

        let next = applied
            .apply(ModalAction::Close)
            .apply(ModalAction::Open("Print Production Specialist"));
        let after = next.apply(ModalAction::CloseSession(pending));
        assert_eq!(after.position(), Some("Print Production Specialist"));
    }
}
