use chrono::{Duration, Utc};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::cooldown::Cooldown;
use crate::forms::simple::{SimpleForm, HONEYPOT_FIELD};
use crate::forms::status::{error_slot, FormStatus, StatusBanner};
use crate::forms::validation::{FieldKind, FieldSpec};

const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";
const COOLDOWN_MESSAGE: &str = "Please wait before submitting again.";
const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

const PROJECT_TYPES: [&str; 5] = ["Business Printing", "Wedding", "Packaging", "Merchandise", "Other"];

pub fn contact_form() -> SimpleForm {
    SimpleForm::new(
        "contact",
        vec![
            FieldSpec::new("name", FieldKind::Text).required(),
            FieldSpec::new("email", FieldKind::Email).required(),
            FieldSpec::new("projectType", FieldKind::Choice),
            FieldSpec::new("message", FieldKind::Text).required(),
            FieldSpec::new(HONEYPOT_FIELD, FieldKind::Text),
        ],
    )
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(contact_form);
    let status = use_state(|| None::<FormStatus>);
    let sending = use_state(|| false);
    let cooldown = use_mut_ref(|| Cooldown::new(Duration::seconds(config::CONTACT_COOLDOWN_SECS)));
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let show_status = {
        let status = status.clone();
        let hide_timer = hide_timer.clone();
        move |next: FormStatus| {
            status.set(Some(next));
            let status = status.clone();
            *hide_timer.borrow_mut() = Some(Timeout::new(config::STATUS_HIDE_MS, move || {
                status.set(None);
            }));
        }
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
        let sending = sending.clone();
        let cooldown = cooldown.clone();
        let show_status = show_status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_bot() || *sending {
                return;
            }
            if !cooldown.borrow().ready(Utc::now()) {
                show_status(FormStatus::error(COOLDOWN_MESSAGE));
                return;
            }

            let mut checked = (*form).clone();
            let valid = checked.validate_all();
            let submission = checked.submission();
            form.set(checked);
            if !valid {
                return;
            }

            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let cooldown = cooldown.clone();
            let show_status = show_status.clone();
            let transport = config::transport();
            spawn_local(async move {
                match transport.submit(submission).await {
                    Ok(()) => {
                        cooldown.borrow_mut().mark(Utc::now());
                        show_status(FormStatus::success(SENT_MESSAGE));
                        form.set(contact_form());
                    }
                    Err(err) => {
                        log::warn!("Contact submission failed: {}", err);
                        show_status(FormStatus::error(FAILED_MESSAGE));
                    }
                }
                sending.set(false);
            });
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

    let on_project_type = {
        let on_input = on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input("projectType", select.value());
        })
    };

    let on_message = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input("message", area.value());
        })
    };

    let on_honeypot = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input(HONEYPOT_FIELD, input.value());
        })
    };

    let project_type = form.value("projectType").to_string();

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Get in Touch"}</h1>
                <p>{"Questions, ideas, or a rush job? Drop us a line."}</p>
            </section>
            <section class="contact-section">
                <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
                    { text_input("name", "Name", "text") }
                    { text_input("email", "Email", "email") }
                    <div class="form-group">
                        <label for="projectType">{"Project type"}</label>
                        <select id="projectType" name="projectType" onchange={on_project_type}>
                            <option value="" selected={project_type.is_empty()}>{"Select one"}</option>
                            { for PROJECT_TYPES.iter().map(|p| html! {
                                <option value={*p} selected={project_type == *p}>{*p}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="message">{"Message"}</label>
                        <textarea id="message" name="message"
                            class={classes!(form.has_error("message").then_some("error"))}
                            value={form.value("message").to_string()}
                            oninput={on_message} onblur={on_blur("message")} />
                        { error_slot(form.error("message")) }
                    </div>
                    <div class="hp-field" aria-hidden="true">
                        <input type="text" name="website" tabindex="-1" autocomplete="off"
                            value={form.value(HONEYPOT_FIELD).to_string()} oninput={on_honeypot} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*sending}>
                        { if *sending { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
                <StatusBanner status={(*status).clone()} />
            </section>
        </div>
    }
}
