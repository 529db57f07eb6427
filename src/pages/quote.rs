use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::forms::status::{error_slot, StatusBanner};
use crate::forms::transport::{SubmitOutcome, SubmitTransport};
use crate::quote::steps::{quote_steps, CATEGORIES, PAPERS, SIZES};
use crate::quote::wizard::{Advance, QuoteWizard, StepState, SubmitGate};

pub enum QuoteMsg {
    Input(&'static str, String),
    Next,
    Prev,
    Submit,
    Submitted(SubmitOutcome),
}

enum PendingScroll {
    Top,
    Status,
}

pub struct QuotePage {
    wizard: QuoteWizard,
    transport: Rc<dyn SubmitTransport>,
    status_ref: NodeRef,
    pending_scroll: Option<PendingScroll>,
}

impl Component for QuotePage {
    type Message = QuoteMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let wizard = QuoteWizard::restore(quote_steps(), &config::QUOTE_DRAFT, config::QUOTE_RESUME_POLICY);
        if !wizard.draft().is_empty() {
            log::info!("Restored quote draft, resuming at step {}", wizard.current_step());
        }
        Self {
            wizard,
            transport: config::transport(),
            status_ref: NodeRef::default(),
            pending_scroll: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let store = &config::QUOTE_DRAFT;
        match msg {
            QuoteMsg::Input(field, value) => {
                self.wizard.set_field(field, value, store);
                true
            }
            QuoteMsg::Next => {
                if let Advance::Moved(_) = self.wizard.advance(store) {
                    self.pending_scroll = Some(PendingScroll::Top);
                }
                true
            }
            QuoteMsg::Prev => {
                if self.wizard.retreat() {
                    self.pending_scroll = Some(PendingScroll::Top);
                }
                true
            }
            QuoteMsg::Submit => match self.wizard.begin_submit(store) {
                SubmitGate::Ready(submission) => {
                    let transport = self.transport.clone();
                    ctx.link().send_future(async move {
                        QuoteMsg::Submitted(transport.submit(submission).await)
                    });
                    true
                }
                SubmitGate::Discarded | SubmitGate::InFlight | SubmitGate::NotReady => false,
                SubmitGate::Invalid => true,
            },
            QuoteMsg::Submitted(outcome) => {
                let succeeded = outcome.is_ok();
                self.wizard.finish_submit(outcome, store);
                self.pending_scroll = Some(if succeeded { PendingScroll::Status } else { PendingScroll::Top });
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        match self.pending_scroll.take() {
            Some(PendingScroll::Top) => dom::scroll_to_top(),
            Some(PendingScroll::Status) => dom::scroll_into_view(&self.status_ref),
            None => {}
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            QuoteMsg::Submit
        });

        html! {
            <div class="quote-page">
                <section class="page-hero">
                    <h1>{"Request a Quote"}</h1>
                    <p>{"Tell us about your project and we'll get back to you with a tailored price."}</p>
                </section>
                <section class="quote-section">
                    { self.progress_steps() }
                    <form id="quoteForm" class="quote-form" novalidate={true} {onsubmit}>
                        { self.category_step(ctx) }
                        { self.details_step(ctx) }
                        { self.contact_step(ctx) }
                    </form>
                    <StatusBanner status={self.wizard.status().cloned()} node_ref={self.status_ref.clone()} />
                </section>
            </div>
        }
    }
}

impl QuotePage {
    fn progress_steps(&self) -> Html {
        html! {
            <div class="progress-steps">
                { for self.wizard.steps().iter().enumerate().map(|(index, step)| {
                    let number = index + 1;
                    let state = match self.wizard.progress(number) {
                        StepState::Completed => Some("completed"),
                        StepState::Active => Some("active"),
                        StepState::Pending => None,
                    };
                    html! {
                        <div class={classes!("step", state)}>
                            <span class="step-number">{number}</span>
                            <span class="step-label">{step.title}</span>
                        </div>
                    }
                }) }
            </div>
        }
    }

    fn step_container(&self, number: usize, children: Html) -> Html {
        let active = self.wizard.current_step() == number;
        html! {
            <div class={classes!("form-step", active.then_some("active"))} data-step={number.to_string()}>
                { children }
            </div>
        }
    }

    fn error_slot(&self, field: &str) -> Html {
        error_slot(self.wizard.error(field))
    }

    fn nav_buttons(&self, ctx: &Context<Self>, number: usize) -> Html {
        let last = number == self.wizard.step_count();
        html! {
            <div class="form-nav">
                if number > 1 {
                    <button type="button" class="btn prev-btn" onclick={ctx.link().callback(|_| QuoteMsg::Prev)}>
                        {"Previous"}
                    </button>
                }
                if last {
                    <button type="submit" class="btn btn-primary" disabled={self.wizard.is_submitting()}>
                        { if self.wizard.is_submitting() { "Submitting..." } else { "Submit Request" } }
                    </button>
                } else {
                    <button type="button" class="btn btn-primary next-btn" onclick={ctx.link().callback(|_| QuoteMsg::Next)}>
                        {"Next"}
                    </button>
                }
            </div>
        }
    }

    fn radio_group(&self, ctx: &Context<Self>, name: &'static str, options: &[(&'static str, &'static str)]) -> Html {
        let selected = self.wizard.value(name);
        html! {
            <div class="radio-group">
                { for options.iter().map(|(value, label)| {
                    let onchange = ctx.link().callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        QuoteMsg::Input(name, input.value())
                    });
                    html! {
                        <label class="radio-card">
                            <input type="radio" {name} value={*value} checked={selected == *value} {onchange} />
                            <span>{*label}</span>
                        </label>
                    }
                }) }
            </div>
        }
    }

    fn input(&self, ctx: &Context<Self>, name: &'static str, label: &'static str, kind: &'static str) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuoteMsg::Input(name, input.value())
        });
        let has_error = self.wizard.error(name).is_some();
        html! {
            <div class="form-group">
                <label for={name}>{label}</label>
                <input
                    id={name}
                    {name}
                    type={kind}
                    class={classes!(has_error.then_some("error"))}
                    value={self.wizard.value(name).to_string()}
                    {oninput}
                />
                { self.error_slot(name) }
            </div>
        }
    }

    fn category_step(&self, ctx: &Context<Self>) -> Html {
        self.step_container(1, html! {
            <>
                <h2>{"What are we printing?"}</h2>
                { self.radio_group(ctx, "category", &CATEGORIES) }
                { self.error_slot("category") }
                { self.nav_buttons(ctx, 1) }
            </>
        })
    }

    fn details_step(&self, ctx: &Context<Self>) -> Html {
        let paper = self.wizard.value("paper").to_string();
        let on_paper = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            QuoteMsg::Input("paper", select.value())
        });
        let on_details = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            QuoteMsg::Input("details", area.value())
        });
        let (estimate_min, estimate_max) = self.wizard.estimate().display();

        self.step_container(2, html! {
            <>
                <h2>{"Project details"}</h2>
                { self.input(ctx, "quantity", "Quantity", "number") }
                <div class="form-group">
                    <label>{"Size"}</label>
                    { self.radio_group(ctx, "size", &SIZES) }
                </div>
                <div class="form-group">
                    <label for="paper">{"Paper"}</label>
                    <select id="paper" name="paper" onchange={on_paper}>
                        <option value="" selected={paper.is_empty()}>{"No preference"}</option>
                        { for PAPERS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={paper == *value}>{*label}</option>
                        }) }
                    </select>
                </div>
                { self.input(ctx, "deadline", "Deadline", "date") }
                <div class="form-group">
                    <label for="details">{"Anything else we should know?"}</label>
                    <textarea id="details" name="details" value={self.wizard.value("details").to_string()} oninput={on_details} />
                </div>
                <div class="estimate">
                    <span>{"Estimated cost: $"}</span>
                    <span id="estimateMin">{estimate_min}</span>
                    <span>{" - $"}</span>
                    <span id="estimateMax">{estimate_max}</span>
                </div>
                { self.nav_buttons(ctx, 2) }
            </>
        })
    }

    fn contact_step(&self, ctx: &Context<Self>) -> Html {
        let on_honeypot = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            QuoteMsg::Input("website", input.value())
        });
        self.step_container(3, html! {
            <>
                <h2>{"How do we reach you?"}</h2>
                { self.input(ctx, "name", "Name", "text") }
                { self.input(ctx, "email", "Email", "email") }
                { self.input(ctx, "phone", "Phone", "tel") }
                { self.input(ctx, "company", "Company", "text") }
                <div class="hp-field" aria-hidden="true">
                    <input type="text" name="website" tabindex="-1" autocomplete="off"
                        value={self.wizard.value("website").to_string()} oninput={on_honeypot} />
                </div>
                { self.nav_buttons(ctx, 3) }
            </>
        })
    }
}
