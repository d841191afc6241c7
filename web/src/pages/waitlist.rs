//! Waitlist page - intake survey
//!
//! The form owns its [`SurveyForm`] locally. Submission only logs the answers,
//! then the form is replaced by the confirmation message for good.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::data::{Question, QuestionKind};
use shared::state::SurveyForm;

#[component]
pub fn WaitlistPage() -> impl IntoView {
    let form = RwSignal::new(SurveyForm::waitlist());
    let confirmation = Memo::new(move |_| form.with(|f| f.confirmation_message()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit() {
                log::warn!("Waitlist submit ignored: {}", e);
            }
        });
    };

    view! {
        <div class="waitlist">
            <div class="container">
                <h1>"Join the CineX Waitlist"</h1>
                <p>
                    "Help us shape the future of film financing. "
                    "Answer a few questions to join our exclusive community."
                </p>

                {move || match confirmation.get() {
                    Some(message) => view! { <p class="success-message">{message}</p> }.into_any(),
                    None => {
                        let questions = form
                            .with_untracked(|f| f.questions())
                            .iter()
                            .enumerate()
                            .map(|(index, question)| view! {
                                <QuestionField form=form question=*question index=index/>
                            })
                            .collect_view();

                        view! {
                            <form class="form" on:submit=on_submit>
                                {questions}
                                <p class="disclaimer">
                                    "Please note: This form is for demonstration purposes only. "
                                    "Your answers are not yet being stored."
                                </p>
                                <button type="submit" class="submit-button">"Submit"</button>
                            </form>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn QuestionField(form: RwSignal<SurveyForm>, question: Question, index: usize) -> impl IntoView {
    let key = question.key;
    let kind = question.kind;

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(option_index, option)| {
            let option: &'static str = option;
            let input_id = format!("{}-{}", key, option_index);

            let on_change = move |_| {
                form.update(|f| {
                    let result = match kind {
                        QuestionKind::SingleSelect => f.select(key, option),
                        QuestionKind::MultiSelect => f.toggle(key, option).map(|_| ()),
                    };
                    if let Err(e) = result {
                        log::warn!("Ignoring answer for '{}': {}", key, e);
                    }
                });
            };

            view! {
                <div class="option">
                    <input
                        type=kind.input_type()
                        id=input_id.clone()
                        name=key
                        value=option
                        prop:checked=move || form.with(|f| f.is_selected(key, option))
                        on:change=on_change
                    />
                    <label for=input_id>{option}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="question">
            <label>{question.label(index)}</label>
            {options}
            <Show when=move || form.with(|f| f.other_field_visible(key))>
                <input
                    type="text"
                    name=question.other_key.unwrap_or_default()
                    placeholder="Please specify"
                    class="other-input"
                    prop:value=move || form.with(|f| f.other_text_for(key).to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| {
                            if let Err(e) = f.set_other_text(key, &text) {
                                log::warn!("Ignoring free text for '{}': {}", key, e);
                            }
                        });
                    }
                />
            </Show>
        </div>
    }
}
