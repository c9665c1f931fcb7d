use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{
    report, ContactField, ContactForm, GlooTransport, Submission, SubmitState, WindowAlert,
};
use crate::models::SiteOptions;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub options: SiteOptions,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactForm::default);
    let state = use_state(SubmitState::default);

    let input_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch((field, input.value()));
        })
    };
    let on_name = input_field(ContactField::Name);
    let on_email = input_field(ContactField::Email);
    let on_msg = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch((ContactField::Msg, input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let state = state.clone();
        let options = props.options.clone();
        Callback::from(move |e: SubmitEvent| {
            let submission = Submission::start(&*e, &form);
            state.set(SubmitState::Submitting);

            let state = state.clone();
            let options = options.clone();
            spawn_local(async move {
                let outcome = submission.run(&GlooTransport).await;
                report(&outcome, &options, &WindowAlert);
                state.set(outcome);
            });
        })
    };

    html! {
        <div id="contact" class="contact">
            <h3 class="contact-title">{"CONTACT US"}</h3>
            <div class="contact-form">
                <form onsubmit={on_submit} data-state={state.as_str()}>
                    <input
                        oninput={on_name}
                        value={form.name.clone()}
                        name="name"
                        type="text"
                        class="feedback-input"
                        placeholder="Name"
                    />
                    <input
                        oninput={on_email}
                        value={form.email.clone()}
                        name="email"
                        type="text"
                        class="feedback-input"
                        placeholder="Email"
                    />
                    <textarea
                        oninput={on_msg}
                        value={form.msg.clone()}
                        name="text"
                        class="feedback-input-comment"
                        placeholder="Comment"
                    />
                    <input class="submit" type="submit" value="送信する" />
                </form>
            </div>
        </div>
    }
}
