//! Reader registration form.

use api::messages;
use api::{
    FailureKind, RegisterFailure, RegisterOutcome, RegistrationForm, RegistrationPhase,
};
use dioxus::prelude::*;

use crate::sleep;

/// Registration form for new library readers.
///
/// Validates locally, calls [`api::register_reader`], and after a success waits
/// [`api::register::REDIRECT_DELAY`] before handing the login route to
/// `on_redirect`. The submission and the pending redirect run in a task owned by
/// this component, so both are dropped if the form is unmounted first.
#[component]
pub fn RegisterForm(on_redirect: EventHandler<&'static str>) -> Element {
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phase = use_signal(RegistrationPhase::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(next) = phase.peek().begin() else {
            return;
        };
        phase.set(next);

        let form = RegistrationForm {
            email: email(),
            password: password(),
            full_name: full_name(),
            phone: phone(),
        };
        if let Err(e) = api::validate(&form) {
            phase.set(RegistrationPhase::Failed(e.into()));
            return;
        }

        spawn(async move {
            let outcome = match api::register_reader(form).await {
                Ok(outcome) => outcome,
                Err(e) => RegisterOutcome::Rejected(RegisterFailure {
                    kind: FailureKind::Other,
                    detail: e.to_string(),
                }),
            };
            if let RegisterOutcome::Rejected(failure) = &outcome {
                tracing::error!(kind = ?failure.kind, "Registration error: {}", failure.detail);
            }

            let next = RegistrationPhase::finish(outcome);
            let redirect = next.redirect();
            phase.set(next);

            if let Some(redirect) = redirect {
                sleep(redirect.delay).await;
                on_redirect.call(redirect.route);
            }
        });
    };

    let state = phase();
    let loading = state.is_loading();

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h1 { {messages::TITLE} }

                if let Some(err) = state.error_message() {
                    div { class: "error-message", "{err}" }
                }
                if state.is_success() {
                    div { class: "success-message", {messages::SUCCESS} }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { {messages::LABEL_FULL_NAME} }
                        input {
                            r#type: "text",
                            name: "fullName",
                            value: full_name(),
                            placeholder: messages::PLACEHOLDER_FULL_NAME,
                            required: true,
                            disabled: loading,
                            oninput: move |evt: FormEvent| full_name.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { {messages::LABEL_EMAIL} }
                        input {
                            r#type: "email",
                            name: "email",
                            value: email(),
                            placeholder: messages::PLACEHOLDER_EMAIL,
                            required: true,
                            disabled: loading,
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { {messages::LABEL_PHONE} }
                        input {
                            r#type: "tel",
                            name: "phone",
                            value: phone(),
                            placeholder: messages::PLACEHOLDER_PHONE,
                            disabled: loading,
                            oninput: move |evt: FormEvent| phone.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { {messages::LABEL_PASSWORD} }
                        input {
                            r#type: "password",
                            name: "password",
                            value: password(),
                            placeholder: messages::PLACEHOLDER_PASSWORD,
                            required: true,
                            minlength: "6",
                            disabled: loading,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: loading,
                        if loading { {messages::SUBMITTING} } else { {messages::SUBMIT} }
                    }
                }

                p {
                    class: "auth-footer",
                    {messages::HAVE_ACCOUNT}
                    a { href: "/login", {messages::SIGN_IN} }
                }
            }
        }
    }
}
