use crate::api::greet;
use dioxus::prelude::*;
use std::future::Future;

/// The parts of the form that a submission writes to.
pub trait SubmitView {
    /// Toggle the submit button's `disabled` attribute.
    fn set_submitting(&mut self, submitting: bool);

    /// Replace the text of the `#greeting` element.
    fn set_greeting(&mut self, greeting: String);
}

/// The signals backing a mounted [`GreetForm`].
#[derive(Clone, Copy)]
pub struct FormSignals {
    pub submitting: Signal<bool>,
    pub greeting: Signal<String>,
}

impl SubmitView for FormSignals {
    fn set_submitting(&mut self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn set_greeting(&mut self, greeting: String) {
        self.greeting.set(greeting);
    }
}

/// A submit event whose native action can be cancelled.
pub trait Submission {
    fn prevent_default(&self);
}

impl Submission for FormEvent {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Handle a submit event: cancel the browser's navigation, then run [`submit_greeting`].
///
/// The cancel happens before the first await, otherwise the browser has already navigated.
pub async fn handle_submit<S, V, F, Fut, E>(
    evt: S,
    name: String,
    view: &mut V,
    greet: F,
) -> Result<(), E>
where
    S: Submission,
    V: SubmitView,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, E>>,
{
    evt.prevent_default();
    submit_greeting(name, view, greet).await
}

/// Run one submission: disable the button, await `greet(name)`, re-enable the button and
/// show the result.
///
/// The button is re-enabled even when `greet` fails. In that case the previous greeting is
/// kept and the error is handed back to the caller.
pub async fn submit_greeting<V, F, Fut, E>(name: String, view: &mut V, greet: F) -> Result<(), E>
where
    V: SubmitView,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, E>>,
{
    view.set_submitting(true);
    let result = greet(name).await;
    view.set_submitting(false);

    view.set_greeting(result?);
    Ok(())
}

#[component]
pub fn GreetForm() -> Element {
    let mut name = use_signal(String::new);
    let submitting = use_signal(|| false);
    let greeting = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| async move {
        let mut view = FormSignals {
            submitting,
            greeting,
        };
        if let Err(err) = handle_submit(evt, name(), &mut view, greet).await {
            tracing::error!("greet failed: {err}");
        }
    };

    rsx! {
        form { onsubmit,
            label { r#for: "name", "Enter your name: " }
            input {
                id: "name",
                r#type: "text",
                autocomplete: "off",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            button { r#type: "submit", disabled: submitting(), "Click Me!" }
        }
        section { id: "greeting", "{greeting}" }
    }
}
