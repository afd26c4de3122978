use std::future::Future;

use leptos::{
    ev::SubmitEvent,
    prelude::*,
    server_fn::{
        codec::JsonEncoding,
        error::{FromServerFnError, ServerFnErrorErr},
    },
    task::spawn_local,
};

use crate::contact::{
    AckIcon, Acknowledgment, ContactForm, Delivery, DeliveryError, EmailParams, FormField,
    Notifier,
};

// lets the server function hand its `DeliveryError` to the browser intact
impl FromServerFnError for DeliveryError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        DeliveryError::Server(value.to_string())
    }
}

#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), DeliveryError> {
    use crate::email::{forward, EmailJsClient};

    let client = use_context::<EmailJsClient>();
    forward(
        client.as_ref(),
        EmailParams {
            from_name: name,
            from_email: email,
            message,
        },
    )
    .await
}

/// Delivers through the [`send_contact_message`] server function.
#[derive(Debug, Clone, Copy)]
struct ServerDelivery;

impl Delivery for ServerDelivery {
    fn deliver(&self, params: EmailParams) -> impl Future<Output = Result<(), DeliveryError>> {
        send_contact_message(params.from_name, params.from_email, params.message)
    }
}

impl Notifier for RwSignal<Option<Acknowledgment>> {
    fn notify(&self, ack: Acknowledgment) {
        self.set(Some(ack));
    }
}

#[component]
pub fn ContactSection(id: &'static str) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let ack = RwSignal::new(None::<Acknowledgment>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = Some(f.begin_submit()));
        let params = match started {
            Some(Ok(params)) => params,
            // shown inline through `ContactForm::notice`
            Some(Err(e)) => {
                log::debug!("contact form not submitted: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let outcome = ServerDelivery.deliver(params).await;
            if let Some(acknowledgment) = form.try_update(|f| f.finish_submit(outcome)) {
                ack.notify(acknowledgment);
            }
        });
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <section id=id class="max-w-4xl mx-auto px-6 py-16">
            <h3 class="text-2xl font-semibold mb-6 text-center">"Contact Me"</h3>

            <form on:submit=on_submit class="space-y-6">
                <ContactInput form field=FormField::Name placeholder="Your name" input_type="text" />
                <ContactInput
                    form
                    field=FormField::Email
                    placeholder="Your email"
                    input_type="email"
                />
                <textarea
                    name=FormField::Message.as_str()
                    placeholder="Message"
                    rows="4"
                    required
                    prop:value=move || form.with(|f| f.value(FormField::Message).to_string())
                    prop:disabled=submitting
                    on:input=move |ev| {
                        form.update(|f| {
                            f.field_changed(FormField::Message, event_target_value(&ev));
                        })
                    }
                    class="w-full bg-gray-900 border border-gray-700 p-3 rounded-lg"
                ></textarea>

                <button
                    type="submit"
                    prop:disabled=submitting
                    class="w-full bg-blue-500 hover:bg-blue-600 disabled:opacity-60 text-white py-3 rounded-lg"
                >
                    {move || if submitting() { "Sending…" } else { "Send Message 🚀" }}
                </button>

                {move || {
                    form.with(|f| f.notice())
                        .map(|text| {
                            view! {
                                <p class="text-sm text-red-400 text-center" role="alert">
                                    {text}
                                </p>
                            }
                        })
                }}
            </form>

            <AckDialog ack />
        </section>
    }
}

#[component]
fn ContactInput(
    form: RwSignal<ContactForm>,
    field: FormField,
    placeholder: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <input
            name=field.as_str()
            type=input_type
            placeholder=placeholder
            required
            pattern=r".*\S.*"
            title="This field can't be blank"
            prop:value=move || form.with(|f| f.value(field).to_string())
            prop:disabled=move || form.with(|f| f.is_submitting())
            on:input=move |ev| {
                form.update(|f| {
                    f.field_changed(field, event_target_value(&ev));
                })
            }
            class="w-full bg-gray-900 border border-gray-700 p-3 rounded-lg"
        />
    }
}

#[component]
fn AckDialog(ack: RwSignal<Option<Acknowledgment>>) -> impl IntoView {
    move || {
        ack.get().map(|a| {
            let icon_class = match a.icon {
                AckIcon::Success => "text-green-400 border-green-400",
                AckIcon::Error => "text-red-400 border-red-400",
            };
            view! {
                <div
                    class="fixed inset-0 z-[60] flex items-center justify-center bg-black/60"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="bg-gray-900 border border-gray-700 rounded-xl shadow-2xl p-8 w-80 text-center space-y-4">
                        <div class=format!(
                            "mx-auto w-16 h-16 rounded-full border-4 flex items-center justify-center text-3xl {icon_class}",
                        )>{a.icon.glyph()}</div>
                        <h4 class="text-2xl font-semibold">{a.title}</h4>
                        <p class="text-gray-400">{a.text}</p>
                        <button
                            class="bg-blue-500 hover:bg-blue-600 text-white px-6 py-2 rounded-lg"
                            on:click=move |_| ack.set(None)
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
