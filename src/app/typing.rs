use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::typing::{Typewriter, HOLD_MS, TICK_MS};

#[component]
pub fn TypingText(phrases: Vec<String>, #[prop(into)] text_class: String) -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(phrases, TICK_MS, HOLD_MS));
    // interval only runs in the browser
    let _ = use_interval_fn(move || typewriter.update(|t| t.step()), TICK_MS);

    view! {
        <span class=text_class>
            {move || typewriter.with(|t| t.text().to_string())}
            <span class="typing-caret">"|"</span>
        </span>
    }
}
