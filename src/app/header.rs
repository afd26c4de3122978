use leptos::{ev::MouseEvent, prelude::*};

use super::use_profile;
use crate::nav::{NavState, Section};

#[component]
pub fn Header() -> impl IntoView {
    let profile = use_profile();
    let nav = RwSignal::new(NavState::new());

    // smooth via the `scroll-smooth` class on <html>
    let scroll_to_top = move |_: MouseEvent| window().scroll_to_with_x_and_y(0.0, 0.0);

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 backdrop-blur-md bg-gradient-to-r from-blue-600/20 via-purple-600/20 to-pink-600/20 border-b border-gray-700 shadow-lg">
            <div class="max-w-6xl mx-auto flex justify-between items-center p-5">
                <button
                    on:click=scroll_to_top
                    class="text-xl md:text-2xl font-bold text-blue-400"
                >
                    {profile.name.clone()}
                </button>

                <div class="hidden md:flex space-x-8 text-gray-200 font-medium">
                    {Section::NAV_LINKS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="transition hover:text-blue-400 hover:scale-105"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="md:hidden text-2xl text-gray-300 hover:text-blue-400 transition"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || nav.with(|n| n.is_open().to_string())
                    on:click=move |_| nav.update(|n| n.toggle())
                >
                    {move || nav.with(|n| n.toggle_icon())}
                </button>
            </div>

            <Show when=move || nav.with(|n| n.is_open())>
                <div class="md:hidden flex flex-col space-y-6 px-6 pb-6 text-lg text-gray-200 font-medium bg-gray-900/60 backdrop-blur-sm">
                    {Section::NAV_LINKS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="hover:text-blue-400 transition"
                                    on:click=move |_| nav.update(|n| n.close())
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
