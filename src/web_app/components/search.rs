// web_app/components/search.rs - List controls
//
// - SearchBar: Free-text filter; the parent only sees the debounced term
// - Pagination: Previous/Next plus a window of numbered page buttons

use std::time::Duration;

use leptos::prelude::*;

use crate::web_app::debounce::use_debounced;
use crate::web_app::pagination::PageWindow;

/// Search input that reports its value once typing has paused
///
/// `on_settled` fires with the trimmed term after `delay` without input.
#[component]
pub fn SearchBar(
    on_settled: Callback<String>,
    #[prop(default = crate::web_app::debounce::DEFAULT_DELAY)]
    delay: Duration,
    #[prop(default = "Search by title, author or publisher...")]
    placeholder: &'static str,
) -> impl IntoView {
    let raw = RwSignal::new(String::new());
    let settled = use_debounced(raw, delay);

    // Skip the initial empty value so mounting does not trigger a refetch
    Effect::new(move |previous: Option<String>| {
        let term = settled.get().trim().to_string();
        if previous.as_ref().is_some_and(|p| p != &term) {
            on_settled.run(term.clone());
        }
        term
    });

    view! {
        <div class="relative w-full">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="search"
                placeholder=placeholder
                class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                       outline-none text-lg transition-all shadow-sm"
                prop:value=move || raw.get()
                on:input=move |ev| raw.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Pagination component
///
/// Pages are 1-based here; `on_page` receives the requested page and the
/// list decides (through `ListState::go_to`) whether it actually moves.
#[component]
pub fn Pagination(
    window: Signal<PageWindow>,
    on_page: Callback<u32>,
    #[prop(default = crate::web_app::pagination::DEFAULT_PAGE_BUTTONS)]
    max_buttons: usize,
) -> impl IntoView {
    let nav_class = "px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                     disabled:opacity-50 disabled:cursor-not-allowed \
                     hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700";

    view! {
        <Show when=move || window.with(|w| w.total_pages > 1)>
            <nav class="flex items-center justify-center gap-2 mt-12 mb-8" aria-label="Pagination">
                <button
                    type="button"
                    class=nav_class
                    disabled=move || !window.with(|w| w.can_go_prev())
                    on:click=move |_| on_page.run(window.with_untracked(|w| w.page.saturating_sub(1)))
                >
                    "← Previous"
                </button>

                {move || {
                    let current = window.with(|w| w.page);
                    window
                        .with(|w| w.visible_pages(max_buttons))
                        .into_iter()
                        .map(|page| {
                            let class = if page == current {
                                "w-10 h-10 rounded-lg bg-blue-600 text-white font-bold shadow-sm"
                            } else {
                                "w-10 h-10 rounded-lg bg-white border border-gray-200 text-gray-700 hover:bg-gray-50"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    aria-current=(page == current).then_some("page")
                                    on:click=move |_| on_page.run(page)
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect_view()
                }}

                <button
                    type="button"
                    class=nav_class
                    disabled=move || !window.with(|w| w.can_go_next())
                    on:click=move |_| on_page.run(window.with_untracked(|w| w.page + 1))
                >
                    "Next →"
                </button>
            </nav>
            <p class="text-center text-sm text-gray-500">
                {move || window.with(|w| format!("Page {} of {} ({} books)", w.page, w.total_pages, w.total_elements))}
            </p>
        </Show>
    }
}
