// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks shared by every page. All data arrives
// through props; none of these talk to the API or the session.

use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::ReadingStatus;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Single error banner
#[component]
pub fn ErrorDisplay(
    error: String,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-4 flex items-start gap-4" role="alert">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <p class="text-red-700 text-sm self-center">{error}</p>
        </div>
    }
}

/// Every validation message at once, in the order they were produced
#[component]
pub fn ErrorList(
    errors: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || !errors.with(|e| e.is_empty())>
            <ul class="bg-red-50 border border-red-200 rounded-xl p-4 space-y-1 text-sm text-red-700" role="alert">
                {move || errors.get().into_iter().map(|message| view! {
                    <li>{message}</li>
                }).collect_view()}
            </ul>
        </Show>
    }
}

/// Green confirmation banner
#[component]
pub fn SuccessMessage(
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 rounded-xl p-4 text-green-700 text-sm font-medium">
            {message}
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Secondary button component
#[component]
pub fn SecondaryButton(
    children: Children,
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let class = "px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                 transition-colors border border-gray-300 disabled:opacity-50 \
                 font-medium shadow-sm active:bg-gray-100";

    view! {
        <button
            type="button"
            disabled=move || disabled.get()
            class=class
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Yes/no dialog for destructive actions
///
/// The parent decides when it is shown; Escape and the backdrop cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Delete")]
    confirm_label: &'static str,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    };

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4"
            on:keydown=handle_keydown
        >
            <div
                class="absolute inset-0 bg-gray-900/60 backdrop-blur-sm"
                on:click=move |_| on_cancel.run(())
            ></div>

            <div
                class="relative bg-white rounded-2xl shadow-2xl w-full max-w-md p-6"
                role="dialog"
                on:click=|ev| ev.stop_propagation()
            >
                <p class="text-gray-800 mb-6">{message}</p>
                <div class="flex justify-end gap-3">
                    <SecondaryButton on_click=on_cancel>"Cancel"</SecondaryButton>
                    <button
                        type="button"
                        class="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 font-medium shadow-sm"
                        on:click=move |_| on_confirm.run(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Filled, half and empty star counts for a 0-5 rating
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = (rating - rating.floor()) >= 0.5;
    let empty = 5 - full - usize::from(half);
    (full, half, empty)
}

/// Star rating display component (0-5)
#[component]
pub fn StarRating(
    rating: f64,
    #[prop(default = true)]
    show_value: bool,
) -> impl IntoView {
    let (full_stars, has_half, empty_stars) = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..full_stars).map(|_| view! {
                <span class="text-yellow-400 text-lg">"★"</span>
            }).collect_view()}

            {has_half.then(|| view! {
                <div class="relative inline-block text-lg">
                    <span class="text-gray-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-yellow-400">"★"</span>
                </div>
            })}

            {(0..empty_stars).map(|_| view! {
                <span class="text-gray-200 text-lg">"★"</span>
            }).collect_view()}

            <Show when=move || show_value>
                <span class="ml-2 text-sm font-bold text-gray-700 bg-gray-100 px-1.5 py-0.5 rounded">
                    {format!("{:.1}", rating)}
                </span>
            </Show>
        </div>
    }
}

/// Badge colour for a reading status
pub fn status_variant(status: ReadingStatus) -> &'static str {
    match status {
        ReadingStatus::Finished => "green",
        ReadingStatus::CurrentlyReading => "yellow",
        ReadingStatus::ToRead => "blue",
        ReadingStatus::GaveUp => "red",
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "blue" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-blue-100 text-blue-800 border border-blue-200",
        "yellow" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-yellow-100 text-yellow-800 border border-yellow-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-gray-100 text-gray-800 border border-gray-200",
    }
}

/// Badge component
#[component]
pub fn Badge(
    children: Children,
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// Coloured badge with the status label
#[component]
pub fn StatusBadge(status: ReadingStatus) -> impl IntoView {
    view! {
        <Badge variant=status_variant(status)>{status.label()}</Badge>
    }
}

/// Labelled text input bound to a signal
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(default = "")]
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, number, date, password, ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                      focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <label class="block">
            {(!label.is_empty()).then(|| view! {
                <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            })}
            <input
                type=input_type
                placeholder=placeholder
                class=format!("{} {}", base_class, class)
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
        </label>
    }
}

/// Reading status dropdown
#[component]
pub fn StatusSelect(
    value: RwSignal<ReadingStatus>,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">"Reading status"</span>
            <select
                class=class
                on:change=move |ev| {
                    if let Ok(status) = event_target_value(&ev).parse::<ReadingStatus>() {
                        value.set(status);
                    }
                }
            >
                {ReadingStatus::ALL.into_iter().map(|status| view! {
                    <option
                        value=status.as_str()
                        selected=move || value.get() == status
                    >
                        {status.label()}
                    </option>
                }).collect_view()}
            </select>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_counts() {
        let test_cases: [(f64, usize, bool, usize); 7] = [
            (5.0, 5, false, 0),
            (4.5, 4, true, 0),
            (4.4, 4, false, 1),
            (3.5, 3, true, 1),
            (2.75, 2, true, 2),
            (0.5, 0, true, 4),
            (0.0, 0, false, 5),
        ];

        for (rating, full, half, empty) in test_cases {
            assert_eq!(star_counts(rating), (full, half, empty), "rating {}", rating);
        }
    }

    #[test]
    fn test_star_counts_clamps_out_of_range() {
        assert_eq!(star_counts(7.0), (5, false, 0));
        assert_eq!(star_counts(-1.0), (0, false, 5));
    }

    #[test]
    fn test_status_variants() {
        assert_eq!(status_variant(ReadingStatus::Finished), "green");
        assert_eq!(status_variant(ReadingStatus::CurrentlyReading), "yellow");
        assert_eq!(status_variant(ReadingStatus::ToRead), "blue");
        assert_eq!(status_variant(ReadingStatus::GaveUp), "red");
    }

    #[test]
    fn test_badge_class_fallback() {
        assert!(badge_class("green").contains("bg-green-100"));
        assert!(badge_class("purple").contains("bg-gray-100"));
        for variant in ["green", "red", "blue", "yellow", "gray"] {
            assert!(badge_class(variant).contains("rounded-full"), "{}", variant);
        }
    }
}
