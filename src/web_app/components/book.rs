// web_app/components/book.rs - Book display and editing components
//
// - BookCard: One book in a list, with edit and delete actions
// - BookGrid: Grid layout with an empty state
// - BookFormView: Every editable field plus the error list
// - CoverPicker: Reads a local image into a data URL preview

use leptos::prelude::*;

use super::common::{Button, ErrorList, StarRating, StatusBadge, StatusSelect, TextInput};
use crate::web_app::model::{Book, BookForm};

/// Book card shown in the list views
#[component]
pub fn BookCard(
    book: Book,
    on_delete: Callback<i64>,
    /// True while this book's delete request is running
    #[prop(into)]
    deleting: Signal<bool>,
) -> impl IntoView {
    let id = book.id;
    let edit_href = format!("/edit/{}", id);
    let meta = format!("{} pages · {}", book.pages, book.publisher);

    view! {
        <article class="group bg-white rounded-xl shadow-sm hover:shadow-xl transition-all duration-300 \
                        border border-gray-100 flex flex-col h-full overflow-hidden">
            {match book.cover_image.clone() {
                Some(src) => view! {
                    <img src=src alt=book.title.clone() class="h-56 w-full object-cover" />
                }.into_any(),
                None => view! {
                    <div class="h-56 bg-gray-100 flex items-center justify-center text-gray-300">
                        <span class="text-5xl">"📕"</span>
                    </div>
                }.into_any(),
            }}

            <div class="p-5 flex flex-col flex-1 gap-2">
                <div class="flex justify-between items-start gap-2">
                    <h3 class="font-bold text-gray-900 text-lg line-clamp-2">{book.title.clone()}</h3>
                    <StatusBadge status=book.reading_status />
                </div>
                <p class="text-gray-700">{book.author.clone()}</p>
                <p class="text-xs text-gray-500">{meta}</p>

                {book.review_rating.map(|rating| view! { <StarRating rating=rating /> })}

                {book.notes.clone().filter(|n| !n.trim().is_empty()).map(|notes| view! {
                    <p class="text-gray-600 text-sm line-clamp-3 italic">{notes}</p>
                })}

                <div class="mt-auto pt-3 border-t border-gray-100 flex justify-end gap-2">
                    <a
                        href=edit_href
                        class="px-3 py-1.5 text-sm font-medium text-blue-700 bg-blue-50 rounded-lg hover:bg-blue-100"
                    >
                        "Edit"
                    </a>
                    <button
                        type="button"
                        class="px-3 py-1.5 text-sm font-medium text-red-700 bg-red-50 rounded-lg hover:bg-red-100 \
                               disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || deleting.get()
                        on:click=move |_| on_delete.run(id)
                    >
                        {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Grid of book cards, or `empty_text` when there is nothing to show
#[component]
pub fn BookGrid(
    books: Signal<Vec<Book>>,
    on_delete: Callback<i64>,
    /// Id of the book currently being deleted
    deleting: Signal<Option<i64>>,
    #[prop(default = "No books found.")]
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || !books.with(|b| b.is_empty())
            fallback=move || view! {
                <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
                    <div class="text-gray-300 text-6xl mb-4">"📚"</div>
                    <p class="text-gray-500">{empty_text}</p>
                </div>
            }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || books.get()
                    key=|book| book.id
                    children=move |book| {
                        let id = book.id;
                        view! {
                            <BookCard
                                book=book
                                on_delete=on_delete
                                deleting=Signal::derive(move || deleting.get() == Some(id))
                            />
                        }
                    }
                />
            </div>
        </Show>
    }
}

/// Add/edit form
///
/// Owns one signal per input; `on_submit` receives the raw form and the
/// caller validates it.
#[component]
pub fn BookFormView(
    initial: BookForm,
    on_submit: Callback<BookForm>,
    errors: Signal<Vec<String>>,
    #[prop(into)]
    submitting: Signal<bool>,
    #[prop(default = "Save")]
    submit_label: &'static str,
) -> impl IntoView {
    let cover_image = RwSignal::new(initial.cover_image);
    let title = RwSignal::new(initial.title);
    let author = RwSignal::new(initial.author);
    let publisher = RwSignal::new(initial.publisher);
    let pages = RwSignal::new(initial.pages);
    let cost = RwSignal::new(initial.cost);
    let reading_status = RwSignal::new(initial.reading_status);
    let review_rating = RwSignal::new(initial.review_rating);
    let start_date = RwSignal::new(initial.start_date);
    let finish_date = RwSignal::new(initial.finish_date);
    let notes = RwSignal::new(initial.notes);

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(BookForm {
            cover_image: cover_image.get_untracked(),
            title: title.get_untracked(),
            author: author.get_untracked(),
            publisher: publisher.get_untracked(),
            pages: pages.get_untracked(),
            cost: cost.get_untracked(),
            reading_status: reading_status.get_untracked(),
            review_rating: review_rating.get_untracked(),
            start_date: start_date.get_untracked(),
            finish_date: finish_date.get_untracked(),
            notes: notes.get_untracked(),
        });
    };

    view! {
        <form on:submit=handle_submit class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100 space-y-5">
            <CoverPicker cover=cover_image />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextInput value=title label="Title" />
                <TextInput value=author label="Author" />
                <TextInput value=publisher label="Publisher" />
                <TextInput value=pages label="Pages" input_type="number" />
                <TextInput value=cost label="Cost" input_type="number" />
                <StatusSelect value=reading_status />
                <TextInput value=review_rating label="Review rating (0-5)" input_type="number" />
                <div></div>
                <TextInput value=start_date label="Start date" input_type="date" />
                <TextInput value=finish_date label="Finish date" input_type="date" />
            </div>

            <label class="block">
                <span class="block text-sm font-medium text-gray-700 mb-1">"Notes"</span>
                <textarea
                    rows="4"
                    class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </label>

            <ErrorList errors=errors />

            <div class="flex justify-end">
                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Saving..." } else { submit_label }}
                </Button>
            </div>
        </form>
    }
}

/// Image file input with preview; the chosen file is kept as a data URL
#[component]
pub fn CoverPicker(
    cover: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| read_cover(ev, cover);

    view! {
        <div class="flex items-center gap-4">
            {move || match cover.get() {
                Some(src) => view! {
                    <img src=src alt="Cover preview" class="h-32 w-24 object-cover rounded-lg shadow" />
                }.into_any(),
                None => view! {
                    <div class="h-32 w-24 rounded-lg bg-gray-100 flex items-center justify-center text-3xl text-gray-300">
                        "📕"
                    </div>
                }.into_any(),
            }}
            <div class="flex flex-col gap-2">
                <label class="text-sm font-medium text-gray-700">
                    "Cover image"
                    <input type="file" accept="image/*" class="block mt-1 text-sm" on:change=on_change />
                </label>
                <Show when=move || cover.with(|c| c.is_some())>
                    <button
                        type="button"
                        class="text-xs text-red-600 hover:underline self-start"
                        on:click=move |_| cover.set(None)
                    >
                        "Remove cover"
                    </button>
                </Show>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn read_cover(ev: leptos::ev::Event, cover: RwSignal<Option<String>>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{FileReader, HtmlInputElement};

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let Ok(reader) = FileReader::new() else {
        tracing::warn!("FileReader unavailable");
        return;
    };

    let loaded = reader.clone();
    let onload = Closure::once_into_js(move || {
        if let Some(url) = loaded.result().ok().and_then(|v| v.as_string()) {
            cover.set(Some(url));
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(&file) {
        tracing::warn!("Could not read cover image: {:?}", e);
    }
}

#[cfg(not(feature = "hydrate"))]
fn read_cover(_ev: leptos::ev::Event, _cover: RwSignal<Option<String>>) {}
