//! Previous/next controls for a paged list.

use leptos::prelude::*;

use crate::state::paging::Pager;

/// Page navigation: prev/next buttons around a "Page X of Y" label.
///
/// Both buttons clamp; at either end the corresponding button is disabled.
#[component]
pub fn PageControls(pager: RwSignal<Pager>, count: Signal<usize>) -> impl IntoView {
    let label = move || {
        let p = pager.get();
        format!("Page {} of {}", p.current_page, p.total_pages(count.get()))
    };

    let on_prev = move |_| pager.update(|p| *p = p.prev());
    let on_next = move |_| {
        let n = count.get();
        pager.update(|p| *p = p.next(n));
    };

    view! {
        <div class="page-controls">
            <button
                class="page-controls__button"
                disabled=move || !pager.get().has_prev()
                on:click=on_prev
            >
                "\u{2039}"
            </button>
            <span class="page-controls__label">{label}</span>
            <button
                class="page-controls__button"
                disabled=move || !pager.get().has_next(count.get())
                on:click=on_next
            >
                "\u{203A}"
            </button>
        </div>
    }
}
