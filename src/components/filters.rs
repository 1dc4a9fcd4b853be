//! Filters Component
//!
//! Search box, status filter, sort controls and the create button.

use leptos::prelude::*;

use crate::models::{SortBy, SortOrder};
use crate::mutation::MutationStatus;
use crate::query::{parse_status_filter, status_filter_value};
use crate::store::{use_board, TaskBoard, TaskBoardStoreFields};

#[component]
pub fn Filters() -> impl IntoView {
    let board = use_board();
    let submitting = move || board.mutation().with(MutationStatus::is_submitting);

    view! {
        <div class="filters">
            // Raw text; committed to the query by the debounce on the page
            <input
                type="search"
                class="search-input"
                placeholder="Search by title"
                prop:value=move || board.search_text().get()
                on:input=move |ev| board.search_text().set(event_target_value(&ev))
            />
            <select
                class="status-filter"
                prop:value=move || board.query().with(|q| status_filter_value(q.is_done))
                on:change=move |ev| {
                    let is_done = parse_status_filter(&event_target_value(&ev));
                    board.update(|b| {
                        b.set_is_done(is_done);
                    });
                }
            >
                <option value="all">"All"</option>
                <option value="true">"Done"</option>
                <option value="false">"Not done"</option>
            </select>
            <select
                class="sort-by"
                prop:value=move || board.query().with(|q| q.sort_by.as_str())
                on:change=move |ev| {
                    if let Some(sort_by) = SortBy::parse(&event_target_value(&ev)) {
                        board.update(|b| {
                            b.set_sort_by(sort_by);
                        });
                    }
                }
            >
                {SortBy::ALL
                    .into_iter()
                    .map(|sort_by| view! { <option value=sort_by.as_str()>{sort_by.label()}</option> })
                    .collect_view()}
            </select>
            <select
                class="sort-order"
                prop:value=move || board.query().with(|q| q.sort_order.as_str())
                on:change=move |ev| {
                    let sort_order = SortOrder::parse(&event_target_value(&ev));
                    board.update(|b| {
                        b.set_sort_order(sort_order);
                    });
                }
            >
                <option value="asc">"Ascending"</option>
                <option value="desc">"Descending"</option>
            </select>
            <button class="create-btn" disabled=submitting on:click=move |_| board.update(TaskBoard::open_create)>
                "New task"
            </button>
        </div>
    }
}
