//! Filter form of the search page.

use dioxus::prelude::*;
use common::filter_state::{FormInput, PropertyType, SORT_OPTIONS, sort_key};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::pages::search_page::SearchSessionState;

#[component]
pub fn SearchSidebar() -> Element {
    let SearchSessionState { mut session, run_fetch } = use_context::<SearchSessionState>();
    let form = use_memo(move || session.read().form().clone());
    // edits that have not been submitted yet light up the search button
    let search_button_color = use_memo(move || if session.read().form_is_dirty() { "#1D4ED8" } else { "#334155" });

    let mut apply = move |input: FormInput| session.write().apply_input(input);
    let mut trigger_search = move |_: ()| {
        let ticket = session.write().submit();
        run_fetch(ticket);
    };

    rsx! {
        form {
            style: "
                display: flex;
                flex-direction: column;
                gap: 28px;
            ",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                trigger_search(());
            },

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                label { style: "white-space: nowrap; font-weight: 600;", "Search Term:" }
                input {
                    r#type: "text",
                    id: "searchTerm",
                    placeholder: "Search...",
                    style: "
                        border: 1px solid #CBD5E1;
                        border-radius: 8px;
                        padding: 12px;
                        width: 100%;
                        font-size: 16px;
                    ",
                    value: "{form.read().search_term}",
                    oninput: move |e: Event<FormData>| apply(FormInput::SearchTerm(e.value())),
                }
            }

            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; align-items: center;",
                label { style: "font-weight: 600;", "Type:" }
                for property_type in PropertyType::ALL {
                    FilterCheckbox {
                        key: "{property_type.as_str()}",
                        id: property_type.as_str().to_string(),
                        label: property_type.label().to_string(),
                        checked: form.read().property_type == property_type,
                        ontoggle: move |_| apply(FormInput::PropertyType(property_type)),
                    }
                }
                FilterCheckbox {
                    id: "offer".to_string(),
                    label: "Offer".to_string(),
                    checked: form.read().offer,
                    ontoggle: move |_| {
                        let offer = !form.peek().offer;
                        apply(FormInput::Offer(offer));
                    },
                }
            }

            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; align-items: center;",
                label { style: "font-weight: 600;", "Amenities:" }
                FilterCheckbox {
                    id: "parking".to_string(),
                    label: "Parking".to_string(),
                    checked: form.read().parking,
                    ontoggle: move |_| {
                        let parking = !form.peek().parking;
                        apply(FormInput::Parking(parking));
                    },
                }
                FilterCheckbox {
                    id: "furnished".to_string(),
                    label: "Furnished".to_string(),
                    checked: form.read().furnished,
                    ontoggle: move |_| {
                        let furnished = !form.peek().furnished;
                        apply(FormInput::Furnished(furnished));
                    },
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px;",
                label { style: "font-weight: 600;", "Sort:" }
                select {
                    id: "sort_order",
                    style: "border: 1px solid #CBD5E1; border-radius: 8px; padding: 12px;",
                    value: "{form.read().sort_key()}",
                    onchange: move |e: Event<FormData>| apply(FormInput::Sort(e.value())),
                    for (field, order, label) in SORT_OPTIONS {
                        option {
                            key: "{sort_key(field, order)}",
                            value: sort_key(field, order),
                            selected: form.read().sort_field == field && form.read().sort_order == order,
                            "{label}"
                        }
                    }
                }
            }

            button {
                r#type: "submit",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                    background-color: {search_button_color()};
                    color: white;
                    padding: 12px;
                    border: none;
                    border-radius: 8px;
                    text-transform: uppercase;
                    cursor: pointer;
                    font-size: 16px;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: white;" }
                "Search"
            }
        }
    }
}

#[component]
fn FilterCheckbox(id: String, label: String, checked: bool, ontoggle: Callback<()>) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 6px; align-items: center;",
            input {
                r#type: "checkbox",
                id: "{id}",
                style: "width: 20px; height: 20px;",
                checked,
                onchange: move |_| ontoggle(()),
            }
            label { r#for: "{id}", "{label}" }
        }
    }
}
