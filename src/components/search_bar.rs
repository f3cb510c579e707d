use dioxus::prelude::*;

#[component]
pub fn SearchBar(value: String, placeholder: String, on_input: EventHandler<FormEvent>) -> Element {
    rsx! {
        div { class: "search-bar",
            span { class: "search-icon", "🔍" }
            input {
                class: "text",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e),
            }
        }
    }
}
