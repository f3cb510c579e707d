use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        // overlay captures keys; Escape closes
        div { class: "modal-overlay", tabindex: 0,
            onkeydown: move |e: KeyboardEvent| if e.key() == Key::Escape { on_close.call(()) },
            div { class: "modal",
                div { class: "row between modal-head",
                    h3 { class: "title", "{title}" }
                    button { class: "btn btn-ghost btn-icon", onclick: move |_| on_close.call(()), "✕" }
                }
                {children}
            }
        }
    }
}
