use dioxus::prelude::*;

#[component]
pub fn Avatar(src: String, alt: String, small: Option<bool>) -> Element {
    let class = if small.unwrap_or(false) { "avatar avatar-sm" } else { "avatar" };
    if src.is_empty() {
        let initial = alt.chars().next().unwrap_or('?').to_uppercase().to_string();
        return rsx! { span { class: "{class} avatar-fallback", "{initial}" } };
    }
    rsx! {
        img { class: "{class}", src: "{src}", alt: "{alt}" }
    }
}
