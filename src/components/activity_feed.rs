use dioxus::prelude::*;

use crate::components::avatar::Avatar;
use crate::models::{Activity, User};

#[component]
pub fn ActivityFeed(activities: Vec<Activity>, users: Vec<User>) -> Element {
    if activities.is_empty() {
        return rsx! { p { class: "meta", "No recent activity." } };
    }
    rsx! {
        ul { class: "feed",
            for activity in activities.iter() {
                {
                    let actor = users.iter().find(|u| u.id == activity.user_id);
                    let name = actor.map(|u| u.name.clone()).unwrap_or_else(|| "Unknown".to_string());
                    let avatar = actor.map(|u| u.avatar.clone()).unwrap_or_default();
                    let when = activity
                        .created_at
                        .map(|t| t.format("%b %d, %H:%M").to_string())
                        .unwrap_or_else(|| "N/A".to_string());
                    rsx! {
                        li { key: "activity-{activity.id}", class: "feed-item",
                            Avatar { src: avatar, alt: name.clone(), small: true }
                            div { class: "feed-body",
                                span { span { class: "item-title", "{name}" } " {activity.action}" }
                                span { class: "meta", "{when}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
