use std::time::Duration;

use dioxus::prelude::*;

use services::{NotificationCenter, NotificationKind};

use crate::context::AppContext;

const EXPIRY_POLL: Duration = Duration::from_millis(250);

/// Show a banner; the mounted `NotificationStack` dismisses it after the TTL.
pub fn push_notification(
    mut center: Signal<NotificationCenter>,
    message: impl Into<String>,
    kind: NotificationKind,
) {
    center.write().push(message, kind);
}

/// Banner list. Owns the expiry loop, so banners time out even after the
/// component that raised them has unmounted.
#[component]
pub fn NotificationStack() -> Element {
    let ctx = use_context::<AppContext>();
    let mut center = use_context::<Signal<NotificationCenter>>();
    let clock = ctx.clock();

    use_future(move || async move {
        loop {
            tokio::time::sleep(EXPIRY_POLL).await;
            let now = clock.now();
            if center.peek().has_expired_at(now) {
                center.write().expire_at(now);
            }
        }
    });

    let items = center.read().items().to_vec();

    rsx! {
        div { class: "notification-stack", aria_live: "polite",
            for item in items {
                div {
                    key: "{item.id:?}",
                    class: "alert {item.kind.css_class()} alert-dismissible fade show",
                    role: "alert",
                    "{item.message}"
                    button {
                        class: "btn-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| {
                            center.write().dismiss(item.id);
                        },
                    }
                }
            }
        }
    }
}
