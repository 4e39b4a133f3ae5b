use async_trait::async_trait;
use dioxus::document::eval;
use dioxus::prelude::*;

use services::{
    ClipboardBackend, ClipboardError, NotificationCenter, NotificationKind, copy_to_clipboard,
};

use super::notifications::push_notification;
use super::scripts::{clipboard_fallback_script, clipboard_probe_script, clipboard_secure_script};

/// Clipboard access through the webview.
pub struct EvalClipboard {
    secure: bool,
}

impl EvalClipboard {
    /// Ask the page whether the async clipboard API is usable.
    pub async fn detect() -> Self {
        let mut probe = eval(clipboard_probe_script());
        let secure = probe.recv::<bool>().await.unwrap_or(false);
        Self { secure }
    }
}

async fn run_copy_script(script: &str, text: &str) -> Result<bool, String> {
    let mut copy = eval(script);
    copy.send(text).map_err(|err| err.to_string())?;
    copy.recv::<bool>().await.map_err(|err| err.to_string())
}

#[async_trait(?Send)]
impl ClipboardBackend for EvalClipboard {
    fn secure_available(&self) -> bool {
        self.secure
    }

    async fn write_secure(&self, text: &str) -> Result<(), ClipboardError> {
        match run_copy_script(clipboard_secure_script(), text).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::Rejected("write refused".to_string())),
            Err(err) => Err(ClipboardError::Rejected(err)),
        }
    }

    async fn write_fallback(&self, text: &str) -> Result<(), ClipboardError> {
        match run_copy_script(clipboard_fallback_script(), text).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::FallbackFailed),
            Err(err) => {
                tracing::warn!(error = %err, "manual copy script failed");
                Err(ClipboardError::FallbackFailed)
            }
        }
    }
}

#[component]
pub fn CopyButton(text: String, #[props(default = "Copy")] label: &'static str) -> Element {
    let center = use_context::<Signal<NotificationCenter>>();

    rsx! {
        button {
            class: "btn btn-outline-success btn-sm",
            r#type: "button",
            onclick: move |_| {
                let text = text.clone();
                spawn(async move {
                    let backend = EvalClipboard::detect().await;
                    match copy_to_clipboard(&backend, &text).await {
                        Ok(_) => push_notification(
                            center,
                            "Copied to clipboard!",
                            NotificationKind::Success,
                        ),
                        Err(err) => {
                            tracing::warn!(error = %err, "copy to clipboard failed");
                            push_notification(
                                center,
                                "Could not copy the text.",
                                NotificationKind::Danger,
                            );
                        }
                    }
                });
            },
            i { class: "fas fa-copy" }
            " {label}"
        }
    }
}
