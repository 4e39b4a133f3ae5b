use eco_core::page::{HERO_SELECTORS, ObserverOptions, hero_delay};

/// Hero stagger, tooltips and modal autofocus for whatever the current page
/// rendered. Safe to run again after navigation: every element is bound once.
pub(crate) fn page_enhancements_script() -> String {
    let hero_steps = HERO_SELECTORS
        .iter()
        .enumerate()
        .map(|(index, selector)| {
            format!("[{selector:?}, {}]", hero_delay(index).as_millis())
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"(function() {{
                    const heroSteps = [{hero_steps}];
                    heroSteps.forEach(([selector, delay]) => {{
                        document.querySelectorAll(selector).forEach((el) => {{
                            if (el.dataset.heroBound) return;
                            el.dataset.heroBound = "1";
                            el.classList.add("hero-enter");
                            setTimeout(() => el.classList.add("is-revealed"), delay);
                        }});
                    }});

                    if (window.bootstrap && window.bootstrap.Tooltip) {{
                        document.querySelectorAll('[data-bs-toggle="tooltip"]').forEach((el) => {{
                            if (el.dataset.tooltipBound) return;
                            el.dataset.tooltipBound = "1";
                            new window.bootstrap.Tooltip(el);
                        }});
                    }}

                    document.querySelectorAll(".modal").forEach((modal) => {{
                        if (modal.dataset.autofocusBound) return;
                        modal.dataset.autofocusBound = "1";
                        modal.addEventListener("shown.bs.modal", () => {{
                            const target = modal.querySelector("[autofocus]");
                            if (target) target.focus();
                        }});
                    }});
                }})();"#,
    )
}

/// Sends `true` the first time the element crosses `options`, or `false`
/// right away if it is not in the page. Waits a frame so freshly rendered
/// nodes are in the document.
pub(crate) fn visibility_script(element_id: &str, options: ObserverOptions) -> String {
    let threshold = options.threshold;
    let margin = options.root_margin();
    format!(
        r#"requestAnimationFrame(() => {{
                    const el = document.getElementById({element_id:?});
                    if (!el || !("IntersectionObserver" in window)) {{
                        dioxus.send(!!el);
                        return;
                    }}
                    const observer = new IntersectionObserver((entries) => {{
                        entries.forEach((entry) => {{
                            if (entry.isIntersecting) {{
                                observer.unobserve(entry.target);
                                dioxus.send(true);
                            }}
                        }});
                    }}, {{ threshold: {threshold}, rootMargin: {margin:?} }});
                    observer.observe(el);
                }});"#,
    )
}

/// Streams `window.scrollY` on every scroll event, starting with the current value.
pub(crate) fn scroll_listener_script() -> &'static str {
    r"(function() {
                    const report = () => dioxus.send(window.scrollY);
                    window.addEventListener('scroll', report, { passive: true });
                    report();
                })();"
}

pub(crate) fn focus_script(element_id: &str) -> String {
    format!("document.getElementById({element_id:?})?.focus();")
}

pub(crate) fn focus_first_answer_script() -> &'static str {
    r#"document.querySelector('.question-card.active input[type="radio"]')?.focus();"#
}

pub(crate) fn scroll_into_view_script(element_id: &str) -> String {
    format!(
        r#"document.getElementById({element_id:?})?.scrollIntoView({{ behavior: "smooth", block: "start" }});"#,
    )
}

pub(crate) fn scroll_to_top_script() -> &'static str {
    r#"window.scrollTo({ top: 0, behavior: "smooth" });"#
}

/// Answers whether the async clipboard API can be used here.
pub(crate) fn clipboard_probe_script() -> &'static str {
    r"dioxus.send(!!(navigator.clipboard && window.isSecureContext));"
}

/// Receives the text, writes it with the async API and reports success.
pub(crate) fn clipboard_secure_script() -> &'static str {
    r"(async function() {
                    const text = await dioxus.recv();
                    try {
                        await navigator.clipboard.writeText(text);
                        dioxus.send(true);
                    } catch (err) {
                        dioxus.send(false);
                    }
                })();"
}

/// Receives the text, copies it from an off-screen textarea and reports success.
pub(crate) fn clipboard_fallback_script() -> &'static str {
    r#"(async function() {
                    const text = await dioxus.recv();
                    const area = document.createElement("textarea");
                    area.value = text;
                    area.style.position = "fixed";
                    area.style.left = "-999999px";
                    area.style.top = "-999999px";
                    document.body.appendChild(area);
                    area.focus();
                    area.select();
                    let copied = false;
                    try {
                        copied = document.execCommand("copy");
                    } catch (err) {
                        copied = false;
                    }
                    area.remove();
                    dioxus.send(copied);
                })();"#
}
