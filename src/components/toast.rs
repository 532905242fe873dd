//! Transient notifications for mutation results.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicUsize, Ordering};

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn class(self) -> &'static str {
        match self {
            ToastType::Success => "toast toast-success",
            ToastType::Error => "toast toast-error",
            ToastType::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

static TOAST_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Push a toast that auto-dismisses after a few seconds.
pub fn show_toast(toasts: RwSignal<Vec<ToastMessage>>, message: &str, toast_type: ToastType) {
    let id = TOAST_COUNTER.fetch_add(1, Ordering::SeqCst);

    toasts.update(|t| {
        t.push(ToastMessage {
            id,
            message: message.to_string(),
            toast_type,
        });
    });

    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
        toasts.update(|t| t.retain(|m| m.id != id));
    });
}

#[component]
pub fn ToastContainer(
    toasts: Signal<Vec<ToastMessage>>,
    #[prop(into)] on_dismiss: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="toast-container">
            {move || toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=toast.toast_type.class()>
                        <span class="toast-message">{toast.message}</span>
                        <button
                            class="toast-dismiss"
                            on:click=move |_| on_dismiss.run(id)
                        >
                            "\u{00d7}"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
