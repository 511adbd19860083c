//! Transient notifications shown in the top-right corner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::icon;
use super::list_view::StatusTone;

const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub tone: StatusTone,
    pub message: String,
}

impl Toast {
    fn class(&self) -> &'static str {
        match self.tone {
            StatusTone::Success => "toast toast--success",
            StatusTone::Error => "toast toast--error",
            StatusTone::Warning => "toast toast--warning",
            _ => "toast",
        }
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, tone: StatusTone, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            tone,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Context service; each toast removes itself after a fixed delay.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, tone: StatusTone, message: impl Into<String>) {
        let Some(id) = self.queue.try_update(|q| q.push(tone, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(StatusTone::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(StatusTone::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    expect_context::<ToastService>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() role="status">
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
