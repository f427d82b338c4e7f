//! Process-wide toast/confirmation layer.
//!
//! One [`ToastService`] is provided at the application root and one
//! [`ToastHost`] renders the queue. Toasts are insertion-ordered, never
//! capped, and never time out on their own: removal is user- or
//! consumer-driven. A `confirm` toast dismissed without choosing fires
//! neither callback.

use leptos::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Confirm,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
            ToastKind::Confirm => "toast toast--confirm",
        }
    }
}

/// Yes/No protocol of a confirm toast, kept as an explicit value rather
/// than loose closures so the queue logic is testable without a DOM.
#[derive(Clone)]
pub struct ConfirmIntent {
    pub on_yes: Arc<dyn Fn() + Send + Sync>,
    pub on_no: Arc<dyn Fn() + Send + Sync>,
}

#[derive(Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub intent: Option<ConfirmIntent>,
}

/// Pure queue; the service wraps it in a signal.
#[derive(Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, kind: ToastKind, intent: Option<ConfirmIntent>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message,
            kind,
            intent,
        });
        id
    }

    /// Plain dismissal: removes the toast, fires nothing.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Resolve a confirm toast. Returns the callback to invoke (after
    /// the queue borrow ends); `None` for unknown ids or plain toasts.
    pub fn resolve_confirm(&mut self, id: u64, yes: bool) -> Option<Arc<dyn Fn() + Send + Sync>> {
        let idx = self.toasts.iter().position(|t| t.id == id)?;
        let toast = self.toasts.remove(idx);
        let intent = toast.intent?;
        Some(if yes { intent.on_yes } else { intent.on_no })
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

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

    pub fn expect() -> Self {
        use_context::<ToastService>().expect("ToastService not provided in context")
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.queue.update(|q| {
            q.push(message.into(), kind, None);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn confirm(
        &self,
        message: impl Into<String>,
        on_yes: impl Fn() + Send + Sync + 'static,
        on_no: impl Fn() + Send + Sync + 'static,
    ) {
        self.queue.update(|q| {
            q.push(
                message.into(),
                ToastKind::Confirm,
                Some(ConfirmIntent {
                    on_yes: Arc::new(on_yes),
                    on_no: Arc::new(on_no),
                }),
            );
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn choose(&self, id: u64, yes: bool) {
        let callback = self
            .queue
            .try_update(|q| q.resolve_confirm(id, yes))
            .flatten();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast queue. Mounted exactly once, near the root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = ToastService::expect();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let is_confirm = toast.kind == ToastKind::Confirm;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast__message">{toast.message.clone()}</span>
                            {if is_confirm {
                                view! {
                                    <button
                                        class="toast__button toast__button--yes"
                                        on:click=move |_| svc.choose(id, true)
                                    >
                                        "Yes"
                                    </button>
                                    <button
                                        class="toast__button toast__button--no"
                                        on:click=move |_| svc.choose(id, false)
                                    >
                                        "No"
                                    </button>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <button
                                        class="toast__button toast__button--close"
                                        on:click=move |_| svc.dismiss(id)
                                    >
                                        "\u{00d7}"
                                    </button>
                                }
                                .into_any()
                            }}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut q = ToastQueue::default();
        q.push("first".to_string(), ToastKind::Info, None);
        q.push("second".to_string(), ToastKind::Error, None);
        q.push("third".to_string(), ToastKind::Success, None);
        let messages: Vec<_> = q.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn test_confirm_yes_fires_only_yes() {
        let yes = Arc::new(AtomicBool::new(false));
        let no = Arc::new(AtomicBool::new(false));
        let mut q = ToastQueue::default();
        let id = q.push(
            "Delete?".to_string(),
            ToastKind::Confirm,
            Some(ConfirmIntent {
                on_yes: {
                    let yes = yes.clone();
                    Arc::new(move || yes.store(true, Ordering::SeqCst))
                },
                on_no: {
                    let no = no.clone();
                    Arc::new(move || no.store(true, Ordering::SeqCst))
                },
            }),
        );
        let callback = q.resolve_confirm(id, true).expect("confirm callback");
        callback();
        assert!(yes.load(Ordering::SeqCst));
        assert!(!no.load(Ordering::SeqCst));
        assert!(q.toasts().is_empty());
    }

    #[test]
    fn test_dismissing_confirm_fires_neither_callback() {
        let fired = Arc::new(AtomicBool::new(false));
        let mut q = ToastQueue::default();
        let id = q.push(
            "Delete?".to_string(),
            ToastKind::Confirm,
            Some(ConfirmIntent {
                on_yes: {
                    let fired = fired.clone();
                    Arc::new(move || fired.store(true, Ordering::SeqCst))
                },
                on_no: {
                    let fired = fired.clone();
                    Arc::new(move || fired.store(true, Ordering::SeqCst))
                },
            }),
        );
        q.dismiss(id);
        assert!(!fired.load(Ordering::SeqCst));
        assert!(q.toasts().is_empty());
    }

    #[test]
    fn test_resolve_unknown_id_is_noop() {
        let mut q = ToastQueue::default();
        q.push("info".to_string(), ToastKind::Info, None);
        assert!(q.resolve_confirm(99, true).is_none());
        assert_eq!(q.toasts().len(), 1);
    }
}
