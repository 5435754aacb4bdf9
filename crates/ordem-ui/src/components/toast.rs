use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
struct Toast {
    id: u64,
    message: String,
    kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    /// Shows a transient notification; it dismisses itself after 5 s.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            });
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|list| list.retain(|toast| toast.id != id));
            },
            std::time::Duration::from_secs(5),
        );
    }
}

/// Provides the toast context and renders the stacking container. Mounted
/// once, above the router.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let ctx = ToastContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    };

    provide_context(ctx);

    view! {
        {children()}
        <div class="toast-container">
            <For each=move || ctx.toasts.get() key=|toast| toast.id let:toast>
                <div class=match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                }>{toast.message.clone()}</div>
            </For>
        </div>
    }
}
