//! Toast notifications: a host component that renders the stack and a
//! handle, provided as context, that implements `Notifier`.

use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use session_core::config::TOAST_DURATION_MS;
use session_core::Notifier;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

#[derive(Default, PartialEq)]
struct ToastStack {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Fire-and-forget toast surface. Each toast dismisses itself after
/// `TOAST_DURATION_MS`.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    push: Callback<(ToastKind, String)>,
}

impl Notifier for ToastHandle {
    fn success(&self, message: &str) {
        self.push.emit((ToastKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push.emit((ToastKind::Error, format!("❌ {}", message)));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let stack = use_reducer(ToastStack::default);

    let handle = {
        let dispatcher = stack.dispatcher();
        use_memo((), move |_| {
            let next_id = Cell::new(0u32);
            ToastHandle {
                push: Callback::from(move |(kind, message): (ToastKind, String)| {
                    let id = next_id.get();
                    next_id.set(id.wrapping_add(1));
                    dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));
                    let dispatcher = dispatcher.clone();
                    Timeout::new(TOAST_DURATION_MS, move || {
                        dispatcher.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                }),
            }
        })
    };

    html! {
        <ContextProvider<ToastHandle> context={(*handle).clone()}>
            { props.children.clone() }
            <div class="toast-stack">
                { for stack.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    html! { <div key={toast.id} class={class}>{ &toast.message }</div> }
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}
