//! Modal yes/no dialog backing the `ConfirmPrompt` used before logout and
//! unsubscribe.

use std::cell::RefCell;
use std::rc::Rc;

use futures_channel::oneshot;
use session_core::ConfirmPrompt;
use yew::prelude::*;

/// A prompt waiting for an answer
struct PendingConfirm {
    title: String,
    message: String,
    reply: RefCell<Option<oneshot::Sender<bool>>>,
}

impl PendingConfirm {
    fn answer(&self, confirmed: bool) {
        if let Some(reply) = self.reply.borrow_mut().take() {
            let _ = reply.send(confirmed);
        }
    }
}

/// Opens the dialog; provided as context by `ConfirmDialogHost`
#[derive(Clone, PartialEq)]
pub struct DialogHandle {
    open: Callback<Rc<PendingConfirm>>,
}

impl ConfirmPrompt for DialogHandle {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        self.open.emit(Rc::new(PendingConfirm {
            title: title.to_string(),
            message: message.to_string(),
            reply: RefCell::new(Some(tx)),
        }));
        // A dialog replaced or unmounted before answering counts as "no"
        rx.await.unwrap_or(false)
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogHostProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ConfirmDialogHost)]
pub fn confirm_dialog_host(props: &ConfirmDialogHostProps) -> Html {
    let pending = use_state(|| None::<Rc<PendingConfirm>>);

    let handle = {
        let pending = pending.setter();
        use_memo((), move |_| DialogHandle {
            open: Callback::from(move |request: Rc<PendingConfirm>| {
                pending.set(Some(request));
            }),
        })
    };

    let dialog = match &*pending {
        Some(request) => {
            let respond = |confirmed: bool| {
                let pending = pending.clone();
                let request = request.clone();
                Callback::from(move |_: MouseEvent| {
                    request.answer(confirmed);
                    pending.set(None);
                })
            };
            let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());
            html! {
                <div class="confirm-dialog-overlay" onclick={respond(false)}>
                    <div class="confirm-dialog" onclick={on_dialog_click}>
                        <h2>{ &request.title }</h2>
                        <p>{ &request.message }</p>
                        <div class="confirm-dialog-actions">
                            <button class="secondary" onclick={respond(false)}>{ "Cancel" }</button>
                            <button class="primary" onclick={respond(true)}>{ "Confirm" }</button>
                        </div>
                    </div>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<DialogHandle> context={(*handle).clone()}>
            { props.children.clone() }
            { dialog }
        </ContextProvider<DialogHandle>>
    }
}
