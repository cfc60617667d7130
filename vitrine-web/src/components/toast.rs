//! Transient notification toasts.
//!
//! `ToastHost` owns the queue and provides a [`Toaster`] handle through
//! context; any component below it can pop a notification. Every toast
//! auto-dismisses after a fixed delay and can be closed by hand.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use vitrine_common::catalog::ToastStep;
use vitrine_common::{Toast, ToastLevel};

use crate::state::{ToastAction, ToastQueue};

/// Auto-dismiss delay for every toast
pub const TOAST_DISMISS_MS: u32 = 5_000;

/// Handle components use to pop notifications
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<Toast>,
}

impl Toaster {
    pub fn toast(&self, toast: Toast) {
        self.push.emit(toast);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.toast(Toast::info(message));
    }
}

/// Plays a canned toast script: each step waits its delay, then pops.
/// Fire-and-forget; `on_done` fires after the last step.
pub fn play_script(toaster: Toaster, script: Vec<ToastStep>, on_done: Option<Callback<()>>) {
    spawn_local(async move {
        for step in script {
            if step.delay_ms > 0 {
                TimeoutFuture::new(step.delay_ms).await;
            }
            toaster.toast(Toast::new(step.message, step.level));
        }
        if let Some(on_done) = on_done {
            on_done.emit(());
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let counter = use_mut_ref(|| 0u64);

    let push = {
        let queue = queue.clone();
        use_callback((), move |toast: Toast, _| {
            let id = {
                let mut counter = counter.borrow_mut();
                *counter += 1;
                *counter
            };
            queue.dispatch(ToastAction::Push { id, toast });

            let queue = queue.clone();
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DISMISS_MS).await;
                queue.dispatch(ToastAction::Dismiss { id });
            });
        })
    };

    let dismiss = {
        let queue = queue.clone();
        use_callback((), move |id: u64, _| {
            queue.dispatch(ToastAction::Dismiss { id });
        })
    };

    let toaster = Toaster { push };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { props.children.clone() }
            <div class="toast-stack">
                { for queue.toasts.iter().map(|active| html! {
                    <ToastCard
                        key={active.id.to_string()}
                        id={active.id}
                        message={active.toast.message.clone()}
                        level={active.toast.level}
                        on_dismiss={dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastCardProps {
    id: u64,
    message: String,
    level: ToastLevel,
    on_dismiss: Callback<u64>,
}

fn level_icon(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "fas fa-check-circle",
        ToastLevel::Info => "fas fa-info-circle",
        ToastLevel::Warning => "fas fa-exclamation-triangle",
    }
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={format!("toast toast-{}", props.level.as_str())} role="status">
            <i class={level_icon(props.level)}></i>
            <span class="toast-message">{ &props.message }</span>
            <button class="toast-close" onclick={close}>{"×"}</button>
        </div>
    }
}
