//! Page-level state.
//!
//! `ShowcaseState` wraps the core [`ViewState`] so the platform view model is
//! one explicitly owned object injected through the component tree, and
//! `ToastQueue` holds the toasts currently on screen. Both reducers are pure
//! and unit-tested on the host.

use std::rc::Rc;

use yew::prelude::*;

use vitrine_common::{Platform, Switch, Toast, ViewState};

/// Page-owned view model driving the platform mockups
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShowcaseState {
    view: ViewState,
}

impl ShowcaseState {
    pub fn platform(&self) -> Platform {
        self.view.current()
    }
}

pub enum ShowcaseAction {
    Switch(Platform),
}

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShowcaseAction::Switch(platform) => {
                let mut next = (*self).clone();
                match next.view.switch_to(platform) {
                    Switch::Changed { .. } => Rc::new(next),
                    Switch::Unchanged => self,
                }
            }
        }
    }
}

/// One toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastQueue {
    pub toasts: Vec<ActiveToast>,
}

pub enum ToastAction {
    Push { id: u64, toast: Toast },
    Dismiss { id: u64 },
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { id, toast } => {
                let mut next = (*self).clone();
                next.toasts.push(ActiveToast { id, toast });
                Rc::new(next)
            }
            ToastAction::Dismiss { id } => {
                if !self.toasts.iter().any(|active| active.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|active| active.id != id);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce<S: Reducible>(state: Rc<S>, action: S::Action) -> Rc<S> {
        state.reduce(action)
    }

    #[test]
    fn showcase_starts_on_ios() {
        assert_eq!(ShowcaseState::default().platform(), Platform::Ios);
    }

    #[test]
    fn switch_action_updates_the_view() {
        let state = Rc::new(ShowcaseState::default());
        let state = reduce(state, ShowcaseAction::Switch(Platform::Android));
        assert_eq!(state.platform(), Platform::Android);

        let state = reduce(state, ShowcaseAction::Switch(Platform::Web));
        assert_eq!(state.platform(), Platform::Web);
    }

    #[test]
    fn repeated_switch_returns_the_same_state() {
        let state = reduce(
            Rc::new(ShowcaseState::default()),
            ShowcaseAction::Switch(Platform::Web),
        );
        let same = reduce(state.clone(), ShowcaseAction::Switch(Platform::Web));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn toasts_keep_arrival_order() {
        let queue = Rc::new(ToastQueue::default());
        let queue = reduce(
            queue,
            ToastAction::Push {
                id: 1,
                toast: Toast::info("first"),
            },
        );
        let queue = reduce(
            queue,
            ToastAction::Push {
                id: 2,
                toast: Toast::success("second"),
            },
        );

        let messages: Vec<&str> = queue
            .toasts
            .iter()
            .map(|active| active.toast.message.as_str())
            .collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn dismiss_removes_exactly_the_matching_toast() {
        let mut queue = Rc::new(ToastQueue::default());
        for id in 1..=3 {
            queue = reduce(
                queue,
                ToastAction::Push {
                    id,
                    toast: Toast::info(format!("toast {id}")),
                },
            );
        }

        let queue = reduce(queue, ToastAction::Dismiss { id: 2 });
        let ids: Vec<u64> = queue.toasts.iter().map(|active| active.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let queue = reduce(
            Rc::new(ToastQueue::default()),
            ToastAction::Push {
                id: 7,
                toast: Toast::warning("stays"),
            },
        );
        let same = reduce(queue.clone(), ToastAction::Dismiss { id: 99 });
        assert!(Rc::ptr_eq(&queue, &same));
    }
}
