//! Pause/resume control.

use dioxus::prelude::*;
use queue_core::{ActionIcon, QueueAction, QueueControl};

/// Routes a [`QueueAction`] to the matching event handler.
#[derive(Clone, Copy)]
pub(crate) struct ActionHandlers {
    pub on_pause: EventHandler<String>,
    pub on_resume: EventHandler<String>,
}

impl QueueControl for ActionHandlers {
    fn pause_queue(&self, name: &str) {
        self.on_pause.call(name.to_string());
    }

    fn resume_queue(&self, name: &str) {
        self.on_resume.call(name.to_string());
    }
}

/// Props for QueueActionButton component.
#[derive(Props, Clone, PartialEq)]
pub struct QueueActionButtonProps {
    /// Queue the action applies to.
    pub queue_name: String,
    /// The action the button performs.
    pub action: QueueAction,
    /// Callback when pause is clicked.
    pub on_pause: EventHandler<String>,
    /// Callback when resume is clicked.
    pub on_resume: EventHandler<String>,
    /// Show the action name next to the icon.
    #[props(default = false)]
    pub show_label: bool,
}

/// The single control of a queue. Its label and icon describe the action
/// that will run, not the current state.
#[component]
pub fn QueueActionButton(props: QueueActionButtonProps) -> Element {
    let action = props.action;
    let label = action.label();
    let accessible = action.accessible_label(&props.queue_name);
    let variant = match action {
        QueueAction::Pause => "btn-pause",
        QueueAction::Resume => "btn-resume",
    };
    let handlers = ActionHandlers {
        on_pause: props.on_pause,
        on_resume: props.on_resume,
    };
    let name = props.queue_name.clone();

    rsx! {
        button {
            class: "btn btn-small {variant}",
            r#type: "button",
            title: "{label}",
            onclick: move |e| {
                e.stop_propagation();
                action.invoke(&handlers, &name);
            },
            ActionIconSvg { icon: action.icon() }
            if props.show_label {
                span { class: "btn-label", "{label}" }
            } else {
                span { class: "sr-only", "{accessible}" }
            }
        }
    }
}

/// Outline icon for an action.
#[component]
fn ActionIconSvg(icon: ActionIcon) -> Element {
    let inner = match icon {
        ActionIcon::PauseCircle => "M14.25 9v6m-4.5 0V9",
        ActionIcon::PlayCircle => {
            "M15.91 11.672a.375.375 0 0 1 0 .656l-5.603 3.113a.375.375 0 0 1-.557-.328V8.887c0-.286.307-.466.557-.327l5.603 3.112Z"
        }
    };

    rsx! {
        svg {
            class: "icon",
            "aria-hidden": "true",
            fill: "none",
            view_box: "0 0 24 24",
            stroke_width: "1.5",
            stroke: "currentColor",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z",
            }
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: inner,
            }
        }
    }
}
