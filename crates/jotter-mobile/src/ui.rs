//! Shared mobile UI primitives aligned with official Dioxus component patterns.

use dioxus::prelude::*;
use jotter_core::sheet::{BottomSheet, Curve, SheetState};

/// Shared styles for buttons, inputs, the bottom sheet and toasts.
pub const MOBILE_UI_STYLES: &str = r"
.ui-button {
    border-radius: 10px;
    padding: 12px 14px;
    font-size: 14px;
    font-weight: 600;
    border: 1px solid transparent;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
}

.ui-button--block {
    width: 100%;
}

.ui-button--primary {
    background: #2563eb;
    color: #ffffff;
    border-color: #2563eb;
}

.ui-button--outline {
    background: #ffffff;
    color: #374151;
    border-color: #d1d5db;
}

.ui-button--ghost {
    background: transparent;
    color: #374151;
    border-color: transparent;
}

.ui-button--danger {
    background: #dc2626;
    color: #ffffff;
    border-color: #dc2626;
}

.ui-input, .ui-textarea {
    width: 100%;
    border: 1px solid #d1d5db;
    border-radius: 10px;
    padding: 10px 12px;
    font-size: 14px;
    background: #ffffff;
    color: #111827;
}

.ui-input--invalid {
    border-color: #ef4444;
}

.ui-textarea {
    resize: none;
    min-height: 140px;
}

.ui-field-error {
    margin: 4px 0 0 0;
    font-size: 12px;
    color: #dc2626;
}

.ui-sheet-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(17, 24, 39, 0.45);
    z-index: 100;
}

.ui-sheet {
    position: fixed;
    left: 0;
    right: 0;
    top: 0;
    bottom: 0;
    background: #ffffff;
    border-radius: 16px 16px 0 0;
    z-index: 101;
    padding: 12px 16px;
    touch-action: none;
}

.ui-sheet-handle {
    width: 44px;
    height: 5px;
    border-radius: 3px;
    background: #d1d5db;
    margin: 0 auto 12px auto;
}

.toast-container {
    position: fixed;
    inset: auto 12px 12px 12px;
    z-index: 9999;
    pointer-events: none;
}
.toast-list {
    margin: 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.toast {
    pointer-events: auto;
    border-radius: 10px;
    border: 1px solid #ef4444;
    background: #ffffff;
    padding: 10px 12px;
    color: #111827;
}
.toast-title { font-size: 13px; font-weight: 700; }
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("ui-button {}", variant.class());
    if block {
        class_name.push_str(" ui-button--block");
    }

    rsx! {
        button {
            class: "{class_name}",
            disabled: disabled || loading,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            if loading {
                "..."
            } else {
                {children}
            }
        }
    }
}

/// Labelled input with its validation message underneath.
#[component]
pub fn TextInputField(
    label: String,
    value: String,
    error: Option<String>,
    #[props(default)] secure: bool,
    oninput: EventHandler<String>,
) -> Element {
    let class_name = if error.is_some() {
        "ui-input ui-input--invalid"
    } else {
        "ui-input"
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            label {
                style: "font-size: 12px; color: #6b7280;",
                "{label}"
            }
            input {
                class: class_name,
                r#type: if secure { "password" } else { "text" },
                value: "{value}",
                oninput: move |event| oninput.call(event.value()),
            }
            if let Some(error) = error {
                p { class: "ui-field-error", "{error}" }
            }
        }
    }
}

#[component]
pub fn UiTextarea(
    value: String,
    placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-textarea",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| oninput.call(event.value()),
        }
    }
}

/// Pointer callbacks emitted by [`SheetFrame`], in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetGesture {
    Start { y: f64 },
    Move { y: f64 },
    End { y: f64 },
    BackdropTap,
}

/// CSS transition matching the sheet's active animation.
fn sheet_transition(sheet: &BottomSheet) -> String {
    match sheet.state() {
        SheetState::Dragging => "none".to_string(),
        _ => sheet.transition().map_or_else(
            || "none".to_string(),
            |transition| match transition.curve {
                Curve::Spring { .. } => format!(
                    "transform {}ms cubic-bezier(0.2, 0.9, 0.3, 1.1)",
                    transition.curve.duration().as_millis()
                ),
                Curve::Timing { duration } => {
                    format!("transform {}ms ease-in", duration.as_millis())
                }
            },
        ),
    }
}

/// Backdrop plus panel positioned at the sheet's current offset.
#[component]
pub fn SheetFrame(sheet: BottomSheet, ongesture: EventHandler<SheetGesture>, children: Element) -> Element {
    let target = sheet
        .transition()
        .map_or_else(|| sheet.offset(), |transition| transition.to);
    let transition = sheet_transition(&sheet);
    let style = format!("transform: translateY({target}px); transition: {transition};");

    rsx! {
        div {
            class: "ui-sheet-backdrop",
            onclick: move |_| ongesture.call(SheetGesture::BackdropTap),
        }
        if sheet.has_handle() {
            div {
                class: "ui-sheet",
                style: "{style}",
                onpointerdown: move |event| {
                    ongesture.call(SheetGesture::Start { y: event.client_coordinates().y });
                },
                onpointermove: move |event| {
                    ongesture.call(SheetGesture::Move { y: event.client_coordinates().y });
                },
                onpointerup: move |event| {
                    ongesture.call(SheetGesture::End { y: event.client_coordinates().y });
                },
                div { class: "ui-sheet-handle" }
                {children}
            }
        } else {
            div {
                class: "ui-sheet",
                style: "{style}",
                {children}
            }
        }
    }
}
