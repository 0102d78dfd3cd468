use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider};
use jotter_core::app::JotterApp;
use jotter_core::navigation::Route;
use jotter_core::scale::{Scaler, BASE_HEIGHT, BASE_WIDTH};
use jotter_core::screens::{
    AuthMode, FieldErrors, LoginForm, LoginOutcome, LoginScreen, NoteDraft, NotesScreen,
    SubmitOutcome, Toast, NOTICE_TIMEOUT,
};
use jotter_core::sheet::{BottomSheet, ConfirmationDialog, SheetEvent, Transition};
use jotter_core::{Note, NoteId};
use tokio::sync::Mutex;

use crate::auth::connect;
use crate::bootstrap_config::resolve_bootstrap_config;
use crate::launch::{detect_launch_intent_from_runtime, LaunchIntent};
use crate::ui::{
    ButtonVariant, SheetFrame, SheetGesture, TextInputField, UiButton, UiTextarea,
    MOBILE_UI_STYLES,
};

const TITLE_PREVIEW_CHARS: usize = 40;
const CONTENT_PREVIEW_CHARS: usize = 120;

type SharedLogin = Arc<Mutex<LoginScreen>>;
type SharedNotes = Arc<Mutex<NotesScreen>>;

/// Shared app root handed to every screen through context.
#[derive(Clone)]
struct AppHandle(Arc<JotterApp>);

impl PartialEq for AppHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn build_app() -> Result<AppHandle, String> {
    let config = resolve_bootstrap_config().map_err(|error| error.to_string())?;
    let backend = connect(&config).map_err(|error| error.to_string())?;
    Ok(AppHandle(Arc::new(JotterApp::new(backend, &config))))
}

#[component]
pub fn App() -> Element {
    let setup = use_hook(build_app);

    rsx! {
        style { {MOBILE_UI_STYLES} }
        ToastProvider {
            {match setup {
                Ok(app) => rsx! { Shell { app } },
                Err(message) => rsx! { ConfigError { message } },
            }}
        }
    }
}

#[component]
fn ConfigError(message: String) -> Element {
    tracing::error!("Mobile shell failed to start: {}", message);
    rsx! {
        div {
            style: "padding: 24px; display: flex; flex-direction: column; gap: 8px;",
            p { style: "margin: 0; font-size: 16px; font-weight: 600;", "Jotter could not start" }
            p { style: "margin: 0; font-size: 13px; color: #6b7280;", "{message}" }
        }
    }
}

#[component]
fn Shell(app: AppHandle) -> Element {
    let mut route = use_signal(|| None::<Route>);
    let mut scaler = use_signal(|| Scaler::new(BASE_WIDTH, BASE_HEIGHT));
    let launch: LaunchIntent = use_hook(detect_launch_intent_from_runtime);
    use_context_provider(|| app.clone());

    use_future(move || {
        let app = app.clone();
        let launch = launch.clone();
        async move {
            match document::eval("return [window.innerWidth, window.innerHeight];")
                .join::<(f64, f64)>()
                .await
            {
                Ok((width, height)) => scaler.set(Scaler::new(width, height)),
                Err(error) => tracing::warn!("Failed to measure screen: {:?}", error),
            }

            app.0.restore().await;
            // Detached; ends when the backend drops its event channel.
            let _listener = app.0.spawn_auth_listener();
            if let Some(url) = launch.deep_link.as_deref() {
                app.0.handle_deep_link(url);
            }

            let mut navigation = app.0.subscribe_navigation();
            loop {
                let current = navigation.borrow_and_update().current();
                route.set(Some(current));
                if navigation.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        {match route() {
            None => rsx! {
                div {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #6b7280;",
                    "Loading..."
                }
            },
            Some(Route::Login) => rsx! { LoginView { scaler: scaler() } },
            Some(Route::Notes) => rsx! { NotesView { scaler: scaler() } },
        }}
    }
}

#[derive(Clone, Default, PartialEq)]
struct LoginSnapshot {
    mode: AuthMode,
    form: LoginForm,
    errors: FieldErrors,
    notice: Option<String>,
    loading: bool,
}

impl LoginSnapshot {
    fn of(screen: &LoginScreen) -> Self {
        Self {
            mode: screen.mode(),
            form: screen.form().clone(),
            errors: screen.errors().clone(),
            notice: screen.notice().map(str::to_string),
            loading: screen.is_loading(),
        }
    }
}

fn edit_login(
    screen: &SharedLogin,
    mut view: Signal<LoginSnapshot>,
    edit: impl FnOnce(&mut LoginScreen),
) {
    // Input is ignored while a submission holds the screen.
    if let Ok(mut guard) = screen.try_lock() {
        edit(&mut guard);
        view.set(LoginSnapshot::of(&guard));
    }
}

#[component]
fn LoginView(scaler: Scaler) -> Element {
    let app = use_context::<AppHandle>();
    let (screen, scope) = use_hook(|| {
        let screen = app.0.login_screen();
        let scope = screen.scope_handle();
        (Arc::new(Mutex::new(screen)), scope)
    });
    use_drop(move || scope.cancel());
    let mut view = use_signal(LoginSnapshot::default);
    let snapshot = view();

    let on_email = {
        let screen = screen.clone();
        move |value: String| edit_login(&screen, view, |s| s.set_email(value))
    };
    let on_password = {
        let screen = screen.clone();
        move |value: String| edit_login(&screen, view, |s| s.set_password(value))
    };
    let on_confirm = {
        let screen = screen.clone();
        move |value: String| edit_login(&screen, view, |s| s.set_confirm_password(value))
    };
    let on_toggle = {
        let screen = screen.clone();
        move |_| edit_login(&screen, view, LoginScreen::toggle_mode)
    };
    let on_submit = {
        let screen = screen.clone();
        move |_| {
            let screen = screen.clone();
            let app = app.clone();
            spawn(async move {
                view.with_mut(|view| view.loading = true);
                let mut guard = screen.lock().await;
                let outcome = guard.submit().await;
                view.set(LoginSnapshot::of(&guard));
                drop(guard);

                match outcome {
                    LoginOutcome::SignedIn(action) => app.0.apply(action),
                    LoginOutcome::ConfirmationSent => {
                        tokio::time::sleep(NOTICE_TIMEOUT).await;
                        let mut guard = screen.lock().await;
                        if guard.expire_notice() {
                            view.set(LoginSnapshot::of(&guard));
                        }
                    }
                    _ => {}
                }
            });
        }
    };

    let is_sign_up = snapshot.mode == AuthMode::SignUp;
    let title = snapshot.mode.title();
    let title_size = scaler.fs(24);
    let padding = scaler.s(20);
    let gap = scaler.vs(16);
    let radius = scaler.r(10);

    rsx! {
        div {
            style: "padding: {padding}px; display: flex; flex-direction: column; gap: {gap}px;",
            h1 { style: "margin: 0; font-size: {title_size}px;", "{title}" }

            if let Some(notice) = snapshot.notice.clone() {
                p {
                    style: "margin: 0; padding: 10px 12px; border-radius: {radius}px; background: #ecfdf5; color: #065f46; font-size: 13px;",
                    "{notice}"
                }
            }

            TextInputField {
                label: "Email",
                value: snapshot.form.email.clone(),
                error: snapshot.errors.email.clone(),
                oninput: on_email,
            }
            TextInputField {
                label: "Password",
                value: snapshot.form.password.clone(),
                error: snapshot.errors.password.clone(),
                secure: true,
                oninput: on_password,
            }
            if is_sign_up {
                TextInputField {
                    label: "Confirm Password",
                    value: snapshot.form.confirm_password.clone(),
                    error: snapshot.errors.confirm_password.clone(),
                    secure: true,
                    oninput: on_confirm,
                }
            }

            if let Some(response) = snapshot.errors.response.clone() {
                p { class: "ui-field-error", "{response}" }
            }

            UiButton {
                type: "button",
                block: true,
                loading: snapshot.loading,
                onclick: on_submit,
                if is_sign_up { "Sign Up" } else { "Sign In" }
            }
            UiButton {
                type: "button",
                variant: ButtonVariant::Ghost,
                disabled: snapshot.loading,
                onclick: on_toggle,
                if is_sign_up {
                    "Already have an account? Sign In"
                } else {
                    "Don't have an account? Sign Up"
                }
            }
        }
    }
}

#[derive(Clone, Default, PartialEq)]
struct NotesSnapshot {
    notes: Vec<Note>,
    total: usize,
    loading: bool,
    mutating: bool,
    editor: Option<BottomSheet>,
    draft: NoteDraft,
    delete: Option<ConfirmationDialog>,
    logout: Option<ConfirmationDialog>,
    search: String,
}

impl NotesSnapshot {
    fn of(screen: &NotesScreen) -> Self {
        Self {
            notes: screen.visible_notes().into_iter().cloned().collect(),
            total: screen.notes().len(),
            loading: screen.is_loading(),
            mutating: screen.is_mutating(),
            editor: screen.editor().cloned(),
            draft: screen.editor_draft(),
            delete: screen.delete_dialog().map(|pending| pending.dialog.clone()),
            logout: screen.logout_dialog().cloned(),
            search: screen.search_query().to_string(),
        }
    }
}

/// Which sheet on the notes screen a gesture or animation belongs to.
#[derive(Clone, Copy, PartialEq, Eq)]
enum SheetTarget {
    Editor,
    Delete,
    Logout,
}

fn sheet_mut(screen: &mut NotesScreen, target: SheetTarget) -> Option<&mut BottomSheet> {
    match target {
        SheetTarget::Editor => screen.editor_mut(),
        SheetTarget::Delete => screen
            .delete_dialog_mut()
            .map(|pending| pending.dialog.sheet_mut()),
        SheetTarget::Logout => screen.logout_dialog_mut().map(ConfirmationDialog::sheet_mut),
    }
}

fn close_sheet(screen: &mut NotesScreen, target: SheetTarget) {
    match target {
        SheetTarget::Editor => screen.close_editor(),
        SheetTarget::Delete => screen.cancel_delete(),
        SheetTarget::Logout => screen.cancel_logout(),
    }
}

/// Commit `transition` once its animation has had time to play.
fn settle(
    screen: SharedNotes,
    target: SheetTarget,
    transition: Transition,
    mut view: Signal<NotesSnapshot>,
) {
    spawn(async move {
        tokio::time::sleep(transition.curve.duration()).await;
        let mut guard = screen.lock().await;
        let Some(sheet) = sheet_mut(&mut guard, target) else {
            return;
        };
        if sheet.transition() != Some(transition) {
            return;
        }
        if sheet.finish_animation() == Some(SheetEvent::Dismissed) {
            close_sheet(&mut guard, target);
        }
        view.set(NotesSnapshot::of(&guard));
    });
}

/// Cancel button of a confirmation sheet.
fn cancel_dialog(screen: &SharedNotes, target: SheetTarget, mut view: Signal<NotesSnapshot>) {
    let Ok(mut guard) = screen.try_lock() else {
        return;
    };
    let transition = match target {
        SheetTarget::Editor => None,
        SheetTarget::Delete => guard
            .delete_dialog_mut()
            .and_then(|pending| pending.dialog.cancel()),
        SheetTarget::Logout => guard.logout_dialog_mut().and_then(ConfirmationDialog::cancel),
    };

    view.set(NotesSnapshot::of(&guard));
    drop(guard);
    if let Some(transition) = transition {
        settle(screen.clone(), target, transition, view);
    }
}

#[derive(Clone, Copy)]
struct DragTrack {
    start_y: f64,
    last_y: f64,
    last_at: Instant,
    velocity: f64,
}

impl DragTrack {
    fn new(y: f64) -> Self {
        Self {
            start_y: y,
            last_y: y,
            last_at: Instant::now(),
            velocity: 0.0,
        }
    }

    /// Record a pointer position; velocity is in px per ms.
    fn update(&mut self, y: f64) {
        let elapsed_ms = self.last_at.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > 0.0 {
            self.velocity = (y - self.last_y) / elapsed_ms;
        }
        self.last_y = y;
        self.last_at = Instant::now();
    }
}

fn handle_gesture(
    screen: &SharedNotes,
    target: SheetTarget,
    gesture: SheetGesture,
    mut drag: Signal<Option<DragTrack>>,
    mut view: Signal<NotesSnapshot>,
) {
    let Ok(mut guard) = screen.try_lock() else {
        return;
    };
    let Some(sheet) = sheet_mut(&mut guard, target) else {
        return;
    };

    let transition = match gesture {
        SheetGesture::Start { y } => {
            drag.set(Some(DragTrack::new(y)));
            None
        }
        SheetGesture::Move { y } => {
            if let Some(track) = drag.write().as_mut() {
                track.update(y);
                sheet.drag_move(y - track.start_y);
            }
            None
        }
        SheetGesture::End { y } => drag.take().and_then(|mut track| {
            track.update(y);
            sheet.drag_end(y - track.start_y, track.velocity)
        }),
        SheetGesture::BackdropTap => sheet.backdrop_tap(),
    };

    view.set(NotesSnapshot::of(&guard));
    drop(guard);
    if let Some(transition) = transition {
        settle(screen.clone(), target, transition, view);
    }
}

#[component]
fn NotesView(scaler: Scaler) -> Element {
    let app = use_context::<AppHandle>();
    let toasts = use_toast();
    let (screen, scope) = use_hook(|| {
        let screen = app.0.notes_screen(scaler.screen_height);
        let scope = screen.scope_handle();
        (Arc::new(Mutex::new(screen)), scope)
    });
    use_drop(move || scope.cancel());
    let mut view = use_signal(NotesSnapshot::default);
    let drag = use_signal(|| None::<DragTrack>);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let show_toasts = move |items: Vec<Toast>| {
        for toast in items {
            toasts.error(
                toast.message,
                ToastOptions::new().duration(toast.duration.as_duration()),
            );
        }
    };

    use_future({
        let screen = screen.clone();
        move || {
            let screen = screen.clone();
            async move {
                let mut guard = screen.lock().await;
                guard.load().await;
                view.set(NotesSnapshot::of(&guard));
                show_toasts(guard.take_toasts());
            }
        }
    });

    let mut open_editor = {
        let screen = screen.clone();
        move |id: Option<NoteId>| {
            let Ok(mut guard) = screen.try_lock() else {
                return;
            };
            guard.open_editor(id);
            let draft = guard.editor_draft();
            title.set(draft.title);
            content.set(draft.content);
            let opening = guard.editor().and_then(BottomSheet::transition);
            view.set(NotesSnapshot::of(&guard));
            drop(guard);
            if let Some(transition) = opening {
                settle(screen.clone(), SheetTarget::Editor, transition, view);
            }
        }
    };

    let request_delete = {
        let screen = screen.clone();
        move |id: NoteId| {
            let Ok(mut guard) = screen.try_lock() else {
                return;
            };
            guard.request_delete(id);
            let opening = guard
                .delete_dialog()
                .and_then(|pending| pending.dialog.sheet().transition());
            view.set(NotesSnapshot::of(&guard));
            drop(guard);
            if let Some(transition) = opening {
                settle(screen.clone(), SheetTarget::Delete, transition, view);
            }
        }
    };

    let request_logout = {
        let screen = screen.clone();
        move |_| {
            let Ok(mut guard) = screen.try_lock() else {
                return;
            };
            guard.request_logout();
            let opening = guard
                .logout_dialog()
                .and_then(|dialog| dialog.sheet().transition());
            view.set(NotesSnapshot::of(&guard));
            drop(guard);
            if let Some(transition) = opening {
                settle(screen.clone(), SheetTarget::Logout, transition, view);
            }
        }
    };

    let on_search = {
        let screen = screen.clone();
        move |event: Event<FormData>| {
            if let Ok(mut guard) = screen.try_lock() {
                guard.set_search_query(event.value());
                view.set(NotesSnapshot::of(&guard));
            }
        }
    };

    let on_save = {
        let screen = screen.clone();
        let app = app.clone();
        move |_| {
            let screen = screen.clone();
            let app = app.clone();
            spawn(async move {
                view.with_mut(|view| view.mutating = true);
                let (note_title, note_content) = (title.peek().clone(), content.peek().clone());
                let mut guard = screen.lock().await;
                let outcome = guard.submit_note(&note_title, &note_content).await;
                view.set(NotesSnapshot::of(&guard));
                show_toasts(guard.take_toasts());
                drop(guard);

                if let SubmitOutcome::SessionExpired(action) = outcome {
                    app.0.apply(action);
                }
            });
        }
    };

    let confirm_delete = {
        let screen = screen.clone();
        move |_| {
            let screen = screen.clone();
            spawn(async move {
                view.with_mut(|view| view.mutating = true);
                let mut guard = screen.lock().await;
                guard.confirm_delete().await;
                view.set(NotesSnapshot::of(&guard));
                show_toasts(guard.take_toasts());
            });
        }
    };

    let confirm_logout = {
        let screen = screen.clone();
        let app = app.clone();
        move |_| {
            let screen = screen.clone();
            let app = app.clone();
            spawn(async move {
                view.with_mut(|view| view.mutating = true);
                let mut guard = screen.lock().await;
                let action = guard.confirm_logout().await;
                view.set(NotesSnapshot::of(&guard));
                show_toasts(guard.take_toasts());
                drop(guard);

                if let Some(action) = action {
                    app.0.apply(action);
                }
            });
        }
    };

    let on_back = {
        let screen = screen.clone();
        move |event: Event<KeyboardData>| {
            if !matches!(event.key(), Key::Escape | Key::GoBack) {
                return;
            }
            let Ok(mut guard) = screen.try_lock() else {
                return;
            };
            let mut closing = None;
            for target in [SheetTarget::Logout, SheetTarget::Delete, SheetTarget::Editor] {
                if let Some(sheet) = sheet_mut(&mut guard, target) {
                    if sheet.back_pressed() {
                        closing = sheet.transition().map(|transition| (target, transition));
                        break;
                    }
                }
            }
            view.set(NotesSnapshot::of(&guard));
            drop(guard);
            if let Some((target, transition)) = closing {
                event.prevent_default();
                settle(screen.clone(), target, transition, view);
            }
        }
    };

    let snapshot = view();
    let header_size = scaler.fs(22);
    let padding = scaler.s(16);
    let count_label = if snapshot.search.trim().is_empty() {
        format!("{} notes", snapshot.total)
    } else {
        format!("Showing {} of {} notes", snapshot.notes.len(), snapshot.total)
    };

    rsx! {
        div {
            tabindex: 0,
            style: "min-height: 100vh; display: flex; flex-direction: column; background: #f9fafb;",
            onkeydown: on_back,

            div {
                style: "padding: {padding}px; display: flex; align-items: center; justify-content: space-between;",
                h1 { style: "margin: 0; font-size: {header_size}px;", "Notes" }
                UiButton {
                    type: "button",
                    variant: ButtonVariant::Outline,
                    onclick: request_logout,
                    "Logout"
                }
            }

            div {
                style: "padding: 0 {padding}px 12px {padding}px; display: flex; flex-direction: column; gap: 6px;",
                input {
                    class: "ui-input",
                    r#type: "search",
                    placeholder: "Search notes...",
                    value: "{snapshot.search}",
                    oninput: on_search,
                }
                p { style: "margin: 0; font-size: 12px; color: #6b7280;", "{count_label}" }
            }

            if snapshot.loading {
                div {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #6b7280;",
                    "Loading notes..."
                }
            } else if snapshot.notes.is_empty() {
                div {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #6b7280;",
                    "No notes yet"
                }
            } else {
                div {
                    style: "flex: 1; overflow-y: auto; padding: 0 {padding}px 96px {padding}px; display: flex; flex-direction: column; gap: 10px;",
                    for note in snapshot.notes.iter().cloned() {
                        NoteRow {
                            key: "{note.id}",
                            note,
                            onopen: open_editor.clone(),
                            ondelete: request_delete.clone(),
                        }
                    }
                }
            }

            UiButton {
                type: "button",
                style: "position: fixed; right: 20px; bottom: 24px; border-radius: 28px; width: 56px; height: 56px; font-size: 24px;",
                onclick: {
                    let mut open_editor = open_editor.clone();
                    move |_| open_editor(None)
                },
                "+"
            }

            if let Some(sheet) = snapshot.editor.clone() {
                SheetFrame {
                    sheet,
                    ongesture: {
                        let screen = screen.clone();
                        move |gesture: SheetGesture| handle_gesture(&screen, SheetTarget::Editor, gesture, drag, view)
                    },
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px;",
                        input {
                            class: "ui-input",
                            placeholder: "Title",
                            value: "{title}",
                            oninput: move |event| title.set(event.value()),
                        }
                        UiTextarea {
                            value: content(),
                            placeholder: "Write your note...",
                            oninput: move |value: String| content.set(value),
                        }
                        UiButton {
                            type: "button",
                            block: true,
                            loading: snapshot.mutating,
                            onclick: on_save,
                            if snapshot.draft == NoteDraft::default() { "Add Note" } else { "Update Note" }
                        }
                    }
                }
            }

            if let Some(dialog) = snapshot.delete.clone() {
                ConfirmSheet {
                    dialog,
                    confirm_label: "Delete",
                    onconfirm: confirm_delete,
                    ongesture: {
                        let screen = screen.clone();
                        move |gesture: SheetGesture| handle_gesture(&screen, SheetTarget::Delete, gesture, drag, view)
                    },
                    oncancel: {
                        let screen = screen.clone();
                        move |_: MouseEvent| cancel_dialog(&screen, SheetTarget::Delete, view)
                    },
                }
            }

            if let Some(dialog) = snapshot.logout.clone() {
                ConfirmSheet {
                    dialog,
                    confirm_label: "Logout",
                    onconfirm: confirm_logout,
                    ongesture: {
                        let screen = screen.clone();
                        move |gesture: SheetGesture| handle_gesture(&screen, SheetTarget::Logout, gesture, drag, view)
                    },
                    oncancel: {
                        let screen = screen.clone();
                        move |_: MouseEvent| cancel_dialog(&screen, SheetTarget::Logout, view)
                    },
                }
            }
        }
    }
}

#[component]
fn NoteRow(note: Note, onopen: EventHandler<Option<NoteId>>, ondelete: EventHandler<NoteId>) -> Element {
    let title = note.title_preview(TITLE_PREVIEW_CHARS);
    let preview = note.content_preview(CONTENT_PREVIEW_CHARS);
    let created = note.created_at_local();
    let open_id = note.id.clone();
    let delete_id = note.id.clone();

    rsx! {
        div {
            style: "background: #ffffff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 12px; display: flex; gap: 8px;",
            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 4px;",
                onclick: move |_| onopen.call(Some(open_id.clone())),
                p { style: "margin: 0; font-size: 15px; font-weight: 600; color: #111827;", "{title}" }
                p { style: "margin: 0; font-size: 13px; color: #4b5563;", "{preview}" }
                p { style: "margin: 0; font-size: 11px; color: #9ca3af;", "{created}" }
            }
            UiButton {
                type: "button",
                variant: ButtonVariant::Ghost,
                onclick: move |_| ondelete.call(delete_id.clone()),
                "Delete"
            }
        }
    }
}

#[component]
fn ConfirmSheet(
    dialog: ConfirmationDialog,
    confirm_label: String,
    onconfirm: EventHandler<MouseEvent>,
    oncancel: EventHandler<MouseEvent>,
    ongesture: EventHandler<SheetGesture>,
) -> Element {
    rsx! {
        SheetFrame {
            sheet: dialog.sheet().clone(),
            ongesture,
            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                p { style: "margin: 0; font-size: 17px; font-weight: 600;", "{dialog.title()}" }
                p { style: "margin: 0; font-size: 13px; color: #4b5563;", "{dialog.description()}" }
                div {
                    style: "display: flex; gap: 8px;",
                    UiButton {
                        type: "button",
                        variant: ButtonVariant::Outline,
                        disabled: dialog.is_loading(),
                        onclick: move |event| oncancel.call(event),
                        "Cancel"
                    }
                    UiButton {
                        type: "button",
                        variant: ButtonVariant::Danger,
                        loading: dialog.is_loading(),
                        onclick: move |event| onconfirm.call(event),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
