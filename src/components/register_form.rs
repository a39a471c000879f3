//! Registration form: debounced username availability and the password
//! length gate.
//!
//! ERROR HANDLING
//! ==============
//! A failed availability lookup leaves the hint as it was and is logged at
//! warn level. It never blocks submission; the server re-validates anyway.

use std::rc::Rc;
use std::time::Duration;

use crate::config::RegisterConfig;
use crate::net::api;
use crate::state::register::{
    HintTone, UsernameHint, password_error_message, password_is_valid, password_tone, username_query,
};
use crate::util::debounce::Debouncer;
use crate::util::dom;

pub fn install(cfg: &RegisterConfig) {
    install_username_check(cfg);
    install_password_gate(cfg);
}

fn show_tone(hint: &web_sys::Element, tone: HintTone) {
    dom::remove_class(hint, tone.opposite_class());
    dom::add_class(hint, tone.class());
}

fn show_username_hint(hint: &web_sys::Element, state: UsernameHint) {
    dom::set_text(hint, state.text());
    match state.tone() {
        Some(tone) => show_tone(hint, tone),
        None => {
            dom::remove_class(hint, HintTone::Ok.class());
            dom::remove_class(hint, HintTone::Error.class());
        }
    }
}

// =============================================================================
// USERNAME
// =============================================================================

fn install_username_check(cfg: &RegisterConfig) {
    let (Some(input), Some(hint)) = (
        dom::by_id::<web_sys::HtmlInputElement>(&cfg.username_id),
        dom::by_id::<web_sys::Element>(&cfg.username_hint_id),
    ) else {
        return;
    };
    let debouncer = Rc::new(Debouncer::default());
    let quiet = Duration::from_millis(u64::from(cfg.debounce_ms));
    let field = input.clone();

    dom::listen(&input, "input", move |_| {
        let raw = field.value();
        let Some(username) = username_query(&raw).map(str::to_owned) else {
            debouncer.cancel();
            show_username_hint(&hint, UsernameHint::Cleared);
            return;
        };
        let ticket = debouncer.schedule();
        let debouncer = Rc::clone(&debouncer);
        let hint = hint.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(quiet).await;
            if !debouncer.is_current(ticket) {
                return;
            }
            match api::check_username(&username).await {
                // A newer keystroke may have landed while the request was in flight.
                Ok(exists) if debouncer.is_current(ticket) => {
                    show_username_hint(&hint, UsernameHint::from_exists(exists));
                }
                Ok(_) => {}
                Err(err) => log::warn!("username check failed [{}]: {err}", err.code()),
            }
        });
    });
}

// =============================================================================
// PASSWORD
// =============================================================================

fn install_password_gate(cfg: &RegisterConfig) {
    let Some(password) = dom::by_id::<web_sys::HtmlInputElement>(&cfg.password_id) else {
        return;
    };
    let hint = dom::by_id::<web_sys::Element>(&cfg.password_hint_id);
    let required = cfg.password_length;

    if let Some(form) = dom::by_id::<web_sys::HtmlFormElement>(&cfg.form_id) {
        let field = password.clone();
        let hint = hint.clone();
        dom::listen(&form, "submit", move |ev| {
            if password_is_valid(&field.value(), required) {
                return;
            }
            ev.prevent_default();
            if let Some(hint) = &hint {
                dom::set_text(hint, &password_error_message(required));
                show_tone(hint, HintTone::Error);
            }
        });
    }

    // Live feedback needs somewhere to show.
    let Some(hint) = hint else {
        return;
    };
    let field = password.clone();
    dom::listen(&password, "input", move |_| {
        show_tone(&hint, password_tone(&field.value(), required));
    });
}
