use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent};

use sentinel_chat::{ConversationController, Endpoints, HistoryStore, HttpBackend};

use crate::dom;
use crate::storage::LocalStorage;
use crate::view::DomView;

const TOGGLE_AI_ID: &str = "toggleAI";
const CLEAR_MEMORY_ID: &str = "clearMemoryBtn";
const QUICK_ACTIONS_SELECTOR: &str = ".quick-actions";

type WebController = ConversationController<HttpBackend, LocalStorage, DomView>;

/// Shared handle used by every event listener.
///
/// A submission keeps the controller mutably borrowed until it finishes, so
/// events arriving meanwhile fail `try_borrow_mut` and are dropped.
type SharedController = Rc<RefCell<WebController>>;

#[derive(Clone, Copy)]
enum Source {
    Input,
    QuickAction,
}

fn spawn_submission(chat: &SharedController, text: String, source: Source) {
    let chat = chat.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let Ok(mut chat) = chat.try_borrow_mut() else {
            log::debug!("Request in flight, ignoring input");
            return;
        };
        let outcome = match source {
            Source::Input => chat.submit(&text).await,
            Source::QuickAction => chat.quick_action(&text).await,
        };
        log::debug!("Submission finished: {:?}", outcome);
    });
}

/// Build the controller and wire the widget's controls
pub fn mount() -> Result<(), JsValue> {
    let document = crate::document()?;
    let host = crate::window()?.location().host()?;
    let endpoints = Endpoints::for_host(&host);
    log::info!("Using chat endpoint {}", endpoints.chat_url);

    let store = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let view = DomView::new(document.clone())?;
    let input = view.input().clone();
    let send_btn: Element = view.send_button().clone().unchecked_into();

    let mut controller =
        ConversationController::new(HistoryStore::new(store), HttpBackend::new(endpoints), view);
    let toggle = dom::get_input_by_id(&document, TOGGLE_AI_ID).ok();
    if let Some(toggle) = &toggle {
        controller.set_ai_enabled(toggle.checked());
    }
    controller.boot();

    let chat: SharedController = Rc::new(RefCell::new(controller));

    {
        let chat = chat.clone();
        let input = input.clone();
        dom::add_listener(&send_btn, "click", move |_| {
            spawn_submission(&chat, input.value(), Source::Input);
        })?;
    }

    {
        let chat = chat.clone();
        let field = input.clone();
        dom::add_listener(input.as_ref(), "keydown", move |event: Event| {
            let is_enter = event
                .dyn_ref::<KeyboardEvent>()
                .map(|key| key.key() == "Enter")
                .unwrap_or(false);
            if is_enter {
                spawn_submission(&chat, field.value(), Source::Input);
            }
        })?;
    }

    if let Some(quick_actions) = document.query_selector(QUICK_ACTIONS_SELECTOR)? {
        let chat = chat.clone();
        dom::add_listener(&quick_actions, "click", move |event: Event| {
            let prompt = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest("button").ok().flatten())
                .and_then(|button| button.get_attribute("data-prompt"));
            if let Some(prompt) = prompt {
                spawn_submission(&chat, prompt, Source::QuickAction);
            }
        })?;
    }

    if let Some(toggle) = toggle {
        let chat = chat.clone();
        let checkbox: HtmlInputElement = toggle.clone();
        dom::add_listener(toggle.as_ref(), "change", move |_| {
            match chat.try_borrow_mut() {
                Ok(mut chat) => chat.set_ai_enabled(checkbox.checked()),
                Err(_) => {
                    // keep the checkbox in line with the controller
                    checkbox.set_checked(!checkbox.checked());
                    log::debug!("Request in flight, AI toggle ignored");
                }
            }
        })?;
    }

    if let Ok(clear_btn) = dom::get_element_by_id(&document, CLEAR_MEMORY_ID) {
        let chat = chat.clone();
        dom::add_listener(&clear_btn, "click", move |_| match chat.try_borrow_mut() {
            Ok(mut chat) => chat.clear(),
            Err(_) => log::debug!("Request in flight, clear ignored"),
        })?;
    }

    Ok(())
}
