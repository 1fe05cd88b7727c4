use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use sentinel_chat::{ChatView, Role, Status, Turn};
use sentinel_types::messages;

use crate::dom;

pub const CHAT_BODY_ID: &str = "chatBody";
pub const INPUT_ID: &str = "userInput";
pub const SEND_BUTTON_ID: &str = "sendBtn";
pub const LOADING_BAR_ID: &str = "loadingBar";
pub const STATUS_DOT_ID: &str = "statusDot";
pub const MODEL_STATUS_ID: &str = "modelStatus";

const TYPING_HTML: &str = r#"<div class="typing"><span></span><span></span><span></span></div>"#;

/// Renders the conversation into the widget's existing markup.
///
/// Message text always goes through `textContent`, never `innerHTML`.
pub struct DomView {
    document: Document,
    chat_body: Element,
    input: HtmlInputElement,
    send_btn: HtmlButtonElement,
    loading_bar: Option<Element>,
    status_dot: Option<Element>,
    model_status: Option<Element>,
    /// Bubble of the pending typing indicator, filled by the next reply
    typing: RefCell<Option<Element>>,
}

impl DomView {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        Ok(Self {
            chat_body: dom::get_element_by_id(&document, CHAT_BODY_ID)?,
            input: dom::get_input_by_id(&document, INPUT_ID)?,
            send_btn: dom::get_button_by_id(&document, SEND_BUTTON_ID)?,
            loading_bar: document.get_element_by_id(LOADING_BAR_ID),
            status_dot: document.get_element_by_id(STATUS_DOT_ID),
            model_status: document.get_element_by_id(MODEL_STATUS_ID),
            typing: RefCell::new(None),
            document,
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn send_button(&self) -> &HtmlButtonElement {
        &self.send_btn
    }

    fn report(result: Result<(), JsValue>) {
        if let Err(e) = result {
            log::warn!("Failed to update the chat view: {:?}", e);
        }
    }

    /// `<div class="msg msg-ai"><div class="avatar">IA</div><div class="bubble">`
    fn append_ai_wrap(&self) -> Result<Element, JsValue> {
        let wrap = dom::create_element_with_class(&self.document, "div", "msg msg-ai")?;
        let avatar = dom::create_text_element(&self.document, "div", "avatar", "IA")?;
        let bubble = dom::create_element_with_class(&self.document, "div", "bubble")?;
        wrap.append_child(&avatar)?;
        wrap.append_child(&bubble)?;
        self.chat_body.append_child(&wrap)?;
        Ok(bubble)
    }

    fn fill_bubble(&self, bubble: &Element, text: &str, meta: &str) -> Result<(), JsValue> {
        dom::clear_element(bubble);
        let paragraph = dom::create_text_element(&self.document, "p", "", text)?;
        paragraph.set_attribute("style", "white-space: pre-wrap")?;
        bubble.append_child(&paragraph)?;
        if !meta.is_empty() {
            let meta = dom::create_text_element(&self.document, "span", "meta", meta)?;
            bubble.append_child(&meta)?;
        }
        Ok(())
    }

    fn append_user(&self, text: &str) -> Result<(), JsValue> {
        let msg = dom::create_text_element(&self.document, "div", "msg msg-user", text)?;
        self.chat_body.append_child(&msg)?;
        dom::scroll_to_bottom(&self.chat_body);
        Ok(())
    }

    fn append_assistant(&self, text: &str, meta: &str) -> Result<(), JsValue> {
        // the static greeting goes away with the first real reply
        if let Some(initial) = self
            .document
            .query_selector(".chat-body .msg.msg-ai.initial")?
        {
            initial.remove();
        }

        let pending = self.typing.borrow_mut().take();
        let bubble = match pending {
            Some(bubble) => bubble,
            None => self.append_ai_wrap()?,
        };
        self.fill_bubble(&bubble, text, meta)?;
        dom::scroll_to_bottom(&self.chat_body);
        Ok(())
    }

    fn append_typing(&self) -> Result<(), JsValue> {
        let bubble = self.append_ai_wrap()?;
        bubble.set_inner_html(TYPING_HTML);
        *self.typing.borrow_mut() = Some(bubble);
        dom::scroll_to_bottom(&self.chat_body);
        Ok(())
    }

    fn append_history(&self, turns: &[Turn]) -> Result<(), JsValue> {
        for turn in turns {
            match turn.role {
                Role::User => self.append_user(&turn.content)?,
                Role::Assistant => {
                    let bubble = self.append_ai_wrap()?;
                    self.fill_bubble(&bubble, &turn.content, messages::META_RESTORED)?;
                }
                Role::System => {}
            }
        }
        dom::scroll_to_bottom(&self.chat_body);
        Ok(())
    }
}

impl ChatView for DomView {
    fn show_user(&self, text: &str) {
        Self::report(self.append_user(text));
    }

    fn show_assistant(&self, text: &str, meta: &str) {
        Self::report(self.append_assistant(text, meta));
    }

    fn show_typing(&self) {
        Self::report(self.append_typing());
    }

    fn set_busy(&self, busy: bool) {
        if let Some(bar) = &self.loading_bar {
            dom::set_class(bar, "active", busy);
        }
        self.input.set_disabled(busy);
        self.send_btn.set_disabled(busy);
        if !busy {
            Self::report(self.input.focus());
        }
    }

    fn set_status(&self, status: Status) {
        if let Some(label) = &self.model_status {
            label.set_text_content(Some(status.label()));
        }
        if let Some(dot) = &self.status_dot {
            dom::set_class(dot, "online", status.is_online());
            dom::set_class(dot, "offline", !status.is_online());
        }
    }

    fn clear_input(&self) {
        self.input.set_value("");
    }

    fn show_history(&self, turns: &[Turn]) {
        Self::report(self.append_history(turns));
    }

    fn show_cleared(&self) {
        dom::clear_element(&self.chat_body);
        self.typing.borrow_mut().take();
        let result = self.append_ai_wrap().and_then(|bubble| {
            self.fill_bubble(&bubble, messages::MEMORY_CLEARED, messages::META_SYSTEM)
        });
        Self::report(result);
    }
}
