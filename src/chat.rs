use crate::constants::*;
use crate::core::{BotReply, ChatSession, Intent};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const WIDGET_HTML: &str = r#"
<div id="astro-chat-button" class="astro-chat-button">
  <div class="astro-avatar">
    <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
      <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2"/>
      <circle cx="9" cy="10" r="1.5" fill="currentColor"/>
      <circle cx="15" cy="10" r="1.5" fill="currentColor"/>
      <path d="M8 14C8 14 9.5 16 12 16C14.5 16 16 14 16 14" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
    </svg>
  </div>
  <div class="astro-pulse"></div>
</div>
<div id="astro-chat-widget" class="astro-chat-widget">
  <div class="astro-chat-header">
    <div class="astro-header-info">
      <div class="astro-avatar-small">
        <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
          <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2"/>
          <circle cx="9" cy="10" r="1.5" fill="currentColor"/>
          <circle cx="15" cy="10" r="1.5" fill="currentColor"/>
          <path d="M8 14C8 14 9.5 16 12 16C14.5 16 16 14 16 14" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        </svg>
      </div>
      <div>
        <div class="astro-name">Astro</div>
        <div class="astro-status">Assistant HAIR</div>
      </div>
    </div>
    <button class="astro-close" id="astro-close-btn">
      <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
        <path d="M18 6L6 18M6 6L18 18" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
      </svg>
    </button>
  </div>
  <div class="astro-chat-messages" id="astro-messages"></div>
  <div class="astro-quick-replies" id="astro-quick-replies"></div>
  <div class="astro-chat-input">
    <input type="text" id="astro-input" placeholder="Écris ton message..." autocomplete="off"/>
    <button id="astro-send-btn">
      <svg viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
        <path d="M22 2L11 13M22 2L15 22L11 13M22 2L2 9L11 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
      </svg>
    </button>
  </div>
</div>
"#;

struct ChatWidget {
    session: ChatSession,
    document: web::Document,
    launcher: web::Element,
    panel: web::Element,
    messages: web::Element,
    quick_replies: web::Element,
    input: web::HtmlInputElement,
}

type SharedChat = Rc<RefCell<ChatWidget>>;

impl ChatWidget {
    fn scroll_to_bottom(&self) {
        self.messages.set_scroll_top(self.messages.scroll_height());
    }

    /// Append a message bubble. Text is inserted as text nodes; newlines
    /// become `<br>`.
    fn append_bubble(&self, class: &str, text: &str) -> anyhow::Result<web::Element> {
        let row = self.document.create_element("div").map_err(dom::js_err)?;
        row.set_class_name(&format!("astro-message {class}"));
        let bubble = self.document.create_element("div").map_err(dom::js_err)?;
        bubble.set_class_name("message-bubble");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                let br = self.document.create_element("br").map_err(dom::js_err)?;
                bubble.append_child(&br).map_err(dom::js_err)?;
            }
            let node = self.document.create_text_node(line);
            bubble.append_child(&node).map_err(dom::js_err)?;
        }
        row.append_child(&bubble).map_err(dom::js_err)?;
        self.messages.append_child(&row).map_err(dom::js_err)?;
        self.scroll_to_bottom();
        Ok(row)
    }

    fn show_typing(&self) {
        let html = r#"<div class="astro-message bot-message typing-indicator" id="typing-indicator"><div class="message-bubble"><div class="typing-dots"><span></span><span></span><span></span></div></div></div>"#;
        _ = self.messages.insert_adjacent_html("beforeend", html);
        self.scroll_to_bottom();
    }

    fn hide_typing(&self) {
        if let Some(el) = self.document.get_element_by_id(CHAT_TYPING_ID) {
            el.remove();
        }
    }

    fn clear_quick_replies(&self) {
        self.quick_replies.set_inner_html("");
    }

    fn set_open_classes(&self, open: bool) {
        if open {
            _ = self.panel.class_list().add_1("open");
            _ = self.launcher.class_list().add_1("hidden");
        } else {
            _ = self.panel.class_list().remove_1("open");
            _ = self.launcher.class_list().remove_1("hidden");
        }
    }
}

fn render_reply(chat: &SharedChat, reply: &BotReply) {
    if let Err(e) = chat.borrow().append_bubble("bot-message", &reply.text) {
        log::error!("[chat] render error: {:?}", e);
        return;
    }
    if reply.quick_replies.is_empty() {
        return;
    }
    let (document, container) = {
        let w = chat.borrow();
        w.clear_quick_replies();
        (w.document.clone(), w.quick_replies.clone())
    };
    for &label in &reply.quick_replies {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        button.set_class_name("quick-reply-btn");
        button.set_text_content(Some(label));
        let on_pick = chat.clone();
        dom::listen(&button, "click", move |_: web::Event| send(&on_pick, label));
        _ = container.append_child(&button);
    }
}

fn toggle(chat: &SharedChat) {
    let greeting = {
        let mut w = chat.borrow_mut();
        let greeting = w.session.toggle();
        let open = w.session.is_open();
        w.set_open_classes(open);
        greeting
    };
    if let Some(g) = greeting {
        render_reply(chat, &g);
    }
}

/// Record a user message and schedule the scripted answer after the typing
/// delay. The answer is delivered even if the panel is closed meanwhile.
fn send(chat: &SharedChat, raw: &str) {
    let text = {
        let mut w = chat.borrow_mut();
        let Some(text) = w.session.submit(raw) else {
            return;
        };
        if let Err(e) = w.append_bubble("user-message", &text) {
            log::error!("[chat] render error: {:?}", e);
        }
        w.clear_quick_replies();
        w.show_typing();
        text
    };
    let pending = chat.clone();
    dom::set_timeout(CHAT_TYPING_DELAY_MS, move || {
        let reply = {
            let mut w = pending.borrow_mut();
            w.hide_typing();
            w.session.respond(&text)
        };
        log::debug!("[chat] intent={:?}", reply.intent);
        if reply.intent == Intent::EmailCaptured {
            if let Some(email) = pending.borrow().session.email() {
                log::info!("[chat] email captured ({} chars)", email.len());
            }
        }
        render_reply(&pending, &reply);
    });
}

fn send_typed(chat: &SharedChat) {
    let input = chat.borrow().input.clone();
    let value = input.value();
    input.set_value("");
    send(chat, &value);
}

/// Inject the chat launcher and panel into `<body>` and wire them up.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    body.insert_adjacent_html("beforeend", WIDGET_HTML)
        .map_err(dom::js_err)?;

    let el = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
    };
    let input: web::HtmlInputElement = dom::by_id(document, CHAT_INPUT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CHAT_INPUT_ID}"))?;
    let chat: SharedChat = Rc::new(RefCell::new(ChatWidget {
        session: ChatSession::new(),
        document: document.clone(),
        launcher: el(CHAT_BUTTON_ID)?,
        panel: el(CHAT_WIDGET_ID)?,
        messages: el(CHAT_MESSAGES_ID)?,
        quick_replies: el(CHAT_QUICK_REPLIES_ID)?,
        input: input.clone(),
    }));

    let c = chat.clone();
    dom::add_click_listener(document, CHAT_BUTTON_ID, move || toggle(&c));
    let c = chat.clone();
    dom::add_click_listener(document, CHAT_CLOSE_ID, move || toggle(&c));
    let c = chat.clone();
    dom::add_click_listener(document, CHAT_SEND_ID, move || send_typed(&c));
    let c = chat;
    dom::listen(&input, "keypress", move |ev: web::KeyboardEvent| {
        if ev.key() == "Enter" {
            send_typed(&c);
        }
    });

    log::info!("[chat] widget ready");
    Ok(())
}
