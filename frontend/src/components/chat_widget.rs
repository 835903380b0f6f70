use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum ChatWidgetMsg {
    Toggle,
    Close,
}

impl ChatWidgetMsg {
    /// Open/closed flag after this message.
    pub fn apply(&self, open: bool) -> bool {
        match self {
            Self::Toggle => !open,
            Self::Close => false,
        }
    }
}

/// Floating chat button. The panel is mounted only while open, so anything
/// typed into it is gone after closing.
pub struct ChatWidget {
    open: bool,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let open = msg.apply(self.open);
        let changed = open != self.open;
        self.open = open;
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_: MouseEvent| ChatWidgetMsg::Toggle);
        let close = ctx.link().callback(|_: ()| ChatWidgetMsg::Close);

        html! {
            <>
                if self.open {
                    <ChatPanel on_close={close} />
                }
                <button
                    class="chat-toggle"
                    aria-label={if self.open { "Close chat" } else { "Open chat" }}
                    onclick={toggle}
                >
                    { "💬" }
                </button>
            </>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub on_close: Callback<()>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let draft = use_state(String::new);

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onclose = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsend = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            // No chat backend yet
            log::debug!("Chat send pressed with {} chars, not delivered", draft.len());
        })
    };

    html! {
        <div class="chat-panel">
            <div class="chat-header">
                <h4>{"Live Chat Support"}</h4>
                <button class="chat-close" aria-label="Close chat" onclick={onclose}>{"×"}</button>
            </div>
            <div class="chat-body">
                <p class="chat-greeting">
                    {"Hi! I'm here to help you with your personal injury case. How can I assist you today?"}
                </p>
                <div class="chat-input-row">
                    <input
                        type="text"
                        placeholder="Type your message..."
                        value={(*draft).clone()}
                        {oninput}
                    />
                    <button class="chat-send" onclick={onsend}>{"Send"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_returns_to_closed() {
        let open = ChatWidgetMsg::Toggle.apply(false);
        assert!(open);
        assert!(!ChatWidgetMsg::Toggle.apply(open));
    }

    #[test]
    fn close_always_closes() {
        assert!(!ChatWidgetMsg::Close.apply(true));
        assert!(!ChatWidgetMsg::Close.apply(false));
    }
}
