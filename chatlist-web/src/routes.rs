use crate::{containers::layout::Layout, pages::*};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/chat/:chat_id")]
    ChatConversation { chat_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route a chat row navigates to when activated.
pub fn chat_route(chat_id: &str) -> MainRoute {
    MainRoute::ChatConversation {
        chat_id: chat_id.to_string(),
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    tracing::debug!(?route, "switching main route");
    match route {
        MainRoute::Home => html! {
            <Layout>
                <ChatPage />
            </Layout>
        },
        MainRoute::ChatConversation { chat_id } => html! {
            <Layout>
                <ChatPage chat_id={Some(AttrValue::from(chat_id))} />
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout>
                <ErrorPage />
            </Layout>
        },
    }
}
