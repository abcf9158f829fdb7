use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            html_element
                .set_attribute("data-theme", "light")
                .unwrap_or_default();
        }
        || {}
    });

    html! {
    <>
        <header class="navbar bg-base-200 border-b border-base-300 px-4">
            <Link<MainRoute> to={MainRoute::Home} classes={classes!("btn", "btn-ghost", "text-lg")}>
                {"Chats"}
            </Link<MainRoute>>
        </header>
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-4", "transition-all", "duration-300")}>
                {props.children.clone()}
            </main>
        </div>
    </>
    }
}
