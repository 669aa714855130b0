//! Anchor that transitions through the router instead of reloading the page.

use crate::components::browser::click_input;
use crate::core::anchor::RoutedAnchor as RoutedAnchorPlan;
use crate::core::click::{RouterClick, resolve_router_click};
use gloo::console;
use yew::prelude::*;
use yew_router::AnyRoute;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RoutedAnchorProps {
    pub(crate) plan: RoutedAnchorPlan,
    #[prop_or_default]
    pub(crate) state: Option<serde_json::Value>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(RoutedAnchor)]
pub(crate) fn routed_anchor(props: &RoutedAnchorProps) -> Html {
    let navigator = use_navigator();
    let plan = &props.plan;
    if navigator.is_none() {
        console::warn!("routed link rendered outside a router", plan.href.clone());
    }

    let onclick = {
        let href = plan.href.clone();
        let target = plan.attrs.target.clone();
        let disabled = plan.disabled;
        let replace = plan.replace;
        let state = props.state.clone();
        Callback::from(move |event: MouseEvent| {
            match resolve_router_click(click_input(&event), target.as_deref(), disabled, replace) {
                RouterClick::Navigate { replace } => {
                    // Without a router the browser follows the href itself.
                    let Some(navigator) = navigator.as_ref() else {
                        return;
                    };
                    event.prevent_default();
                    let route = AnyRoute::new(href.clone());
                    match (replace, state.clone()) {
                        (false, None) => navigator.push(&route),
                        (true, None) => navigator.replace(&route),
                        (false, Some(state)) => navigator.push_with_state(&route, state),
                        (true, Some(state)) => navigator.replace_with_state(&route, state),
                    }
                }
                RouterClick::Suppress => event.prevent_default(),
                RouterClick::Browser => {}
            }
        })
    };

    let attrs = &plan.attrs;
    html! {
        <a
            href={plan.href.clone()}
            id={attrs.id.clone()}
            class={classes!(attrs.class.clone())}
            title={attrs.title.clone()}
            style={attrs.style.clone()}
            aria-label={attrs.aria_label.clone()}
            aria-disabled={plan.disabled.then_some("true")}
            target={attrs.target.clone()}
            rel={attrs.rel.clone()}
            download={attrs.download.clone()}
            onclick={onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
