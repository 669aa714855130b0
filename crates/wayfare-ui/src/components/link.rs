//! Polymorphic link: routed anchor for in-app paths, plain anchor otherwise.

use crate::components::browser::{click_input, navigate_current, open_new_context};
use crate::components::routed_anchor::RoutedAnchor;
use crate::core::anchor::{AnchorAttributes, AnchorPlan, LinkFlags, RouterLinkOptions, plan_link};
use crate::core::click::{ClickAction, resolve_click};
use crate::core::target::NavigationTarget;
use yew::prelude::*;

/// Props accepted by [`Link`].
#[derive(Properties, PartialEq)]
pub struct LinkProps {
    /// Destination; rooted paths and descriptors go through the router.
    #[prop_or_default]
    pub to: Option<NavigationTarget>,
    /// Replaces built-in navigation on plain anchors.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Open plain anchors in a new browsing context on every primary click.
    #[prop_or_default]
    pub new_tab: bool,
    /// Accent, underline and hover-fade styling on plain anchors.
    #[prop_or_default]
    pub natural_link: bool,
    /// Keep clicks from bubbling past the link.
    #[prop_or_default]
    pub stop_propagation: bool,
    /// Overrides for the routed anchor.
    #[prop_or_default]
    pub link_props: Option<RouterLinkOptions>,
    /// Link content.
    #[prop_or_default]
    pub children: Children,
    /// `id` attribute.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// `title` attribute.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Inline style.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// `aria-label` attribute.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// `target` attribute; replaced by `_blank` on plain anchors unless `new_tab`.
    #[prop_or_default]
    pub target: Option<AttrValue>,
    /// `rel` attribute; replaced on plain anchors unless `new_tab`.
    #[prop_or_default]
    pub rel: Option<AttrValue>,
    /// `download` attribute.
    #[prop_or_default]
    pub download: Option<AttrValue>,
}

impl LinkProps {
    fn attributes(&self) -> AnchorAttributes {
        let text = |value: Option<&AttrValue>| value.map(ToString::to_string);
        AnchorAttributes {
            id: text(self.id.as_ref()),
            class: (!self.class.is_empty()).then(|| self.class.to_string()),
            title: text(self.title.as_ref()),
            style: text(self.style.as_ref()),
            aria_label: text(self.aria_label.as_ref()),
            target: text(self.target.as_ref()),
            rel: text(self.rel.as_ref()),
            download: text(self.download.as_ref()),
        }
    }

    const fn flags(&self) -> LinkFlags {
        LinkFlags {
            new_tab: self.new_tab,
            natural_link: self.natural_link,
            stop_propagation: self.stop_propagation,
        }
    }
}

/// Link that routes in-app paths and fully navigates everything else.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let plan = plan_link(
        props.to.as_ref(),
        &props.attributes(),
        props.link_props.as_ref(),
        props.flags(),
    );

    let anchor = match plan.anchor {
        AnchorPlan::Routed(routed) => {
            let state = props.to.as_ref().and_then(NavigationTarget::state).cloned();
            html! {
                <RoutedAnchor plan={routed} state={state}>
                    { for props.children.iter() }
                </RoutedAnchor>
            }
        }
        AnchorPlan::Plain(plain) => {
            let handle_click = {
                let to = props.to.clone();
                let onclick = props.onclick.clone();
                let new_tab = props.new_tab;
                Callback::from(move |event: MouseEvent| {
                    let action = resolve_click(click_input(&event), to.as_ref(), onclick.is_some(), new_tab);
                    if action.prevents_default() {
                        event.prevent_default();
                    }
                    match action {
                        ClickAction::InvokeHandler => {
                            if let Some(onclick) = onclick.as_ref() {
                                onclick.emit(event);
                            }
                        }
                        ClickAction::OpenNewContext(url) => open_new_context(&url),
                        ClickAction::NavigateCurrent(url) => navigate_current(&url),
                        ClickAction::Ignore | ClickAction::None => {}
                    }
                })
            };
            let attrs = plain.attrs;
            html! {
                <a
                    href={plain.href}
                    id={attrs.id}
                    class={classes!(attrs.class)}
                    title={attrs.title}
                    style={attrs.style}
                    aria-label={attrs.aria_label}
                    target={attrs.target}
                    rel={attrs.rel}
                    download={attrs.download}
                    onmousedown={handle_click}
                >
                    { for props.children.iter() }
                </a>
            }
        }
    };

    if plan.wrap {
        let stop = Callback::from(|event: MouseEvent| event.stop_propagation());
        html! { <span onclick={stop}>{ anchor }</span> }
    } else {
        anchor
    }
}
