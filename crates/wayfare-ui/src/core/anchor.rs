//! Render planning for links.
//!
//! The component layer turns a [`LinkPlan`] into markup; everything decided
//! here is DOM-free so the rendering contract can be checked natively.

use crate::core::style::natural_link_classes;
use crate::core::target::{LinkKind, NavigationTarget, classify};

/// `target` applied to plain anchors unless the caller asked for `new_tab`.
pub const BLANK_TARGET: &str = "_blank";
/// `rel` paired with [`BLANK_TARGET`] so the opened page gets no opener.
pub const SAFE_REL: &str = "noopener noreferrer";

/// Standard anchor attributes forwarded to whichever anchor is rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnchorAttributes {
    /// `id` attribute.
    pub id: Option<String>,
    /// Space-separated class list.
    pub class: Option<String>,
    /// `title` attribute.
    pub title: Option<String>,
    /// Inline `style`.
    pub style: Option<String>,
    /// `aria-label` attribute.
    pub aria_label: Option<String>,
    /// `target` attribute.
    pub target: Option<String>,
    /// `rel` attribute.
    pub rel: Option<String>,
    /// `download` attribute.
    pub download: Option<String>,
}

/// Overrides applied only on the routed anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterLinkOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    /// Render the anchor but never navigate.
    pub disabled: bool,
    /// Replaces the forwarded class list.
    pub class: Option<String>,
    /// Replaces the forwarded title.
    pub title: Option<String>,
}

/// Boolean switches of a link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkFlags {
    /// Caller controls the browsing context; skip the `_blank` defaults.
    pub new_tab: bool,
    /// Apply the natural-link styling on plain anchors.
    pub natural_link: bool,
    /// Wrap the link in a container that stops click bubbling.
    pub stop_propagation: bool,
}

/// Anchor rendered by the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutedAnchor {
    /// Href the router navigates to.
    pub href: String,
    /// Forwarded attributes with router overrides applied.
    pub attrs: AnchorAttributes,
    /// Replace instead of push.
    pub replace: bool,
    /// Never navigate.
    pub disabled: bool,
}

/// Anchor rendered as a plain hyperlink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainAnchor {
    /// Destination, absent when the link has no target.
    pub href: Option<String>,
    /// Forwarded attributes with the resolved `target`, `rel` and classes.
    pub attrs: AnchorAttributes,
}

/// Which anchor to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorPlan {
    /// Client-side routed anchor.
    Routed(RoutedAnchor),
    /// Full-navigation anchor.
    Plain(PlainAnchor),
}

/// Complete render decision for one link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkPlan {
    /// Anchor to render.
    pub anchor: AnchorPlan,
    /// Wrap the anchor in a propagation-stopping container.
    pub wrap: bool,
}

impl LinkPlan {
    /// The render path chosen for the link.
    #[must_use]
    pub const fn kind(&self) -> LinkKind {
        match self.anchor {
            AnchorPlan::Routed(_) => LinkKind::Internal,
            AnchorPlan::Plain(_) => LinkKind::External,
        }
    }
}

/// Decides how a link renders.
#[must_use]
pub fn plan_link(
    to: Option<&NavigationTarget>,
    attrs: &AnchorAttributes,
    link_props: Option<&RouterLinkOptions>,
    flags: LinkFlags,
) -> LinkPlan {
    let anchor = match (classify(to), to) {
        (LinkKind::Internal, Some(target)) => AnchorPlan::Routed(routed(target, attrs, link_props)),
        _ => AnchorPlan::Plain(plain(to, attrs, flags)),
    };
    LinkPlan {
        anchor,
        wrap: flags.stop_propagation,
    }
}

fn routed(
    target: &NavigationTarget,
    attrs: &AnchorAttributes,
    link_props: Option<&RouterLinkOptions>,
) -> RoutedAnchor {
    let mut attrs = attrs.clone();
    let mut replace = false;
    let mut disabled = false;
    if let Some(options) = link_props {
        replace = options.replace;
        disabled = options.disabled;
        if options.class.is_some() {
            attrs.class.clone_from(&options.class);
        }
        if options.title.is_some() {
            attrs.title.clone_from(&options.title);
        }
    }
    RoutedAnchor {
        href: target.href(),
        attrs,
        replace,
        disabled,
    }
}

fn plain(to: Option<&NavigationTarget>, attrs: &AnchorAttributes, flags: LinkFlags) -> PlainAnchor {
    let mut attrs = attrs.clone();
    if flags.natural_link {
        let mut classes = natural_link_classes();
        classes.extend(attrs.class.take());
        attrs.class = Some(classes.join(" "));
    }
    if !flags.new_tab {
        attrs.target = Some(BLANK_TARGET.to_string());
        attrs.rel = Some(SAFE_REL.to_string());
    }
    PlainAnchor {
        href: to.map(NavigationTarget::href),
        attrs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::LocationDescriptor;

    fn plan_for(to: Option<&NavigationTarget>, flags: LinkFlags) -> LinkPlan {
        plan_link(to, &AnchorAttributes::default(), None, flags)
    }

    fn expect_plain(plan: &LinkPlan) -> &PlainAnchor {
        match &plan.anchor {
            AnchorPlan::Plain(anchor) => anchor,
            AnchorPlan::Routed(anchor) => panic!("expected plain anchor, got {anchor:?}"),
        }
    }

    fn expect_routed(plan: &LinkPlan) -> &RoutedAnchor {
        match &plan.anchor {
            AnchorPlan::Routed(anchor) => anchor,
            AnchorPlan::Plain(anchor) => panic!("expected routed anchor, got {anchor:?}"),
        }
    }

    #[test]
    fn dashboard_path_is_routed() {
        let target = NavigationTarget::from("/dashboard");
        let plan = plan_for(Some(&target), LinkFlags::default());
        let anchor = expect_routed(&plan);
        assert_eq!(anchor.href, "/dashboard");
        assert!(!anchor.replace);
        assert!(!plan.wrap);
        assert_eq!(anchor.attrs.target, None);
    }

    #[test]
    fn descriptor_is_routed_with_joined_href() {
        let target =
            NavigationTarget::from(LocationDescriptor::new("/x").with_search("?q=1"));
        let plan = plan_for(Some(&target), LinkFlags::default());
        assert_eq!(plan.kind(), LinkKind::Internal);
        assert_eq!(expect_routed(&plan).href, "/x?q=1");
    }

    #[test]
    fn plain_anchor_opens_safely_by_default() {
        for to in [Some(NavigationTarget::from("https://example.com")), None] {
            let plan = plan_for(to.as_ref(), LinkFlags::default());
            let anchor = expect_plain(&plan);
            assert_eq!(anchor.attrs.target.as_deref(), Some(BLANK_TARGET));
            assert_eq!(anchor.attrs.rel.as_deref(), Some(SAFE_REL));
        }
    }

    #[test]
    fn blank_defaults_override_caller_target() {
        let target = NavigationTarget::from("https://example.com");
        let attrs = AnchorAttributes {
            target: Some("_self".into()),
            rel: Some("external".into()),
            ..AnchorAttributes::default()
        };
        let plan = plan_link(Some(&target), &attrs, None, LinkFlags::default());
        let anchor = expect_plain(&plan);
        assert_eq!(anchor.attrs.target.as_deref(), Some(BLANK_TARGET));
        assert_eq!(anchor.attrs.rel.as_deref(), Some(SAFE_REL));

        let flags = LinkFlags {
            new_tab: true,
            ..LinkFlags::default()
        };
        let plan = plan_link(Some(&target), &attrs, None, flags);
        let anchor = expect_plain(&plan);
        assert_eq!(anchor.attrs.target.as_deref(), Some("_self"));
        assert_eq!(anchor.attrs.rel.as_deref(), Some("external"));
    }

    #[test]
    fn new_tab_omits_blank_target() {
        let target = NavigationTarget::from("https://example.com");
        let flags = LinkFlags {
            new_tab: true,
            ..LinkFlags::default()
        };
        let plan = plan_for(Some(&target), flags);
        let anchor = expect_plain(&plan);
        assert_eq!(anchor.href.as_deref(), Some("https://example.com"));
        assert_eq!(anchor.attrs.target, None);
        assert_eq!(anchor.attrs.rel, None);
    }

    #[test]
    fn natural_style_only_when_requested() {
        let target = NavigationTarget::from("https://example.com");
        let attrs = AnchorAttributes {
            class: Some("font-bold".into()),
            ..AnchorAttributes::default()
        };
        let natural = LinkFlags {
            natural_link: true,
            ..LinkFlags::default()
        };
        let plan = plan_link(Some(&target), &attrs, None, natural);
        assert_eq!(
            expect_plain(&plan).attrs.class.as_deref(),
            Some("link link-accent hover:opacity-90 font-bold")
        );

        let plan = plan_link(Some(&target), &attrs, None, LinkFlags::default());
        assert_eq!(expect_plain(&plan).attrs.class.as_deref(), Some("font-bold"));
    }

    #[test]
    fn missing_target_has_no_href() {
        let plan = plan_for(None, LinkFlags::default());
        assert_eq!(plan.kind(), LinkKind::External);
        assert_eq!(expect_plain(&plan).href, None);
    }

    #[test]
    fn stop_propagation_requests_wrapper() {
        let target = NavigationTarget::from("/dashboard");
        let flags = LinkFlags {
            stop_propagation: true,
            ..LinkFlags::default()
        };
        assert!(plan_for(Some(&target), flags).wrap);
        assert!(!plan_for(Some(&target), LinkFlags::default()).wrap);
    }

    #[test]
    fn router_options_override_forwarded_attributes() {
        let target = NavigationTarget::from("/settings");
        let attrs = AnchorAttributes {
            id: Some("settings-link".into()),
            class: Some("menu-item".into()),
            title: Some("Settings".into()),
            ..AnchorAttributes::default()
        };
        let options = RouterLinkOptions {
            replace: true,
            disabled: true,
            class: Some("menu-item active".into()),
            title: None,
        };
        let plan = plan_link(Some(&target), &attrs, Some(&options), LinkFlags::default());
        let anchor = expect_routed(&plan);
        assert!(anchor.replace);
        assert!(anchor.disabled);
        assert_eq!(anchor.attrs.id.as_deref(), Some("settings-link"));
        assert_eq!(anchor.attrs.class.as_deref(), Some("menu-item active"));
        assert_eq!(anchor.attrs.title.as_deref(), Some("Settings"));
    }

    #[test]
    fn router_options_do_not_touch_plain_anchors() {
        let target = NavigationTarget::from("https://example.com");
        let options = RouterLinkOptions {
            class: Some("ignored".into()),
            ..RouterLinkOptions::default()
        };
        let plan = plan_link(
            Some(&target),
            &AnchorAttributes::default(),
            Some(&options),
            LinkFlags::default(),
        );
        assert_eq!(expect_plain(&plan).attrs.class, None);
    }
}
