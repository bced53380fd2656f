use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::platform::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub enum ThemeAction {
    Toggle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { theme: Theme::Light }
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(Self {
                theme: self.theme.toggled(),
            }),
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

/// Window scroll position, shared so sections don't each register their
/// own scroll listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportContext {
    pub scroll_y: f64,
}

#[derive(Properties, PartialEq)]
pub struct SiteProvidersProps {
    pub children: Children,
}

/// Owns the document-wide concerns: the theme class on `<html>` and the
/// window scroll position.
#[function_component(SiteProviders)]
pub fn site_providers(props: &SiteProvidersProps) -> Html {
    let theme = use_reducer(ThemeState::default);
    let (_, scroll_y) = use_window_scroll();

    use_effect_with_deps(
        |theme: &Theme| {
            if let Err(e) = dom::set_root_class("dark", *theme == Theme::Dark) {
                log::warn!("failed to apply theme: {}", e);
            }
            || ()
        },
        theme.theme,
    );

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            <ContextProvider<ViewportContext> context={ViewportContext { scroll_y }}>
                { props.children.clone() }
            </ContextProvider<ViewportContext>>
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_returns() {
        let state = Rc::new(ThemeState::default()).reduce(ThemeAction::Toggle);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.reduce(ThemeAction::Toggle).theme, Theme::Light);
    }
}
