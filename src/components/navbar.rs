//! Top navigation bar: links, call-to-action cluster, theme toggle, and the
//! collapsible narrow-viewport menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session state is resolved from browser storage on mount and again on every
//! route change (`use_location().pathname`), so logins completed on other
//! routes show up without a reload. Logout and the demo role switch go
//! through the session mutator; the view only applies the effect it returns.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::NavConfig;
use crate::nav::{ActionCluster, ActionKind, Emphasis};
use crate::session::browser::{BrowserCookies, BrowserStorage};
use crate::session::{Role, Session, SessionEffect, SessionState};
use crate::state::nav::NavState;
use crate::util::dark_mode::{self, Theme};
use crate::util::page;

type BrowserSession = Session<BrowserCookies, BrowserStorage>;

/// Reactive handles shared by every control in the bar.
#[derive(Clone, Copy)]
struct NavHandles {
    nav: RwSignal<NavState>,
    session: StoredValue<BrowserSession>,
    redirect: RwSignal<Option<String>>,
}

impl NavHandles {
    fn resolve(self) -> SessionState {
        self.session.with_value(|s| s.resolver.resolve())
    }

    fn collapse(self) {
        self.nav.update(|n| {
            n.activate(None);
        });
    }

    fn logout(self) {
        let effect = self.session.with_value(|s| s.mutator.logout());
        let target = self.nav.try_update(|n| n.activate(Some(&effect))).flatten();
        if target.is_some() {
            self.redirect.set(target);
        }
    }

    fn switch_role(self, role: Role) {
        match self.session.with_value(|s| s.mutator.set_role(role)) {
            Ok(SessionEffect::FullReload) => page::reload(),
            Ok(effect) => {
                let target = self.nav.try_update(|n| n.apply(&effect)).flatten();
                if target.is_some() {
                    self.redirect.set(target);
                }
            }
            Err(e) => leptos::logging::warn!("role switch failed: {e}"),
        }
    }
}

/// Site-wide navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_context::<NavConfig>().unwrap_or_default();
    let demo_role_switch = config.demo_role_switch;
    let location = use_location();
    let navigate = use_navigate();

    // Browser stores are only read inside effects: the first client render
    // must match the anonymous, light-themed server markup.
    let handles = NavHandles {
        nav: RwSignal::new(NavState::mounted(
            location.pathname.get_untracked(),
            SessionState::Anonymous,
        )),
        session: StoredValue::new(Session::browser(config)),
        redirect: RwSignal::new(None),
    };
    let nav = handles.nav;
    let cluster = Memo::new(move |_| nav.with(NavState::action_cluster));
    let theme = RwSignal::new(Theme::Light);

    // Fresh resolution after hydration and on every route change.
    Effect::new(move || {
        let path = location.pathname.get();
        let resolved = handles.resolve();
        nav.update(|n| n.observe_route(&path, resolved));
    });

    // Store writes are done by the time a redirect is queued.
    Effect::new(move || {
        if let Some(path) = handles.redirect.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    Effect::new(move || theme.set(dark_mode::read_preference()));
    Effect::new(move || dark_mode::apply(theme.get()));

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <div class="navbar__start">
                    <a href="/" class="navbar__brand" on:click=move |_| handles.collapse()>
                        "NexaWork"
                    </a>
                    <NavLinks handles=handles mobile=false/>
                </div>
                <div class="navbar__end">
                    <div class="navbar__actions">
                        <ActionButtons handles=handles cluster=cluster mobile=false/>
                        <Show when=move || {
                            demo_role_switch && cluster.get() == ActionCluster::Authenticated
                        }>
                            <DemoRoleSelect handles=handles/>
                        </Show>
                    </div>
                    <button
                        class="btn navbar__mode-toggle"
                        title="Toggle theme"
                        on:click=move |_| theme.update(|t| *t = dark_mode::toggle(*t))
                    >
                        {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="btn navbar__menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || nav.with(|n| n.menu_expanded.to_string())
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.with(|n| n.menu_expanded) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || nav.with(|n| n.menu_expanded)>
                <div class="navbar__menu">
                    <NavLinks handles=handles mobile=true/>
                    <div class="navbar__menu-actions">
                        <ActionButtons handles=handles cluster=cluster mobile=true/>
                    </div>
                </div>
            </Show>
        </header>
    }
}

/// Visible links for the current session, in catalog order.
#[component]
fn NavLinks(handles: NavHandles, mobile: bool) -> impl IntoView {
    let nav = handles.nav;
    let class = if mobile { "navbar__menu-links" } else { "navbar__links" };
    view! {
        <nav class=class>
            {move || {
                let state = nav.get();
                state
                    .visible_items()
                    .into_iter()
                    .map(|item| {
                        let active = state.is_active(item);
                        view! {
                            <a
                                href=item.target
                                class=link_class(mobile, active)
                                aria-current=active.then_some("page")
                                on:click=move |_| handles.collapse()
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

/// Anonymous or authenticated call-to-action controls.
#[component]
fn ActionButtons(handles: NavHandles, cluster: Memo<ActionCluster>, mobile: bool) -> impl IntoView {
    let controls = move || {
        cluster
            .get()
            .controls()
            .iter()
            .map(|control| {
                let class = action_class(control.emphasis, mobile);
                match control.kind {
                    ActionKind::Link(target) => view! {
                        <a href=target class=class on:click=move |_| handles.collapse()>
                            {control.label}
                        </a>
                    }
                    .into_any(),
                    ActionKind::Logout => view! {
                        <button class=class on:click=move |_| handles.logout()>
                            {control.label}
                        </button>
                    }
                    .into_any(),
                }
            })
            .collect::<Vec<_>>()
    };

    view! { <div class="navbar__cluster">{controls}</div> }
}

/// Development-only selector that previews role-gated links.
#[component]
fn DemoRoleSelect(handles: NavHandles) -> impl IntoView {
    let nav = handles.nav;
    view! {
        <div class="navbar__demo">
            <span class="navbar__demo-label">"Demo:"</span>
            <select
                class="navbar__demo-select"
                prop:value=move || nav.with(|n| n.session.role().unwrap_or_default().as_str())
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<Role>() {
                        Ok(role) => handles.switch_role(role),
                        Err(e) => leptos::logging::warn!("{e}"),
                    }
                }
            >
                {Role::ALL
                    .iter()
                    .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

fn link_class(mobile: bool, active: bool) -> &'static str {
    match (mobile, active) {
        (true, true) => "navbar__menu-link navbar__menu-link--active",
        (true, false) => "navbar__menu-link",
        (false, true) => "navbar__link navbar__link--active",
        (false, false) => "navbar__link",
    }
}

fn action_class(emphasis: Emphasis, mobile: bool) -> &'static str {
    match (emphasis, mobile) {
        (Emphasis::Primary, false) => "btn btn--primary",
        (Emphasis::Primary, true) => "btn btn--primary btn--block",
        (Emphasis::Outline, false) => "btn btn--outline",
        (Emphasis::Outline, true) => "btn btn--outline btn--block",
    }
}
