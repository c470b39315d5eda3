use yew::{classes, html, Component, Context, Html};

use crate::components::add_investment::AddInvestmentComponent;
use crate::components::dashboard::DashboardComponent;
use crate::components::investments::InvestmentsComponent;
use crate::components::investors::InvestorsComponent;
use crate::components::reports::ReportsComponent;
use crate::components::settings::SettingsComponent;

/// The six screens of the app. Navigation is plain component switching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Investors,
    Investments,
    AddInvestment,
    Reports,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Dashboard,
        Screen::Investors,
        Screen::Investments,
        Screen::AddInvestment,
        Screen::Reports,
        Screen::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Investors => "Investors",
            Screen::Investments => "Investments",
            Screen::AddInvestment => "Add Investment",
            Screen::Reports => "Reports",
            Screen::Settings => "Settings",
        }
    }
}

pub struct App {
    screen: Screen,
}

pub enum Msg {
    Navigate(Screen),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(screen) => {
                let changed = self.screen != screen;
                self.screen = screen;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let navigate = link.callback(Msg::Navigate);

        html! {
            <div class="app-root">
                <nav class="app-nav">
                    <div class="app-brand">
                        <span class="app-title">{"Family Portfolio"}</span>
                        <span class="app-subtitle">{"Investment tracking"}</span>
                    </div>
                    <div class="app-nav-buttons">
                        {
                            for Screen::ALL.iter().map(|&screen| {
                                let onclick = link.callback(move |_| Msg::Navigate(screen));
                                html! {
                                    <button
                                        class={classes!(
                                            "nav-btn",
                                            (self.screen == screen).then_some("active")
                                        )}
                                        {onclick}
                                    >
                                        { screen.title() }
                                    </button>
                                }
                            })
                        }
                    </div>
                </nav>
                <main class="app-main">
                    {
                        match self.screen {
                            Screen::Dashboard => html! {
                                <DashboardComponent on_navigate={navigate.clone()} />
                            },
                            Screen::Investors => html! { <InvestorsComponent /> },
                            Screen::Investments => html! {
                                <InvestmentsComponent on_navigate={navigate.clone()} />
                            },
                            Screen::AddInvestment => html! {
                                <AddInvestmentComponent on_navigate={navigate.clone()} />
                            },
                            Screen::Reports => html! { <ReportsComponent /> },
                            Screen::Settings => html! { <SettingsComponent /> },
                        }
                    }
                </main>
            </div>
        }
    }
}
