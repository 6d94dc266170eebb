// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;

use ui::admin::pages::{QueueDetailPage, QueuesPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/queues")]
        Queues {},
        #[route("/queues/:name")]
        QueueDetail { name: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    init_logging();

    dioxus::launch(App);
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured level.
#[cfg(feature = "server")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let config = match api::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        debug = config.debug,
        seed_queues = ?config.seed_queues,
        "Starting queue monitor"
    );
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Layout with sidebar navigation.
#[component]
fn AppLayout() -> Element {
    rsx! {
        div { class: "app-layout",
            aside { class: "app-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "Queue Monitor" }
                }
                nav { class: "sidebar-nav",
                    Link {
                        to: Route::Queues {},
                        class: "nav-link",
                        active_class: "active",
                        span { class: "nav-icon", "▦" }
                        span { "Queues" }
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect / to /queues.
#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::Queues {});
    });
    rsx! {}
}

/// Queues list page.
#[component]
fn Queues() -> Element {
    rsx! {
        QueuesPage {}
    }
}

/// Queue detail page.
#[component]
fn QueueDetail(name: String) -> Element {
    rsx! {
        QueueDetailPage { name }
    }
}
