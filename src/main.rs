use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use flowkit::config::Config;
use flowkit::core::{AppState, AppStateController, FlowFinishEvent};
use flowkit::demo::DemoFactory;
use flowkit::environment::Environment;
use flowkit::logging::init_tracing;

/// Replay finish events through the example application's flows.
#[derive(Debug, Parser)]
#[command(name = "flowkit-demo", version, about)]
struct Args {
    /// Config file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// State to start in; overrides `app.initial_state`.
    #[arg(long)]
    initial: Option<AppState>,

    /// Finish event for the active flow, e.g. `switch-to-guest`. Repeatable.
    #[arg(long = "event", value_name = "EVENT")]
    events: Vec<FlowFinishEvent>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    init_tracing(&config.logging);

    let environment = Environment::new();
    environment.services().register(Arc::new(config.clone()));

    let initial = args.initial.unwrap_or(config.app.initial_state);
    let transitions = config.app.transitions();
    let controller = AppStateController::builder(initial)
        .factory(DemoFactory::from_config(&config.navigation))
        .environment(environment)
        .transitions(transitions)
        .build();

    controller.set_on_flow_finish(move |controller, event| {
        println!("  finished: {event}");
        if event == FlowFinishEvent::Logout && transitions.logout().is_none() {
            controller.set_state(AppState::Guest);
        }
    });

    println!("state: {} ({})", controller.current_state(), controller.current_root().title());
    controller.launch();

    for event in args.events {
        let Some(flow) = controller.current_flow() else {
            break;
        };
        flow.finish(event);
        println!("state: {} ({})", controller.current_state(), controller.current_root().title());
    }

    Ok(())
}
