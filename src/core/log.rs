//! Environment-aware logging shared by the coordinators.
//!
//! When a flow carries an environment its logger receives the messages;
//! otherwise they go to the process-wide default logger.

use crate::environment::Environment;
use crate::logging::{describe_screen, log_flow, log_navigation};
use crate::navigation::ScreenHandle;

pub(crate) fn flow(environment: Option<&Environment>, message: &str) {
    match environment {
        Some(env) => env.logger().log(message),
        None => log_flow(message),
    }
}

pub(crate) fn navigation(
    environment: Option<&Environment>,
    action: &str,
    screen: Option<&ScreenHandle>,
) {
    match environment {
        Some(env) => env
            .logger()
            .log(&format!("[Navigation] {} -> {}", action, describe_screen(screen))),
        None => log_navigation(action, screen),
    }
}
