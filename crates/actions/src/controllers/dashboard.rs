//! Single-action dashboard controller.

use wayfinder_routes::{Action, Controller};

use crate::verbs::GET_HEAD;

pub const CLASS: &str = "App\\Http\\Controllers\\DashboardController";

pub const SHOW: Action = Action::named("dashboard", CLASS, "__invoke", GET_HEAD, "/dashboard");

const ACTIONS: &[Action] = &[SHOW];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
