use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, PATCH};

pub const CLASS: &str = "App\\Http\\Controllers\\ProfileController";

pub const EDIT: Action = Action::named("profile.edit", CLASS, "edit", GET_HEAD, "/profile");
pub const UPDATE: Action = Action::named("profile.update", CLASS, "update", PATCH, "/profile");
pub const DESTROY: Action = Action::named("profile.destroy", CLASS, "destroy", DELETE, "/profile");

const ACTIONS: &[Action] = &[EDIT, UPDATE, DESTROY];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
