//! Product categories, edited inline from the index page.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, POST, PUT_PATCH};

pub const CLASS: &str = "App\\Http\\Controllers\\CategoriaController";

pub const INDEX: Action =
    Action::named("categorias.index", CLASS, "index", GET_HEAD, "/categorias");
pub const STORE: Action = Action::named("categorias.store", CLASS, "store", POST, "/categorias");
pub const UPDATE: Action =
    Action::named("categorias.update", CLASS, "update", PUT_PATCH, "/categorias/{categoria}");
pub const DESTROY: Action =
    Action::named("categorias.destroy", CLASS, "destroy", DELETE, "/categorias/{categoria}");

const ACTIONS: &[Action] = &[INDEX, STORE, UPDATE, DESTROY];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
