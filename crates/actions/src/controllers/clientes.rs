//! Customers.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, POST, PUT_PATCH};

pub const CLASS: &str = "App\\Http\\Controllers\\ClienteController";

pub const INDEX: Action = Action::named("clientes.index", CLASS, "index", GET_HEAD, "/clientes");
pub const CREATE: Action =
    Action::named("clientes.create", CLASS, "create", GET_HEAD, "/clientes/create");
pub const STORE: Action = Action::named("clientes.store", CLASS, "store", POST, "/clientes");
pub const SHOW: Action =
    Action::named("clientes.show", CLASS, "show", GET_HEAD, "/clientes/{cliente}");
pub const EDIT: Action =
    Action::named("clientes.edit", CLASS, "edit", GET_HEAD, "/clientes/{cliente}/edit");
pub const UPDATE: Action =
    Action::named("clientes.update", CLASS, "update", PUT_PATCH, "/clientes/{cliente}");
pub const DESTROY: Action =
    Action::named("clientes.destroy", CLASS, "destroy", DELETE, "/clientes/{cliente}");

const ACTIONS: &[Action] = &[INDEX, CREATE, STORE, SHOW, EDIT, UPDATE, DESTROY];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
