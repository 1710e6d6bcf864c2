//! Warehouses.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, POST, PUT_PATCH};

pub const CLASS: &str = "App\\Http\\Controllers\\AlmacenController";

pub const INDEX: Action = Action::named("almacenes.index", CLASS, "index", GET_HEAD, "/almacenes");
pub const CREATE: Action =
    Action::named("almacenes.create", CLASS, "create", GET_HEAD, "/almacenes/create");
pub const STORE: Action = Action::named("almacenes.store", CLASS, "store", POST, "/almacenes");
pub const SHOW: Action =
    Action::named("almacenes.show", CLASS, "show", GET_HEAD, "/almacenes/{almacene}");
pub const EDIT: Action =
    Action::named("almacenes.edit", CLASS, "edit", GET_HEAD, "/almacenes/{almacene}/edit");
pub const UPDATE: Action =
    Action::named("almacenes.update", CLASS, "update", PUT_PATCH, "/almacenes/{almacene}");
pub const DESTROY: Action =
    Action::named("almacenes.destroy", CLASS, "destroy", DELETE, "/almacenes/{almacene}");

const ACTIONS: &[Action] = &[INDEX, CREATE, STORE, SHOW, EDIT, UPDATE, DESTROY];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
