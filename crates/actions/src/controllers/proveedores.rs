//! Suppliers.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, POST, PUT_PATCH};

pub const CLASS: &str = "App\\Http\\Controllers\\ProveedorController";

pub const INDEX: Action =
    Action::named("proveedores.index", CLASS, "index", GET_HEAD, "/proveedores");
pub const CREATE: Action =
    Action::named("proveedores.create", CLASS, "create", GET_HEAD, "/proveedores/create");
pub const STORE: Action = Action::named("proveedores.store", CLASS, "store", POST, "/proveedores");
pub const SHOW: Action =
    Action::named("proveedores.show", CLASS, "show", GET_HEAD, "/proveedores/{proveedore}");
pub const EDIT: Action =
    Action::named("proveedores.edit", CLASS, "edit", GET_HEAD, "/proveedores/{proveedore}/edit");
pub const UPDATE: Action =
    Action::named("proveedores.update", CLASS, "update", PUT_PATCH, "/proveedores/{proveedore}");
pub const DESTROY: Action =
    Action::named("proveedores.destroy", CLASS, "destroy", DELETE, "/proveedores/{proveedore}");

const ACTIONS: &[Action] = &[INDEX, CREATE, STORE, SHOW, EDIT, UPDATE, DESTROY];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
