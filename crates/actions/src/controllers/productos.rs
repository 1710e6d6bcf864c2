//! Product catalog, stock card (kardex) and catalog exports.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, POST, PUT_PATCH};

pub const CLASS: &str = "App\\Http\\Controllers\\ProductoController";

pub const BUSCAR: Action =
    Action::named("productos.buscar", CLASS, "buscar", GET_HEAD, "/productos/buscar");
pub const EXPORTAR: Action = Action::named(
    "productos.exportar",
    CLASS,
    "exportar",
    GET_HEAD,
    "/productos/exportar/{formato}",
);
pub const INDEX: Action = Action::named("productos.index", CLASS, "index", GET_HEAD, "/productos");
pub const CREATE: Action =
    Action::named("productos.create", CLASS, "create", GET_HEAD, "/productos/create");
pub const STORE: Action = Action::named("productos.store", CLASS, "store", POST, "/productos");
pub const SHOW: Action =
    Action::named("productos.show", CLASS, "show", GET_HEAD, "/productos/{producto}");
pub const EDIT: Action =
    Action::named("productos.edit", CLASS, "edit", GET_HEAD, "/productos/{producto}/edit");
pub const UPDATE: Action =
    Action::named("productos.update", CLASS, "update", PUT_PATCH, "/productos/{producto}");
pub const DESTROY: Action =
    Action::named("productos.destroy", CLASS, "destroy", DELETE, "/productos/{producto}");
pub const KARDEX: Action =
    Action::named("productos.kardex", CLASS, "kardex", GET_HEAD, "/productos/{producto}/kardex");

const ACTIONS: &[Action] = &[
    BUSCAR, EXPORTAR, INDEX, CREATE, STORE, SHOW, EDIT, UPDATE, DESTROY, KARDEX,
];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
