//! Purchase orders and goods receipt.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{GET_HEAD, PATCH, POST};

pub const CLASS: &str = "App\\Http\\Controllers\\CompraController";

pub const INDEX: Action = Action::named("compras.index", CLASS, "index", GET_HEAD, "/compras");
pub const CREATE: Action =
    Action::named("compras.create", CLASS, "create", GET_HEAD, "/compras/create");
pub const STORE: Action = Action::named("compras.store", CLASS, "store", POST, "/compras");
pub const SHOW: Action =
    Action::named("compras.show", CLASS, "show", GET_HEAD, "/compras/{compra}");
pub const RECIBIR: Action =
    Action::named("compras.recibir", CLASS, "recibir", POST, "/compras/{compra}/recibir");
pub const ANULAR: Action =
    Action::named("compras.anular", CLASS, "anular", PATCH, "/compras/{compra}/anular");

const ACTIONS: &[Action] = &[INDEX, CREATE, STORE, SHOW, RECIBIR, ANULAR];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
