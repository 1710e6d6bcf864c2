//! Stock movements: entries, transfers between warehouses and adjustments.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{GET_HEAD, POST};

pub const CLASS: &str = "App\\Http\\Controllers\\MovimientoInventarioController";

pub const INDEX: Action = Action::named(
    "inventario.movimientos.index",
    CLASS,
    "index",
    GET_HEAD,
    "/inventario/movimientos",
);
pub const STORE: Action =
    Action::named("inventario.movimientos.store", CLASS, "store", POST, "/inventario/movimientos");
pub const TRANSFERIR: Action = Action::named(
    "inventario.transferencias.store",
    CLASS,
    "transferir",
    POST,
    "/inventario/transferencias",
);
pub const AJUSTAR: Action =
    Action::named("inventario.ajustes.store", CLASS, "ajustar", POST, "/inventario/ajustes");
pub const STOCK: Action = Action::named(
    "inventario.stock",
    CLASS,
    "stock",
    GET_HEAD,
    "/inventario/almacenes/{almacene}/stock",
);

const ACTIONS: &[Action] = &[INDEX, STORE, TRANSFERIR, AJUSTAR, STOCK];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
