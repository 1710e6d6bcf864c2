//! Sales orders, cancellation and printable receipts.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{GET_HEAD, PATCH, POST};

pub const CLASS: &str = "App\\Http\\Controllers\\VentaController";

pub const INDEX: Action = Action::named("ventas.index", CLASS, "index", GET_HEAD, "/ventas");
pub const CREATE: Action =
    Action::named("ventas.create", CLASS, "create", GET_HEAD, "/ventas/create");
pub const STORE: Action = Action::named("ventas.store", CLASS, "store", POST, "/ventas");
pub const SHOW: Action = Action::named("ventas.show", CLASS, "show", GET_HEAD, "/ventas/{venta}");
pub const ANULAR: Action =
    Action::named("ventas.anular", CLASS, "anular", PATCH, "/ventas/{venta}/anular");
pub const COMPROBANTE: Action = Action::named(
    "ventas.comprobante",
    CLASS,
    "comprobante",
    GET_HEAD,
    "/ventas/{venta}/comprobante",
);

const ACTIONS: &[Action] = &[INDEX, CREATE, STORE, SHOW, ANULAR, COMPROBANTE];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
