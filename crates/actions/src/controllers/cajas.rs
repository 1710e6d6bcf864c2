//! Cash registers: opening, movements, closing and audit (arqueo).

use wayfinder_routes::{Action, Controller};

use crate::verbs::{DELETE, GET_HEAD, POST};

pub const CLASS: &str = "App\\Http\\Controllers\\CajaController";

pub const INDEX: Action = Action::named("cajas.index", CLASS, "index", GET_HEAD, "/cajas");
pub const ABRIR: Action = Action::named("cajas.abrir", CLASS, "abrir", POST, "/cajas/abrir");
pub const SHOW: Action = Action::named("cajas.show", CLASS, "show", GET_HEAD, "/cajas/{caja}");
pub const CERRAR: Action =
    Action::named("cajas.cerrar", CLASS, "cerrar", POST, "/cajas/{caja}/cerrar");
pub const ARQUEO: Action =
    Action::named("cajas.arqueo", CLASS, "arqueo", GET_HEAD, "/cajas/{caja}/arqueo/{fecha?}");
pub const REGISTRAR_MOVIMIENTO: Action = Action::named(
    "cajas.movimientos.store",
    CLASS,
    "registrarMovimiento",
    POST,
    "/cajas/{caja}/movimientos",
);
pub const ANULAR_MOVIMIENTO: Action = Action::named(
    "cajas.movimientos.destroy",
    CLASS,
    "anularMovimiento",
    DELETE,
    "/cajas/{caja}/movimientos/{movimiento}",
);

const ACTIONS: &[Action] = &[
    INDEX, ABRIR, SHOW, CERRAR, ARQUEO, REGISTRAR_MOVIMIENTO, ANULAR_MOVIMIENTO,
];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
