//! Customer credit (accounts receivable) and payments.

use wayfinder_routes::{Action, Controller};

use crate::verbs::{GET_HEAD, POST};

pub const CLASS: &str = "App\\Http\\Controllers\\CreditoController";

pub const INDEX: Action = Action::named("creditos.index", CLASS, "index", GET_HEAD, "/creditos");
pub const VENCIDOS: Action =
    Action::named("creditos.vencidos", CLASS, "vencidos", GET_HEAD, "/creditos/vencidos");
pub const SHOW: Action =
    Action::named("creditos.show", CLASS, "show", GET_HEAD, "/creditos/{credito}");
pub const ABONAR: Action =
    Action::named("creditos.abonos.store", CLASS, "abonar", POST, "/creditos/{credito}/abonos");
pub const ESTADO_CUENTA: Action = Action::named(
    "clientes.estado-cuenta",
    CLASS,
    "estadoCuenta",
    GET_HEAD,
    "/clientes/{cliente:documento}/estado-cuenta",
);

const ACTIONS: &[Action] = &[INDEX, VENCIDOS, SHOW, ABONAR, ESTADO_CUENTA];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);
