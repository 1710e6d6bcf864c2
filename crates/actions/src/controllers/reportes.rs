//! Report pages and their PDF / Excel exports.

use wayfinder_routes::{Action, ActionEntry, Controller};

use crate::verbs::GET_HEAD;

pub const CLASS: &str = "App\\Http\\Controllers\\ReporteController";

pub const VENTAS: Action =
    Action::named("reportes.ventas", CLASS, "ventas", GET_HEAD, "/reportes/ventas");
pub const VENTAS_EXPORTAR: Action = Action::named(
    "reportes.ventas.exportar",
    CLASS,
    "ventas",
    GET_HEAD,
    "/reportes/ventas/{formato}",
);
pub const INVENTARIO: Action = Action::named(
    "reportes.inventario",
    CLASS,
    "inventario",
    GET_HEAD,
    "/reportes/inventario/{formato?}",
);
pub const COMPRAS: Action = Action::named(
    "reportes.compras",
    CLASS,
    "compras",
    GET_HEAD,
    "/reportes/compras/{desde}/{hasta}",
);
pub const CAJA: Action =
    Action::named("reportes.caja", CLASS, "caja", GET_HEAD, "/reportes/cajas/{caja}/{formato}");

const ACTIONS: &[Action] = &[VENTAS, VENTAS_EXPORTAR, INVENTARIO, COMPRAS, CAJA];

pub const CONTROLLER: Controller = Controller::new(CLASS, ACTIONS);

static VENTAS_BY_URL: [Action; 2] = [VENTAS, VENTAS_EXPORTAR];

/// `ReporteController@ventas` serves both the report page and its export,
/// keyed by URL template.
pub fn ventas() -> ActionEntry<'static> {
    ActionEntry::ByUrl(
        VENTAS_BY_URL
            .iter()
            .map(|a| (a.url_template(), a))
            .collect(),
    )
}
