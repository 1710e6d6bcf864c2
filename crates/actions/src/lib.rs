//! `wayfinder-actions`: route bindings of the store back office.
//!
//! Every template and verb set here mirrors the server's route table
//! byte for byte; `wayfinder check` compares them against a
//! `php artisan route:list --json` dump.

pub mod controllers;
pub mod verbs;

pub use controllers::*;

use wayfinder_routes::{Controller, RouteTable};

/// Every controller, in the order they are listed by `wayfinder list`.
pub const CONTROLLERS: &[Controller] = &[
    dashboard::CONTROLLER,
    almacenes::CONTROLLER,
    categorias::CONTROLLER,
    productos::CONTROLLER,
    clientes::CONTROLLER,
    proveedores::CONTROLLER,
    ventas::CONTROLLER,
    compras::CONTROLLER,
    inventario::CONTROLLER,
    cajas::CONTROLLER,
    creditos::CONTROLLER,
    reportes::CONTROLLER,
    profile::CONTROLLER,
];

/// The application's route table.
pub fn routes() -> RouteTable {
    RouteTable::new(CONTROLLERS.iter().cloned())
}
