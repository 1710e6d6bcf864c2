//! One module per controller, each exporting an `Action` per route and the
//! controller's `CONTROLLER` bundle.

pub mod almacenes;
pub mod cajas;
pub mod categorias;
pub mod clientes;
pub mod compras;
pub mod creditos;
pub mod dashboard;
pub mod inventario;
pub mod productos;
pub mod profile;
pub mod proveedores;
pub mod reportes;
pub mod ventas;
